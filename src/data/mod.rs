//! Static instrument data.

pub mod presets;

pub use presets::{PRESETS, Preset, PresetScale, preset_by_id};

//! Domain types used throughout the kernel.
//!
//! This module defines:
//!
//! - geometry values (`Point`, `StringLayout`, `ScaleSet`, `FretRow`, `EdgeCurve`, `Marker`)
//! - the versioned parameter value (`BoardParams`) and marker settings
//! - length units for the configuration boundary

pub mod params;
pub mod types;
pub mod units;

pub use params::*;
pub use types::*;
pub use units::*;

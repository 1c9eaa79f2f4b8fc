//! Built-in instrument presets.
//!
//! Presets are stored in the unit they are usually quoted in and converted to
//! millimetres (rounded to 0.1 mm) when turned into `BoardParams`. They quote
//! the full neck width; the string span is that width less the overhang on
//! both sides.

use crate::domain::{BoardParams, PARAMS_VERSION, Units, to_mm_rounded};

/// Default anchor fret for presets that do not name one.
const DEFAULT_ANCHOR_FRET: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PresetScale {
    /// One scale for every string.
    Single(f64),
    /// Multi-scale: treble and bass side.
    Fanned { treble: f64, bass: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub id: &'static str,
    pub name: &'static str,
    pub units: Units,
    pub strings: usize,
    pub frets: usize,
    pub scale: PresetScale,
    /// Full board width at the nut, overhang included.
    pub neck_width_nut: f64,
    pub neck_width_bridge: f64,
    pub overhang: f64,
}

pub const PRESETS: &[Preset] = &[
    Preset {
        id: "strat-25-5",
        name: "Guitar • Strat-style 25.5\"",
        units: Units::Inch,
        strings: 6,
        frets: 22,
        scale: PresetScale::Single(25.5),
        neck_width_nut: 1.65,
        neck_width_bridge: 2.20,
        overhang: 0.12,
    },
    Preset {
        id: "lespaul-24-75",
        name: "Guitar • LP-style 24.75\"",
        units: Units::Inch,
        strings: 6,
        frets: 22,
        scale: PresetScale::Single(24.75),
        neck_width_nut: 1.69,
        neck_width_bridge: 2.16,
        overhang: 0.12,
    },
    Preset {
        id: "rgms7-25-5-27",
        name: "FanFret • 7-string 25.5–27\"",
        units: Units::Inch,
        strings: 7,
        frets: 24,
        scale: PresetScale::Fanned {
            treble: 25.5,
            bass: 27.0,
        },
        neck_width_nut: 1.89,
        neck_width_bridge: 2.64,
        overhang: 0.12,
    },
    Preset {
        id: "boden8-26-5-28",
        name: "FanFret • 8-string 26.5–28\"",
        units: Units::Inch,
        strings: 8,
        frets: 24,
        scale: PresetScale::Fanned {
            treble: 26.5,
            bass: 28.0,
        },
        neck_width_nut: 2.17,
        neck_width_bridge: 2.95,
        overhang: 0.12,
    },
    Preset {
        id: "bass-34",
        name: "Bass • 34\"",
        units: Units::Inch,
        strings: 4,
        frets: 20,
        scale: PresetScale::Single(34.0),
        neck_width_nut: 1.65,
        neck_width_bridge: 2.36,
        overhang: 0.12,
    },
    Preset {
        id: "curved-demo",
        name: "Curved • 6-string demo (anchor @ 12)",
        units: Units::Mm,
        strings: 6,
        frets: 24,
        scale: PresetScale::Single(648.0),
        neck_width_nut: 42.0,
        neck_width_bridge: 56.0,
        overhang: 3.0,
    },
];

pub fn preset_by_id(id: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.id == id)
}

impl Preset {
    /// Board parameters in millimetres.
    pub fn to_params(&self) -> BoardParams {
        let mm = |v: f64| to_mm_rounded(v, self.units);
        let (treble, bass) = match self.scale {
            PresetScale::Single(s) => (s, s),
            PresetScale::Fanned { treble, bass } => (treble, bass),
        };
        let overhang = mm(self.overhang);
        let span = |neck_width: f64| (mm(neck_width) - 2.0 * overhang).max(0.0);
        BoardParams {
            version: PARAMS_VERSION,
            string_count: self.strings,
            fret_count: self.frets,
            scale_treble: mm(treble),
            scale_bass: mm(bass),
            anchor_fret: DEFAULT_ANCHOR_FRET,
            span_nut: span(self.neck_width_nut),
            span_bridge: span(self.neck_width_bridge),
            overhang,
            exponent: 1.0,
        }
    }
}

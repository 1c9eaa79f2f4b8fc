//! Instrument parameters and their boundary clamping.
//!
//! `BoardParams` is the explicit configuration value handed to every core
//! function. It is versioned so that stored configurations can be rejected
//! (instead of misread) when the meaning of a field changes.

use serde::{Deserialize, Serialize};

use crate::domain::{ScaleSet, Units, convert};

/// Current `BoardParams` schema version.
pub const PARAMS_VERSION: u32 = 1;

/// Smallest exponent accepted by the scale interpolator.
pub const MIN_EXPONENT: f64 = 0.01;

/// Smallest scale length accepted (keeps `ln` and edge slopes finite).
pub const MIN_SCALE: f64 = 1e-3;

/// Default marker gaps (gap `n` lies between frets `n` and `n + 1`).
pub const DEFAULT_MARKER_GAPS: [usize; 9] = [2, 4, 6, 8, 11, 14, 16, 18, 20];

pub const DEFAULT_MARKER_SIZE: f64 = 6.0;
pub const MIN_MARKER_SIZE: f64 = 1.0;
pub const MAX_MARKER_SIZE: f64 = 30.0;

/// Geometry parameters for one fingerboard, all lengths in one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardParams {
    pub version: u32,
    pub string_count: usize,
    pub fret_count: usize,
    pub scale_treble: f64,
    pub scale_bass: f64,
    /// Fret kept perpendicular to the centre line.
    pub anchor_fret: usize,
    pub span_nut: f64,
    pub span_bridge: f64,
    pub overhang: f64,
    /// Fan shaping exponent (`1.0` = log-linear).
    pub exponent: f64,
}

impl Default for BoardParams {
    fn default() -> Self {
        Self {
            version: PARAMS_VERSION,
            string_count: 6,
            fret_count: 22,
            scale_treble: 647.7,
            scale_bass: 660.4,
            anchor_fret: 12,
            span_nut: 35.814,
            span_bridge: 49.784,
            overhang: 3.048,
            exponent: 1.0,
        }
    }
}

impl BoardParams {
    /// Return a copy with degenerate inputs clamped into the kernel's domain.
    ///
    /// - `string_count >= 1`
    /// - spans and overhang `>= 0`
    /// - scale lengths `>= MIN_SCALE`
    /// - `exponent >= MIN_EXPONENT`
    ///
    /// Non-finite values fall back to the defaults.
    pub fn sanitized(&self) -> BoardParams {
        let d = BoardParams::default();
        BoardParams {
            version: self.version,
            string_count: self.string_count.max(1),
            fret_count: self.fret_count,
            scale_treble: finite_or(self.scale_treble, d.scale_treble).max(MIN_SCALE),
            scale_bass: finite_or(self.scale_bass, d.scale_bass).max(MIN_SCALE),
            anchor_fret: self.anchor_fret,
            span_nut: finite_or(self.span_nut, d.span_nut).max(0.0),
            span_bridge: finite_or(self.span_bridge, d.span_bridge).max(0.0),
            overhang: finite_or(self.overhang, d.overhang).max(0.0),
            exponent: finite_or(self.exponent, d.exponent).max(MIN_EXPONENT),
        }
    }

    /// Names of fields that `sanitized` would change.
    pub fn clamped_fields(&self) -> Vec<&'static str> {
        let s = self.sanitized();
        let mut out = Vec::new();
        if s.string_count != self.string_count {
            out.push("string_count");
        }
        for (name, before, after) in [
            ("scale_treble", self.scale_treble, s.scale_treble),
            ("scale_bass", self.scale_bass, s.scale_bass),
            ("span_nut", self.span_nut, s.span_nut),
            ("span_bridge", self.span_bridge, s.span_bridge),
            ("overhang", self.overhang, s.overhang),
            ("exponent", self.exponent, s.exponent),
        ] {
            if before.to_bits() != after.to_bits() {
                out.push(name);
            }
        }
        out
    }
}

/// Partial `BoardParams`: only the fields that are set replace the base.
///
/// Used for both config files and command-line flags so the two layers merge
/// the same way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardOverrides {
    pub string_count: Option<usize>,
    pub fret_count: Option<usize>,
    pub scale_treble: Option<f64>,
    pub scale_bass: Option<f64>,
    pub anchor_fret: Option<usize>,
    pub span_nut: Option<f64>,
    pub span_bridge: Option<f64>,
    pub overhang: Option<f64>,
    pub exponent: Option<f64>,
}

impl BoardOverrides {
    /// Convert every length field from `units` to millimetres.
    pub fn to_mm(&self, units: Units) -> BoardOverrides {
        let mm = |v: Option<f64>| v.map(|x| convert(x, units, Units::Mm));
        BoardOverrides {
            scale_treble: mm(self.scale_treble),
            scale_bass: mm(self.scale_bass),
            span_nut: mm(self.span_nut),
            span_bridge: mm(self.span_bridge),
            overhang: mm(self.overhang),
            ..self.clone()
        }
    }

    pub fn apply_to(&self, base: &mut BoardParams) {
        fn set<T: Copy>(slot: &mut T, value: Option<T>) {
            if let Some(v) = value {
                *slot = v;
            }
        }
        set(&mut base.string_count, self.string_count);
        set(&mut base.fret_count, self.fret_count);
        set(&mut base.scale_treble, self.scale_treble);
        set(&mut base.scale_bass, self.scale_bass);
        set(&mut base.anchor_fret, self.anchor_fret);
        set(&mut base.span_nut, self.span_nut);
        set(&mut base.span_bridge, self.span_bridge);
        set(&mut base.overhang, self.overhang);
        set(&mut base.exponent, self.exponent);
    }
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}

/// Where and how to place fret-spacing markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerSettings {
    pub gaps: Vec<usize>,
    /// Guide line position: `0` = bass edge, `100` = treble edge.
    pub guide_percent: f64,
    pub size: f64,
}

impl Default for MarkerSettings {
    fn default() -> Self {
        Self {
            gaps: DEFAULT_MARKER_GAPS.to_vec(),
            guide_percent: 50.0,
            size: DEFAULT_MARKER_SIZE,
        }
    }
}

impl MarkerSettings {
    pub fn clamped_size(&self) -> f64 {
        if self.size.is_finite() {
            self.size.clamp(MIN_MARKER_SIZE, MAX_MARKER_SIZE)
        } else {
            DEFAULT_MARKER_SIZE
        }
    }
}

/// Informational finding about a parameter set.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamWarning {
    /// A value was outside the kernel's domain and was clamped.
    Clamped(&'static str),
    /// Anchor fret lies beyond the last fret, so no row is straight.
    AnchorBeyondBoard { anchor_fret: usize, fret_count: usize },
    /// Multiple strings share one lateral position.
    ZeroSpan(&'static str),
    /// A marker gap that will be skipped.
    MarkerGapOutOfRange { gap: usize, fret_count: usize },
    /// Per-string scales change direction across the neck.
    NonMonotoneScales,
}

impl std::fmt::Display for ParamWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamWarning::Clamped(field) => write!(f, "{field} was clamped into range"),
            ParamWarning::AnchorBeyondBoard {
                anchor_fret,
                fret_count,
            } => write!(
                f,
                "anchor fret {anchor_fret} is beyond the last fret ({fret_count}); no fret is straight"
            ),
            ParamWarning::ZeroSpan(which) => {
                write!(f, "string span at the {which} is zero; strings coincide")
            }
            ParamWarning::MarkerGapOutOfRange { gap, fret_count } => write!(
                f,
                "marker gap {gap} is outside 0..{fret_count} and will be skipped"
            ),
            ParamWarning::NonMonotoneScales => {
                write!(f, "per-string scale lengths are not monotone across the neck")
            }
        }
    }
}

/// Collect warnings for a parameter set. Never fails.
pub fn check_params(
    params: &BoardParams,
    markers: &MarkerSettings,
    scales: Option<&ScaleSet>,
) -> Vec<ParamWarning> {
    let mut out: Vec<ParamWarning> = params
        .clamped_fields()
        .into_iter()
        .map(ParamWarning::Clamped)
        .collect();

    let p = params.sanitized();
    if p.anchor_fret > p.fret_count {
        out.push(ParamWarning::AnchorBeyondBoard {
            anchor_fret: p.anchor_fret,
            fret_count: p.fret_count,
        });
    }
    if p.string_count > 1 {
        if p.span_nut == 0.0 {
            out.push(ParamWarning::ZeroSpan("nut"));
        }
        if p.span_bridge == 0.0 {
            out.push(ParamWarning::ZeroSpan("bridge"));
        }
    }
    for &gap in &markers.gaps {
        if gap >= p.fret_count {
            out.push(ParamWarning::MarkerGapOutOfRange {
                gap,
                fret_count: p.fret_count,
            });
        }
    }
    if let Some(scales) = scales {
        if !scales.is_monotone() {
            out.push(ParamWarning::NonMonotoneScales);
        }
    }
    out
}

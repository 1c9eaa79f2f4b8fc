//! Shared geometry types.
//!
//! Coordinates use one linear unit (millimetres in the CLI). Two axes:
//!
//! - `lateral`: across the neck, bass edge negative, treble edge positive
//! - `longitudinal`: along the strings, nut → bridge, zero at the anchor fret
//!
//! Every value here is recomputed from scratch for each parameter set; none of
//! them hold references back into the inputs.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// A point on the fingerboard plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub lateral: f64,
    pub longitudinal: f64,
}

impl Point {
    pub const fn new(lateral: f64, longitudinal: f64) -> Self {
        Self {
            lateral,
            longitudinal,
        }
    }

    /// Linear interpolation toward `other` (`t = 0` → `self`, `t = 1` → `other`).
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point::new(
            self.lateral + (other.lateral - self.lateral) * t,
            self.longitudinal + (other.longitudinal - self.longitudinal) * t,
        )
    }

    pub fn midpoint(self, other: Point) -> Point {
        self.lerp(other, 0.5)
    }
}

impl From<Point> for Vector2<f64> {
    fn from(p: Point) -> Self {
        Vector2::new(p.lateral, p.longitudinal)
    }
}

impl From<Vector2<f64>> for Point {
    fn from(v: Vector2<f64>) -> Self {
        Point::new(v.x, v.y)
    }
}

/// Side of the neck.
///
/// String index `0` is always the bass side and `string_count - 1` the treble
/// side; handedness only affects rendering, never these names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Bass,
    Treble,
}

impl Side {
    pub fn display_name(self) -> &'static str {
        match self {
            Side::Bass => "bass",
            Side::Treble => "treble",
        }
    }
}

/// A value measured on both neck edges.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgePair<T> {
    pub bass: T,
    pub treble: T,
}

impl<T: Copy> EdgePair<T> {
    pub fn new(bass: T, treble: T) -> Self {
        Self { bass, treble }
    }

    pub fn get(&self, side: Side) -> T {
        match side {
            Side::Bass => self.bass,
            Side::Treble => self.treble,
        }
    }
}

impl EdgePair<f64> {
    /// Distance between the two edges.
    pub fn width(&self) -> f64 {
        self.treble - self.bass
    }
}

/// Lateral string and edge positions at the nut and the bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringLayout {
    pub edge_nut: EdgePair<f64>,
    pub edge_bridge: EdgePair<f64>,
    /// Lateral string positions at the nut, bass → treble.
    pub nut_positions: Vec<f64>,
    /// Lateral string positions at the bridge, bass → treble.
    pub bridge_positions: Vec<f64>,
}

impl StringLayout {
    pub fn string_count(&self) -> usize {
        self.nut_positions.len()
    }

    pub fn bass_index(&self) -> usize {
        0
    }

    pub fn treble_index(&self) -> usize {
        self.string_count().saturating_sub(1)
    }

    pub fn nut_width(&self) -> f64 {
        self.edge_nut.width()
    }

    pub fn bridge_width(&self) -> f64 {
        self.edge_bridge.width()
    }
}

/// Per-string scale lengths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleSet {
    pub scale_bass: f64,
    pub scale_treble: f64,
    pub exponent: f64,
    /// One scale length per string, bass → treble.
    pub per_string: Vec<f64>,
}

impl ScaleSet {
    /// Scale length of the bass-most string.
    pub fn bass(&self) -> f64 {
        self.per_string.first().copied().unwrap_or(self.scale_bass)
    }

    /// Scale length of the treble-most string.
    pub fn treble(&self) -> f64 {
        self.per_string.last().copied().unwrap_or(self.scale_treble)
    }

    /// Absolute difference between the outer strings (the "fan").
    pub fn spread(&self) -> f64 {
        (self.bass() - self.treble()).abs()
    }

    /// `true` when the scales never change direction across string index.
    pub fn is_monotone(&self) -> bool {
        let mut rising = false;
        let mut falling = false;
        for w in self.per_string.windows(2) {
            if w[1] > w[0] {
                rising = true;
            } else if w[1] < w[0] {
                falling = true;
            }
        }
        !(rising && falling)
    }
}

/// An ordered row of points across the neck: bass edge, strings, treble edge.
///
/// `points` is sorted by lateral coordinate; edge extrapolation may place an
/// edge point inside the naive order, so do not index into it by string.
/// Use `strings` for per-string access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeCurve {
    pub bass_edge: Point,
    pub treble_edge: Point,
    /// One point per string, bass → treble.
    pub strings: Vec<Point>,
    /// `[edge, strings.., edge]` sorted by lateral coordinate.
    pub points: Vec<Point>,
}

impl EdgeCurve {
    pub fn edge(&self, side: Side) -> Point {
        match side {
            Side::Bass => self.bass_edge,
            Side::Treble => self.treble_edge,
        }
    }
}

/// Geometry of one fret.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FretRow {
    /// Fret number, `1..=fret_count`.
    pub fret: usize,
    /// `true` only at the anchor fret.
    pub straight: bool,
    pub curve: EdgeCurve,
}

impl FretRow {
    pub fn points(&self) -> &[Point] {
        &self.curve.points
    }
}

/// Nut (`t = 0`) and bridge (`t = 1`) curves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutBridge {
    pub nut: EdgeCurve,
    pub bridge: EdgeCurve,
    /// Lateral board edges from the layout, at the nut and at the bridge.
    pub edge_nut: EdgePair<f64>,
    pub edge_bridge: EdgePair<f64>,
}

/// A fret-spacing marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub gap_index: usize,
    pub guide_percent: f64,
    /// Cross diameter; carried for renderers, not used by the geometry.
    pub size: f64,
    pub position: Point,
}

/// Axis-aligned extent of a computed board.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardBounds {
    pub min_lateral: f64,
    pub max_lateral: f64,
    pub min_longitudinal: f64,
    pub max_longitudinal: f64,
}

impl BoardBounds {
    pub fn empty() -> Self {
        Self {
            min_lateral: f64::INFINITY,
            max_lateral: f64::NEG_INFINITY,
            min_longitudinal: f64::INFINITY,
            max_longitudinal: f64::NEG_INFINITY,
        }
    }

    pub fn include(&mut self, p: Point) {
        self.min_lateral = self.min_lateral.min(p.lateral);
        self.max_lateral = self.max_lateral.max(p.lateral);
        self.min_longitudinal = self.min_longitudinal.min(p.longitudinal);
        self.max_longitudinal = self.max_longitudinal.max(p.longitudinal);
    }

    pub fn width(&self) -> f64 {
        self.max_lateral - self.min_lateral
    }

    pub fn length(&self) -> f64 {
        self.max_longitudinal - self.min_longitudinal
    }
}

//! Monotone cubic (PCHIP) curve fitting.
//!
//! Given knots with strictly increasing lateral coordinate we build a
//! piecewise cubic Hermite interpolant with Fritsch–Carlson tangents:
//!
//! - secants `δ_i = (y_{i+1} - y_i) / h_i`
//! - interior tangent: weighted harmonic mean of the adjacent secants, `0`
//!   where they differ in sign or either is zero
//! - end tangents: the nearest secant, `0` if it disagrees in sign with the
//!   next secant inward, otherwise limited to twice that secant
//!
//! Each Hermite segment is then expressed as a cubic Bézier with control
//! points at ±1/3 of the interval. The result passes through every knot and
//! never overshoots between monotone knots.
//!
//! Knots that are not strictly increasing fall back to straight segments.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::Point;

/// One cubic Bézier segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicSegment {
    pub p0: Point,
    pub c1: Point,
    pub c2: Point,
    pub p1: Point,
}

impl CubicSegment {
    /// Straight segment (control points on the endpoints).
    pub fn line(p0: Point, p1: Point) -> Self {
        CubicSegment {
            p0,
            c1: p0,
            c2: p1,
            p1,
        }
    }

    /// Evaluate at `t ∈ [0, 1]`.
    pub fn point_at(&self, t: f64) -> Point {
        let s = 1.0 - t;
        let b0 = s * s * s;
        let b1 = 3.0 * s * s * t;
        let b2 = 3.0 * s * t * t;
        let b3 = t * t * t;
        Point::new(
            b0 * self.p0.lateral + b1 * self.c1.lateral + b2 * self.c2.lateral + b3 * self.p1.lateral,
            b0 * self.p0.longitudinal
                + b1 * self.c1.longitudinal
                + b2 * self.c2.longitudinal
                + b3 * self.p1.longitudinal,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    /// Monotone cubic through every knot.
    Smooth,
    /// Straight joins between knots.
    Polyline,
}

/// A fitted curve ready for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvePath {
    /// First knot; `None` for empty input.
    pub start: Option<Point>,
    pub segments: Vec<CubicSegment>,
    pub kind: PathKind,
}

impl CurvePath {
    /// Flatten into a polyline with `steps` samples per segment (at least 1).
    pub fn sample(&self, steps: usize) -> Vec<Point> {
        let steps = steps.max(1);
        let mut out = Vec::with_capacity(self.segments.len() * steps + 1);
        out.extend(self.start);
        for seg in &self.segments {
            for k in 1..=steps {
                out.push(seg.point_at(k as f64 / steps as f64));
            }
        }
        out
    }
}

/// Fit a monotone cubic through `points` (ordered by lateral coordinate).
pub fn curve_to_path(points: &[Point]) -> CurvePath {
    let start = points.first().copied();
    if points.len() < 2 {
        return CurvePath {
            start,
            segments: Vec::new(),
            kind: PathKind::Smooth,
        };
    }

    if !is_strictly_increasing(points) {
        debug!(knots = points.len(), "knots not strictly increasing; joining with lines");
        return CurvePath {
            start,
            segments: points
                .windows(2)
                .map(|w| CubicSegment::line(w[0], w[1]))
                .collect(),
            kind: PathKind::Polyline,
        };
    }

    let xs: Vec<f64> = points.iter().map(|p| p.lateral).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.longitudinal).collect();
    let m = pchip_tangents(&xs, &ys);

    let segments = points
        .windows(2)
        .enumerate()
        .map(|(i, w)| hermite_to_bezier(w[0], w[1], m[i], m[i + 1]))
        .collect();

    CurvePath {
        start,
        segments,
        kind: PathKind::Smooth,
    }
}

fn is_strictly_increasing(points: &[Point]) -> bool {
    points.windows(2).all(|w| w[1].lateral > w[0].lateral)
}

/// Fritsch–Carlson tangents for strictly increasing `xs`.
pub fn pchip_tangents(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len();
    if n < 2 {
        return vec![0.0; n];
    }

    let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
    let delta: Vec<f64> = (0..n - 1).map(|i| (ys[i + 1] - ys[i]) / h[i]).collect();

    let mut m = vec![0.0; n];
    for i in 1..n - 1 {
        let (d1, d2) = (delta[i - 1], delta[i]);
        if d1 == 0.0 || d2 == 0.0 || d1.signum() != d2.signum() {
            continue;
        }
        let w1 = 2.0 * h[i] + h[i - 1];
        let w2 = h[i] + 2.0 * h[i - 1];
        m[i] = (w1 + w2) / (w1 / d1 + w2 / d2);
    }

    m[0] = end_tangent(delta[0], delta.get(1).copied());
    m[n - 1] = end_tangent(delta[n - 2], (n > 2).then(|| delta[n - 3]));
    m
}

fn end_tangent(nearest: f64, inward: Option<f64>) -> f64 {
    let Some(inward) = inward else {
        return nearest;
    };
    if nearest.signum() != inward.signum() {
        0.0
    } else if nearest.abs() > 2.0 * inward.abs() {
        2.0 * inward
    } else {
        nearest
    }
}

fn hermite_to_bezier(p0: Point, p1: Point, m0: f64, m1: f64) -> CubicSegment {
    let h = p1.lateral - p0.lateral;
    CubicSegment {
        p0,
        c1: Point::new(p0.lateral + h / 3.0, p0.longitudinal + m0 * h / 3.0),
        c2: Point::new(p1.lateral - h / 3.0, p1.longitudinal - m1 * h / 3.0),
        p1,
    }
}

//! Line and segment intersection on the fingerboard plane.
//!
//! Neck edges are almost parallel to the longitudinal axis, so they are stored
//! in the form `lateral = slope * longitudinal + offset`, which stays finite
//! for every edge a real instrument can have.

use nalgebra::{Matrix2, Vector2};
use tracing::trace;

use crate::domain::Point;

/// Below this `|1 - edge_slope * local_slope|` the two lines are treated as parallel.
const NEAR_PARALLEL: f64 = 1e-9;

/// Tolerance on segment parameters so shared endpoints still count as hits.
const PARAM_EPS: f64 = 1e-12;

/// A straight neck edge, `lateral(y) = slope * y + offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeLine {
    pub slope: f64,
    pub offset: f64,
}

impl EdgeLine {
    /// Line through two points. A zero longitudinal extent degenerates to a
    /// constant-lateral line through `a`.
    pub fn through(a: Point, b: Point) -> Self {
        let dy = b.longitudinal - a.longitudinal;
        let slope = if dy != 0.0 {
            (b.lateral - a.lateral) / dy
        } else {
            0.0
        };
        EdgeLine {
            slope,
            offset: a.lateral - slope * a.longitudinal,
        }
    }

    pub fn lateral_at(&self, longitudinal: f64) -> f64 {
        self.slope * longitudinal + self.offset
    }

    pub fn point_at(&self, longitudinal: f64) -> Point {
        Point::new(self.lateral_at(longitudinal), longitudinal)
    }
}

/// Extend the line through `near` and `next` (two adjacent string points)
/// until it meets `edge`.
///
/// `near` is the string closest to the edge. When the two lines are close to
/// parallel the edge point takes `near`'s longitudinal coordinate instead.
pub fn extrapolate_to_edge(near: Point, next: Point, edge: &EdgeLine) -> Point {
    let dx = next.lateral - near.lateral;
    let local_slope = if dx != 0.0 {
        (next.longitudinal - near.longitudinal) / dx
    } else {
        0.0
    };

    let denom = 1.0 - edge.slope * local_slope;
    if denom.abs() < NEAR_PARALLEL {
        trace!(denom, "edge and string lines near parallel; using string longitudinal");
        return edge.point_at(near.longitudinal);
    }

    let lateral = (edge.slope * near.longitudinal - edge.slope * local_slope * near.lateral
        + edge.offset)
        / denom;
    let longitudinal = near.longitudinal + local_slope * (lateral - near.lateral);
    Point::new(lateral, longitudinal)
}

/// Intersection of segments `a0→a1` and `b0→b1`, both parameters in `[0, 1]`.
///
/// Parallel and collinear segments report no intersection.
pub fn segment_intersection(a0: Point, a1: Point, b0: Point, b1: Point) -> Option<Point> {
    let p: Vector2<f64> = a0.into();
    let r = Vector2::<f64>::from(a1) - p;
    let q: Vector2<f64> = b0.into();
    let s = Vector2::<f64>::from(b1) - q;

    // p + t r = q + u s  ⇔  [r  -s] (t, u)ᵀ = q - p
    let system = Matrix2::new(r.x, -s.x, r.y, -s.y);
    let scale = r.norm() * s.norm();
    if scale == 0.0 || system.determinant().abs() <= 1e-12 * scale {
        return None;
    }
    let params = system.try_inverse()? * (q - p);
    let (t, u) = (params.x, params.y);

    let inside = |v: f64| (-PARAM_EPS..=1.0 + PARAM_EPS).contains(&v);
    if inside(t) && inside(u) {
        Some(Point::from(p + r * t.clamp(0.0, 1.0)))
    } else {
        None
    }
}

//! Nut and bridge curves.
//!
//! The nut is every string at `t = 0` (longitudinal `-dA[i]`) and the bridge
//! every string at `t = 1` (longitudinal `L_i - dA[i]`). Edge extension and
//! ordering are the same as for fret rows, so both curves can be fitted and
//! paired with rows without special cases.

use crate::domain::{BoardParams, EdgeCurve, NutBridge, Point};
use crate::geom::frame::BoardFrame;

/// Compute nut and bridge curves.
pub fn nut_bridge(params: &BoardParams) -> NutBridge {
    BoardFrame::new(params).nut_bridge()
}

impl BoardFrame {
    pub fn nut_bridge(&self) -> NutBridge {
        NutBridge {
            nut: self.curve_at(0.0),
            bridge: self.curve_at(1.0),
            edge_nut: self.layout.edge_nut,
            edge_bridge: self.layout.edge_bridge,
        }
    }

    /// Row at a fixed fraction `t` of every string's length.
    fn curve_at(&self, t: f64) -> EdgeCurve {
        let strings: Vec<Point> = (0..self.string_count())
            .map(|i| self.string_point_at(i, t))
            .collect();
        self.edge_curve(strings)
    }
}

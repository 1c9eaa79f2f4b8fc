//! Per-parameter-set precomputation shared by frets, nut and bridge.
//!
//! Building a frame once gives every row the same:
//!
//! - string layout and per-string scales
//! - anchor offsets `dA[i] = d(L_i, anchor)`, which shift each string so that
//!   all strings share longitudinal `0` at the anchor fret
//! - the two straight neck edges
//!
//! Rows are then pure functions of the frame plus a fret position.

use crate::domain::{BoardParams, EdgeCurve, EdgePair, Point, ScaleSet, StringLayout};
use crate::geom::layout::{LayoutParams, layout};
use crate::geom::scale::scale_set;
use crate::math::{EdgeLine, extrapolate_to_edge, fret_distance};

#[derive(Debug, Clone)]
pub struct BoardFrame {
    pub params: BoardParams,
    pub layout: StringLayout,
    pub scales: ScaleSet,
    /// Anchor correction per string, bass → treble.
    pub anchor_offsets: Vec<f64>,
    pub edges: EdgePair<EdgeLine>,
}

impl BoardFrame {
    /// Build the frame from (clamped) parameters.
    pub fn new(params: &BoardParams) -> Self {
        let params = params.sanitized();
        let layout = layout(&LayoutParams::from(&params));
        let scales = scale_set(
            params.string_count,
            params.scale_bass,
            params.scale_treble,
            params.exponent,
        );
        let anchor = params.anchor_fret as f64;
        let anchor_offsets = scales
            .per_string
            .iter()
            .map(|&l| fret_distance(l, anchor))
            .collect();

        let edge_line = |nut: f64, bridge: f64, scale: f64| {
            let d_anchor = fret_distance(scale, anchor);
            EdgeLine::through(
                Point::new(nut, -d_anchor),
                Point::new(bridge, scale - d_anchor),
            )
        };
        let edges = EdgePair::new(
            edge_line(layout.edge_nut.bass, layout.edge_bridge.bass, params.scale_bass),
            edge_line(
                layout.edge_nut.treble,
                layout.edge_bridge.treble,
                params.scale_treble,
            ),
        );

        BoardFrame {
            params,
            layout,
            scales,
            anchor_offsets,
            edges,
        }
    }

    pub fn string_count(&self) -> usize {
        self.scales.per_string.len()
    }

    /// Point where string `i` crosses fret `n` (fractional frets allowed).
    pub fn string_point_at_fret(&self, i: usize, fret: f64) -> Point {
        let scale = self.scales.per_string[i];
        let d = fret_distance(scale, fret);
        self.string_point(i, d / scale, d - self.anchor_offsets[i])
    }

    /// Point on string `i` at fraction `t` of its length (`0` = nut, `1` = bridge).
    pub fn string_point_at(&self, i: usize, t: f64) -> Point {
        let scale = self.scales.per_string[i];
        self.string_point(i, t, t * scale - self.anchor_offsets[i])
    }

    fn string_point(&self, i: usize, t: f64, longitudinal: f64) -> Point {
        let nut = self.layout.nut_positions[i];
        let bridge = self.layout.bridge_positions[i];
        Point::new(nut + t * (bridge - nut), longitudinal)
    }

    /// Extend a row of string points (bass → treble) to both neck edges.
    pub fn edge_curve(&self, strings: Vec<Point>) -> EdgeCurve {
        let (bass_edge, treble_edge) = match strings.as_slice() {
            [] => (
                self.edges.bass.point_at(0.0),
                self.edges.treble.point_at(0.0),
            ),
            [only] => (
                self.edges.bass.point_at(only.longitudinal),
                self.edges.treble.point_at(only.longitudinal),
            ),
            all => {
                let n = all.len();
                (
                    extrapolate_to_edge(all[0], all[1], &self.edges.bass),
                    extrapolate_to_edge(all[n - 1], all[n - 2], &self.edges.treble),
                )
            }
        };

        let mut points = Vec::with_capacity(strings.len() + 2);
        points.push(bass_edge);
        points.extend_from_slice(&strings);
        points.push(treble_edge);
        points.sort_by(|a, b| a.lateral.total_cmp(&b.lateral));

        EdgeCurve {
            bass_edge,
            treble_edge,
            strings,
            points,
        }
    }
}

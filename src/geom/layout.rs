//! Lateral string layout at the nut and the bridge.
//!
//! Board edges sit symmetrically around the centre line at
//! `±(span + 2 * overhang) / 2`. Overhang only moves the edges; strings are
//! spaced evenly inside the span.

use serde::{Deserialize, Serialize};

use crate::domain::{BoardParams, EdgePair, StringLayout};

/// Inputs for [`layout`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutParams {
    pub string_count: usize,
    pub span_nut: f64,
    pub span_bridge: f64,
    pub overhang: f64,
}

impl From<&BoardParams> for LayoutParams {
    fn from(p: &BoardParams) -> Self {
        LayoutParams {
            string_count: p.string_count,
            span_nut: p.span_nut,
            span_bridge: p.span_bridge,
            overhang: p.overhang,
        }
    }
}

/// Compute edge and string positions. Negative lengths are clamped to zero;
/// a single string sits on the centre of the span.
pub fn layout(params: &LayoutParams) -> StringLayout {
    let strings = params.string_count.max(1);
    let span_nut = params.span_nut.max(0.0);
    let span_bridge = params.span_bridge.max(0.0);
    let overhang = params.overhang.max(0.0);

    let board_nut = span_nut + 2.0 * overhang;
    let board_bridge = span_bridge + 2.0 * overhang;
    let edge_nut = EdgePair::new(-board_nut / 2.0, board_nut / 2.0);
    let edge_bridge = EdgePair::new(-board_bridge / 2.0, board_bridge / 2.0);

    let nut_start = edge_nut.bass + overhang;
    let bridge_start = edge_bridge.bass + overhang;

    let (nut_positions, bridge_positions) = if strings == 1 {
        (
            vec![nut_start + span_nut / 2.0],
            vec![bridge_start + span_bridge / 2.0],
        )
    } else {
        let last = (strings - 1) as f64;
        (0..strings)
            .map(|i| {
                let t = i as f64 / last;
                (nut_start + span_nut * t, bridge_start + span_bridge * t)
            })
            .unzip()
    };

    StringLayout {
        edge_nut,
        edge_bridge,
        nut_positions,
        bridge_positions,
    }
}

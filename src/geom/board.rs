//! Whole-board computation.

use serde::{Deserialize, Serialize};

use crate::domain::{BoardBounds, BoardParams, FretRow, NutBridge, ScaleSet, StringLayout};
use crate::geom::frame::BoardFrame;

/// Every geometric output for one parameter set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    /// Parameters after clamping.
    pub params: BoardParams,
    pub layout: StringLayout,
    pub scales: ScaleSet,
    pub rows: Vec<FretRow>,
    pub nut_bridge: NutBridge,
}

impl Board {
    pub fn compute(params: &BoardParams) -> Board {
        let frame = BoardFrame::new(params);
        let rows = frame.fret_rows();
        let nut_bridge = frame.nut_bridge();
        Board {
            params: frame.params,
            layout: frame.layout,
            scales: frame.scales,
            rows,
            nut_bridge,
        }
    }

    /// Row for fret `n`, if computed.
    pub fn row(&self, fret: usize) -> Option<&FretRow> {
        self.rows.iter().find(|r| r.fret == fret)
    }

    /// The straight row, when the anchor fret is on the board.
    pub fn anchor_row(&self) -> Option<&FretRow> {
        self.rows.iter().find(|r| r.straight)
    }

    /// Extent of every row, the nut, the bridge and the lateral edge positions.
    pub fn bounds(&self) -> BoardBounds {
        let mut b = BoardBounds::empty();
        b.min_lateral = self.layout.edge_nut.bass.min(self.layout.edge_bridge.bass);
        b.max_lateral = self
            .layout
            .edge_nut
            .treble
            .max(self.layout.edge_bridge.treble);
        let curves = self
            .rows
            .iter()
            .map(|r| &r.curve)
            .chain([&self.nut_bridge.nut, &self.nut_bridge.bridge]);
        for curve in curves {
            for &p in &curve.points {
                b.include(p);
            }
        }
        b
    }
}

//! Reporting utilities: fret tables and formatted terminal output.

use crate::domain::Side;
use crate::geom::Board;
use crate::math::fret_distance;

pub mod format;

pub use format::*;

/// One line of the fret table.
#[derive(Debug, Clone, PartialEq)]
pub struct FretTableRow {
    pub fret: usize,
    /// Longitudinal position where the row meets the bass edge.
    pub bass_edge: f64,
    pub treble_edge: f64,
    /// Longitudinal drop from bass edge to treble edge.
    pub fan: f64,
    pub straight: bool,
    /// Nut-to-fret distance for a single-scale board at the treble scale.
    pub reference: f64,
}

/// Build the fret table for a computed board.
pub fn fret_table(board: &Board) -> Vec<FretTableRow> {
    let reference_scale = board.scales.treble();
    board
        .rows
        .iter()
        .map(|row| {
            let bass_edge = row.curve.edge(Side::Bass).longitudinal;
            let treble_edge = row.curve.edge(Side::Treble).longitudinal;
            FretTableRow {
                fret: row.fret,
                bass_edge,
                treble_edge,
                fan: bass_edge - treble_edge,
                straight: row.straight,
                reference: fret_distance(reference_scale, row.fret as f64),
            }
        })
        .collect()
}

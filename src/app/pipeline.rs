//! Shared board pipeline used by every subcommand.
//!
//! params -> board (layout, scales, rows, nut/bridge) -> markers -> warnings

use tracing::{debug, warn};

use crate::domain::{BoardParams, Marker, MarkerSettings, ParamWarning, check_params};
use crate::geom::{Board, locate_markers};

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct BoardOutput {
    pub board: Board,
    pub markers: Vec<Marker>,
    pub warnings: Vec<ParamWarning>,
}

/// Compute the board and markers; parameter warnings are logged and returned.
pub fn run_board(params: &BoardParams, markers: &MarkerSettings) -> BoardOutput {
    let board = Board::compute(params);
    let located = locate_markers(markers, &board.rows, &board.nut_bridge);
    let warnings = check_params(params, markers, Some(&board.scales));
    for w in &warnings {
        warn!("{w}");
    }
    debug!(
        rows = board.rows.len(),
        markers = located.len(),
        warnings = warnings.len(),
        "board computed"
    );
    BoardOutput {
        board,
        markers: located,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_produce_all_default_markers() {
        let out = run_board(&BoardParams::default(), &MarkerSettings::default());
        assert_eq!(out.board.rows.len(), 22);
        assert_eq!(out.markers.len(), MarkerSettings::default().gaps.len());
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn skipped_gaps_are_reported() {
        let params = BoardParams {
            fret_count: 12,
            ..BoardParams::default()
        };
        let out = run_board(&params, &MarkerSettings::default());
        // Gaps 14..20 fall past fret 12.
        assert_eq!(out.markers.len(), 5);
        assert_eq!(
            out.warnings
                .iter()
                .filter(|w| matches!(w, ParamWarning::MarkerGapOutOfRange { .. }))
                .count(),
            4
        );
    }
}

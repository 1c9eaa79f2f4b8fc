//! Fret rows.
//!
//! For fret `n` and string `i`:
//!
//! - longitudinal `y = d(L_i, n) - dA[i]`
//! - lateral: the string's own nut → bridge position at `t = d(L_i, n) / L_i`
//!
//! then the row is extended to both neck edges and sorted across the neck.
//! Rows are independent, so they are evaluated in parallel; the collected
//! order is always `1..=fret_count`.

use rayon::prelude::*;
use tracing::debug;

use crate::domain::{BoardParams, FretRow, Point};
use crate::geom::frame::BoardFrame;

/// Compute every fret row `1..=fret_count`.
pub fn fret_rows(params: &BoardParams) -> Vec<FretRow> {
    BoardFrame::new(params).fret_rows()
}

impl BoardFrame {
    pub fn fret_rows(&self) -> Vec<FretRow> {
        let rows: Vec<FretRow> = (1..=self.params.fret_count)
            .into_par_iter()
            .map(|n| self.fret_row(n))
            .collect();
        debug!(
            frets = rows.len(),
            strings = self.string_count(),
            anchor = self.params.anchor_fret,
            "computed fret rows"
        );
        rows
    }

    pub fn fret_row(&self, fret: usize) -> FretRow {
        let strings: Vec<Point> = (0..self.string_count())
            .map(|i| self.string_point_at_fret(i, fret as f64))
            .collect();
        FretRow {
            fret,
            straight: fret == self.params.anchor_fret,
            curve: self.edge_curve(strings),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::fret_distance;
    use proptest::prelude::*;

    fn guitar() -> BoardParams {
        BoardParams {
            string_count: 6,
            fret_count: 12,
            scale_treble: 25.0,
            scale_bass: 26.0,
            anchor_fret: 7,
            span_nut: 1.4,
            span_bridge: 2.0,
            overhang: 0.1,
            exponent: 1.0,
            ..BoardParams::default()
        }
    }

    #[test]
    fn one_row_per_fret_in_order() {
        let rows = fret_rows(&guitar());
        assert_eq!(rows.len(), 12);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.fret, i + 1);
            assert_eq!(row.points().len(), 8);
            assert_eq!(row.curve.strings.len(), 6);
        }
    }

    #[test]
    fn only_anchor_row_is_straight() {
        let rows = fret_rows(&guitar());
        let straight: Vec<usize> = rows.iter().filter(|r| r.straight).map(|r| r.fret).collect();
        assert_eq!(straight, vec![7]);
        for p in rows[6].points() {
            assert!(p.longitudinal.abs() < 1e-6, "{p:?}");
        }
    }

    #[test]
    fn rows_fan_away_from_anchor() {
        // Below the anchor the longer bass string puts its fret further toward the nut.
        let rows = fret_rows(&guitar());
        let first = &rows[0].curve;
        assert!(first.bass_edge.longitudinal < first.treble_edge.longitudinal);
        let last = &rows[11].curve;
        assert!(last.bass_edge.longitudinal > last.treble_edge.longitudinal);
    }

    #[test]
    fn single_string_uses_own_point_for_edges() {
        let params = BoardParams {
            string_count: 1,
            ..guitar()
        };
        let rows = fret_rows(&params);
        for row in &rows {
            let s = row.curve.strings[0];
            assert_eq!(row.curve.bass_edge.longitudinal, s.longitudinal);
            assert_eq!(row.curve.treble_edge.longitudinal, s.longitudinal);
            assert!(row.curve.bass_edge.lateral < s.lateral);
            assert!(row.curve.treble_edge.lateral > s.lateral);
        }
    }

    #[test]
    fn zero_frets_yields_no_rows() {
        let params = BoardParams {
            fret_count: 0,
            ..guitar()
        };
        assert!(fret_rows(&params).is_empty());
    }

    #[test]
    fn single_scale_collapses_to_tempered_distance() {
        let params = BoardParams {
            scale_bass: 648.0,
            scale_treble: 648.0,
            fret_count: 24,
            ..BoardParams::default()
        };
        let d_anchor = fret_distance(648.0, params.anchor_fret as f64);
        for row in fret_rows(&params) {
            let expected = fret_distance(648.0, row.fret as f64);
            for p in row.points() {
                assert!((p.longitudinal + d_anchor - expected).abs() < 1e-9);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_anchor_row_is_flat(
            strings in 1usize..12,
            anchor in 1usize..24,
            bass in 600.0f64..900.0,
            treble in 550.0f64..700.0,
            k in 0.5f64..3.0,
        ) {
            let params = BoardParams {
                string_count: strings,
                fret_count: 24,
                anchor_fret: anchor,
                scale_bass: bass,
                scale_treble: treble,
                exponent: k,
                ..BoardParams::default()
            };
            let rows = fret_rows(&params);
            let row = &rows[anchor - 1];
            prop_assert!(row.straight);
            for p in row.points() {
                prop_assert!(p.longitudinal.abs() < 1e-6);
            }
        }

        #[test]
        fn prop_equal_scales_match_single_scale_frets(
            strings in 1usize..12,
            scale in 300.0f64..900.0,
            anchor in 0usize..24,
        ) {
            let params = BoardParams {
                string_count: strings,
                fret_count: 24,
                anchor_fret: anchor,
                scale_bass: scale,
                scale_treble: scale,
                ..BoardParams::default()
            };
            let d_anchor = fret_distance(scale, anchor as f64);
            for row in fret_rows(&params) {
                let expected = fret_distance(scale, row.fret as f64);
                for s in &row.curve.strings {
                    prop_assert!((s.longitudinal + d_anchor - expected).abs() < 1e-6);
                }
            }
        }
    }
}

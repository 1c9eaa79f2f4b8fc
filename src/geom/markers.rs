//! Fret-spacing marker placement.
//!
//! A marker for gap `g` sits where the guide line crosses the ghost curve of
//! that gap:
//!
//! - gap `0` lies between the nut and fret 1, gap `g > 0` between frets `g`
//!   and `g + 1`
//! - the ghost curve is the point-wise midpoint of the two bounding rows; both
//!   rows list `[edge, strings.., edge]`, so points pair up index by index
//! - the guide line runs from the nut to the bridge at the same percentage
//!   across the neck (`0` = bass edge, `100` = treble edge); each end takes
//!   the layout's lateral edges and the curve's edge longitudinals
//!
//! Gaps with no bounding rows or no crossing produce no marker.

use tracing::debug;

use crate::domain::{EdgeCurve, EdgePair, FretRow, Marker, MarkerSettings, NutBridge, Point};
use crate::math::segment_intersection;

/// Place one marker, or `None` when either bounding row is missing or the
/// guide line misses the ghost curve.
pub fn locate_marker(
    gap_index: usize,
    guide_percent: f64,
    rows: &[FretRow],
    nut_bridge: &NutBridge,
    marker_size: f64,
) -> Option<Marker> {
    let (near, far) = bounding_curves(gap_index, rows, nut_bridge)?;
    let ghost = ghost_curve(near, far)?;
    let (start, end) = guide_line(guide_percent, nut_bridge);

    let position = ghost
        .windows(2)
        .find_map(|seg| segment_intersection(seg[0], seg[1], start, end));
    if position.is_none() {
        debug!(gap_index, guide_percent, "guide line misses ghost curve");
    }

    Some(Marker {
        gap_index,
        guide_percent,
        size: marker_size,
        position: position?,
    })
}

/// Place a marker in every configured gap, skipping those that yield none.
pub fn locate_markers(
    settings: &MarkerSettings,
    rows: &[FretRow],
    nut_bridge: &NutBridge,
) -> Vec<Marker> {
    let size = settings.clamped_size();
    settings
        .gaps
        .iter()
        .filter_map(|&gap| locate_marker(gap, settings.guide_percent, rows, nut_bridge, size))
        .collect()
}

fn bounding_curves<'a>(
    gap_index: usize,
    rows: &'a [FretRow],
    nut_bridge: &'a NutBridge,
) -> Option<(&'a EdgeCurve, &'a EdgeCurve)> {
    let row = |fret: usize| rows.iter().find(|r| r.fret == fret).map(|r| &r.curve);
    let near = if gap_index == 0 {
        &nut_bridge.nut
    } else {
        row(gap_index)?
    };
    Some((near, row(gap_index + 1)?))
}

/// Point-wise midpoint of two rows; `None` if they do not pair up.
pub fn ghost_curve(a: &EdgeCurve, b: &EdgeCurve) -> Option<Vec<Point>> {
    if a.points.len() != b.points.len() {
        return None;
    }
    Some(
        a.points
            .iter()
            .zip(&b.points)
            .map(|(p, q)| p.midpoint(*q))
            .collect(),
    )
}

/// Guide line endpoints (nut, bridge) at `percent` across the neck.
pub fn guide_line(percent: f64, nut_bridge: &NutBridge) -> (Point, Point) {
    let t = if percent.is_finite() {
        percent.clamp(0.0, 100.0) / 100.0
    } else {
        0.5
    };
    let end = |edges: &EdgePair<f64>, curve: &EdgeCurve| {
        let bass = Point::new(edges.bass, curve.bass_edge.longitudinal);
        let treble = Point::new(edges.treble, curve.treble_edge.longitudinal);
        bass.lerp(treble, t)
    };
    (
        end(&nut_bridge.edge_nut, &nut_bridge.nut),
        end(&nut_bridge.edge_bridge, &nut_bridge.bridge),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BoardParams;
    use crate::geom::frame::BoardFrame;

    fn board() -> (Vec<FretRow>, NutBridge) {
        let frame = BoardFrame::new(&BoardParams::default());
        (frame.fret_rows(), frame.nut_bridge())
    }

    #[test]
    fn nut_gap_marker_is_inside_the_neck() {
        let (rows, nb) = board();
        let m = locate_marker(0, 50.0, &rows, &nb, 6.0).unwrap();
        let ghost = ghost_curve(&nb.nut, &rows[0].curve).unwrap();
        let first = ghost[0];
        let last = ghost[ghost.len() - 1];
        assert!(m.position.lateral > first.lateral);
        assert!(m.position.lateral < last.lateral);
        let nut = &nb.nut.strings;
        let fret1 = &rows[0].curve.strings;
        assert!(m.position.longitudinal > nut[0].longitudinal.min(nut[5].longitudinal));
        assert!(m.position.longitudinal < fret1[0].longitudinal.max(fret1[5].longitudinal));
        assert_eq!(m.gap_index, 0);
        assert_eq!(m.size, 6.0);
    }

    #[test]
    fn gap_marker_lies_between_its_frets() {
        let (rows, nb) = board();
        let m = locate_marker(4, 50.0, &rows, &nb, 6.0).unwrap();
        let (fret4, fret5) = (&rows[3].curve.strings, &rows[4].curve.strings);
        let lo = fret4[2].longitudinal.min(fret4[3].longitudinal);
        let hi = fret5[2].longitudinal.max(fret5[3].longitudinal);
        assert!(m.position.longitudinal > lo && m.position.longitudinal < hi);
    }

    #[test]
    fn guide_percent_moves_marker_across_neck() {
        let (rows, nb) = board();
        let bass = locate_marker(6, 20.0, &rows, &nb, 6.0).unwrap();
        let mid = locate_marker(6, 50.0, &rows, &nb, 6.0).unwrap();
        let treble = locate_marker(6, 80.0, &rows, &nb, 6.0).unwrap();
        assert!(bass.position.lateral < mid.position.lateral);
        assert!(mid.position.lateral < treble.position.lateral);
    }

    #[test]
    fn out_of_range_gap_is_skipped() {
        let (rows, nb) = board();
        assert!(locate_marker(rows.len(), 50.0, &rows, &nb, 6.0).is_none());
        assert!(locate_marker(1000, 50.0, &rows, &nb, 6.0).is_none());
    }

    #[test]
    fn last_gap_pairs_the_last_two_frets() {
        let (rows, nb) = board();
        let m = locate_marker(rows.len() - 1, 50.0, &rows, &nb, 6.0).unwrap();
        assert_eq!(m.gap_index, 21);
    }

    #[test]
    fn missing_rows_are_skipped() {
        let (rows, nb) = board();
        let sparse: Vec<FretRow> = rows.into_iter().filter(|r| r.fret != 5).collect();
        assert!(locate_marker(4, 50.0, &sparse, &nb, 6.0).is_none());
    }

    #[test]
    fn gaps_resolve_by_fret_number_not_row_count() {
        let (rows, nb) = board();
        let sparse: Vec<FretRow> = rows.into_iter().filter(|r| r.fret != 3).collect();
        assert_eq!(sparse.len(), 21);
        let m = locate_marker(21, 50.0, &sparse, &nb, 6.0).unwrap();
        assert_eq!(m.gap_index, 21);
        assert!(locate_marker(2, 50.0, &sparse, &nb, 6.0).is_none());
        assert!(locate_marker(22, 50.0, &sparse, &nb, 6.0).is_none());
    }

    #[test]
    fn guide_line_uses_layout_edges() {
        let frame = BoardFrame::new(&BoardParams {
            scale_bass: 700.0,
            scale_treble: 630.0,
            exponent: 2.0,
            ..BoardParams::default()
        });
        let nb = frame.nut_bridge();
        let (start, end) = guide_line(0.0, &nb);
        assert_eq!(start.lateral, frame.layout.edge_nut.bass);
        assert_eq!(start.longitudinal, nb.nut.bass_edge.longitudinal);
        assert_eq!(end.lateral, frame.layout.edge_bridge.bass);
        assert_eq!(end.longitudinal, nb.bridge.bass_edge.longitudinal);

        let (start, _) = guide_line(100.0, &nb);
        assert!((start.lateral - frame.layout.edge_nut.treble).abs() < 1e-12);
        assert!((start.longitudinal - nb.nut.treble_edge.longitudinal).abs() < 1e-12);
    }

    #[test]
    fn batch_skips_unplaceable_gaps() {
        let (rows, nb) = board();
        let settings = MarkerSettings {
            gaps: vec![0, 2, 21, 40],
            ..MarkerSettings::default()
        };
        let markers = locate_markers(&settings, &rows, &nb);
        let gaps: Vec<usize> = markers.iter().map(|m| m.gap_index).collect();
        assert_eq!(gaps, vec![0, 2, 21]);
    }
}

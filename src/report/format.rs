//! Formatted terminal output.
//!
//! All lengths are printed in millimetres with the `mm` suffix left to the
//! section headers, so columns stay narrow.

use crate::data::Preset;
use crate::domain::{BoardBounds, EdgeCurve, Marker, NutBridge, ParamWarning, ScaleSet, Side};
use crate::geom::Board;
use crate::report::{FretTableRow, fret_table};

/// Header plus board dimensions.
pub fn format_board_summary(board: &Board) -> String {
    let p = &board.params;
    let mut out = String::new();

    out.push_str("=== fret - fanned-fret fingerboard ===\n");
    out.push_str(&format!(
        "Strings: {} | Frets: {} | Anchor: fret {} | Exponent: {:.2}\n",
        p.string_count, p.fret_count, p.anchor_fret, p.exponent
    ));
    out.push_str(&format!(
        "Scale (mm): bass={:.2} treble={:.2} spread={:.2}\n",
        board.scales.bass(),
        board.scales.treble(),
        board.scales.spread()
    ));
    out.push_str(&format!(
        "Width (mm): nut={:.2} bridge={:.2} | string span nut={:.2} bridge={:.2} | overhang={:.2}\n",
        board.layout.nut_width(),
        board.layout.bridge_width(),
        p.span_nut,
        p.span_bridge,
        p.overhang
    ));
    out
}

/// Per-string scale lengths, bass first.
pub fn format_scales(scales: &ScaleSet) -> String {
    let mut out = String::new();
    out.push_str("Per-string scale (mm):\n");
    let last = scales.per_string.len().saturating_sub(1);
    for (i, l) in scales.per_string.iter().enumerate() {
        let tag = match i {
            0 if last == 0 => "bass/treble",
            0 => "bass",
            i if i == last => "treble",
            _ => "",
        };
        out.push_str(&format!("  {:>2}  {:>9.3}  {tag}\n", i + 1, l));
    }
    out
}

pub fn format_fret_table(table: &[FretTableRow]) -> String {
    let mut out = String::new();
    out.push_str("Frets (mm, longitudinal; 0 = anchor):\n");
    out.push_str(&format!(
        "  {:>4}  {:>10}  {:>10}  {:>8}  {:>10}\n",
        "fret", "bass edge", "treble edge", "fan", "ref (nut)"
    ));
    for row in table {
        let marker = if row.straight { "  *" } else { "" };
        out.push_str(&format!(
            "  {:>4}  {:>10.3}  {:>10.3}  {:>8.3}  {:>10.3}{marker}\n",
            row.fret, row.bass_edge, row.treble_edge, row.fan, row.reference
        ));
    }
    if table.iter().any(|r| r.straight) {
        out.push_str("  * straight (anchor) fret\n");
    }
    out
}

fn format_edges(label: &str, curve: &EdgeCurve) -> String {
    let b = curve.edge(Side::Bass);
    let t = curve.edge(Side::Treble);
    format!(
        "  {label:<7} bass=({:.3}, {:.3})  treble=({:.3}, {:.3})\n",
        b.lateral, b.longitudinal, t.lateral, t.longitudinal
    )
}

/// Nut and bridge end points at both neck edges, as `(lateral, longitudinal)`.
pub fn format_nut_bridge(nut_bridge: &NutBridge) -> String {
    let mut out = String::from("Nut / bridge edges (mm):\n");
    out.push_str(&format_edges("nut", &nut_bridge.nut));
    out.push_str(&format_edges("bridge", &nut_bridge.bridge));
    out
}

pub fn format_markers(markers: &[Marker]) -> String {
    let mut out = String::new();
    if markers.is_empty() {
        out.push_str("Markers: none\n");
        return out;
    }
    out.push_str("Markers (mm):\n");
    out.push_str(&format!(
        "  {:>4}  {:>6}  {:>10}  {:>12}  {:>5}\n",
        "gap", "guide%", "lateral", "longitudinal", "size"
    ));
    for m in markers {
        out.push_str(&format!(
            "  {:>4}  {:>6.1}  {:>10.3}  {:>12.3}  {:>5.1}\n",
            m.gap_index, m.guide_percent, m.position.lateral, m.position.longitudinal, m.size
        ));
    }
    out
}

pub fn format_bounds(bounds: &BoardBounds) -> String {
    format!(
        "Bounds (mm): lateral=[{:.3}, {:.3}] longitudinal=[{:.3}, {:.3}] | {:.2} x {:.2}\n",
        bounds.min_lateral,
        bounds.max_lateral,
        bounds.min_longitudinal,
        bounds.max_longitudinal,
        bounds.width(),
        bounds.length()
    )
}

pub fn format_warnings(warnings: &[ParamWarning]) -> String {
    let mut out = String::new();
    if warnings.is_empty() {
        return out;
    }
    out.push_str("Warnings:\n");
    for w in warnings {
        out.push_str(&format!("  - {w}\n"));
    }
    out
}

/// The full `fret board` report.
pub fn format_board_report(board: &Board, markers: &[Marker], warnings: &[ParamWarning]) -> String {
    [
        format_board_summary(board),
        format_scales(&board.scales),
        format_fret_table(&fret_table(board)),
        format_nut_bridge(&board.nut_bridge),
        format_markers(markers),
        format_bounds(&board.bounds()),
        format_warnings(warnings),
    ]
    .join("\n")
}

pub fn format_presets(presets: &[Preset]) -> String {
    let mut out = String::from("Presets:\n");
    for p in presets {
        out.push_str(&format!("  {:<16} {}\n", p.id, p.name));
    }
    out
}

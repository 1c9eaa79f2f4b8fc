//! Command-line parsing for the fanned-fret geometry tool.
//!
//! Parsing lives here; turning arguments into `BoardParams` lives in `app`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{BoardOverrides, Units};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "fret", version, about = "Fanned-fret fingerboard geometry")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute the full board and print fret, nut/bridge and marker geometry.
    Board(BoardArgs),
    /// Print per-string scale lengths only.
    Scales(BoardArgs),
    /// Print marker positions for the given gaps.
    Markers(MarkerArgs),
    /// List built-in presets.
    Presets,
}

/// Board parameter sources, lowest precedence first: defaults, `--preset`,
/// `--config`, then the individual flags.
#[derive(Debug, Args, Clone, Default)]
pub struct BoardArgs {
    /// Board config JSON.
    #[arg(short = 'c', long, env = "FRET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Start from a built-in preset (see `fret presets`).
    #[arg(short = 'p', long)]
    pub preset: Option<String>,

    /// Units for the length flags below.
    #[arg(long, value_enum, default_value_t = Units::Mm)]
    pub units: Units,

    /// Number of strings.
    #[arg(long)]
    pub strings: Option<usize>,

    /// Number of frets.
    #[arg(long)]
    pub frets: Option<usize>,

    /// Treble-side scale length.
    #[arg(long)]
    pub scale_treble: Option<f64>,

    /// Bass-side scale length.
    #[arg(long)]
    pub scale_bass: Option<f64>,

    /// Fret that stays perpendicular to the centre line.
    #[arg(long)]
    pub anchor: Option<usize>,

    /// Fan shaping exponent (1 = log-linear, >1 concentrates the scale change near the bass).
    #[arg(long)]
    pub exponent: Option<f64>,

    /// Outer string spacing at the nut.
    #[arg(long)]
    pub span_nut: Option<f64>,

    /// Outer string spacing at the bridge.
    #[arg(long)]
    pub span_bridge: Option<f64>,

    /// Fingerboard overhang past the outer strings.
    #[arg(long)]
    pub overhang: Option<f64>,
}

impl BoardArgs {
    /// The per-field flags, still in `--units`.
    pub fn overrides(&self) -> BoardOverrides {
        BoardOverrides {
            string_count: self.strings,
            fret_count: self.frets,
            scale_treble: self.scale_treble,
            scale_bass: self.scale_bass,
            anchor_fret: self.anchor,
            span_nut: self.span_nut,
            span_bridge: self.span_bridge,
            overhang: self.overhang,
            exponent: self.exponent,
        }
    }
}

#[derive(Debug, Args, Clone)]
pub struct MarkerArgs {
    #[command(flatten)]
    pub board: BoardArgs,

    /// Gap indices (gap `n` lies between frets `n` and `n + 1`). Repeat or comma-separate.
    #[arg(short = 'g', long = "gap", value_delimiter = ',')]
    pub gaps: Vec<usize>,

    /// Guide line position across the neck, 0 = bass edge, 100 = treble edge.
    #[arg(long)]
    pub guide: Option<f64>,

    /// Marker size (in `--units`).
    #[arg(long)]
    pub size: Option<f64>,
}

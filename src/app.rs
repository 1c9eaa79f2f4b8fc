//! Top-level application orchestration.
//!
//! `src/main.rs` only maps errors to exit codes; this module is the real main:
//! - loads `.env` and installs logging
//! - parses CLI arguments
//! - layers defaults, preset, config file and flags into `BoardParams`
//! - runs the board pipeline and prints reports

use clap::Parser;
use tracing::debug;

use crate::cli::{BoardArgs, Command, MarkerArgs};
use crate::data::{PRESETS, preset_by_id};
use crate::domain::{BoardParams, MarkerSettings, Units, convert};
use crate::error::AppError;
use crate::io::{BoardConfig, read_config};
use crate::report;

pub mod pipeline;

/// Entry point for the `fret` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    crate::logging::init()?;

    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Board(args) => handle_board(&args),
        Command::Scales(args) => handle_scales(&args),
        Command::Markers(args) => handle_markers(&args),
        Command::Presets => {
            print!("{}", report::format_presets(PRESETS));
            Ok(())
        }
    }
}

fn handle_board(args: &BoardArgs) -> Result<(), AppError> {
    let (params, markers) = inputs_from_args(args)?;
    let out = pipeline::run_board(&params, &markers);
    print!(
        "{}",
        report::format_board_report(&out.board, &out.markers, &out.warnings)
    );
    Ok(())
}

fn handle_scales(args: &BoardArgs) -> Result<(), AppError> {
    let (params, _) = inputs_from_args(args)?;
    let p = params.sanitized();
    let scales = crate::geom::scale_set(p.string_count, p.scale_bass, p.scale_treble, p.exponent);
    print!("{}", report::format_scales(&scales));
    Ok(())
}

fn handle_markers(args: &MarkerArgs) -> Result<(), AppError> {
    let (params, mut markers) = inputs_from_args(&args.board)?;
    if !args.gaps.is_empty() {
        markers.gaps = args.gaps.clone();
    }
    if let Some(guide) = args.guide {
        markers.guide_percent = guide;
    }
    if let Some(size) = args.size {
        markers.size = convert(size, args.board.units, Units::Mm);
    }
    let out = pipeline::run_board(&params, &markers);
    print!("{}", report::format_markers(&out.markers));
    print!("{}", report::format_warnings(&out.warnings));
    Ok(())
}

/// Resolve board parameters and marker settings (millimetres).
///
/// Precedence, lowest first: defaults, `--preset`, `--config`, flags.
pub fn inputs_from_args(args: &BoardArgs) -> Result<(BoardParams, MarkerSettings), AppError> {
    let config = match &args.config {
        Some(path) => Some(read_config(path)?),
        None => None,
    };
    resolve_inputs(args, config.as_ref())
}

/// `inputs_from_args` with the config file already loaded.
pub fn resolve_inputs(
    args: &BoardArgs,
    config: Option<&BoardConfig>,
) -> Result<(BoardParams, MarkerSettings), AppError> {
    let mut params = match &args.preset {
        Some(id) => preset_by_id(id)
            .ok_or_else(|| AppError::config(format!("Unknown preset '{id}' (see `fret presets`)")))?
            .to_params(),
        None => BoardParams::default(),
    };
    let mut markers = MarkerSettings::default();

    if let Some(config) = config {
        config.board_mm().apply_to(&mut params);
        if let Some(m) = config.markers_mm() {
            markers = m;
        }
    }

    args.overrides().to_mm(args.units).apply_to(&mut params);

    debug!(?params, "resolved board parameters");
    Ok((params, markers))
}

/// Rewrite argv so a bare `fret` (or `fret` followed by flags) means `fret board`.
///
/// - `fret`                      -> `fret board`
/// - `fret --frets 24 ...`       -> `fret board --frets 24 ...`
/// - `fret --help/--version/-h`  -> unchanged
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("board".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    if arg1.starts_with('-') {
        argv.insert(1, "board".to_string());
    }
    argv
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BoardOverrides;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_board() {
        assert_eq!(rewrite_args(argv(&["fret"])), argv(&["fret", "board"]));
        assert_eq!(
            rewrite_args(argv(&["fret", "--frets", "24"])),
            argv(&["fret", "board", "--frets", "24"])
        );
        assert_eq!(rewrite_args(argv(&["fret", "--help"])), argv(&["fret", "--help"]));
        assert_eq!(
            rewrite_args(argv(&["fret", "scales"])),
            argv(&["fret", "scales"])
        );
    }

    #[test]
    fn flags_override_config_which_overrides_preset() {
        let config = BoardConfig {
            board: BoardOverrides {
                fret_count: Some(20),
                anchor_fret: Some(7),
                ..BoardOverrides::default()
            },
            ..BoardConfig::default()
        };
        let args = BoardArgs {
            preset: Some("rgms7-25-5-27".to_string()),
            anchor: Some(9),
            ..BoardArgs::default()
        };
        let (params, _) = resolve_inputs(&args, Some(&config)).unwrap();
        assert_eq!(params.string_count, 7); // preset
        assert_eq!(params.fret_count, 20); // config
        assert_eq!(params.anchor_fret, 9); // flag
    }

    #[test]
    fn inch_flags_are_converted() {
        let args = BoardArgs {
            units: Units::Inch,
            scale_treble: Some(25.0),
            ..BoardArgs::default()
        };
        let (params, _) = resolve_inputs(&args, None).unwrap();
        assert!((params.scale_treble - 635.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_preset_is_a_config_error() {
        let args = BoardArgs {
            preset: Some("ukulele".to_string()),
            ..BoardArgs::default()
        };
        assert_eq!(resolve_inputs(&args, None).unwrap_err().exit_code(), 2);
    }
}

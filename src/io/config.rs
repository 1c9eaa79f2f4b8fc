//! Board configuration files (JSON).
//!
//! ```json
//! {
//!   "version": 1,
//!   "units": "inch",
//!   "board": { "string_count": 7, "scale_treble": 25.5, "scale_bass": 27.0 },
//!   "markers": { "gaps": [2, 4, 6, 8, 11], "guide_percent": 50, "size": 0.25 }
//! }
//! ```
//!
//! Every field is optional. Lengths are given in `units` and converted to
//! millimetres here, so nothing past this module ever converts.

use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{BoardOverrides, MarkerSettings, PARAMS_VERSION, Units, convert};
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    pub version: u32,
    pub units: Units,
    pub board: BoardOverrides,
    pub markers: Option<MarkerSettings>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            version: PARAMS_VERSION,
            units: Units::Mm,
            board: BoardOverrides::default(),
            markers: None,
        }
    }
}

impl BoardConfig {
    /// Board overrides in millimetres.
    pub fn board_mm(&self) -> BoardOverrides {
        self.board.to_mm(self.units)
    }

    /// Marker settings in millimetres, if the file has any.
    pub fn markers_mm(&self) -> Option<MarkerSettings> {
        self.markers.as_ref().map(|m| MarkerSettings {
            size: convert(m.size, self.units, Units::Mm),
            ..m.clone()
        })
    }
}

/// Parse a config from a JSON string and check its version.
pub fn parse_config(json: &str) -> Result<BoardConfig, AppError> {
    let config: BoardConfig =
        serde_json::from_str(json).map_err(|e| AppError::config(format!("Invalid board config: {e}")))?;
    check_version(config)
}

/// Read a config JSON file.
pub fn read_config(path: &Path) -> Result<BoardConfig, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::io(format!("Failed to open board config '{}': {e}", path.display())))?;
    let config: BoardConfig = serde_json::from_reader(file).map_err(|e| {
        AppError::config(format!("Invalid board config '{}': {e}", path.display()))
    })?;
    check_version(config)
}

fn check_version(config: BoardConfig) -> Result<BoardConfig, AppError> {
    if config.version != PARAMS_VERSION {
        return Err(AppError::config(format!(
            "Unsupported board config version {} (expected {PARAMS_VERSION})",
            config.version
        )));
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_current_version_in_mm() {
        let c = parse_config("{}").unwrap();
        assert_eq!(c, BoardConfig::default());
    }

    #[test]
    fn inch_lengths_convert_at_load() {
        let c = parse_config(
            r#"{"units":"inch","board":{"string_count":7,"scale_bass":27.0,"overhang":0.12},
                "markers":{"size":0.25}}"#,
        )
        .unwrap();
        let b = c.board_mm();
        assert_eq!(b.string_count, Some(7));
        assert!((b.scale_bass.unwrap() - 685.8).abs() < 1e-9);
        assert!((b.overhang.unwrap() - 3.048).abs() < 1e-9);
        assert!(b.scale_treble.is_none());

        let m = c.markers_mm().unwrap();
        assert!((m.size - 6.35).abs() < 1e-9);
        assert_eq!(m.gaps, MarkerSettings::default().gaps);
    }

    #[test]
    fn unknown_version_is_rejected() {
        let err = parse_config(r#"{"version":2}"#).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.message().contains("version 2"));
    }

    #[test]
    fn unknown_board_field_is_rejected() {
        let err = parse_config(r#"{"board":{"strings":6}}"#).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_config(Path::new("/nonexistent/board.json")).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}

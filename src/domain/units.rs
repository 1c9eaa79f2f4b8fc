//! Length units.
//!
//! The geometry kernel is unit-agnostic. Conversion happens once, at the
//! configuration boundary, and everything downstream is millimetres.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const MM_PER_INCH: f64 = 25.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Mm,
    Inch,
}

impl Units {
    pub fn label(self) -> &'static str {
        match self {
            Units::Mm => "mm",
            Units::Inch => "in",
        }
    }
}

/// Convert a length between units. Non-finite values pass through unchanged.
pub fn convert(value: f64, from: Units, to: Units) -> f64 {
    if !value.is_finite() || from == to {
        return value;
    }
    match from {
        Units::Inch => value * MM_PER_INCH,
        Units::Mm => value / MM_PER_INCH,
    }
}

/// Convert to millimetres and round to 0.1 mm.
pub fn to_mm_rounded(value: f64, from: Units) -> f64 {
    (convert(value, from, Units::Mm) * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inch_to_mm() {
        assert!((convert(1.0, Units::Inch, Units::Mm) - 25.4).abs() < 1e-12);
        assert!((convert(25.4, Units::Mm, Units::Inch) - 1.0).abs() < 1e-12);
        assert_eq!(convert(3.0, Units::Mm, Units::Mm), 3.0);
    }

    #[test]
    fn non_finite_passes_through() {
        assert!(convert(f64::NAN, Units::Inch, Units::Mm).is_nan());
    }

    #[test]
    fn rounding_to_tenth_mm() {
        assert_eq!(to_mm_rounded(25.5, Units::Inch), 647.7);
        assert_eq!(to_mm_rounded(0.12, Units::Inch), 3.0);
    }
}

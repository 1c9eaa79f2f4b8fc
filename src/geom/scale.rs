//! Per-string scale lengths.
//!
//! For string `i` of `N`:
//!
//! - `u = i / (N - 1)` (`0` for a single string)
//! - `uu = 1 - (1 - u)^k`
//! - `L_i = exp(lerp(ln L_bass, ln L_treble, uu))`
//!
//! `k = 1` is plain log-linear interpolation. Larger `k` pulls the inner
//! strings toward the treble scale, concentrating the change near the bass
//! side; this exponent is the only fan-shape control.

use crate::domain::{MIN_EXPONENT, ScaleSet};
use crate::math::log_lerp;

/// Per-string scale lengths, bass → treble.
pub fn per_string_scales(
    string_count: usize,
    scale_bass: f64,
    scale_treble: f64,
    exponent: f64,
) -> Vec<f64> {
    let strings = string_count.max(1);
    let k = exponent.max(MIN_EXPONENT);
    (0..strings)
        .map(|i| {
            let u = if strings == 1 {
                0.0
            } else {
                i as f64 / (strings - 1) as f64
            };
            let uu = 1.0 - (1.0 - u).powf(k);
            log_lerp(scale_bass, scale_treble, uu)
        })
        .collect()
}

/// Same as [`per_string_scales`] but keeps the inputs alongside the result.
pub fn scale_set(
    string_count: usize,
    scale_bass: f64,
    scale_treble: f64,
    exponent: f64,
) -> ScaleSet {
    ScaleSet {
        scale_bass,
        scale_treble,
        exponent: exponent.max(MIN_EXPONENT),
        per_string: per_string_scales(string_count, scale_bass, scale_treble, exponent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn linear_exponent_hits_both_ends() {
        let s = per_string_scales(6, 660.4, 647.7, 1.0);
        assert_eq!(s.len(), 6);
        assert!((s[0] - 660.4).abs() < 1e-9);
        assert!((s[5] - 647.7).abs() < 1e-9);
    }

    #[test]
    fn linear_exponent_is_geometric_in_the_middle() {
        let s = per_string_scales(3, 27.0, 25.0, 1.0);
        assert!((s[1] - (27.0f64 * 25.0).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn single_string_takes_bass_scale() {
        let s = per_string_scales(1, 30.0, 25.0, 2.0);
        assert_eq!(s.len(), 1);
        assert!((s[0] - 30.0).abs() < 1e-12);
        assert_eq!(per_string_scales(0, 30.0, 25.0, 2.0).len(), 1);
    }

    #[test]
    fn larger_exponent_moves_inner_strings_toward_treble() {
        let low = per_string_scales(6, 27.0, 25.0, 1.0);
        let high = per_string_scales(6, 27.0, 25.0, 2.0);
        for i in 1..5 {
            assert!(high[i] < low[i], "string {i}: {} !< {}", high[i], low[i]);
        }
    }

    #[test]
    fn tiny_exponent_is_clamped() {
        let s = scale_set(4, 27.0, 25.0, 0.0);
        assert_eq!(s.exponent, MIN_EXPONENT);
        assert!(s.per_string.iter().all(|v| v.is_finite()));
    }

    proptest! {
        #[test]
        fn prop_outer_strings_match_inputs(
            n in 2usize..30,
            bass in 300.0f64..1000.0,
            treble in 300.0f64..1000.0,
        ) {
            let s = per_string_scales(n, bass, treble, 1.0);
            prop_assert!((s[0] - bass).abs() < 1e-9);
            prop_assert!((s[n - 1] - treble).abs() < 1e-9);
        }

        #[test]
        fn prop_spread_non_decreasing_in_exponent(
            n in 2usize..30,
            bass in 300.0f64..1000.0,
            delta in 1.0f64..200.0,
            k1 in 1.0f64..4.0,
            dk in 0.0f64..4.0,
        ) {
            let treble = bass - delta.min(bass - 1.0);
            let a = scale_set(n, bass, treble, k1);
            let b = scale_set(n, bass, treble, k1 + dk);
            prop_assert!(b.spread() >= a.spread() - 1e-9);
        }

        #[test]
        fn prop_scales_monotone_for_any_exponent(
            n in 2usize..30,
            bass in 300.0f64..1000.0,
            treble in 300.0f64..1000.0,
            k in 0.01f64..10.0,
        ) {
            prop_assert!(scale_set(n, bass, treble, k).is_monotone());
        }
    }
}

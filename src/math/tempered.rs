//! Equal-tempered fret distances and log-space interpolation.
//!
//! The distance from the nut to fret `n` on a string of scale length `L` is:
//!
//! `d(L, n) = L - L / 2^(n/12)`
//!
//! so fret 12 sits at `L / 2` and every fret shortens the remaining vibrating
//! length by a factor of `2^(1/12)`.

/// Semitones per octave.
const SEMITONES: f64 = 12.0;

/// Distance from the nut to fret `n` for scale length `scale`.
pub fn fret_distance(scale: f64, fret: f64) -> f64 {
    scale - scale / 2f64.powf(fret / SEMITONES)
}

/// Single-scale fret distances for frets `1..=frets`.
pub fn fret_positions(scale: f64, frets: usize) -> Vec<f64> {
    (1..=frets).map(|n| fret_distance(scale, n as f64)).collect()
}

/// Interpolate between `a` and `b` (both `> 0`) linearly in log space.
pub fn log_lerp(a: f64, b: f64, t: f64) -> f64 {
    let ln_a = a.ln();
    let ln_b = b.ln();
    (ln_a + (ln_b - ln_a) * t).exp()
}

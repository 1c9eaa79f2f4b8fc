//! Curve fitting for rendering.
//!
//! Rows of board points become smooth, shape-preserving curves (monotone
//! cubic Hermite, emitted as cubic Bézier segments).

pub mod pchip;

pub use pchip::*;

//! `fret-geometry` library crate.
//!
//! Geometry kernel for fanned-fret (multi-scale) fingerboards: string layout,
//! per-string scale lengths, fret rows extended to the neck edges, nut and
//! bridge lines, smooth curve fitting and marker placement.
//!
//! The binary (`fret`) is a thin wrapper around this library:
//!
//! - `geom`, `fit` and `math` are pure and free of I/O
//! - `io`, `report`, `cli` and `app` form the outer shell

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod geom;
pub mod io;
pub mod logging;
pub mod math;
pub mod report;

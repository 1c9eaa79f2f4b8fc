//! Input/output helpers.
//!
//! - board configuration JSON (`config`)

pub mod config;

pub use config::*;

//! Fingerboard geometry.
//!
//! Leaves first:
//!
//! - `layout`: lateral string and edge positions
//! - `scale`: per-string scale lengths
//! - `frame`: shared per-parameter precomputation
//! - `frets`, `nut_bridge`: rows extended to the neck edges
//! - `markers`: guide-line / ghost-curve marker placement
//! - `board`: everything above for one parameter set
//!
//! All functions are pure; identical inputs give identical outputs on any thread.

pub mod board;
pub mod frame;
pub mod frets;
pub mod layout;
pub mod markers;
pub mod nut_bridge;
pub mod scale;

pub use board::*;
pub use frame::*;
pub use frets::*;
pub use layout::*;
pub use markers::*;
pub use nut_bridge::*;
pub use scale::*;

//! Mathematical utilities: tempered fret distances and plane intersections.

pub mod intersect;
pub mod tempered;

pub use intersect::*;
pub use tempered::*;

//! 2D geometry for screen and world space
//!
//! Everything here is a plain `Copy` value with total operations:
//! - `Point`: a position or a translation vector
//! - `Rect`: anchor plus non-negative size, with an inclusive overlap test

mod point;
mod rect;

pub use point::Point;
pub use rect::Rect;

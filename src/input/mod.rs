//! Pointer input
//!
//! Polls a single pointer button once per frame and turns the readings into
//! press/release edges and a drag-selection box.
//!
//! - source: where readings come from (macroquad or anything else)
//! - pointer: the per-frame state machine

mod pointer;
mod source;

pub use pointer::PointerInput;
pub use source::{MacroquadPointer, PointerReading, PointerSource};

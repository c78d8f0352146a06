//! Rendering-side collaborators
//!
//! - camera: world/screen translation and host-side scrolling
//! - outline: selection box border, as a pixel mask and as a macroquad painter

pub mod camera;
pub mod outline;

pub use camera::{Camera, CameraController};
pub use outline::{MacroquadOutline, OutlinePainter};

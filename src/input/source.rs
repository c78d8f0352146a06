//! Raw pointer polling

use macroquad::prelude::*;
use crate::geometry::Point;

/// One frame's worth of pointer state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerReading {
    /// Is the selection button held right now
    pub pressed: bool,
    /// Cursor position in screen pixels
    pub position: Point,
}

impl PointerReading {
    pub fn new(pressed: bool, position: Point) -> Self {
        Self { pressed, position }
    }

    #[cfg(test)]
    pub fn down(x: f32, y: f32) -> Self {
        Self::new(true, Point::new(x, y))
    }

    #[cfg(test)]
    pub fn up(x: f32, y: f32) -> Self {
        Self::new(false, Point::new(x, y))
    }
}

/// A pollable pointer device. Read once per frame, before `PointerInput::update`.
pub trait PointerSource {
    fn poll(&self) -> PointerReading;
}

/// Left mouse button and cursor position from macroquad
#[derive(Debug, Clone, Copy)]
pub struct MacroquadPointer {
    pub button: MouseButton,
}

impl Default for MacroquadPointer {
    fn default() -> Self {
        Self { button: MouseButton::Left }
    }
}

impl PointerSource for MacroquadPointer {
    fn poll(&self) -> PointerReading {
        PointerReading::new(is_mouse_button_down(self.button), Point::from(mouse_position()))
    }
}

//! 2D scrolling camera
//!
//! The camera is a single translation: a world point `p` is drawn at
//! `p - translation` on screen. Only `CameraController` (the host) writes the
//! translation; selection code reads it through `inverse_translation`.

use macroquad::prelude::*;
use crate::geometry::Point;

/// World-to-screen offset accumulated from scrolling
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Camera {
    translation: Point,
}

impl Camera {
    #[cfg(test)]
    pub fn new(translation: Point) -> Self {
        Self { translation }
    }

    pub fn translation(&self) -> Point {
        self.translation
    }

    /// Vector that moves world-space geometry into screen space
    pub fn inverse_translation(&self) -> Point {
        self.translation.inverse()
    }

    pub fn set_translation(&mut self, translation: Point) {
        self.translation = translation;
    }

    /// Move the view by a delta (positive x shows more of the world to the right)
    pub fn scroll(&mut self, delta: Point) {
        self.translation = self.translation.translate(delta);
    }

    pub fn world_to_screen(&self, world: Point) -> Point {
        world.translate(self.inverse_translation())
    }

    pub fn screen_to_world(&self, screen: Point) -> Point {
        screen.translate(self.translation)
    }
}

/// Directional keys held this frame
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Jump back to the world origin
    pub home: bool,
}

impl ScrollKeys {
    /// Arrow keys or WASD
    pub fn poll() -> Self {
        Self {
            left: is_key_down(KeyCode::Left) || is_key_down(KeyCode::A),
            right: is_key_down(KeyCode::Right) || is_key_down(KeyCode::D),
            up: is_key_down(KeyCode::Up) || is_key_down(KeyCode::W),
            down: is_key_down(KeyCode::Down) || is_key_down(KeyCode::S),
            home: is_key_pressed(KeyCode::Home),
        }
    }
}

/// Combine key input and screen-edge proximity into a scroll direction.
///
/// Each axis is -1, 0 or 1; the result is normalized so diagonals are not
/// faster. A zero `edge_margin` disables edge scrolling.
pub fn scroll_direction(keys: ScrollKeys, cursor: Point, screen: (f32, f32), edge_margin: f32) -> Point {
    let mut dir = Point::ZERO;

    if keys.left { dir.x -= 1.0; }
    if keys.right { dir.x += 1.0; }
    if keys.up { dir.y -= 1.0; }
    if keys.down { dir.y += 1.0; }

    if edge_margin > 0.0 {
        let (w, h) = screen;
        if cursor.x <= edge_margin { dir.x -= 1.0; }
        if cursor.x >= w - edge_margin { dir.x += 1.0; }
        if cursor.y <= edge_margin { dir.y -= 1.0; }
        if cursor.y >= h - edge_margin { dir.y += 1.0; }
    }

    dir.x = dir.x.clamp(-1.0, 1.0);
    dir.y = dir.y.clamp(-1.0, 1.0);

    let len = dir.length();
    if len > 1.0 {
        dir = dir.scale(1.0 / len);
    }
    dir
}

/// Host-side camera scrolling (keyboard and screen edges)
#[derive(Debug, Clone, Copy)]
pub struct CameraController {
    /// Pixels per second
    pub scroll_speed: f32,
    /// Distance from the window border that triggers edge scrolling
    pub edge_margin: f32,
}

impl CameraController {
    pub fn new(scroll_speed: f32, edge_margin: f32) -> Self {
        Self { scroll_speed, edge_margin }
    }

    /// Apply one frame of scrolling from already-polled input
    pub fn apply(&self, camera: &mut Camera, keys: ScrollKeys, cursor: Point, screen: (f32, f32), dt: f32) {
        if keys.home {
            camera.set_translation(Point::ZERO);
            tracing::debug!("camera reset");
            return;
        }

        let dir = scroll_direction(keys, cursor, screen, self.edge_margin);
        if dir == Point::ZERO {
            return;
        }
        camera.scroll(dir.scale(self.scroll_speed * dt));
        tracing::trace!(x = camera.translation().x, y = camera.translation().y, "camera scrolled");
    }

    /// Call once per frame from the game loop
    pub fn update(&self, camera: &mut Camera) {
        let cursor = Point::from(mouse_position());
        self.apply(camera, ScrollKeys::poll(), cursor, (screen_width(), screen_height()), get_frame_time());
    }
}

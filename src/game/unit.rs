//! Demo units
//!
//! Square units laid out on a grid in world space. Only the player's team is
//! offered to the selection box by the host.

use macroquad::prelude::{Color, YELLOW, draw_rectangle, draw_rectangle_lines};
use rand::Rng;
use crate::geometry::{Point, Rect};
use crate::render::Camera;
use super::Selectable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    Player,
    Enemy,
}

impl Team {
    fn color(self) -> Color {
        match self {
            Team::Player => Color::from_rgba(80, 160, 255, 255),
            Team::Enemy => Color::from_rgba(220, 80, 70, 255),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Unit {
    pub id: u32,
    /// World-space centre
    pub position: Point,
    /// Edge length of the square body
    pub size: f32,
    pub team: Team,
}

impl Unit {
    pub fn new(id: u32, position: Point, size: f32, team: Team) -> Self {
        Self { id, position, size, team }
    }

    /// Body rect in screen space
    pub fn screen_rect(&self, camera: &Camera) -> Rect {
        let bounds = self.bounds();
        let anchor = camera.world_to_screen(bounds.anchor());
        Rect::new(anchor.x, anchor.y, bounds.w, bounds.h)
    }

    /// Draw the unit body at its screen position, with a ring when selected
    pub fn draw(&self, camera: &Camera, selected: bool) {
        let rect = self.screen_rect(camera);
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, self.team.color());
        if selected {
            draw_rectangle_lines(rect.x - 2.0, rect.y - 2.0, rect.w + 4.0, rect.h + 4.0, 1.0, YELLOW);
        }
    }
}

impl Selectable for Unit {
    fn bounds(&self) -> Rect {
        Rect::centered(self.position, self.size, self.size)
    }
}

/// Grid layout parameters for `spawn_grid`
#[derive(Debug, Clone, Copy)]
pub struct GridLayout {
    pub rows: u32,
    pub cols: u32,
    pub spacing: f32,
    pub unit_size: f32,
    /// Max random offset applied to each unit on both axes
    pub jitter: f32,
}

/// Lay out `rows * cols` units starting at `origin`.
///
/// Ids start at `first_id` and increase row by row. Jitter is capped at the
/// spacing.
pub fn spawn_grid<R: Rng>(layout: GridLayout, origin: Point, team: Team, first_id: u32, rng: &mut R) -> Vec<Unit> {
    let jitter = if layout.jitter.is_finite() {
        // Keeps the sampled range finite
        layout.jitter.abs().min(layout.spacing.abs()).min(1.0e6)
    } else {
        0.0
    };
    let mut units = Vec::with_capacity(layout.rows.saturating_mul(layout.cols).min(u16::MAX as u32) as usize);
    let mut id = first_id;

    for row in 0..layout.rows {
        for col in 0..layout.cols {
            let offset = if jitter > 0.0 {
                Point::new(rng.gen_range(-jitter..=jitter), rng.gen_range(-jitter..=jitter))
            } else {
                Point::ZERO
            };
            let position = origin
                .translate(Point::new(col as f32 * layout.spacing, row as f32 * layout.spacing))
                .translate(offset);
            units.push(Unit::new(id, position, layout.unit_size, team));
            id = id.wrapping_add(1);
        }
    }
    units
}

//! Selection box outline
//!
//! The border is a fixed 2 pixels thick: a pixel is painted when its column
//! is one of the first or last two columns, or its row is one of the first
//! or last two rows. Pixels are built CPU-side as RGBA8 and uploaded as a
//! texture at the rect's anchor.

use macroquad::prelude::*;
use crate::geometry::Rect;

/// Border thickness in pixels
pub const OUTLINE_THICKNESS: usize = 2;

/// True if index `i` lies within the border band of a run of `len` pixels
pub fn is_close_to_edge(i: usize, len: usize) -> bool {
    i < OUTLINE_THICKNESS || i + OUTLINE_THICKNESS >= len
}

/// Row-major border mask for a `width` x `height` box
pub fn outline_mask(width: usize, height: usize) -> Vec<bool> {
    let mut mask = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            mask.push(is_close_to_edge(x, width) || is_close_to_edge(y, height));
        }
    }
    mask
}

/// RGBA8 pixels for the outline; interior pixels are fully transparent
pub fn outline_pixels(width: usize, height: usize, color: [u8; 4]) -> Vec<u8> {
    outline_mask(width, height)
        .into_iter()
        .flat_map(|edge| if edge { color } else { [0, 0, 0, 0] })
        .collect()
}

/// Something that can draw a selection box outline in screen space
pub trait OutlinePainter {
    fn paint_outline(&mut self, rect: Rect);
}

/// Paints the outline through macroquad (needs a live GL context)
pub struct MacroquadOutline {
    pub color: [u8; 4],
}

impl MacroquadOutline {
    pub fn new(color: [u8; 4]) -> Self {
        Self { color }
    }
}

impl OutlinePainter for MacroquadOutline {
    fn paint_outline(&mut self, rect: Rect) {
        // Texture sizes are u16 in macroquad
        let width = rect.w.min(u16::MAX as f32) as usize;
        let height = rect.h.min(u16::MAX as f32) as usize;
        if width == 0 || height == 0 {
            return;
        }

        let pixels = outline_pixels(width, height, self.color);
        let texture = Texture2D::from_rgba8(width as u16, height as u16, &pixels);
        texture.set_filter(FilterMode::Nearest);
        draw_texture(&texture, rect.x, rect.y, WHITE);
    }
}

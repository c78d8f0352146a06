//! Axis-aligned rectangle

use super::Point;

/// A rectangle defined by an anchor (top-left) and a non-negative size
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Create from two opposite corners given in any order.
    ///
    /// A drag can go in any of the four directions, so the anchor is the
    /// component-wise minimum and the size is the absolute difference.
    pub fn from_points(a: Point, b: Point) -> Self {
        Self::new(
            a.x.min(b.x),
            a.y.min(b.y),
            (a.x - b.x).abs(),
            (a.y - b.y).abs(),
        )
    }

    /// Create a rect of the given size centred on a point
    pub fn centered(center: Point, w: f32, h: f32) -> Self {
        let (w, h) = (w.abs(), h.abs());
        Self::new(center.x - w * 0.5, center.y - h * 0.5, w, h)
    }

    /// Top-left corner
    pub fn anchor(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Shift the anchor, keeping the size
    pub fn translate(&self, delta: Point) -> Self {
        let anchor = self.anchor().translate(delta);
        Self::new(anchor.x, anchor.y, self.w, self.h)
    }

    /// Inclusive axis-aligned overlap test.
    ///
    /// Rects that only share an edge or a corner intersect. Zero-sized rects
    /// behave as a line or a point against the other rect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x <= other.right()
            && other.x <= self.right()
            && self.y <= other.bottom()
            && other.y <= self.bottom()
    }
}

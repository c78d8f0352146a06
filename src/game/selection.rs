//! Box selection predicate
//!
//! Selection rects live in screen space (they come straight from pointer
//! coordinates); unit bounds live in world space. This is the only place the
//! two meet: each unit's bounds are moved into screen space with the camera's
//! inverse translation, then tested for inclusive overlap.

use crate::geometry::Rect;
use crate::render::Camera;

/// An entity that can be picked by a selection box
pub trait Selectable {
    /// World-space bounding rectangle
    fn bounds(&self) -> Rect;
}

impl<T: Selectable + ?Sized> Selectable for &T {
    fn bounds(&self) -> Rect {
        (**self).bounds()
    }
}

/// Units whose bounds overlap `selection`, in candidate order
pub fn select_units<'a, U: Selectable>(selection: Rect, camera: &Camera, candidates: &'a [U]) -> Vec<&'a U> {
    let to_screen = camera.inverse_translation();
    candidates
        .iter()
        .filter(|unit| unit.bounds().translate(to_screen).intersects(&selection))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    struct Block(Rect);

    impl Selectable for Block {
        fn bounds(&self) -> Rect {
            self.0
        }
    }

    fn drag(x0: f32, y0: f32, x1: f32, y1: f32) -> Rect {
        Rect::from_points(Point::new(x0, y0), Point::new(x1, y1))
    }

    #[test]
    fn test_inside_and_outside() {
        let units = [
            Block(Rect::new(5.0, 5.0, 2.0, 2.0)),
            Block(Rect::new(20.0, 20.0, 2.0, 2.0)),
        ];
        let selected = select_units(drag(0.0, 0.0, 10.0, 10.0), &Camera::default(), &units);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].0, Rect::new(5.0, 5.0, 2.0, 2.0));
    }

    #[test]
    fn test_camera_offset_moves_units_into_screen_space() {
        let camera = Camera::new(Point::new(100.0, 0.0));
        let units = [Block(Rect::new(105.0, 5.0, 2.0, 2.0))];
        let selected = select_units(drag(0.0, 0.0, 10.0, 10.0), &camera, &units);
        assert_eq!(selected.len(), 1);

        // The same unit without the camera offset is far off screen
        assert!(select_units(drag(0.0, 0.0, 10.0, 10.0), &Camera::default(), &units).is_empty());
    }

    #[test]
    fn test_camera_invariance() {
        let world = [
            Rect::new(5.0, 5.0, 2.0, 2.0),
            Rect::new(12.0, 0.0, 3.0, 3.0),
            Rect::new(-4.0, 8.0, 3.0, 3.0),
            Rect::new(30.0, 30.0, 1.0, 1.0),
        ];
        let selection = drag(10.0, 10.0, -1.0, -1.0);
        let shift = Point::new(-250.0, 75.5);

        let base: Vec<Block> = world.iter().map(|&r| Block(r)).collect();
        let moved: Vec<Block> = world.iter().map(|&r| Block(r.translate(shift))).collect();

        let picked = |units: &[Block], camera: &Camera| -> Vec<usize> {
            let hits = select_units(selection, camera, units);
            units
                .iter()
                .enumerate()
                .filter(|(_, u)| hits.iter().any(|h| std::ptr::eq(*h, *u)))
                .map(|(i, _)| i)
                .collect()
        };

        let before = picked(&base, &Camera::default());
        let after = picked(&moved, &Camera::new(shift));
        assert_eq!(before, vec![0, 2]);
        assert_eq!(before, after);
    }

    #[test]
    fn test_preserves_candidate_order() {
        let units = [
            Block(Rect::new(8.0, 8.0, 1.0, 1.0)),
            Block(Rect::new(50.0, 50.0, 1.0, 1.0)),
            Block(Rect::new(1.0, 1.0, 1.0, 1.0)),
            Block(Rect::new(4.0, 4.0, 1.0, 1.0)),
        ];
        let selected = select_units(drag(0.0, 0.0, 10.0, 10.0), &Camera::default(), &units);
        let xs: Vec<f32> = selected.iter().map(|b| b.0.x).collect();
        assert_eq!(xs, vec![8.0, 1.0, 4.0]);
    }

    #[test]
    fn test_zero_size_selection_on_unit() {
        let units = [Block(Rect::new(4.0, 4.0, 2.0, 2.0))];
        let selected = select_units(drag(5.0, 5.0, 5.0, 5.0), &Camera::default(), &units);
        assert_eq!(selected.len(), 1);
    }

    #[test]
    fn test_edge_touching_unit_is_selected() {
        let units = [Block(Rect::new(10.0, 3.0, 2.0, 2.0))];
        let selected = select_units(drag(0.0, 0.0, 10.0, 10.0), &Camera::default(), &units);
        assert_eq!(selected.len(), 1);
    }
}

//! Drag-selection state machine
//!
//! Input is polled, not event driven, so edges are derived by comparing the
//! current reading against how long the button has been held:
//! - just pressed: pressed now and `held_frames == 0`
//! - just released: not pressed now and `held_frames != 0`
//!
//! Both checks run before `held_frames` is updated for the frame.

use crate::game::{Selectable, select_units};
use crate::geometry::{Point, Rect};
use crate::render::{Camera, OutlinePainter};
use super::PointerReading;

/// Per-session pointer state: hold duration and drag origin
#[derive(Debug, Clone, Default)]
pub struct PointerInput {
    /// Consecutive frames the button has been down, 0 when released
    held_frames: u32,
    /// Screen position of the most recent press
    drag_origin: Point,
    /// Screen position from the latest reading
    cursor: Point,
}

impl PointerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame's reading.
    ///
    /// Returns the candidates inside the drag box on the release frame, and an
    /// empty list on every other frame.
    pub fn update<'a, U: Selectable>(
        &mut self,
        reading: PointerReading,
        camera: &Camera,
        candidates: &'a [U],
    ) -> Vec<&'a U> {
        self.cursor = reading.position;

        if self.just_pressed(reading.pressed) {
            self.drag_origin = reading.position;
            tracing::debug!(x = reading.position.x, y = reading.position.y, "selection drag started");
        }

        let mut selected = Vec::new();
        if self.just_released(reading.pressed) {
            let selection = Rect::from_points(self.drag_origin, reading.position);
            selected = select_units(selection, camera, candidates);
            tracing::info!(count = selected.len(), held_frames = self.held_frames, "selected units");
        }

        self.held_frames = if reading.pressed {
            self.held_frames.saturating_add(1)
        } else {
            0
        };

        selected
    }

    /// Poll a source and update in one step
    pub fn update_from<'a, S, U>(&mut self, source: &S, camera: &Camera, candidates: &'a [U]) -> Vec<&'a U>
    where
        S: super::PointerSource + ?Sized,
        U: Selectable,
    {
        self.update(source.poll(), camera, candidates)
    }

    /// Would a reading with this button state be a press edge
    pub fn just_pressed(&self, pressed: bool) -> bool {
        pressed && self.held_frames == 0
    }

    /// Would a reading with this button state be a release edge
    pub fn just_released(&self, pressed: bool) -> bool {
        !pressed && self.held_frames != 0
    }

    pub fn is_held(&self) -> bool {
        self.held_frames != 0
    }

    pub fn held_frames(&self) -> u32 {
        self.held_frames
    }

    pub fn drag_origin(&self) -> Point {
        self.drag_origin
    }

    /// Current drag box in screen space, while the button is held
    pub fn drag_rect(&self) -> Option<Rect> {
        self.is_held().then(|| Rect::from_points(self.drag_origin, self.cursor))
    }

    /// Paint the drag box outline, if dragging
    pub fn draw_selection<P: OutlinePainter + ?Sized>(&self, painter: &mut P) {
        if let Some(rect) = self.drag_rect() {
            painter.paint_outline(rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use crate::input::PointerSource;

    #[derive(Debug, PartialEq)]
    struct Block(Rect);

    impl Selectable for Block {
        fn bounds(&self) -> Rect {
            self.0
        }
    }

    /// Replays a fixed list of readings
    struct Scripted(RefCell<VecDeque<PointerReading>>);

    impl Scripted {
        fn new(readings: &[PointerReading]) -> Self {
            Self(RefCell::new(readings.iter().copied().collect()))
        }
    }

    impl PointerSource for Scripted {
        fn poll(&self) -> PointerReading {
            self.0.borrow_mut().pop_front().unwrap_or_default()
        }
    }

    #[derive(Default)]
    struct Recorder(Vec<Rect>);

    impl OutlinePainter for Recorder {
        fn paint_outline(&mut self, rect: Rect) {
            self.0.push(rect);
        }
    }

    fn units() -> Vec<Block> {
        vec![
            Block(Rect::new(5.0, 5.0, 2.0, 2.0)),
            Block(Rect::new(20.0, 20.0, 2.0, 2.0)),
        ]
    }

    #[test]
    fn test_released_idle_is_idempotent() {
        let mut input = PointerInput::new();
        let camera = Camera::default();
        let units = units();
        for _ in 0..5 {
            assert!(input.update(PointerReading::up(5.0, 5.0), &camera, &units).is_empty());
            assert_eq!(input.held_frames(), 0);
            assert!(input.drag_rect().is_none());
        }
    }

    #[test]
    fn test_edge_sequence() {
        let mut input = PointerInput::new();
        let camera = Camera::default();
        let units = units();

        // Frame 1: released, nothing happens
        assert!(input.update(PointerReading::up(50.0, 50.0), &camera, &units).is_empty());
        assert_eq!(input.held_frames(), 0);

        // Frame 2: press edge sets the origin
        assert!(input.just_pressed(true));
        assert!(input.update(PointerReading::down(0.0, 0.0), &camera, &units).is_empty());
        assert_eq!(input.drag_origin(), Point::new(0.0, 0.0));
        assert_eq!(input.held_frames(), 1);

        // Frame 3: still held, origin kept
        assert!(!input.just_pressed(true));
        assert!(input.update(PointerReading::down(6.0, 4.0), &camera, &units).is_empty());
        assert_eq!(input.drag_origin(), Point::new(0.0, 0.0));
        assert_eq!(input.held_frames(), 2);

        // Frame 4: release edge selects between frame 2 and frame 4 positions
        assert!(input.just_released(false));
        let selected = input.update(PointerReading::up(10.0, 10.0), &camera, &units);
        assert_eq!(selected, vec![&units[0]]);
        assert_eq!(input.held_frames(), 0);

        // Frame 5: nothing more
        assert!(input.update(PointerReading::up(10.0, 10.0), &camera, &units).is_empty());
    }

    #[test]
    fn test_unit_outside_drag_is_not_selected() {
        let mut input = PointerInput::new();
        let camera = Camera::default();
        let units = [Block(Rect::new(20.0, 20.0, 2.0, 2.0))];
        input.update(PointerReading::down(0.0, 0.0), &camera, &units);
        assert!(input.update(PointerReading::up(10.0, 10.0), &camera, &units).is_empty());
    }

    #[test]
    fn test_click_without_movement_selects_unit_under_cursor() {
        let mut input = PointerInput::new();
        let camera = Camera::default();
        let units = [Block(Rect::new(4.0, 4.0, 2.0, 2.0))];
        input.update(PointerReading::down(5.0, 5.0), &camera, &units);
        let selected = input.update(PointerReading::up(5.0, 5.0), &camera, &units);
        assert_eq!(selected.len(), 1);
    }

    #[test]
    fn test_camera_translation_applied_on_release() {
        let mut input = PointerInput::new();
        let camera = Camera::new(Point::new(100.0, 0.0));
        let units = [Block(Rect::new(105.0, 5.0, 2.0, 2.0))];
        input.update(PointerReading::down(0.0, 0.0), &camera, &units);
        let selected = input.update(PointerReading::up(10.0, 10.0), &camera, &units);
        assert_eq!(selected.len(), 1);
    }

    #[test]
    fn test_reverse_drag_direction() {
        let mut input = PointerInput::new();
        let camera = Camera::default();
        let units = units();
        input.update(PointerReading::down(10.0, 10.0), &camera, &units);
        let selected = input.update(PointerReading::up(0.0, 0.0), &camera, &units);
        assert_eq!(selected, vec![&units[0]]);
    }

    #[test]
    fn test_new_press_overwrites_origin() {
        let mut input = PointerInput::new();
        let camera = Camera::default();
        let units = units();
        input.update(PointerReading::down(100.0, 100.0), &camera, &units);
        input.update(PointerReading::up(100.0, 100.0), &camera, &units);

        input.update(PointerReading::down(19.0, 19.0), &camera, &units);
        assert_eq!(input.drag_origin(), Point::new(19.0, 19.0));
        let selected = input.update(PointerReading::up(30.0, 30.0), &camera, &units);
        assert_eq!(selected, vec![&units[1]]);
    }

    #[test]
    fn test_drag_rect_tracks_cursor_while_held() {
        let mut input = PointerInput::new();
        let camera = Camera::default();
        let units: [Block; 0] = [];

        input.update(PointerReading::down(10.0, 10.0), &camera, &units);
        assert_eq!(input.drag_rect(), Some(Rect::new(10.0, 10.0, 0.0, 0.0)));

        input.update(PointerReading::down(4.0, 30.0), &camera, &units);
        assert_eq!(input.drag_rect(), Some(Rect::new(4.0, 10.0, 6.0, 20.0)));

        input.update(PointerReading::up(4.0, 30.0), &camera, &units);
        assert_eq!(input.drag_rect(), None);
    }

    #[test]
    fn test_draw_selection_only_while_dragging() {
        let mut input = PointerInput::new();
        let camera = Camera::default();
        let units: [Block; 0] = [];
        let mut painter = Recorder::default();

        input.draw_selection(&mut painter);
        assert!(painter.0.is_empty());

        input.update(PointerReading::down(0.0, 0.0), &camera, &units);
        input.update(PointerReading::down(8.0, 6.0), &camera, &units);
        input.draw_selection(&mut painter);
        assert_eq!(painter.0, vec![Rect::new(0.0, 0.0, 8.0, 6.0)]);

        input.update(PointerReading::up(8.0, 6.0), &camera, &units);
        input.draw_selection(&mut painter);
        assert_eq!(painter.0.len(), 1);
    }

    #[test]
    fn test_update_from_source() {
        let source = Scripted::new(&[
            PointerReading::up(0.0, 0.0),
            PointerReading::down(0.0, 0.0),
            PointerReading::down(3.0, 3.0),
            PointerReading::up(10.0, 10.0),
        ]);
        let mut input = PointerInput::new();
        let camera = Camera::default();
        let units = units();

        let per_frame: Vec<usize> = (0..4)
            .map(|_| input.update_from(&source, &camera, &units).len())
            .collect();
        assert_eq!(per_frame, vec![0, 0, 0, 1]);
    }

    #[test]
    fn test_held_frames_zero_iff_released() {
        let mut input = PointerInput::new();
        let camera = Camera::default();
        let units: [Block; 0] = [];
        let script = [true, true, false, false, true, false, true, true, true];

        for pressed in script {
            input.update(PointerReading::new(pressed, Point::ZERO), &camera, &units);
            assert_eq!(input.held_frames() == 0, !pressed);
            assert_eq!(input.is_held(), pressed);
        }
        assert_eq!(input.held_frames(), 3);
    }
}

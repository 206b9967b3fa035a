//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestCanvasBuilder` - Builder pattern for creating controllers with boxes
//! - Gesture helpers like `click()` and `drag_path()`
//! - Invariant assertions shared by scenario tests

use textmark::{
    BoxId, BoxState, CanvasController, FeedbackLog, HitPolicy, Point, PointerEvent, Rect,
    Settings,
};

// ============================================================================
// TestCanvasBuilder - Builder pattern for creating test canvases
// ============================================================================

/// Builder for creating test controllers with annotations.
///
/// # Example
/// ```ignore
/// let (canvas, ids, log) = TestCanvasBuilder::new()
///     .with_box("first", Rect::new(0.0, 0.0, 100.0, 40.0))
///     .with_box("second", Rect::new(200.0, 0.0, 100.0, 40.0))
///     .active(0)
///     .build_with_log();
/// ```
pub struct TestCanvasBuilder {
    settings: Settings,
    boxes: Vec<(String, Rect)>,
    active: Option<usize>,
    bounds: Option<Rect>,
}

impl Default for TestCanvasBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCanvasBuilder {
    pub fn new() -> Self {
        Self {
            settings: Settings::default(),
            boxes: Vec::new(),
            active: None,
            bounds: None,
        }
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_hit_policy(mut self, policy: HitPolicy) -> Self {
        self.settings.hit_policy = policy;
        self
    }

    pub fn with_box(mut self, text: impl Into<String>, frame: Rect) -> Self {
        self.boxes.push((text.into(), frame));
        self
    }

    /// Activate the box at `index` (insertion order) after building.
    pub fn active(mut self, index: usize) -> Self {
        self.active = Some(index);
        self
    }

    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn build(self) -> (CanvasController, Vec<BoxId>) {
        let (canvas, ids, _log) = self.build_with_log();
        (canvas, ids)
    }

    /// Build and attach a `FeedbackLog`. Events from setup are drained, so
    /// the log starts empty.
    pub fn build_with_log(self) -> (CanvasController, Vec<BoxId>, FeedbackLog) {
        let log = FeedbackLog::new();
        let mut canvas = CanvasController::new(self.settings);
        canvas.add_observer(log.clone());
        canvas.set_canvas_bounds(self.bounds);

        let ids: Vec<BoxId> = self
            .boxes
            .into_iter()
            .map(|(text, frame)| canvas.add_annotation(frame, text))
            .collect();

        if let Some(index) = self.active {
            assert!(canvas.activate(ids[index]), "active index out of range");
        }
        log.drain();
        (canvas, ids, log)
    }
}

// ============================================================================
// Gesture helpers
// ============================================================================

pub fn p(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

/// Pointer down and up at the same point.
pub fn click(canvas: &mut CanvasController, at: Point) {
    canvas.handle(PointerEvent::Down(at));
    canvas.handle(PointerEvent::Up(at));
}

/// Full gesture: down at the first point, one drag event per point, up at
/// the last point.
pub fn drag_path(canvas: &mut CanvasController, path: &[Point]) {
    let (Some(first), Some(last)) = (path.first(), path.last()) else {
        return;
    };
    canvas.handle(PointerEvent::Down(*first));
    for point in path {
        canvas.handle(PointerEvent::Drag(*point));
    }
    canvas.handle(PointerEvent::Up(*last));
}

// ============================================================================
// Assertions
// ============================================================================

pub fn state_of(canvas: &CanvasController, id: BoxId) -> BoxState {
    canvas.get(id).expect("box should exist").state()
}

pub fn frame_of(canvas: &CanvasController, id: BoxId) -> Rect {
    canvas.get(id).expect("box should exist").frame()
}

/// At most one box manipulating, and it must be the active one.
pub fn assert_single_manipulation(canvas: &CanvasController) {
    let manipulating: Vec<BoxId> = canvas
        .boxes()
        .iter()
        .filter(|b| b.state().is_manipulating())
        .map(|b| b.id())
        .collect();

    assert!(
        manipulating.len() <= 1,
        "more than one box manipulating: {:?}",
        manipulating
    );
    if let Some(id) = manipulating.first() {
        assert_eq!(canvas.active_box(), Some(*id), "manipulating box is not active");
    }
}

/// Only the active box may be anything other than `Inactive`.
pub fn assert_only_active_is_engaged(canvas: &CanvasController) {
    for annotation in canvas.boxes() {
        if Some(annotation.id()) != canvas.active_box() {
            assert_eq!(
                annotation.state(),
                BoxState::Inactive,
                "non-active box {} is {:?}",
                annotation.id(),
                annotation.state()
            );
        }
    }
}

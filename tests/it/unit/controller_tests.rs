//! Unit tests for the controller registry and observers.

use textmark::{
    AnnotationObserver, BoxId, BoxState, CanvasController, CursorKind, Feedback, FeedbackLog,
    Point, PointerEvent, Rect,
};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_new_controller_is_empty() {
    let canvas = CanvasController::default();
    assert!(canvas.is_empty());
    assert_eq!(canvas.active_box(), None);
    assert!(canvas.active_annotation().is_none());
}

#[test]
fn test_boxes_keep_insertion_order() {
    let mut canvas = CanvasController::default();
    let ids: Vec<BoxId> = (0..5)
        .map(|i| canvas.add_annotation(Rect::new(i as f32 * 50.0, 0.0, 40.0, 20.0), format!("{i}")))
        .collect();

    let order: Vec<BoxId> = canvas.boxes().iter().map(|b| b.id()).collect();
    assert_eq!(order, ids);
}

#[test]
fn test_ids_are_not_reused_after_removal() {
    let mut canvas = CanvasController::default();
    let a = canvas.add_annotation(Rect::new(0.0, 0.0, 40.0, 20.0), "a");
    canvas.remove_annotation(a);
    let b = canvas.add_annotation(Rect::new(0.0, 0.0, 40.0, 20.0), "b");
    assert_ne!(a, b);
    assert!(canvas.get(a).is_none());
}

#[test]
fn test_operations_on_removed_box_are_noops() {
    let mut canvas = CanvasController::default();
    let a = canvas.add_annotation(Rect::new(0.0, 0.0, 40.0, 20.0), "a");
    canvas.remove_annotation(a);

    assert!(!canvas.activate(a));
    assert!(!canvas.set_text(a, "x"));
    assert!(!canvas.set_frame(a, Rect::new(0.0, 0.0, 10.0, 10.0)));
    assert!(!canvas.move_annotation(a, Point::new(5.0, 5.0)));
    assert!(canvas.remove_annotation(a).is_none());
}

#[test]
fn test_multiple_observers_all_notified() {
    #[derive(Clone, Default)]
    struct CursorCounter(Rc<RefCell<usize>>);

    impl AnnotationObserver for CursorCounter {
        fn set_cursor(&mut self, _cursor: CursorKind) {
            *self.0.borrow_mut() += 1;
        }
    }

    let counter = CursorCounter::default();
    let log = FeedbackLog::new();
    let mut canvas = CanvasController::default();
    canvas.add_observer(counter.clone());
    canvas.add_observer(log.clone());

    canvas.handle(PointerEvent::Up(Point::new(0.0, 0.0)));
    canvas.handle(PointerEvent::Move(Point::new(0.0, 0.0)));

    assert_eq!(*counter.0.borrow(), 2);
    assert_eq!(
        log.drain(),
        vec![
            Feedback::Cursor(CursorKind::Default),
            Feedback::Cursor(CursorKind::Default),
        ]
    );
}

#[test]
fn test_activate_then_programmatic_move() {
    let log = FeedbackLog::new();
    let mut canvas = CanvasController::default();
    canvas.add_observer(log.clone());
    let a = canvas.add_annotation(Rect::new(0.0, 0.0, 40.0, 20.0), "a");

    assert!(canvas.activate(a));
    assert!(canvas.move_annotation(a, Point::new(30.0, 40.0)));

    assert_eq!(canvas.active_annotation().map(|b| b.origin()), Some(Point::new(30.0, 40.0)));
    assert_eq!(canvas.get(a).unwrap().state(), BoxState::Active);
    assert_eq!(canvas.box_at(Point::new(35.0, 45.0)), Some(a));
    assert_eq!(log.drain(), vec![Feedback::Activated(a), Feedback::Moved(a)]);
}

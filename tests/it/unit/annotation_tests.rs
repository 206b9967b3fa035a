//! Unit tests for the annotation module.

use textmark::{AnnotationBox, BoxId, BoxLimits, BoxState, HandleConfig, Point, Rect, Region};

fn annotation(frame: Rect) -> AnnotationBox {
    AnnotationBox::new(BoxId(0), frame, "note", 16.0, BoxLimits::default())
}

#[test]
fn test_new_box_is_inactive() {
    let b = annotation(Rect::new(10.0, 10.0, 100.0, 40.0));
    assert_eq!(b.state(), BoxState::Inactive);
    assert_eq!(b.text(), "note");
    assert!(!b.end_of_canvas_reached());
}

#[test]
fn test_font_size_is_clamped_on_creation() {
    let b = AnnotationBox::new(
        BoxId(0),
        Rect::new(0.0, 0.0, 100.0, 40.0),
        "",
        1_000.0,
        BoxLimits::default(),
    );
    assert_eq!(b.font_size(), b.limits().max_font_size);
}

#[test]
fn test_handles_lie_inside_frame() {
    let b = annotation(Rect::new(10.0, 10.0, 100.0, 40.0));
    for handle in [b.left_handle(), b.right_handle(), b.scale_handle()] {
        let handle = handle.expect("all handles enabled by default");
        assert!(handle.min_x() >= b.frame().min_x());
        assert!(handle.max_x() <= b.frame().max_x());
        assert!(handle.min_y() >= b.frame().min_y());
        assert!(handle.max_y() <= b.frame().max_y());
    }
}

#[test]
fn test_hit_test_outside_is_none() {
    let b = annotation(Rect::new(10.0, 10.0, 100.0, 40.0));
    assert_eq!(b.hit_test(Point::new(0.0, 0.0)), Region::None);
    assert_eq!(b.hit_test(Point::new(110.0, 30.0)), Region::None);
}

#[test]
fn test_minimum_width_fits_both_handles() {
    let limits = BoxLimits {
        handle_size: 30.0,
        min_width: 60.0,
        ..BoxLimits::default()
    };
    let b = AnnotationBox::new(BoxId(0), Rect::new(0.0, 0.0, 0.0, 0.0), "", 16.0, limits);
    let left = b.left_handle().unwrap();
    let right = b.right_handle().unwrap();
    assert!(left.max_x() <= right.min_x());
}

#[test]
fn test_resize_and_scale_require_matching_state() {
    let mut b = annotation(Rect::new(0.0, 0.0, 100.0, 40.0));
    assert!(!b.resize_by_delta(10.0));
    assert!(!b.scale_by_delta(10.0, 10.0));
    assert_eq!(b.frame(), Rect::new(0.0, 0.0, 100.0, 40.0));
}

#[test]
fn test_set_frame_keeps_origin_and_clamps_size() {
    let mut b = annotation(Rect::new(0.0, 0.0, 100.0, 40.0));
    b.set_frame(Rect::new(-50.0, 75.0, -10.0, 2.0));
    assert_eq!(b.origin(), Point::new(-50.0, 75.0));
    assert_eq!(b.size().width, b.min_width());
    assert_eq!(b.size().height, b.min_height());
}

#[test]
fn test_no_handles_when_disabled() {
    let limits = BoxLimits {
        handles: HandleConfig {
            left: false,
            right: false,
            scale: false,
        },
        ..BoxLimits::default()
    };
    let b = AnnotationBox::new(BoxId(0), Rect::new(0.0, 0.0, 100.0, 40.0), "", 16.0, limits);
    assert_eq!(b.hit_test(Point::new(2.0, 20.0)), Region::Body);
    assert_eq!(b.hit_test(Point::new(96.0, 36.0)), Region::Body);
}

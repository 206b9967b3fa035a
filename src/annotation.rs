//! A single text annotation box: frame geometry, handles and hit-testing.
//!
//! Boxes never decide their own manipulation state; the `CanvasController`
//! drives `state` and calls the geometry operations below with pointer deltas.

use crate::geometry::{Point, Rect, Size};
use crate::settings::{HandleConfig, Settings};
use crate::types::{BoxId, BoxState, Region};
use tracing::trace;

/// Size limits and handle layout a box is created with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxLimits {
    pub handle_size: f32,
    pub handles: HandleConfig,
    pub min_width: f32,
    pub min_height: f32,
    pub min_font_size: f32,
    pub max_font_size: f32,
}

impl BoxLimits {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            handle_size: settings.handle_size,
            handles: settings.handles,
            min_width: settings.effective_min_width(),
            min_height: settings.effective_min_height(),
            min_font_size: settings.min_font_size,
            max_font_size: settings.max_font_size,
        }
    }
}

impl Default for BoxLimits {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

#[derive(Debug, Clone)]
pub struct AnnotationBox {
    id: BoxId,
    frame: Rect,
    state: BoxState,
    /// Last pointer location seen during a manipulation
    initial_touch_point: Point,
    text: String,
    font_size: f32,
    end_of_canvas_reached: bool,
    canvas_overlap: f32,
    limits: BoxLimits,
}

impl AnnotationBox {
    /// Create an inactive box. The size is grown to the minimum so handles fit;
    /// the origin is kept as given.
    pub fn new(
        id: BoxId,
        frame: Rect,
        text: impl Into<String>,
        font_size: f32,
        limits: BoxLimits,
    ) -> Self {
        let mut annotation = Self {
            id,
            frame,
            state: BoxState::Inactive,
            initial_touch_point: frame.origin,
            text: text.into(),
            font_size: font_size.clamp(limits.min_font_size, limits.max_font_size),
            end_of_canvas_reached: false,
            canvas_overlap: 0.0,
            limits,
        };
        annotation.frame.size = annotation.clamped_size(frame.size);
        annotation
    }

    pub fn id(&self) -> BoxId {
        self.id
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn origin(&self) -> Point {
        self.frame.origin
    }

    pub fn size(&self) -> Size {
        self.frame.size
    }

    pub fn state(&self) -> BoxState {
        self.state
    }

    pub fn initial_touch_point(&self) -> Point {
        self.initial_touch_point
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn limits(&self) -> &BoxLimits {
        &self.limits
    }

    pub fn min_width(&self) -> f32 {
        self.limits.min_width
    }

    pub fn min_height(&self) -> f32 {
        self.limits.min_height
    }

    /// Replace the frame. Size is clamped to the box minimum, origin is not.
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = Rect {
            origin: frame.origin,
            size: self.clamped_size(frame.size),
        };
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub(crate) fn set_state(&mut self, state: BoxState) {
        self.state = state;
    }

    pub(crate) fn set_initial_touch_point(&mut self, point: Point) {
        self.initial_touch_point = point;
    }

    /// Record `point` as the new touch point and return the delta from the
    /// previous one.
    pub(crate) fn advance_touch_point(&mut self, point: Point) -> Point {
        let delta = point - self.initial_touch_point;
        self.initial_touch_point = point;
        delta
    }

    fn clamped_size(&self, size: Size) -> Size {
        Size::new(
            size.width.max(self.limits.min_width),
            size.height.max(self.limits.min_height),
        )
    }

    // ------------------------------------------------------------------------
    // Handles
    // ------------------------------------------------------------------------

    /// Square on the left edge, vertically centered
    pub fn left_handle(&self) -> Option<Rect> {
        if !self.limits.handles.left {
            return None;
        }
        let hs = self.limits.handle_size;
        Some(Rect::new(
            self.frame.min_x(),
            self.frame.min_y() + (self.frame.size.height - hs) / 2.0,
            hs,
            hs,
        ))
    }

    /// Square on the right edge, vertically centered
    pub fn right_handle(&self) -> Option<Rect> {
        if !self.limits.handles.right {
            return None;
        }
        let hs = self.limits.handle_size;
        Some(Rect::new(
            self.frame.max_x() - hs,
            self.frame.min_y() + (self.frame.size.height - hs) / 2.0,
            hs,
            hs,
        ))
    }

    /// Square in the bottom-right corner
    pub fn scale_handle(&self) -> Option<Rect> {
        if !self.limits.handles.scale {
            return None;
        }
        let hs = self.limits.handle_size;
        Some(Rect::new(
            self.frame.max_x() - hs,
            self.frame.max_y() - hs,
            hs,
            hs,
        ))
    }

    /// Region under `point`. Handles win over the body and are checked
    /// left, right, then scale.
    pub fn hit_test(&self, point: Point) -> Region {
        let on = |handle: Option<Rect>| handle.is_some_and(|rect| rect.contains(point));

        if on(self.left_handle()) {
            Region::LeftHandle
        } else if on(self.right_handle()) {
            Region::RightHandle
        } else if on(self.scale_handle()) {
            Region::ScaleHandle
        } else if self.frame.contains(point) {
            Region::Body
        } else {
            Region::None
        }
    }

    // ------------------------------------------------------------------------
    // Geometry operations
    // ------------------------------------------------------------------------

    /// Move the edge implied by the current resize state by `dx`.
    ///
    /// The left edge moves with the pointer while the right edge stays put;
    /// both directions stop at the minimum width. Returns whether the frame
    /// changed. Outside a resize state this is a no-op.
    pub fn resize_by_delta(&mut self, dx: f32) -> bool {
        let before = self.frame;
        match self.state {
            BoxState::ResizingLeft => {
                let right = self.frame.max_x();
                let width = (self.frame.size.width - dx).max(self.limits.min_width);
                self.frame.origin.x = right - width;
                self.frame.size.width = width;
            }
            BoxState::ResizingRight => {
                self.frame.size.width = (self.frame.size.width + dx).max(self.limits.min_width);
            }
            _ => return false,
        }

        if self.frame.size.width == self.limits.min_width {
            trace!(box_id = %self.id, dx, "Resize clamped at minimum width");
        }
        self.frame != before
    }

    /// Grow or shrink from the scale corner. Width and height change
    /// independently and each stops at its minimum. Font size follows the
    /// height ratio. Outside `Scaling` this is a no-op.
    pub fn scale_by_delta(&mut self, d_width: f32, d_height: f32) -> bool {
        if self.state != BoxState::Scaling {
            return false;
        }
        let before = self.frame;
        let old_height = self.frame.size.height;

        self.frame.size = self.clamped_size(Size::new(
            self.frame.size.width + d_width,
            self.frame.size.height + d_height,
        ));

        if old_height > 0.0 {
            let ratio = self.frame.size.height / old_height;
            self.font_size = (self.font_size * ratio)
                .clamp(self.limits.min_font_size, self.limits.max_font_size);
        }
        self.frame != before
    }

    /// Set the origin directly. No bounds checks.
    pub fn move_to(&mut self, origin: Point) {
        self.frame.origin = origin;
    }

    pub fn translate_by(&mut self, delta: Point) {
        self.move_to(self.frame.origin + delta);
    }

    // ------------------------------------------------------------------------
    // Canvas edge signal
    // ------------------------------------------------------------------------

    /// Note that the box sticks out of the canvas by `overlap`. This is a
    /// signal for the renderer; the position is left untouched.
    pub fn reach_end_of_the_canvas_with_overlap(&mut self, overlap: f32) {
        self.canvas_overlap = overlap.max(0.0);
        self.end_of_canvas_reached = overlap > 0.0;
    }

    pub fn end_of_canvas_reached(&self) -> bool {
        self.end_of_canvas_reached
    }

    pub fn canvas_overlap(&self) -> f32 {
        self.canvas_overlap
    }
}

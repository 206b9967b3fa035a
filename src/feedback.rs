//! Feedback from the controller to the platform layer.
//!
//! Observers are fire-and-forget: every method defaults to a no-op and
//! nothing they do can affect the state machine.

use crate::types::{BoxId, CursorKind};
use parking_lot::Mutex;
use std::sync::Arc;

/// Receives cursor and selection notifications from a `CanvasController`.
pub trait AnnotationObserver {
    fn set_cursor(&mut self, _cursor: CursorKind) {}

    fn annotation_activated(&mut self, _id: BoxId) {}

    /// Size, scale or text changed
    fn annotation_edited(&mut self, _id: BoxId) {}

    fn annotation_moved(&mut self, _id: BoxId) {}

    /// Selection was cleared; platform focus should be released. Fires once
    /// per clear, not again while nothing is selected.
    fn focus_cleared(&mut self) {}
}

/// One notification, as recorded by `FeedbackLog`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Cursor(CursorKind),
    Activated(BoxId),
    Edited(BoxId),
    Moved(BoxId),
    FocusCleared,
}

/// Recording observer for renderers that poll once per frame.
///
/// Clones share the same buffer, so one clone can be handed to the
/// controller and another kept for draining.
#[derive(Debug, Clone, Default)]
pub struct FeedbackLog {
    events: Arc<Mutex<Vec<Feedback>>>,
}

impl FeedbackLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every recorded event, oldest first.
    pub fn drain(&self) -> Vec<Feedback> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn snapshot(&self) -> Vec<Feedback> {
        self.events.lock().clone()
    }

    /// Most recent cursor request, if any was recorded
    pub fn last_cursor(&self) -> Option<CursorKind> {
        self.events.lock().iter().rev().find_map(|event| match event {
            Feedback::Cursor(cursor) => Some(*cursor),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    fn push(&self, event: Feedback) {
        self.events.lock().push(event);
    }
}

impl AnnotationObserver for FeedbackLog {
    fn set_cursor(&mut self, cursor: CursorKind) {
        self.push(Feedback::Cursor(cursor));
    }

    fn annotation_activated(&mut self, id: BoxId) {
        self.push(Feedback::Activated(id));
    }

    fn annotation_edited(&mut self, id: BoxId) {
        self.push(Feedback::Edited(id));
    }

    fn annotation_moved(&mut self, id: BoxId) {
        self.push(Feedback::Moved(id));
    }

    fn focus_cleared(&mut self) {
        self.push(Feedback::FocusCleared);
    }
}

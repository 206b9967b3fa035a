//! Canvas controller - owns the annotation boxes and the single active box.
//!
//! Pointer handling lives in `crate::input`; this module holds the registry,
//! the active-box invariant and the observer plumbing it relies on.
//!
//! ## Invariants
//!
//! - At most one box is active, and only the active box may be in a
//!   manipulating state.
//! - Making a box active forces every other box to `Inactive`; clearing the
//!   active box forces all of them to `Inactive`.
//! - The spatial index always mirrors the current frames.

use crate::annotation::{AnnotationBox, BoxLimits};
use crate::feedback::AnnotationObserver;
use crate::geometry::{Point, Rect};
use crate::profile_scope;
use crate::settings::{HitPolicy, Settings};
use crate::spatial_index::SpatialIndex;
use crate::types::{BoxId, BoxState, CursorKind};
use tracing::debug;

pub struct CanvasController {
    /// Insertion order doubles as z-order for hit-test ties
    pub(crate) boxes: Vec<AnnotationBox>,
    pub(crate) active: Option<BoxId>,
    next_box_id: u64,
    index: SpatialIndex,
    settings: Settings,
    limits: BoxLimits,
    canvas_bounds: Option<Rect>,
    observers: Vec<Box<dyn AnnotationObserver>>,
}

impl Default for CanvasController {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl CanvasController {
    pub fn new(settings: Settings) -> Self {
        let limits = BoxLimits::from_settings(&settings);
        Self {
            boxes: Vec::new(),
            active: None,
            next_box_id: 0,
            index: SpatialIndex::new(),
            settings,
            limits,
            canvas_bounds: None,
            observers: Vec::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn add_observer(&mut self, observer: impl AnnotationObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Canvas rectangle used for the end-of-canvas signal after moves.
    /// `None` disables the check.
    pub fn set_canvas_bounds(&mut self, bounds: Option<Rect>) {
        self.canvas_bounds = bounds;
    }

    pub fn canvas_bounds(&self) -> Option<Rect> {
        self.canvas_bounds
    }

    // ------------------------------------------------------------------------
    // Registry
    // ------------------------------------------------------------------------

    /// Add a new inactive box on top of the existing ones.
    pub fn add_annotation(&mut self, frame: Rect, text: impl Into<String>) -> BoxId {
        let id = BoxId(self.next_box_id);
        self.next_box_id += 1;

        let annotation = AnnotationBox::new(
            id,
            frame,
            text,
            self.settings.default_font_size,
            self.limits,
        );
        self.index.insert(id, annotation.frame());
        debug!(box_id = %id, frame = ?annotation.frame(), "Added annotation");
        self.boxes.push(annotation);
        id
    }

    /// Remove a box. A dangling active reference is cleared with it.
    pub fn remove_annotation(&mut self, id: BoxId) -> Option<AnnotationBox> {
        let position = self.boxes.iter().position(|b| b.id() == id)?;
        let removed = self.boxes.remove(position);
        self.index.remove(id);
        debug!(box_id = %id, "Removed annotation");

        if self.active == Some(id) {
            self.set_active(None);
        }
        Some(removed)
    }

    pub fn get(&self, id: BoxId) -> Option<&AnnotationBox> {
        self.boxes.iter().find(|b| b.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: BoxId) -> Option<&mut AnnotationBox> {
        self.boxes.iter_mut().find(|b| b.id() == id)
    }

    /// Boxes in insertion order
    pub fn boxes(&self) -> &[AnnotationBox] {
        &self.boxes
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    // ------------------------------------------------------------------------
    // Activation
    // ------------------------------------------------------------------------

    pub fn active_box(&self) -> Option<BoxId> {
        self.active
    }

    pub fn active_annotation(&self) -> Option<&AnnotationBox> {
        self.active.and_then(|id| self.get(id))
    }

    /// Make `id` the active box, e.g. after a double click in the platform
    /// layer. Returns false for an unknown id.
    pub fn activate(&mut self, id: BoxId) -> bool {
        let Some(annotation) = self.get_mut(id) else {
            return false;
        };
        annotation.set_state(BoxState::Active);
        self.set_active(Some(id));
        true
    }

    /// Clear the selection: every box becomes inactive.
    pub fn deactivate(&mut self) {
        self.set_active(None);
    }

    /// Single write path for `active`, enforcing the state invariants.
    pub(crate) fn set_active(&mut self, new_active: Option<BoxId>) {
        let previous = self.active;
        self.active = new_active;

        match new_active {
            Some(id) => {
                for annotation in self.boxes.iter_mut().filter(|b| b.id() != id) {
                    annotation.set_state(BoxState::Inactive);
                }
                if previous != new_active {
                    debug!(box_id = %id, previous = ?previous, "Annotation activated");
                    self.notify(|o| o.annotation_activated(id));
                }
            }
            None => {
                for annotation in &mut self.boxes {
                    annotation.set_state(BoxState::Inactive);
                }
                if previous.is_some() {
                    debug!(previous = ?previous, "Selection cleared");
                    self.notify(|o| o.focus_cleared());
                }
            }
        }
    }

    // ------------------------------------------------------------------------
    // Programmatic edits
    // ------------------------------------------------------------------------

    pub fn set_text(&mut self, id: BoxId, text: impl Into<String>) -> bool {
        let Some(annotation) = self.get_mut(id) else {
            return false;
        };
        annotation.set_text(text);
        self.notify(|o| o.annotation_edited(id));
        true
    }

    /// Replace a box frame from outside a gesture. Size is clamped to the
    /// box minimum.
    pub fn set_frame(&mut self, id: BoxId, frame: Rect) -> bool {
        let Some(annotation) = self.get_mut(id) else {
            return false;
        };
        annotation.set_frame(frame);
        self.refresh_index(id);
        self.notify(|o| o.annotation_edited(id));
        true
    }

    pub fn move_annotation(&mut self, id: BoxId, origin: Point) -> bool {
        let Some(annotation) = self.get_mut(id) else {
            return false;
        };
        annotation.move_to(origin);
        self.after_move(id);
        true
    }

    // ------------------------------------------------------------------------
    // Hit testing
    // ------------------------------------------------------------------------

    /// Box whose frame contains `point`, resolved by the configured policy.
    pub fn box_at(&self, point: Point) -> Option<BoxId> {
        profile_scope!("box_at");

        // Ids increase with insertion, so id order is insertion order
        let candidates = self.index.query_point(point).into_iter();
        match self.settings.hit_policy {
            HitPolicy::FirstInserted => candidates.min(),
            HitPolicy::Topmost => candidates.max(),
        }
    }

    // ------------------------------------------------------------------------
    // Internal helpers shared with the input handlers
    // ------------------------------------------------------------------------

    pub(crate) fn refresh_index(&mut self, id: BoxId) {
        if let Some(frame) = self.get(id).map(|b| b.frame()) {
            self.index.update(id, frame);
        }
    }

    /// Index refresh, canvas edge signal and move notification after the
    /// origin of `id` changed.
    pub(crate) fn after_move(&mut self, id: BoxId) {
        self.refresh_index(id);

        if let Some(bounds) = self.canvas_bounds {
            if let Some(annotation) = self.get_mut(id) {
                let overlap = annotation.frame().overlap_outside(&bounds);
                let was_reached = annotation.end_of_canvas_reached();
                annotation.reach_end_of_the_canvas_with_overlap(overlap);
                if overlap > 0.0 && !was_reached {
                    debug!(box_id = %id, overlap, "Annotation reached end of canvas");
                }
            }
        }

        self.notify(|o| o.annotation_moved(id));
    }

    pub(crate) fn emit_cursor(&mut self, cursor: CursorKind) {
        self.notify(|o| o.set_cursor(cursor));
    }

    pub(crate) fn notify(&mut self, f: impl Fn(&mut dyn AnnotationObserver)) {
        for observer in &mut self.observers {
            f(observer.as_mut());
        }
    }
}

//! Pointer drag - the core of the manipulation state machine.
//!
//! Per event, in order:
//! 1. A manipulation already in flight on the active box keeps receiving
//!    deltas. No hit testing happens, so a resize keeps tracking the pointer
//!    after it leaves the frame or crosses the opposite edge.
//! 2. Otherwise, a drag that starts on a handle of the active box arms the
//!    matching resize/scale mode and applies nothing yet.
//! 3. Otherwise the box under the pointer (if any) becomes active and is
//!    moved. The first move event only records the touch point.
//!
//! Mouse move is called very frequently during drags, so this path only
//! touches the active box and logs at trace level.

use crate::controller::CanvasController;
use crate::geometry::Point;
use crate::profile_scope;
use crate::types::{BoxId, BoxState, CursorKind};
use tracing::{debug, trace, warn};

impl CanvasController {
    pub fn on_pointer_drag(&mut self, point: Point) {
        profile_scope!("on_pointer_drag");

        // Continue an in-flight manipulation
        if let Some(active_id) = self.active {
            match self.get(active_id).map(|b| b.state()) {
                Some(state) if state.is_manipulating() => {
                    self.continue_manipulation(active_id, state, point);
                    return;
                }
                Some(_) => {}
                None => {
                    warn!(box_id = %active_id, "Active annotation no longer registered");
                    self.set_active(None);
                }
            }
        }

        let candidate = self.box_at(point);

        // Start resizing or scaling when the drag begins on a handle
        if let (Some(candidate_id), Some(active_id)) = (candidate, self.active) {
            if candidate_id == active_id && self.engage_handle(active_id, point) {
                return;
            }
        }

        if self.active.is_none() || (candidate.is_some() && candidate != self.active) {
            if let Some(previous) = self.active {
                if let Some(annotation) = self.get_mut(previous) {
                    annotation.set_state(BoxState::Inactive);
                }
            }
            self.set_active(candidate);
        }

        let Some(active_id) = self.active else {
            self.emit_cursor(CursorKind::Default);
            return;
        };

        // Here we can only drag
        let Some(annotation) = self.get_mut(active_id) else {
            return;
        };
        if annotation.state() != BoxState::Dragging {
            annotation.set_initial_touch_point(point);
            debug!(box_id = %active_id, ?point, "Drag started");
        }
        annotation.set_state(BoxState::Dragging);
        let delta = annotation.advance_touch_point(point);
        self.apply_move(active_id, delta);
    }

    /// Arm a handle mode if `point` lies on a handle of the active box.
    /// Returns whether a mode was armed.
    fn engage_handle(&mut self, id: BoxId, point: Point) -> bool {
        let Some(annotation) = self.get_mut(id) else {
            return false;
        };
        if annotation.state() != BoxState::Active {
            return false;
        }

        let region = annotation.hit_test(point);
        let Some(state) = region.handle_state() else {
            return false;
        };

        annotation.set_state(state);
        annotation.set_initial_touch_point(point);
        debug!(box_id = %id, ?state, ?point, "Handle engaged");

        self.emit_cursor(region.cursor());
        true
    }

    fn continue_manipulation(&mut self, id: BoxId, state: BoxState, point: Point) {
        let Some(annotation) = self.get_mut(id) else {
            return;
        };
        let delta = annotation.advance_touch_point(point);
        let cursor = CursorKind::for_state(state);

        match state {
            BoxState::ResizingLeft | BoxState::ResizingRight => {
                let changed = annotation.resize_by_delta(delta.x);
                trace!(box_id = %id, dx = delta.x, width = annotation.size().width, "Resize");
                self.emit_cursor(cursor);
                if changed {
                    self.after_edit(id);
                }
            }
            BoxState::Scaling => {
                let changed = annotation.scale_by_delta(delta.x, delta.y);
                trace!(box_id = %id, ?delta, size = ?annotation.size(), "Scale");
                self.emit_cursor(cursor);
                if changed {
                    self.after_edit(id);
                }
            }
            BoxState::Dragging => self.apply_move(id, delta),
            BoxState::Inactive | BoxState::Active => {}
        }
    }

    fn apply_move(&mut self, id: BoxId, delta: Point) {
        if delta == Point::ZERO {
            return;
        }
        let Some(annotation) = self.get_mut(id) else {
            return;
        };
        annotation.translate_by(delta);
        trace!(box_id = %id, ?delta, origin = ?annotation.origin(), "Move");
        self.after_move(id);
    }

    fn after_edit(&mut self, id: BoxId) {
        self.refresh_index(id);
        self.notify(|o| o.annotation_edited(id));
    }
}

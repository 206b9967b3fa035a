//! Pointer down - selection and re-arming the active box.
//!
//! Handle hit testing happens on the first drag event; a plain click never
//! changes geometry.

use crate::controller::CanvasController;
use crate::geometry::Point;
use crate::profile_scope;
use crate::types::BoxState;
use tracing::trace;

impl CanvasController {
    pub fn on_pointer_down(&mut self, point: Point) {
        profile_scope!("on_pointer_down");

        let Some(candidate) = self.box_at(point) else {
            // Clicked on empty canvas
            self.set_active(None);
            return;
        };

        // The pressed box activates itself before the gesture is re-armed
        if self.active != Some(candidate) {
            self.set_active(Some(candidate));
        }

        let Some(active_id) = self.active else {
            return;
        };
        if let Some(annotation) = self.get_mut(active_id) {
            annotation.set_initial_touch_point(point);
            annotation.set_state(BoxState::Active);
            trace!(box_id = %active_id, ?point, "Re-armed active annotation");
        }
    }
}

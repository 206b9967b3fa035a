//! Pointer up - end the gesture and keep the selection.

use crate::controller::CanvasController;
use crate::geometry::Point;
use crate::types::{BoxState, CursorKind};
use tracing::debug;

impl CanvasController {
    pub fn on_pointer_up(&mut self, _point: Point) {
        self.emit_cursor(CursorKind::Default);

        let Some(active_id) = self.active else {
            return;
        };
        match self.get_mut(active_id) {
            Some(annotation) => {
                let finished = annotation.state();
                annotation.set_state(BoxState::Active);
                if finished.is_manipulating() {
                    debug!(
                        box_id = %active_id,
                        ?finished,
                        frame = ?annotation.frame(),
                        "Manipulation finished"
                    );
                }
            }
            None => self.set_active(None),
        }
    }
}

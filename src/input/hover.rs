//! Pointer move with no button held - cursor feedback over handles.

use crate::controller::CanvasController;
use crate::geometry::Point;
use crate::types::Region;

impl CanvasController {
    /// Show the resize/scale cursor while hovering a handle of the active
    /// box. Never changes state or geometry.
    pub fn on_pointer_move(&mut self, point: Point) {
        let region = self
            .active_annotation()
            .filter(|annotation| !annotation.state().is_manipulating())
            .map_or(Region::None, |annotation| annotation.hit_test(point));

        self.emit_cursor(region.cursor());
    }
}

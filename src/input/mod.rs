//! Pointer input handling for the annotation canvas.
//!
//! Raw pointer events are turned into manipulation modes on the active box.
//! Each event runs to completion before the next one is accepted; there is
//! no queue and nothing is deferred.
//!
//! ## Modules
//!
//! - `mouse_down` - selection and re-arming the active box
//! - `drag` - continuation of in-flight manipulations, handle engagement, moves
//! - `mouse_up` - ends the manipulation, keeps the selection
//! - `hover` - cursor feedback while no button is held

mod drag;
mod hover;
mod mouse_down;
mod mouse_up;

use crate::controller::CanvasController;
use crate::geometry::Point;
use tracing::warn;

/// A pointer event, already converted into canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Drag(Point),
    Up(Point),
    /// Pointer moved with no button held
    Move(Point),
}

impl PointerEvent {
    pub fn point(&self) -> Point {
        match *self {
            Self::Down(p) | Self::Drag(p) | Self::Up(p) | Self::Move(p) => p,
        }
    }
}

impl CanvasController {
    /// Feed one pointer event through the state machine. Events with a
    /// non-finite coordinate are dropped.
    pub fn handle(&mut self, event: PointerEvent) {
        if !event.point().is_finite() {
            warn!(?event, "Dropping pointer event with non-finite coordinates");
            return;
        }

        match event {
            PointerEvent::Down(p) => self.on_pointer_down(p),
            PointerEvent::Drag(p) => self.on_pointer_drag(p),
            PointerEvent::Up(p) => self.on_pointer_up(p),
            PointerEvent::Move(p) => self.on_pointer_move(p),
        }
    }
}

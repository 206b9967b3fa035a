//! Core types shared by annotation boxes and the canvas controller.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable handle for a box owned by a `CanvasController`.
///
/// Ids are never reused within one controller, so a stale id simply stops
/// resolving once its box is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BoxId(pub u64);

impl fmt::Display for BoxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Manipulation state of a single annotation box.
///
/// ```text
/// Inactive -> Active                      (box becomes the active box)
/// Active   -> Dragging                    (drag on body)
/// Active   -> ResizingLeft/ResizingRight  (drag starts on a side handle)
/// Active   -> Scaling                     (drag starts on the scale handle)
/// Dragging/Resizing*/Scaling -> Active    (pointer up)
/// Any      -> Inactive                    (another box activated, selection cleared)
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoxState {
    #[default]
    Inactive,
    Active,
    Dragging,
    ResizingLeft,
    ResizingRight,
    Scaling,
}

impl BoxState {
    /// True while a gesture is mutating the box geometry
    pub fn is_manipulating(self) -> bool {
        matches!(
            self,
            Self::Dragging | Self::ResizingLeft | Self::ResizingRight | Self::Scaling
        )
    }
}

/// Sub-region of a box under a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    LeftHandle,
    RightHandle,
    ScaleHandle,
    Body,
    None,
}

impl Region {
    /// Manipulation state a drag starting in this region arms, if any
    pub fn handle_state(self) -> Option<BoxState> {
        match self {
            Self::LeftHandle => Some(BoxState::ResizingLeft),
            Self::RightHandle => Some(BoxState::ResizingRight),
            Self::ScaleHandle => Some(BoxState::Scaling),
            Self::Body | Self::None => None,
        }
    }

    /// Cursor shown while the pointer is over this region
    pub fn cursor(self) -> CursorKind {
        match self {
            Self::LeftHandle | Self::RightHandle => CursorKind::Resize,
            Self::ScaleHandle => CursorKind::Scale,
            Self::Body | Self::None => CursorKind::Default,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CursorKind {
    #[default]
    Default,
    Resize,
    Scale,
}

impl CursorKind {
    /// Cursor matching an in-flight manipulation
    pub fn for_state(state: BoxState) -> Self {
        match state {
            BoxState::ResizingLeft | BoxState::ResizingRight => Self::Resize,
            BoxState::Scaling => Self::Scale,
            _ => Self::Default,
        }
    }
}

//! Draggable, resizable text annotation boxes for image markup.
//!
//! The crate owns the interaction logic only: which box is active, which
//! manipulation is in flight, and how pointer deltas map to frame changes.
//! Rendering, text input and persistence belong to the platform layer, which
//! feeds pointer events in and listens through `AnnotationObserver`.
//!
//! ```ignore
//! use textmark::{CanvasController, FeedbackLog, PointerEvent, Point, Rect};
//!
//! let log = FeedbackLog::new();
//! let mut canvas = CanvasController::default();
//! canvas.add_observer(log.clone());
//!
//! let id = canvas.add_annotation(Rect::new(100.0, 150.0, 0.0, 0.0), "S");
//! canvas.handle(PointerEvent::Down(Point::new(110.0, 152.0)));
//! canvas.handle(PointerEvent::Drag(Point::new(110.0, 152.0)));
//! canvas.handle(PointerEvent::Drag(Point::new(130.0, 157.0)));
//! canvas.handle(PointerEvent::Up(Point::new(130.0, 157.0)));
//! ```

pub mod annotation;
pub mod constants;
pub mod controller;
pub mod error;
pub mod feedback;
pub mod geometry;
pub mod input;
pub mod perf;
pub mod settings;
pub mod spatial_index;
pub mod types;

pub use annotation::{AnnotationBox, BoxLimits};
pub use controller::CanvasController;
pub use error::{SettingsError, SettingsResult};
pub use feedback::{AnnotationObserver, Feedback, FeedbackLog};
pub use geometry::{Point, Rect, Size};
pub use input::PointerEvent;
pub use settings::{HandleConfig, HitPolicy, Settings, default_settings_path};
pub use types::{BoxId, BoxState, CursorKind, Region};

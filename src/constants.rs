//! Default values for annotation geometry and text.
//!
//! These seed `Settings::default()`; the controller always reads the
//! effective values from its settings.

// ============================================================================
// Handles
// ============================================================================

/// Side length of the square left/right/scale handles in canvas units
pub const DEFAULT_HANDLE_SIZE: f32 = 8.0;

// ============================================================================
// Box Sizing
// ============================================================================

/// Minimum box width, before accounting for handle widths
pub const DEFAULT_MIN_WIDTH: f32 = 20.0;

/// Minimum box height, before accounting for handle height
pub const DEFAULT_MIN_HEIGHT: f32 = 16.0;

// ============================================================================
// Text
// ============================================================================

/// Font size assigned to newly added annotations
pub const DEFAULT_FONT_SIZE: f32 = 16.0;

/// Lower bound for font size while scaling
pub const MIN_FONT_SIZE: f32 = 8.0;

/// Upper bound for font size while scaling
pub const MAX_FONT_SIZE: f32 = 200.0;

// ============================================================================
// Profiling
// ============================================================================

/// Scopes slower than this are logged when the `profiling` feature is on
pub const SLOW_SCOPE_MS: f64 = 1.0;

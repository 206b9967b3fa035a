//! Scope timing for pointer handling hot paths.
//!
//! Enable with the `profiling` feature:
//! ```toml
//! [dependencies]
//! textmark = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! fn on_pointer_drag(&mut self, point: Point) {
//!     profile_scope!("on_pointer_drag");
//!     // ...
//! }
//! ```
//!
//! Without the feature the macro expands to nothing that runs.

use crate::constants::SLOW_SCOPE_MS;
use std::time::Instant;
use tracing::{trace, warn};

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::with_threshold($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use crate::profile_scope;

/// RAII timer: logs elapsed time when dropped.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str) -> Self {
        Self::with_threshold(name, SLOW_SCOPE_MS)
    }

    pub fn with_threshold(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let ms = self.elapsed_ms();
        if ms > self.threshold_ms {
            warn!(
                scope = self.name,
                elapsed_ms = format!("{:.3}", ms),
                threshold_ms = self.threshold_ms,
                "Slow scope"
            );
        } else {
            trace!(scope = self.name, elapsed_ms = format!("{:.3}", ms), "Scope timing");
        }
    }
}

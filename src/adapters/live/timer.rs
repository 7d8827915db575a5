//! Live high-resolution timer backed by `std::time::Instant`.

use std::time::Instant;

use crate::ports::timer::HighResTimer;

/// Monotonic timer whose origin is the moment it was created.
pub struct LiveTimer {
    origin: Instant,
}

impl LiveTimer {
    /// Starts a timer at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for LiveTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl HighResTimer for LiveTimer {
    fn elapsed_millis(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

//! High-resolution timer port.

/// Monotonic timer reporting fractional milliseconds since its origin.
///
/// Not every environment has one, so callers hold it as
/// `Option<&dyn HighResTimer>` rather than probing for it.
pub trait HighResTimer: Send + Sync {
    /// Milliseconds elapsed since the timer's origin.
    fn elapsed_millis(&self) -> f64;
}

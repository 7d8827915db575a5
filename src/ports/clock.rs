//! Wall-clock port.

use chrono::{DateTime, Utc};

/// Provides the current wall-clock time.
///
/// The generator seeds its accumulator from `now().timestamp_millis()`.
/// Tests and cassette playback substitute a fixed or recorded clock.
pub trait Clock: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;
}

//! Live wall clock.

use chrono::{DateTime, Utc};

use crate::ports::clock::Clock;

/// Reads the system wall clock. Not monotonic: the seed only needs the
/// current millisecond, not ordering between calls.
pub struct LiveClock;

impl Clock for LiveClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

//! Replaying adapter for the `HighResTimer` port.

use std::sync::Mutex;

use super::next_f64;
use crate::cassette::ports::TIMER;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::timer::HighResTimer;

/// Replays recorded timer readings from a cassette.
pub struct ReplayingTimer {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingTimer {
    /// Creates a new replaying timer from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl HighResTimer for ReplayingTimer {
    fn elapsed_millis(&self) -> f64 {
        next_f64(&self.replayer, TIMER, "elapsed_millis")
    }
}

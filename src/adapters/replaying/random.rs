//! Replaying adapter for the `RandomSource` port.

use std::sync::Mutex;

use super::next_f64;
use crate::cassette::ports::RANDOM;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::random::RandomSource;

/// Replays recorded random draws from a cassette.
pub struct ReplayingRandom {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingRandom {
    /// Creates a new replaying random source from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl RandomSource for ReplayingRandom {
    fn next_unit(&self) -> f64 {
        next_f64(&self.replayer, RANDOM, "next_unit")
    }
}

//! Replaying adapters that serve recorded entropy back in order.

pub mod clock;
pub mod random;
pub mod timer;

pub use clock::ReplayingClock;
pub use random::ReplayingRandom;
pub use timer::ReplayingTimer;

use std::sync::Mutex;

use crate::cassette::replayer::CassetteReplayer;

/// Pull the next recorded output for `port::method` as an `f64`.
pub(crate) fn next_f64(replayer: &Mutex<CassetteReplayer>, port: &str, method: &str) -> f64 {
    let output =
        replayer.lock().expect("replayer lock poisoned").next_interaction(port, method).output;
    output
        .as_f64()
        .unwrap_or_else(|| panic!("{port}::{method}: expected numeric output, got {output}"))
}

//! Recording adapter for the `RandomSource` port.

use std::sync::{Arc, Mutex};

use super::record_interaction;
use crate::cassette::ports::RANDOM;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::RandomSource;

/// Records every random draw while delegating to an inner implementation.
pub struct RecordingRandom {
    inner: Box<dyn RandomSource>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingRandom {
    /// Creates a new recording random source wrapping the given implementation.
    pub fn new(inner: Box<dyn RandomSource>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl RandomSource for RecordingRandom {
    fn next_unit(&self) -> f64 {
        let result = self.inner.next_unit();
        record_interaction(&self.recorder, RANDOM, "next_unit", &(), &result);
        result
    }
}

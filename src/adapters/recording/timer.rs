//! Recording adapter for the `HighResTimer` port.

use std::sync::{Arc, Mutex};

use super::record_interaction;
use crate::cassette::ports::TIMER;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::HighResTimer;

/// Records timer readings while delegating to an inner implementation.
pub struct RecordingTimer {
    inner: Box<dyn HighResTimer>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingTimer {
    /// Creates a new recording timer wrapping the given implementation.
    pub fn new(inner: Box<dyn HighResTimer>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl HighResTimer for RecordingTimer {
    fn elapsed_millis(&self) -> f64 {
        let result = self.inner.elapsed_millis();
        record_interaction(&self.recorder, TIMER, "elapsed_millis", &(), &result);
        result
    }
}

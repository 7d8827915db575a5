//! Recording adapters that capture entropy reads to cassettes.

pub mod clock;
pub mod random;
pub mod timer;

pub use clock::RecordingClock;
pub use random::RecordingRandom;
pub use timer::RecordingTimer;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;

/// Record an interaction with a simple (non-Result) return value.
///
/// Mirror of the replaying adapters: records input/output instead of reading.
pub(crate) fn record_interaction<I, O>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    output: &O,
) where
    I: Serialize,
    O: Serialize,
{
    let input_json = serde_json::to_value(input).expect("failed to serialize recording input");
    let output_json = serde_json::to_value(output).expect("failed to serialize recording output");

    let mut guard = recorder.lock().expect("recorder lock poisoned");
    guard.record(port, method, input_json, output_json);
}

#[cfg(test)]
pub(crate) mod tests {
    use std::path::Path;
    use std::sync::{Arc, Mutex};

    use crate::cassette::format::Cassette;
    use crate::cassette::recorder::CassetteRecorder;

    /// Unwraps a shared recorder once every adapter holding it is dropped,
    /// writes it, and reads the cassette back.
    pub(crate) fn finish_and_load(recorder: Arc<Mutex<CassetteRecorder>>, path: &Path) -> Cassette {
        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        serde_yaml::from_str(&content).unwrap()
    }
}

//! Replays recorded interactions from a cassette.

use std::collections::{HashMap, VecDeque};

use super::format::{Cassette, Interaction};

/// Per `port::method` stream of recorded interactions.
#[derive(Default)]
struct Stream {
    pending: VecDeque<Interaction>,
    served: usize,
    last_seq: Option<u64>,
}

/// Serves a cassette's interactions back one stream at a time.
///
/// Interactions are grouped by `port::method`; each group is served in
/// recording order regardless of how groups interleaved on disk.
pub struct CassetteReplayer {
    streams: HashMap<(String, String), Stream>,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut streams: HashMap<(String, String), Stream> = HashMap::new();
        for interaction in &cassette.interactions {
            streams
                .entry((interaction.port.clone(), interaction.method.clone()))
                .or_default()
                .pending
                .push_back(interaction.clone());
        }
        Self { streams }
    }

    /// Take the next interaction recorded for `port::method`.
    ///
    /// # Panics
    ///
    /// Panics if the cassette has no (more) interactions for the pair. Asking
    /// for more entropy than was recorded means the replay has diverged from
    /// its recording; the CLI checks capacity up front so only library
    /// callers can get here.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Interaction {
        let Some(stream) = self.streams.get_mut(&(port.to_string(), method.to_string())) else {
            let mut available: Vec<String> =
                self.streams.keys().map(|(p, m)| format!("{p}::{m}")).collect();
            available.sort();
            panic!(
                "Cassette exhausted: no interactions recorded for port={port:?} method={method:?}. \
                 Available port::method pairs: [{}]",
                available.join(", ")
            );
        };

        let Some(interaction) = stream.pending.pop_front() else {
            panic!(
                "Cassette exhausted: all {served} interactions for port={port:?} \
                 method={method:?} have been consumed. Last interaction was seq={last}.",
                served = stream.served,
                last = stream.last_seq.unwrap_or_default(),
            );
        };
        stream.served += 1;
        stream.last_seq = Some(interaction.seq);
        interaction
    }
}

//! Service context bundling the entropy port trait objects.

use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::adapters::live::{LiveClock, LiveRandom, LiveTimer, SecureIdGenerator};
use crate::adapters::recording::{RecordingClock, RecordingRandom, RecordingTimer};
use crate::adapters::replaying::{ReplayingClock, ReplayingRandom, ReplayingTimer};
use crate::cassette::format::Cassette;
use crate::cassette::ports::TIMER;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::replayer::CassetteReplayer;
use crate::generator::{EntropyIdGenerator, Strategy};
use crate::ports::{Clock, HighResTimer, IdGenerator, RandomSource};

/// Bundles the entropy ports into a single context.
///
/// Constructors wire up different adapter implementations (live,
/// recording, replaying). The timer is optional: a context without one
/// generates from the wall clock alone.
pub struct ServiceContext {
    /// Wall clock seeding the accumulator.
    pub clock: Box<dyn Clock>,
    /// Optional high-resolution timer added to the seed.
    pub timer: Option<Box<dyn HighResTimer>>,
    /// Per-digit random source.
    pub random: Box<dyn RandomSource>,
}

impl ServiceContext {
    /// Creates a live context backed by the system clock and thread RNG.
    #[must_use]
    pub fn live(with_timer: bool) -> Self {
        tracing::debug!(with_timer, "using live entropy sources");
        Self {
            clock: Box::new(LiveClock),
            timer: with_timer.then(|| Box::new(LiveTimer::new()) as Box<dyn HighResTimer>),
            random: Box::new(LiveRandom),
        }
    }

    /// Creates a recording context that captures every entropy read.
    ///
    /// Uses live adapters for the actual values. The returned recorder is
    /// shared with the adapters; drop the context before unwrapping it and
    /// calling [`CassetteRecorder::finish`].
    #[must_use]
    pub fn recording(path: &Path, with_timer: bool) -> (Self, Arc<Mutex<CassetteRecorder>>) {
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map_or_else(|| "seedid-session".to_string(), str::to_string);
        let recorder =
            Arc::new(Mutex::new(CassetteRecorder::new(path, name, env!("CARGO_PKG_VERSION"))));
        tracing::debug!(path = %path.display(), with_timer, "recording entropy sources");

        let ctx = Self {
            clock: Box::new(RecordingClock::new(Box::new(LiveClock), Arc::clone(&recorder))),
            timer: with_timer.then(|| {
                Box::new(RecordingTimer::new(Box::new(LiveTimer::new()), Arc::clone(&recorder)))
                    as Box<dyn HighResTimer>
            }),
            random: Box::new(RecordingRandom::new(Box::new(LiveRandom), Arc::clone(&recorder))),
        };
        (ctx, recorder)
    }

    /// Creates a replaying context from a cassette file.
    ///
    /// Each port gets its own replayer so that per-port cursors are
    /// independent. The timer is present only if the cassette recorded one.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        Ok(Self::from_cassette(&Cassette::load(path)?))
    }

    /// Creates a replaying context from an already-loaded cassette.
    #[must_use]
    pub fn from_cassette(cassette: &Cassette) -> Self {
        let with_timer = cassette.has_port(TIMER);
        tracing::debug!(
            cassette = %cassette.name,
            interactions = cassette.interactions.len(),
            with_timer,
            "replaying entropy sources"
        );
        Self {
            clock: Box::new(ReplayingClock::new(CassetteReplayer::new(cassette))),
            timer: with_timer.then(|| {
                Box::new(ReplayingTimer::new(CassetteReplayer::new(cassette)))
                    as Box<dyn HighResTimer>
            }),
            random: Box::new(ReplayingRandom::new(CassetteReplayer::new(cassette))),
        }
    }

    /// Returns a generator for `strategy` borrowing this context's ports.
    #[must_use]
    pub fn id_generator(&self, strategy: Strategy) -> Box<dyn IdGenerator + '_> {
        match strategy {
            Strategy::EntropyMix => Box::new(EntropyIdGenerator::new(
                self.random.as_ref(),
                self.clock.as_ref(),
                self.timer.as_deref(),
            )),
            Strategy::Secure => Box::new(SecureIdGenerator::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::Interaction;
    use crate::identifier::matches_v4_shape;
    use chrono::Utc;
    use serde_json::json;

    fn interaction(seq: u64, port: &str, method: &str, output: serde_json::Value) -> Interaction {
        Interaction { seq, port: port.into(), method: method.into(), input: json!(null), output }
    }

    fn anchored_cassette(timer: Option<f64>) -> Cassette {
        let mut interactions = vec![interaction(0, "clock", "now", json!("2024-06-15T10:30:00Z"))];
        if let Some(ms) = timer {
            interactions.push(interaction(1, "timer", "elapsed_millis", json!(ms)));
        }
        for seq in 2..33 {
            interactions.push(interaction(seq, "random", "next_unit", json!(0.5)));
        }
        Cassette {
            name: "anchor".into(),
            recorded_at: Utc::now(),
            version: "0.1.0".into(),
            interactions,
        }
    }

    #[test]
    fn replayed_context_without_timer_matches_anchor() {
        let ctx = ServiceContext::from_cassette(&anchored_cassette(None));
        assert!(ctx.timer.is_none());
        let id = ctx.id_generator(Strategy::EntropyMix).generate_id();
        assert_eq!(id.as_str(), "8cceaf39-8198-4888-8888-888888888888");
    }

    #[test]
    fn replayed_context_with_timer_matches_anchor() {
        let ctx = ServiceContext::from_cassette(&anchored_cassette(Some(1234.5)));
        assert!(ctx.timer.is_some());
        let id = ctx.id_generator(Strategy::EntropyMix).generate_id();
        assert_eq!(id.as_str(), "a91eaf39-8198-4888-8888-888888888888");
    }

    #[test]
    fn live_context_honours_timer_flag() {
        assert!(ServiceContext::live(true).timer.is_some());
        assert!(ServiceContext::live(false).timer.is_none());
    }

    #[test]
    fn live_strategies_produce_conforming_ids() {
        for with_timer in [true, false] {
            let ctx = ServiceContext::live(with_timer);
            for strategy in [Strategy::EntropyMix, Strategy::Secure] {
                let id = ctx.id_generator(strategy).generate_id();
                assert!(matches_v4_shape(id.as_str()), "{strategy}: {id}");
            }
        }
    }

    #[test]
    fn record_then_replay_reproduces_identifiers() {
        let dir = std::env::temp_dir().join("seedid_ctx_record_replay");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("session.cassette.yaml");

        let (ctx, recorder) = ServiceContext::recording(&path, true);
        let recorded: Vec<_> = {
            let gen = ctx.id_generator(Strategy::EntropyMix);
            (0..3).map(|_| gen.generate_id()).collect()
        };
        drop(ctx);
        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        assert_eq!(recorder.len(), 3 * 33);
        recorder.finish().unwrap();

        let replay = ServiceContext::replaying(&path).unwrap();
        let gen = replay.id_generator(Strategy::EntropyMix);
        let replayed: Vec<_> = (0..3).map(|_| gen.generate_id()).collect();
        assert_eq!(recorded, replayed);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn replaying_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("seedid_ctx_missing").join("nope.cassette.yaml");
        let err = ServiceContext::replaying(&path).err().unwrap();
        assert!(err.contains("Failed to read cassette file"));
    }

    #[test]
    fn replaying_garbage_is_an_error() {
        let dir = std::env::temp_dir().join("seedid_ctx_garbage");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.cassette.yaml");
        std::fs::write(&path, "interactions: [1, 2").unwrap();

        let err = ServiceContext::replaying(&path).err().unwrap();
        assert!(err.contains("Failed to parse cassette file"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}

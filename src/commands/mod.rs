//! Command dispatch and handlers.

pub mod generate;

use std::path::Path;
use std::sync::Arc;

use crate::cassette::format::Cassette;
use crate::cli::Command;
use crate::config::{EntropySource, Settings};
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// With `--record` (or `SEEDID_RECORD`), every entropy read is captured to a
/// cassette that is written after the command completes, even on error.
///
/// # Errors
///
/// Returns an error string if settings are invalid, a cassette cannot be
/// read or written, or the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    match command {
        Command::Generate(args) => {
            let settings = Settings::try_from(args)?;
            run_generate(&settings)
        }
    }
}

fn run_generate(settings: &Settings) -> Result<(), String> {
    match &settings.source {
        EntropySource::Live => {
            let ctx = ServiceContext::live(settings.with_timer);
            generate::run(&ctx, settings)
        }
        EntropySource::Replay(path) => {
            let cassette = Cassette::load(path)?;
            check_replay_capacity(&cassette, path, settings.count)?;
            let ctx = ServiceContext::from_cassette(&cassette);
            generate::run(&ctx, settings)
        }
        EntropySource::Record(path) => {
            let (ctx, recorder) = ServiceContext::recording(path, settings.with_timer);
            let result = generate::run(&ctx, settings);

            // Drop context first to release Arc references
            drop(ctx);
            let recorder = Arc::try_unwrap(recorder)
                .map_err(|_| "Recorder still in use after generation".to_string())?
                .into_inner()
                .map_err(|e| format!("Recorder lock poisoned: {e}"))?;
            let written = recorder
                .finish()
                .map_err(|e| format!("Failed to write cassette {}: {e}", path.display()))?;
            eprintln!("Recording saved to: {}", written.display());

            result
        }
    }
}

/// Rejects a replay that would run past the end of the cassette and warns
/// when it would leave recorded identifiers unreplayed.
fn check_replay_capacity(cassette: &Cassette, path: &Path, count: usize) -> Result<(), String> {
    let capacity = cassette.identifier_capacity();
    if capacity < count {
        return Err(format!(
            "Cassette {} holds {capacity} identifiers, {count} requested",
            path.display()
        ));
    }
    if capacity > count {
        tracing::warn!(path = %path.display(), capacity, count, "partial replay");
        eprintln!(
            "Warning: cassette {} holds {capacity} identifiers, only {count} replayed",
            path.display()
        );
    }
    Ok(())
}

//! Run configuration resolved from CLI arguments and the environment.
//!
//! Environment variables (optionally from a `.env` file):
//!
//! - `SEEDID_STRATEGY`: default for `--strategy`.
//! - `SEEDID_RECORD`: default for `--record`.
//! - `SEEDID_LOG`: tracing filter directives (default `off`).

use std::path::PathBuf;

use crate::cli::{GenerateArgs, OutputFormat};
use crate::generator::Strategy;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "SEEDID_LOG";

/// Loads a `.env` file from the working directory or its parents, if any.
///
/// Variables already set in the process environment win. Runs before the
/// tracing subscriber exists (it may set `SEEDID_LOG`), so the outcome is
/// returned for the caller to log: `Ok(None)` when there is no `.env`.
///
/// # Errors
///
/// Returns the `dotenvy` error if a `.env` file exists but cannot be read
/// or parsed.
pub fn load_dotenv() -> Result<Option<PathBuf>, dotenvy::Error> {
    found_dotenv(dotenvy::dotenv())
}

fn found_dotenv(
    result: Result<PathBuf, dotenvy::Error>,
) -> Result<Option<PathBuf>, dotenvy::Error> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Where the entropy ports read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntropySource {
    /// Real clock, timer and RNG.
    Live,
    /// Live sources, captured to a cassette at this path.
    Record(PathBuf),
    /// Sources replayed from the cassette at this path.
    Replay(PathBuf),
}

/// Validated settings for one `generate` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Number of identifiers to produce.
    pub count: usize,
    /// Digit source.
    pub strategy: Strategy,
    /// Whether the high-resolution timer contributes to the seed.
    pub with_timer: bool,
    /// Output format.
    pub format: OutputFormat,
    /// Live, recording or replaying ports.
    pub source: EntropySource,
}

impl TryFrom<&GenerateArgs> for Settings {
    type Error = String;

    fn try_from(args: &GenerateArgs) -> Result<Self, Self::Error> {
        let source = match (&args.record, &args.replay) {
            (Some(_), Some(_)) => {
                return Err("--record and --replay cannot be used together".to_string())
            }
            (Some(path), None) => EntropySource::Record(path.clone()),
            (None, Some(path)) => EntropySource::Replay(path.clone()),
            (None, None) => EntropySource::Live,
        };

        if args.no_timer && matches!(source, EntropySource::Replay(_)) {
            return Err(
                "--no-timer cannot be combined with --replay: the cassette decides whether \
                 timer readings are replayed"
                    .to_string(),
            );
        }

        if args.strategy == Strategy::Secure && source != EntropySource::Live {
            return Err(format!(
                "--strategy {} draws from the OS and cannot be recorded or replayed",
                args.strategy
            ));
        }

        if args.count == 0 {
            return Err("count must be at least 1".to_string());
        }

        Ok(Self {
            count: args.count as usize,
            strategy: args.strategy,
            with_timer: !args.no_timer,
            format: args.format,
            source,
        })
    }
}

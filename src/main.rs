//! Binary entrypoint for the `seedid` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // `.env` may carry SEEDID_LOG, so it is read before the subscriber exists
    // and its outcome logged afterwards.
    let dotenv = seedid::config::load_dotenv();
    seedid::logging::init();
    match dotenv {
        Ok(Some(path)) => tracing::debug!(path = %path.display(), "loaded .env"),
        Ok(None) => {}
        Err(e) => {
            tracing::warn!(error = %e, "failed to load .env");
            eprintln!("Warning: failed to load .env: {e}");
        }
    }

    match seedid::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

//! Tracing setup.
//!
//! Logs go to stderr so stdout carries only identifiers. The filter comes
//! from `SEEDID_LOG` (e.g. `seedid=debug`) and defaults to `off`.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LOG_ENV;

static INIT: Once = Once::new();

/// Installs the global subscriber. Later calls are no-ops.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));

        let installed = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true).compact())
            .try_init();
        if let Err(e) = installed {
            eprintln!("Warning: failed to install tracing subscriber: {e}");
        }
    });
}

//! Core library for `seedid`, a timestamp-seeded v4-style identifier
//! generator.
//!
//! The generator itself is [`generator::generate`]; everything it reads from
//! the outside world goes through the traits in [`ports`], so the same code
//! runs against live sources, recorded cassettes, or fixed test doubles.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod generator;
pub mod identifier;
pub mod logging;
pub mod ports;

pub use generator::{generate, Strategy};
pub use identifier::Identifier;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}

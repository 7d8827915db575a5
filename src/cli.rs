//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::generator::Strategy;

/// Top-level CLI parser for `seedid`.
#[derive(Debug, Parser)]
#[command(name = "seedid", version, about = "Generate v4-style identifiers")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print one or more identifiers.
    Generate(GenerateArgs),
}

/// Arguments for `seedid generate`.
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// How many identifiers to print.
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,

    /// Digit source: `entropy-mix` (clock + timer + RNG) or `secure` (OS CSPRNG).
    #[arg(long, env = "SEEDID_STRATEGY", default_value_t = Strategy::EntropyMix)]
    pub strategy: Strategy,

    /// Seed from the wall clock only, without the high-resolution timer.
    ///
    /// Not accepted with `--replay`: a replay uses the timer exactly when the
    /// cassette recorded one.
    #[arg(long)]
    pub no_timer: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Record every entropy read to this cassette file.
    #[arg(long, env = "SEEDID_RECORD", value_name = "PATH", conflicts_with = "replay")]
    pub record: Option<PathBuf>,

    /// Replay entropy reads from this cassette file.
    #[arg(long, value_name = "PATH")]
    pub replay: Option<PathBuf>,
}

/// How generated identifiers are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One identifier per line.
    Text,
    /// A JSON array of strings.
    Json,
}

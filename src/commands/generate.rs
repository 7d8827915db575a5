//! `seedid generate` command.

use crate::cli::OutputFormat;
use crate::config::Settings;
use crate::context::ServiceContext;
use crate::identifier::Identifier;

/// Execute the `generate` command against `ctx`, printing to stdout.
///
/// # Errors
///
/// Returns an error string if the identifiers cannot be rendered.
pub fn run(ctx: &ServiceContext, settings: &Settings) -> Result<(), String> {
    let ids = generate_batch(ctx, settings);
    println!("{}", render(&ids, settings.format)?);
    Ok(())
}

/// Generates `settings.count` identifiers with the configured strategy.
#[must_use]
pub fn generate_batch(ctx: &ServiceContext, settings: &Settings) -> Vec<Identifier> {
    let gen = ctx.id_generator(settings.strategy);
    let ids: Vec<Identifier> = (0..settings.count).map(|_| gen.generate_id()).collect();
    tracing::debug!(count = ids.len(), strategy = %settings.strategy, "generated batch");
    ids
}

/// Renders identifiers in the requested output format.
///
/// # Errors
///
/// Returns an error string if JSON serialization fails.
pub fn render(ids: &[Identifier], format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Text => {
            Ok(ids.iter().map(Identifier::as_str).collect::<Vec<_>>().join("\n"))
        }
        OutputFormat::Json => serde_json::to_string_pretty(ids)
            .map_err(|e| format!("Failed to serialize identifiers: {e}")),
    }
}

//! ID generator port for producing v4-style identifiers.

use crate::identifier::Identifier;

/// Generates identifiers.
///
/// Abstracting ID generation lets callers pick a strategy (entropy mix or
/// OS-backed) without caring how the digits were drawn.
pub trait IdGenerator: Send + Sync {
    /// Generates a new identifier.
    fn generate_id(&self) -> Identifier;
}

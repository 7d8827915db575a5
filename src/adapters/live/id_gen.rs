//! OS-backed adapter for the `IdGenerator` port.

use rand::rngs::OsRng;
use rand::RngCore;
use uuid::Builder;

use crate::identifier::Identifier;
use crate::ports::IdGenerator;

/// Draws all 122 random bits from the operating system's CSPRNG.
///
/// Ignores the clock, timer and random ports entirely, so it cannot be
/// recorded or replayed.
pub struct SecureIdGenerator;

impl SecureIdGenerator {
    /// Creates a new secure ID generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for SecureIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SecureIdGenerator {
    /// # Panics
    ///
    /// Panics if the operating system entropy source is unavailable.
    fn generate_id(&self) -> Identifier {
        let mut bytes = [0u8; 16];
        OsRng.fill_bytes(&mut bytes);
        Identifier::from_uuid(Builder::from_random_bytes(bytes).into_uuid())
    }
}

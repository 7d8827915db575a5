//! Cassette data structures for recording and replaying interactions.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ports::{CLOCK, RANDOM, TIMER};
use crate::identifier::PLACEHOLDER_COUNT;

/// A single recorded interaction with an entropy port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Sequence number (assigned automatically by the recorder).
    pub seq: u64,
    /// Port name (`clock`, `timer` or `random`).
    pub port: String,
    /// Method name invoked on the port.
    pub method: String,
    /// Input data sent to the port.
    pub input: serde_json::Value,
    /// Output data returned from the port.
    pub output: serde_json::Value,
}

/// A cassette containing a sequence of recorded interactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name for this cassette.
    pub name: String,
    /// When this cassette was recorded.
    pub recorded_at: DateTime<Utc>,
    /// `seedid` version that recorded the cassette.
    pub version: String,
    /// Ordered list of interactions.
    pub interactions: Vec<Interaction>,
}

impl Cassette {
    /// Reads and parses a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid cassette.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))
    }

    /// Returns `true` if any interaction was recorded for `port`.
    #[must_use]
    pub fn has_port(&self, port: &str) -> bool {
        self.interactions.iter().any(|i| i.port == port)
    }

    /// How many entropy-mix identifiers this cassette can replay.
    ///
    /// Each identifier takes one clock read, one timer read when the
    /// cassette has a timer, and one random draw per placeholder.
    #[must_use]
    pub fn identifier_capacity(&self) -> usize {
        let count = |port: &str| self.interactions.iter().filter(|i| i.port == port).count();
        let mut capacity = count(CLOCK).min(count(RANDOM) / PLACEHOLDER_COUNT);
        if self.has_port(TIMER) {
            capacity = capacity.min(count(TIMER));
        }
        capacity
    }
}

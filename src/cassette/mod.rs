//! Cassettes: YAML records of every entropy input a run consumed.
//!
//! Recording a run and replaying its cassette reproduces the exact same
//! identifiers, which is how regressions in the generator are pinned.

pub mod format;
pub mod recorder;
pub mod replayer;

/// Port names used in cassette interactions.
pub mod ports {
    /// Wall clock, method `now`.
    pub const CLOCK: &str = "clock";
    /// High-resolution timer, method `elapsed_millis`.
    pub const TIMER: &str = "timer";
    /// Random source, method `next_unit`.
    pub const RANDOM: &str = "random";
}

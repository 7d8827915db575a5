//! Entropy-mix identifier generation.
//!
//! The generator fills [`TEMPLATE`] one placeholder at a time. A seed built
//! from the wall clock (plus the high-resolution timer, when one is supplied)
//! is mixed with a fresh random value for every digit and then shifted right
//! by one hex digit, so each substitution depends on the ones before it.

use std::fmt;
use std::str::FromStr;

use crate::identifier::{Identifier, Placeholder, TEMPLATE};
use crate::ports::{Clock, HighResTimer, IdGenerator, RandomSource};

/// Largest `f64` strictly below `1.0`.
const LARGEST_BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// How identifier digits are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Timestamp-seeded mix of clock, timer and random source.
    #[default]
    EntropyMix,
    /// 122 random bits from the operating system's CSPRNG.
    Secure,
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "entropy-mix" | "entropy" => Ok(Self::EntropyMix),
            "secure" => Ok(Self::Secure),
            other => Err(format!("unknown strategy {other:?} (expected entropy-mix or secure)")),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EntropyMix => f.write_str("entropy-mix"),
            Self::Secure => f.write_str("secure"),
        }
    }
}

/// Generates one identifier from the given entropy inputs.
///
/// Reads `clock` once and `timer` (if any) once, then draws one value from
/// `random` per placeholder. Never fails: a missing timer only means the
/// seed is built from the wall clock alone.
#[must_use]
pub fn generate(
    random: &dyn RandomSource,
    clock: &dyn Clock,
    timer: Option<&dyn HighResTimer>,
) -> Identifier {
    #[allow(clippy::cast_precision_loss)]
    let mut entropy_seed = clock.now().timestamp_millis() as f64;
    if let Some(timer) = timer {
        entropy_seed += timer.elapsed_millis();
    }

    let mut rendered = String::with_capacity(TEMPLATE.len());
    for c in TEMPLATE.chars() {
        let Some(placeholder) = Placeholder::from_char(c) else {
            rendered.push(c);
            continue;
        };
        let nibble = mix_nibble(entropy_seed, unit_interval(random.next_unit()));
        entropy_seed = (entropy_seed / 16.0).floor();
        rendered.push(hex_digit(placeholder.constrain(nibble)));
    }

    let id = Identifier::from_rendered(rendered);
    tracing::trace!(identifier = %id, timer = timer.is_some(), "generated identifier");
    id
}

/// `floor(seed + r * 16) mod 16`, Euclidean so pre-epoch seeds stay in range.
fn mix_nibble(seed: f64, r: f64) -> u8 {
    let mixed = (seed + r * 16.0).floor().rem_euclid(16.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let nibble = mixed as u8;
    nibble.min(15)
}

/// Clamps a random draw into `[0, 1)`; NaN becomes `0`.
fn unit_interval(r: f64) -> f64 {
    if r.is_nan() {
        0.0
    } else {
        r.clamp(0.0, LARGEST_BELOW_ONE)
    }
}

fn hex_digit(nibble: u8) -> char {
    char::from_digit(u32::from(nibble), 16).unwrap_or('0')
}

/// [`IdGenerator`] running the entropy mix over borrowed ports.
pub struct EntropyIdGenerator<'a> {
    random: &'a dyn RandomSource,
    clock: &'a dyn Clock,
    timer: Option<&'a dyn HighResTimer>,
}

impl<'a> EntropyIdGenerator<'a> {
    /// Creates a generator over the given entropy inputs.
    #[must_use]
    pub fn new(
        random: &'a dyn RandomSource,
        clock: &'a dyn Clock,
        timer: Option<&'a dyn HighResTimer>,
    ) -> Self {
        Self { random, clock, timer }
    }
}

impl IdGenerator for EntropyIdGenerator<'_> {
    fn generate_id(&self) -> Identifier {
        generate(self.random, self.clock, self.timer)
    }
}

//! Live random source using the thread-local RNG.

use rand::Rng;

use crate::ports::random::RandomSource;

/// Draws from `rand::thread_rng()`, so each thread has its own generator.
pub struct LiveRandom;

impl RandomSource for LiveRandom {
    fn next_unit(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

//! Live adapters backed by the real system clock and random sources.

pub mod clock;
pub mod id_gen;
pub mod random;
pub mod timer;

pub use clock::LiveClock;
pub use id_gen::SecureIdGenerator;
pub use random::LiveRandom;
pub use timer::LiveTimer;

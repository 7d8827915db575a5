//! Port traits defining the generator's entropy boundaries.
//!
//! Each trait represents one input the generator reads from the outside
//! world (wall clock, monotonic timer, random values) or the generator
//! itself. Implementations live in `src/adapters/`.

pub mod clock;
pub mod id_gen;
pub mod random;
pub mod timer;

pub use clock::Clock;
pub use id_gen::IdGenerator;
pub use random::RandomSource;
pub use timer::HighResTimer;

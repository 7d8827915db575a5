//! General-purpose random source port.

/// Produces uniformly distributed values in `[0, 1)`.
///
/// Implementations need not be cryptographically secure.
pub trait RandomSource: Send + Sync {
    /// Returns the next value in `[0, 1)`.
    fn next_unit(&self) -> f64;
}

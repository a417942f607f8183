//! # Random Sources
//!
//! Block sizing draws from a caller-supplied source instead of a global
//! generator, so a layout pass can be replayed from a fixed seed.
//!
//! Every [`rand::Rng`] is a [`RandomSource`]. Tests can plug in their own
//! implementation to force specific draws.

use rand::Rng;

/// Capability to draw uniform integers.
pub trait RandomSource {
    /// Returns a value uniformly distributed in `[min, max]` (both inclusive).
    ///
    /// Callers guarantee `min <= max`.
    fn next_in_range(&mut self, min: u16, max: u16) -> u16;
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn next_in_range(&mut self, min: u16, max: u16) -> u16 {
        self.gen_range(min..=max)
    }
}

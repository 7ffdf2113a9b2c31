//! SplitMix64 pseudo-random source.

use super::Random;

/// SplitMix64 generator (Steele, Lea, Flood 2014).
///
/// A single `u64` of state advanced by the golden-gamma increment, with two
/// xor-multiply finalizer rounds per output. Every seed, including 0, yields a
/// full-quality sequence, which is what makes it suitable for seeding the
/// permutation shuffle.
#[derive(Debug, Clone)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Create a source whose entire sequence is determined by `seed`.
    #[inline]
    #[must_use]
    pub const fn from_seed(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl Random for SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

//! Seeded permutation table for lattice hashing.

use crate::random::{Random, SplitMix64};

/// A seeded bijection of `{0, ..., 255}` used to hash lattice coordinates
/// into gradient indices.
///
/// Built once by a Fisher-Yates shuffle of the identity sequence driven by a
/// [`Random`] source, then never mutated. Lookups mask the index with `& 255`,
/// so the table is stored at its natural 256 bytes instead of being mirrored
/// to 512 entries.
#[derive(Debug, Clone)]
pub struct PermutationTable {
    table: [u8; 256],
}

impl PermutationTable {
    /// Shuffle a fresh table from a random source.
    ///
    /// Total for every source state; there is no failing construction path.
    pub fn new<R: Random>(random: &mut R) -> Self {
        let mut table = [0u8; 256];
        for (i, v) in table.iter_mut().enumerate() {
            *v = i as u8;
        }
        for i in 0..256 {
            let offset = random.next_i32_bounded((256 - i) as i32) as usize;
            table.swap(i, i + offset);
        }
        Self { table }
    }

    /// Shuffle a table from a bare seed via [`SplitMix64`].
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(&mut SplitMix64::from_seed(seed))
    }

    /// Table value at `i`, with the index wrapped `& 255`.
    ///
    /// Accepts any `i32` so chained lookups (`at(at(x) + y)`) never need a
    /// bounds check at the call site.
    #[inline]
    #[must_use]
    pub const fn at(&self, i: i32) -> i32 {
        self.table[(i & 255) as usize] as i32
    }
}

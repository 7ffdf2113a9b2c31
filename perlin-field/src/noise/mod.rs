//! Seeded 3D gradient noise.
//!
//! The stack has three leaves and one combiner:
//!
//! - [`PermutationTable`] - seeded bijection of `{0, ..., 255}` for lattice
//!   hashing
//! - [`gradient`] - the fixed 16-entry gradient table
//! - [`crate::math`] - fade curve and lerp helpers
//! - [`PerlinNoise`] - the generator combining all three

pub mod gradient;
mod permutation;
mod perlin;

pub use gradient::{GRADIENT, GRADIENT_MAGNITUDE, vector_at};
pub use permutation::PermutationTable;
pub use perlin::PerlinNoise;

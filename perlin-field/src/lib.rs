//! Seeded 3D gradient noise and const-evaluable math for animated field
//! rendering.
//!
//! A renderer owns the window, the pixel buffer, and the frame loop; this
//! crate owns the numbers. The intended call pattern is one
//! [`PerlinNoise`] per field, then `sample(x, y, z)` once per pixel per
//! frame with `x, y` mapped into noise space and `z` advanced by a fixed
//! step per frame, with [`math::normalize`] turning the result into a
//! displayable intensity:
//!
//! ```
//! use perlin_field::PerlinNoise;
//! use perlin_field::math::normalize;
//!
//! let noise = PerlinNoise::new(227);
//! let v = noise.sample(0.4, 0.7, 0.0);
//! let intensity = normalize(v, -1.0, 1.0).expect("range is non-degenerate");
//! assert!((0.0..=1.0).contains(&intensity));
//! ```
//!
//! The generator is immutable after construction and safe to share across
//! threads. The [`math`] routines are `const fn`: bound to a `const`, they
//! cost nothing at runtime; called normally, they behave identically.

pub mod math;
pub mod noise;
pub mod random;

pub use noise::{PerlinNoise, PermutationTable};

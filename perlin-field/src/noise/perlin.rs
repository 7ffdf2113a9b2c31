//! Improved Perlin noise generator.

use crate::math::{floor, lerp3, smoothstep};
use crate::noise::gradient::grad_dot;
use crate::noise::permutation::PermutationTable;
use crate::random::SplitMix64;

/// Seeded 3D gradient noise generator.
///
/// The only state is the permutation table shuffled at construction, so
/// `sample` is a pure function of `(seed, x, y, z)`: the same seed and point
/// produce bit-identical output across instances, runs, and threads. The
/// struct is `Send + Sync`; a renderer can share one instance and sample
/// per-tile in parallel without locking.
#[derive(Debug, Clone)]
pub struct PerlinNoise {
    permutation: PermutationTable,
}

impl PerlinNoise {
    /// Build a generator for `seed`.
    ///
    /// Every seed is valid; construction never fails.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut random = SplitMix64::from_seed(seed);
        let permutation = PermutationTable::new(&mut random);
        tracing::trace!(seed, "perlin noise generator initialized");
        Self { permutation }
    }

    /// Sample the noise field at `(x, y, z)`.
    ///
    /// Output is conventionally within `[-1, 1]` for this gradient set.
    /// Renderers typically map `x, y` from pixel space into a chosen noise
    /// frequency and advance `z` by a fixed step per frame to animate the
    /// field. Any finite input is valid.
    #[inline]
    #[must_use]
    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        let xi = floor(x);
        let yi = floor(y);
        let zi = floor(z);

        let xf = x - f64::from(xi);
        let yf = y - f64::from(yi);
        let zf = z - f64::from(zi);

        self.sample_and_lerp(xi, yi, zi, xf, yf, zf)
    }

    /// Hash the 8 cell corners, take gradient dot products, and blend.
    ///
    /// Interpolation is x innermost, then y, then z (the `lerp3` convention).
    fn sample_and_lerp(&self, x: i32, y: i32, z: i32, xf: f64, yf: f64, zf: f64) -> f64 {
        let perm = &self.permutation;

        // Wrap the cell coordinates before chaining so the corner sums stay
        // far from i32::MAX even when `floor` saturates an extreme input.
        // Congruent mod 256, so the hashes are unchanged.
        let x = x & 255;
        let y = y & 255;
        let z = z & 255;

        // Chained lookups combine the three cell coordinates into one hash
        // per corner.
        let x0 = perm.at(x);
        let x1 = perm.at(x + 1);
        let xy00 = perm.at(x0 + y);
        let xy01 = perm.at(x0 + y + 1);
        let xy10 = perm.at(x1 + y);
        let xy11 = perm.at(x1 + y + 1);

        // Dot product of each corner's gradient with the offset from that
        // corner to the sample point.
        let d000 = grad_dot(perm.at(xy00 + z), xf, yf, zf);
        let d100 = grad_dot(perm.at(xy10 + z), xf - 1.0, yf, zf);
        let d010 = grad_dot(perm.at(xy01 + z), xf, yf - 1.0, zf);
        let d110 = grad_dot(perm.at(xy11 + z), xf - 1.0, yf - 1.0, zf);
        let d001 = grad_dot(perm.at(xy00 + z + 1), xf, yf, zf - 1.0);
        let d101 = grad_dot(perm.at(xy10 + z + 1), xf - 1.0, yf, zf - 1.0);
        let d011 = grad_dot(perm.at(xy01 + z + 1), xf, yf - 1.0, zf - 1.0);
        let d111 = grad_dot(perm.at(xy11 + z + 1), xf - 1.0, yf - 1.0, zf - 1.0);

        let dx = smoothstep(xf);
        let dy = smoothstep(yf);
        let dz = smoothstep(zf);

        lerp3(dx, dy, dz, d000, d100, d010, d110, d001, d101, d011, d111)
    }
}

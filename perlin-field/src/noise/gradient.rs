//! Fixed gradient table for 3D gradient noise.

use glam::DVec3;

use crate::math::sqrt;

/// The 16 gradient vectors used for corner dot products.
///
/// The first 12 are the edge midpoints of a cube; the final 4 repeat earlier
/// entries so the table length is a power of two and a hash can be reduced
/// with `& 15` instead of a modulo. Seed-independent and shared by every
/// generator instance.
pub const GRADIENT: [[i32; 3]; 16] = [
    [1, 1, 0],
    [-1, 1, 0],
    [1, -1, 0],
    [-1, -1, 0],
    [1, 0, 1],
    [-1, 0, 1],
    [1, 0, -1],
    [-1, 0, -1],
    [0, 1, 1],
    [0, -1, 1],
    [0, 1, -1],
    [0, -1, -1],
    [1, 1, 0],
    [0, -1, 1],
    [-1, 1, 0],
    [0, -1, -1],
];

/// Euclidean length of every vector in [`GRADIENT`].
///
/// Computed with the crate's own const `sqrt`, so it is baked at compile time.
pub const GRADIENT_MAGNITUDE: f64 = match sqrt(2.0) {
    Ok(v) => v,
    Err(_) => panic!("sqrt(2) is in domain"),
};

/// Gradient vector for `index`, reduced `& 15`.
#[inline]
#[must_use]
pub const fn vector_at(index: i32) -> DVec3 {
    let g = &GRADIENT[(index & 15) as usize];
    DVec3::new(g[0] as f64, g[1] as f64, g[2] as f64)
}

/// Dot product of the gradient selected by `hash` with the offset `(x, y, z)`.
#[inline]
#[must_use]
pub fn grad_dot(hash: i32, x: f64, y: f64, z: f64) -> f64 {
    let g = &GRADIENT[(hash & 15) as usize];
    f64::from(g[0]) * x + f64::from(g[1]) * y + f64::from(g[2]) * z
}

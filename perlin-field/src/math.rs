//! Math helpers shared by the noise stack and its callers.
//!
//! Everything here is a `const fn` with a single body usable both in
//! const-evaluation contexts (precomputing normalization factors, gradient
//! magnitudes) and as an ordinary runtime call, with identical numeric
//! semantics in both modes.
//!
//! Domain failures (`sqrt` of a negative, `factorial` of a negative,
//! `normalize` over an empty range) are reported as [`MathError`] rather than
//! silently returning NaN, so a bad constant fails the build instead of
//! propagating through a pixel buffer.

use thiserror::Error;

/// Convergence tolerance for the iterative routines (`sqrt`, `sin`, `cos`).
const EPSILON: f64 = 1e-15;

/// Domain error raised by the fallible math routines.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// `sqrt` was called with a negative argument.
    #[error("square root of negative value {value}")]
    SqrtOfNegative {
        /// The offending argument.
        value: f64,
    },
    /// `factorial` was called with a negative argument.
    #[error("factorial of negative value {value}")]
    FactorialOfNegative {
        /// The offending argument.
        value: i64,
    },
    /// `factorial` result does not fit in `i64` (first overflow at `21!`).
    #[error("factorial of {value} overflows i64")]
    FactorialOverflow {
        /// The offending argument.
        value: i64,
    },
    /// `normalize` was called with `min == max`.
    #[error("degenerate range [{min}, {max}]")]
    DegenerateRange {
        /// Lower bound of the range.
        min: f64,
        /// Upper bound of the range.
        max: f64,
    },
}

/// Integer floor of `v`.
///
/// Truncates toward zero, then adjusts downward for negative non-integers.
/// Inputs beyond the `i32` range saturate at the type bounds, so the function
/// is total for every finite input.
#[inline]
#[must_use]
pub const fn floor(v: f64) -> i32 {
    let i = v as i32;
    if v < i as f64 { i.saturating_sub(1) } else { i }
}

/// Linear interpolation from `start` toward `end` by fraction `delta`.
///
/// `delta` outside `[0, 1]` extrapolates; that is intentional, not an error.
#[inline]
#[must_use]
pub const fn lerp(delta: f64, start: f64, end: f64) -> f64 {
    start + delta * (end - start)
}

/// Bilinear interpolation: x axis innermost, then y.
#[inline]
#[must_use]
pub const fn lerp2(dx: f64, dy: f64, c00: f64, c10: f64, c01: f64, c11: f64) -> f64 {
    lerp(dy, lerp(dx, c00, c10), lerp(dx, c01, c11))
}

/// Trilinear interpolation of 8 cube-corner values.
///
/// Axis order is x innermost, then y, then z; `cXYZ` names the corner at
/// offset (X, Y, Z).
#[inline]
#[must_use]
#[expect(clippy::too_many_arguments, reason = "8 corners + 3 weights is the natural arity")]
pub const fn lerp3(
    dx: f64,
    dy: f64,
    dz: f64,
    c000: f64,
    c100: f64,
    c010: f64,
    c110: f64,
    c001: f64,
    c101: f64,
    c011: f64,
    c111: f64,
) -> f64 {
    lerp(
        dz,
        lerp2(dx, dy, c000, c100, c010, c110),
        lerp2(dx, dy, c001, c101, c011, c111),
    )
}

/// Quintic fade curve `6t^5 - 15t^4 + 10t^3`.
///
/// Zero first and second derivative at `t = 0` and `t = 1`, which is what
/// hides the lattice in the interpolated noise.
#[inline]
#[must_use]
pub const fn smoothstep(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Rescale `value` from `[min, max]` into `[0, 1]`.
///
/// Values outside the range extrapolate outside `[0, 1]`. `min == max` is a
/// [`MathError::DegenerateRange`].
#[inline]
pub const fn normalize(value: f64, min: f64, max: f64) -> Result<f64, MathError> {
    if min == max {
        return Err(MathError::DegenerateRange { min, max });
    }
    Ok((value - min) / (max - min))
}

/// `x` raised to the non-negative integer power `n` by repeated
/// multiplication.
///
/// `power(x, 0) == 1.0` for every `x`, including `0.0`.
#[inline]
#[must_use]
pub const fn power(x: f64, n: u32) -> f64 {
    let mut acc = 1.0;
    let mut i = 0;
    while i < n {
        acc *= x;
        i += 1;
    }
    acc
}

/// Factorial `n!` with `factorial(0) == 1`.
///
/// Negative `n` is a domain error; results past `20!` do not fit in `i64` and
/// are reported as overflow rather than wrapped.
pub const fn factorial(n: i64) -> Result<i64, MathError> {
    if n < 0 {
        return Err(MathError::FactorialOfNegative { value: n });
    }
    let mut acc: i64 = 1;
    let mut i: i64 = 2;
    while i <= n {
        acc = match acc.checked_mul(i) {
            Some(v) => v,
            None => return Err(MathError::FactorialOverflow { value: n }),
        };
        i += 1;
    }
    Ok(acc)
}

/// Square root by Newton-Raphson iteration.
///
/// Converges to a fixed relative tolerance. Negative input is a domain
/// error; `sqrt(0.0) == 0.0` exactly.
pub const fn sqrt(x: f64) -> Result<f64, MathError> {
    if x < 0.0 {
        return Err(MathError::SqrtOfNegative { value: x });
    }
    if x == 0.0 {
        return Ok(0.0);
    }
    let mut guess = if x > 1.0 { x * 0.5 } else { 1.0 };
    let mut i = 0;
    while i < 64 {
        let next = 0.5 * (guess + x / guess);
        let diff = next - guess;
        let diff = if diff < 0.0 { -diff } else { diff };
        guess = next;
        if diff <= EPSILON * guess {
            break;
        }
        i += 1;
    }
    Ok(guess)
}

const PI: f64 = core::f64::consts::PI;
const TAU: f64 = core::f64::consts::TAU;

/// Reduce an angle in radians into `[-PI, PI]`.
const fn reduce_angle(x: f64) -> f64 {
    let mut r = x % TAU;
    if r > PI {
        r -= TAU;
    } else if r < -PI {
        r += TAU;
    }
    r
}

/// Sine of `x` radians.
///
/// Range reduction into `[-PI, PI]` followed by a Taylor series with
/// recurrence-computed terms; absolute error stays below `1e-12` on the
/// reduced range.
#[must_use]
pub const fn sin(x: f64) -> f64 {
    let x = reduce_angle(x);
    let x2 = x * x;
    let mut term = x;
    let mut sum = x;
    let mut k: u32 = 1;
    while k < 32 {
        let den = (2 * k) as f64 * (2 * k + 1) as f64;
        term = -term * x2 / den;
        sum += term;
        let mag = if term < 0.0 { -term } else { term };
        if mag < EPSILON {
            break;
        }
        k += 1;
    }
    sum
}

/// Cosine of `x` radians.
///
/// Same reduction and series scheme as [`sin`].
#[must_use]
pub const fn cos(x: f64) -> f64 {
    let x = reduce_angle(x);
    let x2 = x * x;
    let mut term = 1.0;
    let mut sum = 1.0;
    let mut k: u32 = 1;
    while k < 32 {
        let den = (2 * k - 1) as f64 * (2 * k) as f64;
        term = -term * x2 / den;
        sum += term;
        let mag = if term < 0.0 { -term } else { term };
        if mag < EPSILON {
            break;
        }
        k += 1;
    }
    sum
}

/// Tangent of `x` radians, computed as `sin(x) / cos(x)`.
///
/// Near odd multiples of `PI / 2` the result grows without bound instead of
/// failing; the poles are not representable exactly in `f64`.
#[must_use]
pub const fn tan(x: f64) -> f64 {
    sin(x) / cos(x)
}

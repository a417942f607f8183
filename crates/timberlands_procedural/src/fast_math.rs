//! # Fast Math
//!
//! Branch-light scalar helpers used by the noise field.
//!
//! All functions are pure. NaN and infinities propagate by IEEE-754 rules;
//! only [`smooth_step`] rejects an input.

use crate::error::{GenerationError, GenerationResult};

/// Quintic fade curve `6t^5 - 15t^4 + 10t^3`.
///
/// Pushes interpolation weights toward 0 and 1 near cell edges, which keeps
/// the noise C2-continuous.
#[inline]
#[must_use]
pub fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Unclamped linear interpolation `a + t * (b - a)`.
#[inline]
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Greatest integer less than or equal to `x`.
///
/// Faster than `f32::floor()` followed by a cast. Out-of-range inputs
/// saturate like an `as` cast.
#[inline]
#[must_use]
pub fn floor_to_int(x: f32) -> i32 {
    let xi = x as i32;
    if x < xi as f32 {
        xi.saturating_sub(1)
    } else {
        xi
    }
}

/// Bounds `value` to `[min, max]`. Requires `min <= max`.
#[inline]
#[must_use]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    min.max(max.min(value))
}

/// Cubic Hermite step between two edges.
///
/// `x` is normalized into `[0, 1]` relative to `[edge0, edge1]` and then
/// shaped with `3x^2 - 2x^3`.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidArgument`] when `edge0 == edge1`.
#[inline]
#[allow(clippy::float_cmp)]
pub fn smooth_step(edge0: f32, edge1: f32, x: f32) -> GenerationResult<f32> {
    if edge0 == edge1 {
        return Err(GenerationError::invalid("edge1", "edges must differ"));
    }
    let t = clamp((x - edge0) / (edge1 - edge0), 0.0, 1.0);
    Ok(t * t * (3.0 - 2.0 * t))
}

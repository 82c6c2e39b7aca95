//! Common numeric utility functions.

use std::ops::Mul;

use super::Float;

/// Divides `lhs` by `rhs` if the reciprocal of `rhs` is finite; otherwise
/// returns `None`.
pub fn try_div<T>(lhs: T, rhs: Float) -> Option<T::Output>
where
    T: Mul<Float>,
{
    let recip_rhs = rhs.recip();
    recip_rhs.is_finite().then(|| lhs * recip_rhs)
}

/// Returns the arccosine of `x` after clamping it to `[-1, 1]`, so that
/// rounding error on a cosine never produces NaN.
pub fn clamped_acos(x: Float) -> Float {
    x.clamp(-1.0, 1.0).acos()
}

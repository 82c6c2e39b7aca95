//! Dual numbers `a + bI`, where `I = e0123` squares to zero.
//!
//! The squared norm of a line or motor is a dual number, and normalizing or
//! inverting one amounts to scaling it by a dual number.

use std::ops::Mul;

use crate::Float;

/// Sum of a scalar and a multiple of the pseudoscalar `e0123`.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct DualNumber {
    /// Scalar part.
    pub a: Float,
    /// Pseudoscalar part.
    pub b: Float,
}

impl Mul for DualNumber {
    type Output = DualNumber;

    fn mul(self, rhs: Self) -> Self::Output {
        DualNumber {
            a: self.a * rhs.a,
            b: self.a * rhs.b + self.b * rhs.a,
        }
    }
}

impl DualNumber {
    /// Constructs a dual number.
    pub const fn new(a: Float, b: Float) -> Self {
        Self { a, b }
    }

    /// Returns the square root: `sqrt(a + bI) = sqrt(a) + b / (2 sqrt(a)) I`.
    pub fn sqrt(self) -> Self {
        let sqrt_a = self.a.sqrt();
        Self::new(sqrt_a, self.b / (2.0 * sqrt_a))
    }
    /// Returns the reciprocal: `1 / (a + bI) = 1/a - b/a² I`.
    pub fn recip(self) -> Self {
        let recip_a = self.a.recip();
        Self::new(recip_a, -self.b * recip_a * recip_a)
    }
    /// Returns the reciprocal of the square root.
    pub fn rsqrt(self) -> Self {
        let sqrt_a = self.a.sqrt();
        let sqrt_a_cubed = self.a * sqrt_a;
        Self::new(sqrt_a.recip(), -self.b / (2.0 * sqrt_a_cubed))
    }
}

/// Returns `m * (d.a + d.b e0123)` for an element laid out as
/// `[e01, e02, e03, e0123, e23, e31, e12, s]`.
///
/// Multiplying by the pseudoscalar moves the Euclidean half into the ideal
/// half, so `e23 * e0123 = -e01` and `s * e0123 = e0123`.
pub(crate) fn scale_even_by_dual(m: [Float; 8], d: DualNumber) -> [Float; 8] {
    let [d1, d2, d3, p, o1, o2, o3, s] = m;
    let DualNumber { a, b } = d;
    [
        a * d1 - b * o1,
        a * d2 - b * o2,
        a * d3 - b * o3,
        a * p + b * s,
        a * o1,
        a * o2,
        a * o3,
        a * s,
    ]
}

/// Returns `m * ~m` as a dual number for an element laid out as
/// `[e01, e02, e03, e0123, e23, e31, e12, s]`.
pub(crate) fn even_norm_sq(m: [Float; 8]) -> DualNumber {
    let [d1, d2, d3, p, o1, o2, o3, s] = m;
    DualNumber::new(
        s * s + o1 * o1 + o2 * o2 + o3 * o3,
        2.0 * (s * p - (o1 * d1 + o2 * d2 + o3 * d3)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    #[test]
    fn test_dual_number_identities() {
        let x = DualNumber::new(4.0, 3.0);
        let sqrt = x.sqrt();
        assert_approx_eq!(sqrt.a, 2.0);
        assert_approx_eq!(sqrt.b, 0.75);
        let one = x * x.recip();
        assert_approx_eq!(one.a, 1.0);
        assert_approx_eq!(one.b, 0.0);
        let one = x * x.rsqrt() * x.rsqrt();
        assert_approx_eq!(one.a, 1.0);
        assert_approx_eq!(one.b, 0.0);
    }
}

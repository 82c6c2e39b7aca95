//! Basis blades of the 3D projective geometric algebra.

use std::fmt;

use bitflags::bitflags;
use itertools::Itertools;

use crate::Sign;

bitflags! {
    /// Set of axes for a basis blade, in canonical (ascending) order.
    ///
    /// Blades whose conventional name lists axes in another order, such as
    /// `e31` or `e032`, are represented by a [`crate::Term`] with a negative
    /// coefficient.
    #[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct Axes: u8 {
        /// Scalar (no axes)
        const SCALAR = 0;

        /// Null vector e₀, which squares to zero
        const E0 = 1 << 0;
        /// Euclidean X axis
        const E1 = 1 << 1;
        /// Euclidean Y axis
        const E2 = 1 << 2;
        /// Euclidean Z axis
        const E3 = 1 << 3;

        /// Ideal line along X
        const E01 = Self::E0.bits() | Self::E1.bits();
        /// Ideal line along Y
        const E02 = Self::E0.bits() | Self::E2.bits();
        /// Ideal line along Z
        const E03 = Self::E0.bits() | Self::E3.bits();
        /// Origin line along Z
        const E12 = Self::E1.bits() | Self::E2.bits();
        /// Origin line along Y (negated)
        const E13 = Self::E1.bits() | Self::E3.bits();
        /// Origin line along X
        const E23 = Self::E2.bits() | Self::E3.bits();

        /// Ideal point along Z (negated)
        const E012 = Self::E0.bits() | Self::E12.bits();
        /// Ideal point along Y
        const E013 = Self::E0.bits() | Self::E13.bits();
        /// Ideal point along X (negated)
        const E023 = Self::E0.bits() | Self::E23.bits();
        /// Origin point
        const E123 = Self::E1.bits() | Self::E23.bits();

        /// Pseudoscalar
        const E0123 = Self::E0.bits() | Self::E123.bits();
    }
}

impl fmt::Display for Axes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "s");
        }
        let indices = (0..4).filter(|i| self.bits() >> i & 1 != 0).join("");
        write!(f, "e{indices}")
    }
}

impl Axes {
    /// Every basis blade, ordered by bitmask.
    pub const ALL: [Axes; 16] = {
        let mut ret = [Axes::SCALAR; 16];
        let mut i = 0;
        while i < 16 {
            ret[i] = Axes::from_bits_truncate(i as u8);
            i += 1;
        }
        ret
    };

    /// Returns the number of basis vectors in the blade.
    pub const fn grade(self) -> u8 {
        self.bits().count_ones() as _
    }
    /// Returns whether the blade contains the null vector e₀.
    pub const fn is_ideal(self) -> bool {
        self.bits() & Self::E0.bits() != 0
    }

    /// Returns the sign of the [reverse] of the basis blade.
    ///
    /// [reverse]:
    ///     https://rigidgeometricalgebra.org/wiki/index.php?title=Reverses
    pub const fn sign_of_reverse(self) -> Sign {
        // Reversing n vectors takes n*(n-1)/2 swaps, which is odd for grades
        // 2 and 3 (mod 4).
        Sign::from_parity(matches!(self.grade() % 4, 2 | 3))
    }
    /// Returns the sign of the grade involution of the basis blade.
    pub const fn sign_of_involute(self) -> Sign {
        Sign::from_parity(self.grade() % 2 == 1)
    }
    /// Returns the sign of the Clifford conjugate of the basis blade, which is
    /// the composition of reverse and grade involution.
    pub const fn sign_of_conjugate(self) -> Sign {
        self.sign_of_reverse().product(self.sign_of_involute())
    }

    /// Returns the sign of the [geometric product] between `lhs` and `rhs`, or
    /// `None` if the result is zero.
    ///
    /// [geometric product]:
    ///     https://rigidgeometricalgebra.org/wiki/index.php?title=Geometric_products
    pub const fn sign_of_geometric_product(lhs: Self, rhs: Self) -> Option<Sign> {
        // e₀ squares to 0.
        if lhs.is_ideal() && rhs.is_ideal() {
            return None;
        }

        // Count the number of swaps needed to sort the combined product. If the
        // number of swaps is odd, negate the result.
        let mut odd = false;
        let mut a = lhs.bits();
        let mut b = rhs.bits();
        while a != 0 && b != 0 {
            let i = b.trailing_zeros() + 1;
            a >>= i;
            b >>= i;
            if a.count_ones() & 1 != 0 {
                odd = !odd;
            }
        }

        Some(Sign::from_parity(odd))
    }
    /// Returns the unsigned geometric product of `lhs` and `rhs`.
    pub const fn unsigned_geometric_product(lhs: Self, rhs: Self) -> Axes {
        Axes::from_bits_truncate(lhs.bits() ^ rhs.bits())
    }
    /// Returns the unsigned complement of the basis blade.
    pub const fn unsigned_complement(self) -> Axes {
        Axes::from_bits_truncate(self.bits() ^ Self::E0123.bits())
    }
    /// Returns the sign of the [right complement] of the basis blade.
    ///
    /// [right complement]:
    ///     https://rigidgeometricalgebra.org/wiki/index.php?title=Complements
    pub fn sign_of_right_complement(self) -> Sign {
        // The complement never shares an axis with `self`, so this is never
        // zero.
        Self::sign_of_geometric_product(self, self.unsigned_complement()).unwrap_or_default()
    }
    /// Returns the sign of the [left complement] of the basis blade.
    ///
    /// [left complement]:
    ///     https://rigidgeometricalgebra.org/wiki/index.php?title=Complements
    pub fn sign_of_left_complement(self) -> Sign {
        Self::sign_of_geometric_product(self.unsigned_complement(), self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axes_display() {
        assert_eq!(Axes::SCALAR.to_string(), "s");
        assert_eq!(Axes::E0.to_string(), "e0");
        assert_eq!(Axes::E13.to_string(), "e13");
        assert_eq!(Axes::E0123.to_string(), "e0123");
    }

    #[test]
    fn test_geometric_product_sign() {
        // e1 e1 = 1
        assert_eq!(Axes::sign_of_geometric_product(Axes::E1, Axes::E1), Some(Sign::Pos));
        // e0 e0 = 0
        assert_eq!(Axes::sign_of_geometric_product(Axes::E0, Axes::E01), None);
        // e2 e1 = -e12
        assert_eq!(Axes::sign_of_geometric_product(Axes::E2, Axes::E1), Some(Sign::Neg));
        // e12 e12 = -1
        assert_eq!(Axes::sign_of_geometric_product(Axes::E12, Axes::E12), Some(Sign::Neg));
        // e123 e123 = -1
        assert_eq!(Axes::sign_of_geometric_product(Axes::E123, Axes::E123), Some(Sign::Neg));
        // e3 e012 = -e0123
        assert_eq!(Axes::sign_of_geometric_product(Axes::E3, Axes::E012), Some(Sign::Neg));
    }

    #[test]
    fn test_grade_automorphism_signs() {
        let signs = |a: Axes| (a.sign_of_involute(), a.sign_of_reverse(), a.sign_of_conjugate());
        use Sign::{Neg, Pos};
        assert_eq!(signs(Axes::SCALAR), (Pos, Pos, Pos));
        assert_eq!(signs(Axes::E2), (Neg, Pos, Neg));
        assert_eq!(signs(Axes::E01), (Pos, Neg, Neg));
        assert_eq!(signs(Axes::E123), (Neg, Neg, Pos));
        // The pseudoscalar behaves like a scalar.
        assert_eq!(signs(Axes::E0123), (Pos, Pos, Pos));
    }

    #[test]
    fn test_complements() {
        for axes in Axes::ALL {
            let rc = axes.sign_of_right_complement();
            let lc = axes.sign_of_left_complement();
            let odd = axes.grade() * (4 - axes.grade()) % 2 == 1;
            assert_eq!(rc * lc, Sign::from_parity(odd), "{axes}");
        }
    }
}

//! Signed basis blades.

use std::fmt;
use std::ops::{Mul, MulAssign, Neg};

use crate::{Axes, EPSILON, Float, Sign};

/// Term in the projective geometric algebra, consisting of a real coefficient
/// and a bitmask representing the basis blade.
///
/// Element types use unit terms to describe the basis blade stored in each of
/// their coefficient slots, which lets conventionally-named blades like `e31`
/// be stored as `-e13`.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Term {
    /// Coefficient.
    pub coef: Float,
    /// Bitset of basis vectors.
    pub axes: Axes,
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.coef, f)?;
        write!(f, " ")?;
        fmt::Display::fmt(&self.axes, f)?;
        Ok(())
    }
}

impl approx::AbsDiffEq for Term {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.axes == other.axes && self.coef.abs_diff_eq(&other.coef, epsilon)
    }
}

impl Neg for Term {
    type Output = Term;

    fn neg(mut self) -> Self::Output {
        self.coef = -self.coef;
        self
    }
}

/// Geometric product of two terms. Returns `None` when exactly zero.
impl Mul for Term {
    type Output = Option<Term>;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::geometric_product(self, rhs)
    }
}

/// Scaling a term by a number.
impl Mul<Float> for Term {
    type Output = Term;

    fn mul(mut self, rhs: Float) -> Self::Output {
        self *= rhs;
        self
    }
}
impl MulAssign<Float> for Term {
    fn mul_assign(&mut self, rhs: Float) {
        self.coef *= rhs;
    }
}

crate::impl_mul_sign!(impl Mul<Sign> for Term);

impl Term {
    /// Constructs a scalar term.
    pub const fn scalar(x: Float) -> Self {
        Term {
            coef: x,
            axes: Axes::SCALAR,
        }
    }
    /// Constructs a unit term.
    pub const fn unit(axes: Axes) -> Self {
        Term { coef: 1.0, axes }
    }
    /// Constructs a unit term with a sign.
    pub const fn signed_unit(sign: Sign, axes: Axes) -> Self {
        let coef = match sign {
            Sign::Pos => 1.0,
            Sign::Neg => -1.0,
        };
        Term { coef, axes }
    }

    /// Returns the grade of the term.
    pub const fn grade(self) -> u8 {
        self.axes.grade()
    }

    /// Returns the reverse term.
    #[must_use]
    pub fn reverse(self) -> Self {
        self * self.axes.sign_of_reverse()
    }
    /// Returns the [geometric product] between `lhs` and `rhs`, or `None` if
    /// the result is zero.
    ///
    /// [geometric product]:
    ///     https://rigidgeometricalgebra.org/wiki/index.php?title=Geometric_products
    #[must_use]
    pub fn geometric_product(lhs: Self, rhs: Self) -> Option<Self> {
        let sign = Axes::sign_of_geometric_product(lhs.axes, rhs.axes)?;
        Some(Term {
            coef: lhs.coef * rhs.coef * sign,
            axes: Axes::unsigned_geometric_product(lhs.axes, rhs.axes),
        })
    }
    /// Returns the exterior (outer) product between `lhs` and `rhs`, or `None`
    /// if the result is zero.
    #[must_use]
    pub fn wedge(lhs: Self, rhs: Self) -> Option<Self> {
        // Exterior product is zero if there are any basis vectors in common.
        if (lhs.axes & rhs.axes).is_empty() {
            Self::geometric_product(lhs, rhs)
        } else {
            None
        }
    }
    /// Returns the symmetric inner product between `lhs` and `rhs`, which keeps
    /// only the part of the geometric product whose grade is the difference of
    /// the operand grades. Returns `None` if the result is zero.
    #[must_use]
    pub fn inner(lhs: Self, rhs: Self) -> Option<Self> {
        let product = Self::geometric_product(lhs, rhs)?;
        (product.grade() == lhs.grade().abs_diff(rhs.grade())).then_some(product)
    }
    /// Returns the [right complement] of the term.
    ///
    /// [right complement]:
    ///     https://rigidgeometricalgebra.org/wiki/index.php?title=Complements
    #[must_use]
    pub fn right_complement(self) -> Term {
        Term {
            coef: self.coef * self.axes.sign_of_right_complement(),
            axes: self.axes.unsigned_complement(),
        }
    }
    /// Returns the [left complement] of the term.
    ///
    /// [left complement]:
    ///     https://rigidgeometricalgebra.org/wiki/index.php?title=Complements
    #[must_use]
    pub fn left_complement(self) -> Term {
        Term {
            coef: self.coef * self.axes.sign_of_left_complement(),
            axes: self.axes.unsigned_complement(),
        }
    }
    /// Returns the Poincaré dual of the term: the right complement for grades
    /// up to 2 and the left complement for grades 3 and 4.
    ///
    /// With this choice the dual is an involution, and each named basis blade
    /// maps to a named basis blade with a positive sign (`e1 <-> e032`,
    /// `e01 <-> e23`, `s <-> e0123`, etc.).
    #[must_use]
    pub fn dual(self) -> Term {
        match self.grade() {
            0..=2 => self.right_complement(),
            _ => self.left_complement(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_complements() {
        let pss = Term::unit(Axes::E0123);
        for axes in Axes::ALL {
            let term = Term::unit(axes);
            let lc = term.left_complement();
            let rc = term.right_complement();

            // Complements are the inverse of term
            assert_eq!(Term::wedge(term, rc), Some(pss));
            assert_eq!(Term::wedge(lc, term), Some(pss));

            // Complement operations are inverses of each other
            assert_eq!(lc.right_complement(), term);
            assert_eq!(rc.left_complement(), term);
        }
    }

    #[test]
    fn test_dual_is_involution() {
        for axes in Axes::ALL {
            let term = Term::unit(axes);
            assert_eq!(term.dual().dual(), term, "{axes}");
        }
    }

    #[test]
    fn test_named_duals() {
        // e1 <-> e032 = -e023
        assert_eq!(Term::unit(Axes::E1).dual(), -Term::unit(Axes::E023));
        // e31 = -e13 <-> e02
        assert_eq!((-Term::unit(Axes::E13)).dual(), Term::unit(Axes::E02));
        // e0 <-> e123
        assert_eq!(Term::unit(Axes::E0).dual(), Term::unit(Axes::E123));
        // s <-> e0123
        assert_eq!(Term::scalar(1.0).dual(), Term::unit(Axes::E0123));
    }

    #[test]
    fn test_inner_product_grade() {
        let e1 = Term::unit(Axes::E1);
        let e12 = Term::unit(Axes::E12);
        assert_eq!(Term::inner(e1, e12), Some(Term::unit(Axes::E2)));
        assert_eq!(Term::inner(e1, Term::unit(Axes::E23)), None);
        assert_eq!(Term::inner(Term::unit(Axes::E0), Term::unit(Axes::E0)), None);
    }
}

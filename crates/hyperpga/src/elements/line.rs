use super::{Element, IdealLine, Invertible, Normed, OriginLine};
use crate::dual_number::{even_norm_sq, scale_even_by_dual};
use crate::{Axes, Float, Sign, Term};

define_element! {
    /// Line in 3D space.
    ///
    /// The first half holds the ideal (moment) part and the second half holds
    /// the Euclidean (direction) part. The `e0123` and `s` slots are zero for
    /// a pure line but are kept so that lines round-trip through products.
    pub struct Line[8] {
        [0] e01, set_e01: Term::unit(Axes::E01),
        [1] e02, set_e02: Term::unit(Axes::E02),
        [2] e03, set_e03: Term::unit(Axes::E03),
        [3] e0123, set_e0123: Term::unit(Axes::E0123),
        [4] e23, set_e23: Term::unit(Axes::E23),
        [5] e31, set_e31: Term::signed_unit(Sign::Neg, Axes::E13),
        [6] e12, set_e12: Term::unit(Axes::E12),
        [7] s, set_s: Term::scalar(1.0),
    }
}

impl Default for Line {
    fn default() -> Self {
        Self::zero()
    }
}

impl Line {
    /// Constructs a line from its bivector components.
    pub const fn new(
        e01: Float,
        e02: Float,
        e03: Float,
        e23: Float,
        e31: Float,
        e12: Float,
    ) -> Self {
        Self::from_coefs([e01, e02, e03, 0.0, e23, e31, e12, 0.0])
    }
    /// Constructs a line from its ideal and Euclidean halves.
    pub const fn from_parts(ideal: IdealLine, origin: OriginLine) -> Self {
        let [d1, d2, d3, p] = ideal.to_coefs();
        let [o1, o2, o3, s] = origin.to_coefs();
        Self::from_coefs([d1, d2, d3, p, o1, o2, o3, s])
    }

    /// Returns the ideal half of the line.
    pub const fn ideal_part(&self) -> IdealLine {
        IdealLine::from_coefs([self.e01(), self.e02(), self.e03(), self.e0123()])
    }
    /// Returns the Euclidean half of the line.
    pub const fn origin_part(&self) -> OriginLine {
        OriginLine::from_coefs([self.e23(), self.e31(), self.e12(), self.s()])
    }
}

impl From<IdealLine> for Line {
    fn from(value: IdealLine) -> Self {
        Self::from_parts(value, OriginLine::zero())
    }
}
impl From<OriginLine> for Line {
    fn from(value: OriginLine) -> Self {
        Self::from_parts(IdealLine::zero(), value)
    }
}

impl Normed for Line {
    fn length_sq(&self) -> Float {
        self.origin_part().length_sq()
    }
    fn infinity_length_sq(&self) -> Float {
        self.ideal_part().infinity_length_sq()
    }

    /// Normalizes the line so that `L * ~L = 1` using the dual-number square
    /// root, which also makes the line satisfy the Plücker condition.
    fn normalize(&mut self) -> &mut Self {
        let scale = even_norm_sq(self.to_coefs()).rsqrt();
        *self = Self::from_coefs(scale_even_by_dual(self.to_coefs(), scale));
        self
    }
}

impl Invertible for Line {
    fn invert(&mut self) -> &mut Self {
        let scale = even_norm_sq(self.to_coefs()).recip();
        self.reverse();
        *self = Self::from_coefs(scale_even_by_dual(self.to_coefs(), scale));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    #[test]
    fn test_line_parts() {
        let l = Line::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(l.ideal_part(), IdealLine::new(1.0, 2.0, 3.0));
        assert_eq!(l.origin_part(), OriginLine::new(4.0, 5.0, 6.0));
        assert_eq!(Line::from_parts(l.ideal_part(), l.origin_part()), l);
        assert_eq!(Line::from(IdealLine::new(1.0, 2.0, 3.0)).origin_part(), OriginLine::zero());
    }

    #[test]
    fn test_line_normalize() {
        // Moment is not perpendicular to direction.
        let l = Line::new(1.0, 2.0, 3.0, 0.0, 0.0, 2.0);
        let n = l.normalized();
        assert_approx_eq!(n.length(), 1.0);
        assert_approx_eq!(n.normalized(), n);
        // Plücker condition: direction · moment = 0
        let plucker = n.e23() * n.e01() + n.e31() * n.e02() + n.e12() * n.e03();
        assert_approx_eq!(plucker, 0.0);
    }
}

use super::{Element, Normed};
use crate::{Axes, Float, Sign, Term};

define_element! {
    /// General element of the algebra, with one coefficient for every basis
    /// blade.
    ///
    /// The products on this type are computed term by term and serve as the
    /// reference that every closed-form product is checked against.
    pub struct Multivector[16] {
        [0] s, set_s: Term::scalar(1.0),
        [1] e0, set_e0: Term::unit(Axes::E0),
        [2] e1, set_e1: Term::unit(Axes::E1),
        [3] e2, set_e2: Term::unit(Axes::E2),
        [4] e3, set_e3: Term::unit(Axes::E3),
        [5] e01, set_e01: Term::unit(Axes::E01),
        [6] e02, set_e02: Term::unit(Axes::E02),
        [7] e03, set_e03: Term::unit(Axes::E03),
        [8] e12, set_e12: Term::unit(Axes::E12),
        [9] e31, set_e31: Term::signed_unit(Sign::Neg, Axes::E13),
        [10] e23, set_e23: Term::unit(Axes::E23),
        [11] e021, set_e021: Term::signed_unit(Sign::Neg, Axes::E012),
        [12] e013, set_e013: Term::unit(Axes::E013),
        [13] e032, set_e032: Term::signed_unit(Sign::Neg, Axes::E023),
        [14] e123, set_e123: Term::unit(Axes::E123),
        [15] e0123, set_e0123: Term::unit(Axes::E0123),
    }
}

/// Slot index and sign for each basis blade, indexed by [`Axes::bits()`].
const SLOTS: [(usize, Float); 16] = {
    let basis = <Multivector as Element>::BASIS;
    let mut ret = [(0, 0.0); 16];
    let mut i = 0;
    while i < basis.len() {
        ret[basis[i].axes.bits() as usize] = (i, basis[i].coef);
        i += 1;
    }
    ret
};

impl Default for Multivector {
    fn default() -> Self {
        Self::zero()
    }
}

impl Multivector {
    /// Constructs a multivector from the terms of any element.
    pub fn from_element<E: Element>(element: &E) -> Self {
        Self::from_terms(element.terms())
    }
    /// Constructs a multivector from a sum of terms.
    pub fn from_terms(terms: impl IntoIterator<Item = Term>) -> Self {
        let mut ret = Self::zero();
        for term in terms {
            ret.add_term(term);
        }
        ret
    }
    /// Returns the projection of the multivector onto the basis blades of
    /// `E`, discarding every other term.
    pub fn to_element<E: Element>(&self) -> E {
        let mut ret = E::zero();
        for (c, basis) in std::iter::zip(ret.coefs_mut(), E::BASIS) {
            *c = self.get(basis.axes) * basis.coef;
        }
        ret
    }

    /// Returns the coefficient of a canonical basis blade.
    pub fn get(&self, axes: Axes) -> Float {
        let (i, sign) = SLOTS[axes.bits() as usize];
        self[i] * sign
    }
    /// Adds a term to the multivector.
    pub fn add_term(&mut self, term: Term) {
        let (i, sign) = SLOTS[term.axes.bits() as usize];
        self[i] += term.coef * sign;
    }

    /// Returns the part of the multivector with grade `grade`.
    #[must_use]
    pub fn grade_project(&self, grade: u8) -> Self {
        Self::from_terms(self.terms().filter(|t| t.grade() == grade))
    }
    /// Returns whether every nonzero term has grade `grade`.
    pub fn is_pure_grade(&self, grade: u8) -> bool {
        self.terms().all(|t| t.coef == 0.0 || t.grade() == grade)
    }

    fn product(&self, rhs: &Self, f: impl Fn(Term, Term) -> Option<Term>) -> Self {
        let mut ret = Self::zero();
        for a in self.terms() {
            for b in rhs.terms() {
                if let Some(t) = f(a, b) {
                    ret.add_term(t);
                }
            }
        }
        ret
    }
    /// Returns the geometric product `self * rhs`.
    #[must_use]
    pub fn geometric_product(&self, rhs: &Self) -> Self {
        self.product(rhs, Term::geometric_product)
    }
    /// Returns the symmetric inner product `self · rhs`.
    #[must_use]
    pub fn inner_product(&self, rhs: &Self) -> Self {
        self.product(rhs, Term::inner)
    }
    /// Returns the outer product (meet) `self ∧ rhs`.
    #[must_use]
    pub fn outer_product(&self, rhs: &Self) -> Self {
        self.product(rhs, Term::wedge)
    }
    /// Returns the regressive product (join) `self ∨ rhs`, defined as
    /// `dual(dual(self) ∧ dual(rhs))`.
    #[must_use]
    pub fn regressive_product(&self, rhs: &Self) -> Self {
        self.dual().outer_product(&rhs.dual()).dual()
    }
    /// Returns the sandwich product `rhs * self * ~rhs`.
    #[must_use]
    pub fn sandwich(&self, rhs: &Self) -> Self {
        rhs.geometric_product(self).geometric_product(&rhs.reversed())
    }
    /// Returns the Poincaré dual, which reverses the order of the
    /// coefficients.
    #[must_use]
    pub fn dual(&self) -> Self {
        Self::from_terms(self.terms().map(Term::dual))
    }
}

impl Normed for Multivector {
    fn length_sq(&self) -> Float {
        self.terms()
            .filter(|t| !t.axes.is_ideal())
            .map(|t| t.coef * t.coef)
            .sum()
    }
    fn infinity_length_sq(&self) -> Float {
        self.terms()
            .filter(|t| t.axes.is_ideal())
            .map(|t| t.coef * t.coef)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Line, Plane, Point};

    #[test]
    fn test_slots_cover_every_blade() {
        for axes in Axes::ALL {
            let term = Term::unit(axes) * 3.0;
            let mv = Multivector::from_terms([term]);
            assert_eq!(mv.get(axes), 3.0);
            assert_eq!(mv.terms().filter(|t| t.coef != 0.0).count(), 1);
        }
    }

    #[test]
    fn test_dual_reverses_coefficients() {
        let coefs = std::array::from_fn(|i| i as Float + 1.0);
        let mut reversed = coefs;
        reversed.reverse();
        let mv = Multivector::from_coefs(coefs);
        assert_eq!(mv.dual(), Multivector::from_coefs(reversed));
        assert_eq!(mv.dual().dual(), mv);
    }

    #[test]
    fn test_element_round_trip() {
        let p = Point::with_weight(1.0, -2.0, 3.0, 4.0);
        let mv = Multivector::from_element(&p);
        assert_eq!(mv.e032(), 1.0);
        assert_eq!(mv.e021(), 3.0);
        assert_eq!(mv.to_element::<Point>(), p);
        assert!(mv.is_pure_grade(3));

        let l = Line::from_coefs([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        assert_eq!(Multivector::from_element(&l).to_element::<Line>(), l);
        assert_eq!(Multivector::from_element(&l).to_element::<Plane>(), Plane::zero());
    }

    #[test]
    fn test_reference_products() {
        let x = Multivector::from_element(&Plane::new(1.0, 0.0, 0.0, 0.0));
        let y = Multivector::from_element(&Plane::new(0.0, 1.0, 0.0, 0.0));
        let xy = x.outer_product(&y);
        assert_eq!(xy.e12(), 1.0);
        assert_eq!(x.geometric_product(&y), xy);
        assert_eq!(x.inner_product(&x).s(), 1.0);
        assert_eq!(x.inner_product(&y), Multivector::zero());
    }
}

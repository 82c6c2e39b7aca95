use super::{Element, Invertible, Normed};
use crate::{Axes, Float, Term};

define_element! {
    /// Line through the origin, which is the Euclidean half of a
    /// [`super::Line`].
    ///
    /// The `s` slot holds the scalar part left over by products.
    pub struct OriginLine[4] {
        [0] e23, set_e23: Term::unit(Axes::E23),
        [1] e31, set_e31: Term::signed_unit(crate::Sign::Neg, Axes::E13),
        [2] e12, set_e12: Term::unit(Axes::E12),
        [3] s, set_s: Term::scalar(1.0),
    }
}

impl Default for OriginLine {
    fn default() -> Self {
        Self::zero()
    }
}

impl OriginLine {
    /// Constructs a line through the origin from its bivector components. A
    /// line along the unit vector `(x, y, z)` is `OriginLine::new(x, y, z)`.
    pub const fn new(e23: Float, e31: Float, e12: Float) -> Self {
        Self::from_coefs([e23, e31, e12, 0.0])
    }
}

impl Normed for OriginLine {
    fn length_sq(&self) -> Float {
        self.coefs().iter().map(|c| c * c).sum()
    }
    fn infinity_length_sq(&self) -> Float {
        0.0
    }
}

impl Invertible for OriginLine {
    fn invert(&mut self) -> &mut Self {
        let scale = self.length_sq().recip();
        self.reverse();
        *self *= scale;
        self
    }
}

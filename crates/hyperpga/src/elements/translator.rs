use super::{Element, IdealLine, Invertible, Normed};
use crate::{Axes, Float, Term};

define_element! {
    /// Translation in 3D space.
    pub struct Translator[4] {
        [0] e01, set_e01: Term::unit(Axes::E01),
        [1] e02, set_e02: Term::unit(Axes::E02),
        [2] e03, set_e03: Term::unit(Axes::E03),
        [3] s, set_s: Term::scalar(1.0),
    }
}

/// Returns the identity.
impl Default for Translator {
    fn default() -> Self {
        Self::ident()
    }
}

impl Translator {
    /// Constructs the identity translator.
    pub const fn ident() -> Self {
        Self::from_coefs([0.0, 0.0, 0.0, 1.0])
    }
    /// Constructs a translator that moves points by `(dx, dy, dz)`.
    pub const fn new(dx: Float, dy: Float, dz: Float) -> Self {
        Self::from_coefs([dx * -0.5, dy * -0.5, dz * -0.5, 1.0])
    }

    /// Returns the displacement that the translator moves points by.
    pub fn delta(&self) -> [Float; 3] {
        let k = -2.0 / self.s();
        [self.e01() * k, self.e02() * k, self.e03() * k]
    }
    /// Returns the bivector part as an ideal line.
    pub const fn bivector(&self) -> IdealLine {
        IdealLine::new(self.e01(), self.e02(), self.e03())
    }
}

/// The primary norm of a translator is identically zero. Normalization still
/// rescales so that the scalar part is 1.
impl Normed for Translator {
    fn length_sq(&self) -> Float {
        0.0
    }
    fn infinity_length_sq(&self) -> Float {
        self.coefs().iter().map(|c| c * c).sum()
    }

    fn normalize(&mut self) -> &mut Self {
        *self *= self.s().recip();
        self
    }
}

impl Invertible for Translator {
    fn invert(&mut self) -> &mut Self {
        let scale = (self.s() * self.s()).recip();
        self.reverse();
        *self *= scale;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    #[test]
    fn test_translator() {
        let t = Translator::new(2.0, -4.0, 6.0);
        assert_eq!(t.to_coefs(), [-1.0, 2.0, -3.0, 1.0]);
        assert_eq!(t.delta(), [2.0, -4.0, 6.0]);
        assert_eq!((t * 2.0).delta(), [2.0, -4.0, 6.0]);
        assert_approx_eq!((t * -3.0).normalized(), t);
        assert_approx_eq!(t.inverted(), Translator::new(-2.0, 4.0, -6.0));
        assert_eq!(t.length(), 0.0);
        assert_eq!(t.infinity_length_sq(), 15.0);
    }

    #[test]
    fn test_translator_norms() {
        let t = Translator::from_coefs([1.0, -2.0, 3.0, 2.0]);
        assert_eq!(t.length_sq(), 0.0);
        assert_eq!(t.infinity_length(), 18.0_f64.sqrt());
        let n = t.normalized();
        assert_eq!(n.s(), 1.0);
        assert_eq!(n.length_sq(), 0.0);
        assert_eq!(n.infinity_length_sq(), 0.25 + 1.0 + 2.25 + 1.0);
        assert_eq!(t.inverted(), Translator::from_coefs([-0.25, 0.5, -0.75, 0.5]));
        assert_eq!(Translator::from_coefs([1.0, 0.0, 0.0, 0.0]).try_normalized(), None);
    }
}

use super::{Element, Normed};
use crate::{Axes, Float, Term};

define_element! {
    /// Line at infinity, which is the ideal (e₀) half of a [`super::Line`].
    ///
    /// The `e0123` slot holds the pseudoscalar part left over by products.
    pub struct IdealLine[4] {
        [0] e01, set_e01: Term::unit(Axes::E01),
        [1] e02, set_e02: Term::unit(Axes::E02),
        [2] e03, set_e03: Term::unit(Axes::E03),
        [3] e0123, set_e0123: Term::unit(Axes::E0123),
    }
}

impl Default for IdealLine {
    fn default() -> Self {
        Self::zero()
    }
}

impl IdealLine {
    /// Constructs an ideal line from its bivector components.
    pub const fn new(e01: Float, e02: Float, e03: Float) -> Self {
        Self::from_coefs([e01, e02, e03, 0.0])
    }
}

/// The primary norm of an ideal line is identically zero, so it normalizes by
/// its infinity norm instead.
impl Normed for IdealLine {
    fn length_sq(&self) -> Float {
        0.0
    }
    fn infinity_length_sq(&self) -> Float {
        self.coefs().iter().map(|c| c * c).sum()
    }

    fn normalize(&mut self) -> &mut Self {
        *self *= self.infinity_length().recip();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    #[test]
    fn test_ideal_line_normalize() {
        let l = IdealLine::new(1.0, 2.0, 3.0);
        assert_eq!(l.length(), 0.0);
        assert_approx_eq!(l.infinity_length(), 14.0_f64.sqrt());
        let n = l.normalized();
        assert_approx_eq!(n, IdealLine::new(0.2672612, 0.5345225, 0.8017837));
        assert_approx_eq!(n.normalized(), n);
    }
}

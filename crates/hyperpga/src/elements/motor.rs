use super::{Element, Invertible, Line, Normed, Rotor, Translator};
use crate::dual_number::{even_norm_sq, scale_even_by_dual};
use crate::{Axes, Float, Sign, Term, functional, products};

define_element! {
    /// Rigid motion (screw motion) in 3D space.
    ///
    /// A normalized motor `M` transforms an element `X` by the sandwich product
    /// `M X ~M`.
    pub struct Motor[8] {
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

/// Returns the identity.
impl Default for Motor {
    fn default() -> Self {
        Self::ident()
    }
}

impl From<Rotor> for Motor {
    fn from(value: Rotor) -> Self {
        let [o1, o2, o3, s] = value.to_coefs();
        Self::from_coefs([0.0, 0.0, 0.0, 0.0, o1, o2, o3, s])
    }
}
impl From<Translator> for Motor {
    fn from(value: Translator) -> Self {
        let [d1, d2, d3, s] = value.to_coefs();
        Self::from_coefs([d1, d2, d3, 0.0, 0.0, 0.0, 0.0, s])
    }
}

impl Motor {
    /// Constructs the identity motor.
    pub const fn ident() -> Self {
        Self::from_coefs([0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0])
    }
    /// Constructs a motor that first rotates by `rotor` and then translates by
    /// `translator`.
    pub fn from_rotor_translator(rotor: Rotor, translator: Translator) -> Self {
        products::geometric::translator_rotor(&translator, &rotor)
    }

    /// Returns the motor as a line, including its scalar and pseudoscalar
    /// parts.
    pub const fn to_line(self) -> Line {
        Line::from_coefs(self.to_coefs())
    }

    /// Returns the motor raised to the power `t`, computed as
    /// `exp(t * log(M))`. The motor should be normalized.
    #[must_use]
    pub fn powf(&self, t: Float) -> Self {
        functional::exp_line(&(functional::log_motor(self) * t))
    }
    /// Interpolates along the screw motion from `a` (at `t = 0`) to `b` (at
    /// `t = 1`). Both motors should be normalized.
    #[must_use]
    pub fn slerp(a: &Self, b: &Self, t: Float) -> Self {
        let delta = products::geometric::motor_motor(&a.reversed(), b);
        products::geometric::motor_motor(a, &delta.powf(t))
    }
}

impl Normed for Motor {
    fn length_sq(&self) -> Float {
        self.to_line().length_sq()
    }
    fn infinity_length_sq(&self) -> Float {
        self.to_line().infinity_length_sq()
    }

    /// Normalizes the motor so that `M * ~M = 1` using the dual-number square
    /// root.
    fn normalize(&mut self) -> &mut Self {
        let scale = even_norm_sq(self.to_coefs()).rsqrt();
        *self = Self::from_coefs(scale_even_by_dual(self.to_coefs(), scale));
        self
    }
}

impl Invertible for Motor {
    fn invert(&mut self) -> &mut Self {
        let scale = even_norm_sq(self.to_coefs()).recip();
        self.reverse();
        *self = Self::from_coefs(scale_even_by_dual(self.to_coefs(), scale));
        self
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;
    use crate::products::{geometric, sandwich};
    use crate::{Point, assert_approx_eq};

    #[test]
    fn test_motor_normalize_and_invert() {
        let m = Motor::from_coefs([0.3, -1.0, 2.0, 0.7, 1.0, 2.0, -0.5, 0.25]);
        let n = m.normalized();
        assert_approx_eq!(geometric::motor_motor(&n, &n.reversed()), Motor::ident());
        assert_approx_eq!(geometric::motor_motor(&m, &m.inverted()), Motor::ident());
        assert_approx_eq!(geometric::motor_motor(&m.inverted(), &m), Motor::ident());
        assert_eq!(Motor::zero().try_inverted(), None);
    }

    #[test]
    fn test_motor_composition() {
        let r = Rotor::new(0.0, 0.0, 1.0, PI / 2.0);
        let t = Translator::new(1.0, 2.0, 3.0);
        let m = Motor::from_rotor_translator(r, t);
        let p = Point::new(1.0, 0.0, 0.0);
        // Rotating (1, 0, 0) by 90° about Z gives (0, -1, 0) in this
        // convention, then translating gives (1, 1, 3).
        assert_approx_eq!(sandwich::point_by_motor(&p, &m), Point::new(1.0, 1.0, 3.0));
        assert_approx_eq!(m, geometric::motor_motor(&t.into(), &r.into()));
    }

    #[test]
    fn test_motor_powf_and_slerp() {
        let r = Rotor::new(0.0, 0.0, 1.0, PI / 2.0);
        let t = Translator::new(2.0, 0.0, 0.0);
        let m = Motor::from_rotor_translator(r, t);

        assert_approx_eq!(m.powf(0.0), Motor::ident());
        assert_approx_eq!(m.powf(1.0), m);
        let half = m.powf(0.5);
        assert_approx_eq!(geometric::motor_motor(&half, &half), m);

        let a = Motor::from(Translator::new(1.0, 0.0, 0.0));
        let b = Motor::from(Translator::new(3.0, 0.0, 0.0));
        let mid = Motor::slerp(&a, &b, 0.5);
        assert_approx_eq!(mid, Motor::from(Translator::new(2.0, 0.0, 0.0)));
        assert_approx_eq!(Motor::slerp(&a, &b, 1.0), b);
    }
}

use super::{Element, Invertible, Normed, OriginLine};
use crate::{Axes, Float, Sign, Term};

define_element! {
    /// Rotation about an axis through the origin.
    pub struct Rotor[4] {
        [0] e23, set_e23: Term::unit(Axes::E23),
        [1] e31, set_e31: Term::signed_unit(Sign::Neg, Axes::E13),
        [2] e12, set_e12: Term::unit(Axes::E12),
        [3] s, set_s: Term::scalar(1.0),
    }
}

/// Returns the identity.
impl Default for Rotor {
    fn default() -> Self {
        Self::ident()
    }
}

impl Rotor {
    /// Constructs the identity rotor.
    pub const fn ident() -> Self {
        Self::from_coefs([0.0, 0.0, 0.0, 1.0])
    }
    /// Constructs a rotation by `angle` radians about the axis `(x, y, z)`,
    /// which must be nonzero but need not be normalized.
    ///
    /// This is `exp(angle/2 * axis)`, and it rotates in the direction that
    /// takes +X toward -Y about +Z.
    pub fn new(x: Float, y: Float, z: Float, angle: Float) -> Self {
        let axis = OriginLine::new(x, y, z).normalized();
        let (sin, cos) = (angle / 2.0).sin_cos();
        Self::from_coefs([axis.e23() * sin, axis.e31() * sin, axis.e12() * sin, cos])
    }

    /// Returns the bivector part as a line through the origin.
    pub const fn bivector(&self) -> OriginLine {
        OriginLine::new(self.e23(), self.e31(), self.e12())
    }
}

impl Normed for Rotor {
    fn length_sq(&self) -> Float {
        self.coefs().iter().map(|c| c * c).sum()
    }
    fn infinity_length_sq(&self) -> Float {
        0.0
    }
}

impl Invertible for Rotor {
    fn invert(&mut self) -> &mut Self {
        let scale = self.length_sq().recip();
        self.reverse();
        *self *= scale;
        self
    }
}

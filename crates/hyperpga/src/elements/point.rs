use super::{Invertible, Normed};
use crate::{Axes, Float, Sign, Term, util};

define_element! {
    /// Point in 3D space in homogeneous coordinates.
    ///
    /// The point `(x, y, z)` is `x e032 + y e013 + z e021 + e123`. A point with
    /// zero `e123` lies at infinity and represents a direction.
    pub struct Point[4] {
        [0] e032, set_e032: Term::signed_unit(Sign::Neg, Axes::E023),
        [1] e013, set_e013: Term::unit(Axes::E013),
        [2] e021, set_e021: Term::signed_unit(Sign::Neg, Axes::E012),
        [3] e123, set_e123: Term::unit(Axes::E123),
    }
}

/// Returns the origin.
impl Default for Point {
    fn default() -> Self {
        Self::origin()
    }
}

impl Point {
    /// Constructs the point at the origin.
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
    /// Constructs the point `(x, y, z)`.
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self::from_coefs([x, y, z, 1.0])
    }
    /// Constructs a point from homogeneous coordinates.
    pub const fn with_weight(x: Float, y: Float, z: Float, w: Float) -> Self {
        Self::from_coefs([x, y, z, w])
    }
    /// Constructs the point at infinity in the direction `(x, y, z)`.
    pub const fn ideal(x: Float, y: Float, z: Float) -> Self {
        Self::from_coefs([x, y, z, 0.0])
    }

    /// Returns the Euclidean coordinates of the point, or `None` if it is at
    /// infinity.
    pub fn to_xyz(&self) -> Option<[Float; 3]> {
        let [x, y, z, w] = self.to_coefs();
        let k = util::try_div(1.0, w)?;
        Some([x * k, y * k, z * k])
    }
}

/// The primary norm of a point is its weight `e123`.
impl Normed for Point {
    fn length_sq(&self) -> Float {
        self.e123() * self.e123()
    }
    fn infinity_length_sq(&self) -> Float {
        self.e032() * self.e032() + self.e013() * self.e013() + self.e021() * self.e021()
    }

    /// Divides by the weight so that `e123` is exactly 1.
    fn normalize(&mut self) -> &mut Self {
        *self /= self.e123();
        self.set_e123(1.0);
        self
    }
}

/// A point squares to `-e123²`, so its inverse is `-P / e123²`.
impl Invertible for Point {
    fn invert(&mut self) -> &mut Self {
        *self *= -self.length_sq().recip();
        self
    }
}

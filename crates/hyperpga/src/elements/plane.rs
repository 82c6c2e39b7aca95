use super::{Invertible, Normed};
use crate::{Axes, Float, Term};

define_element! {
    /// Plane `ax + by + cz + d = 0`, stored as `a e1 + b e2 + c e3 + d e0`.
    pub struct Plane[4] {
        [0] e1, set_e1: Term::unit(Axes::E1),
        [1] e2, set_e2: Term::unit(Axes::E2),
        [2] e3, set_e3: Term::unit(Axes::E3),
        [3] e0, set_e0: Term::unit(Axes::E0),
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self::zero()
    }
}

impl Plane {
    /// Constructs the plane `ax + by + cz + d = 0`.
    pub const fn new(a: Float, b: Float, c: Float, d: Float) -> Self {
        Self::from_coefs([a, b, c, d])
    }
    /// Constructs the plane with unit normal `normal` whose signed distance
    /// from the origin is `distance`.
    pub fn from_normal_and_distance(normal: [Float; 3], distance: Float) -> Self {
        let [x, y, z] = normal;
        Self::new(x, y, z, -distance)
    }

    /// Returns the (unnormalized) normal vector.
    pub const fn normal(&self) -> [Float; 3] {
        [self.e1(), self.e2(), self.e3()]
    }
}

impl Normed for Plane {
    fn length_sq(&self) -> Float {
        self.e1() * self.e1() + self.e2() * self.e2() + self.e3() * self.e3()
    }
    fn infinity_length_sq(&self) -> Float {
        self.e0() * self.e0()
    }
}

impl Invertible for Plane {
    fn invert(&mut self) -> &mut Self {
        *self /= self.length_sq();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;
    use crate::elements::Element;

    #[test]
    fn test_plane_norms() {
        let mut p = Plane::new(3.0, 0.0, 4.0, 10.0);
        assert_eq!(p.length(), 5.0);
        assert_eq!(p.infinity_length(), 10.0);
        p.normalize();
        assert_approx_eq!(p, Plane::new(0.6, 0.0, 0.8, 2.0));
        assert_approx_eq!(p.normalized(), p);
    }

    #[test]
    fn test_plane_accessors() {
        let mut p = Plane::default();
        p.set_e2(2.0).set_e0(-1.0);
        assert_eq!(p.to_coefs(), [0.0, 2.0, 0.0, -1.0]);
        assert_eq!(p[1], 2.0);
        assert_eq!(p.normal(), [0.0, 2.0, 0.0]);
        assert_eq!(
            Plane::from_normal_and_distance([0.0, 1.0, 0.0], 0.5),
            Plane::new(0.0, 1.0, 0.0, -0.5),
        );
        assert_eq!(Plane::TYPE, crate::ElementType::Plane);
    }

    #[test]
    fn test_plane_zero_norm() {
        assert_eq!(Plane::new(0.0, 0.0, 0.0, 1.0).try_normalized(), None);
        assert_eq!(Plane::zero().try_inverted(), None);
        assert!(!Plane::zero().normalized().is_finite());
    }

    #[test]
    fn test_plane_display() {
        assert_eq!(Plane::new(1.0, 0.0, -2.5, 0.0).to_string(), "1 e1 - 2.5 e3");
        assert_eq!(Plane::zero().to_string(), "0");
    }
}

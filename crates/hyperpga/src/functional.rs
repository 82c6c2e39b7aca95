//! Exponential, logarithm, and square root of bivectors and motions.
//!
//! Each operator splits its input into a Euclidean (rotational) bivector `o`
//! and an ideal (translational) bivector `d`. Inputs to [`exp_line()`] and
//! friends are treated as pure bivectors: their `s` and `e0123` slots are
//! ignored.
//!
//! The exponential of a line `L` is the motor that screws by twice the
//! rotation angle and twice the translation encoded in `L`, so
//! `exp(angle/2 * axis)` rotates by `angle`.

use crate::dual_number::{DualNumber, even_norm_sq, scale_even_by_dual};
use crate::elements::Element;
use crate::{Float, IdealLine, LOG_SCALAR_EPSILON, Line, Motor, OriginLine, Rotor, Translator};

fn dot3(a: [Float; 3], b: [Float; 3]) -> Float {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Exponential of an ideal line, which is a translator.
pub fn exp_ideal_line(a: &IdealLine) -> Translator {
    Translator::from_coefs([a.e01(), a.e02(), a.e03(), 1.0])
}

/// Exponential of a line through the origin, which is a rotor.
pub fn exp_origin_line(a: &OriginLine) -> Rotor {
    let o = [a.e23(), a.e31(), a.e12()];
    let aa = dot3(o, o);
    if aa == 0.0 {
        return Rotor::ident();
    }
    let angle = aa.sqrt();
    let sinc = angle.sin() / angle;
    Rotor::from_coefs([o[0] * sinc, o[1] * sinc, o[2] * sinc, angle.cos()])
}

/// Exponential of a line, which is a motor.
pub fn exp_line(a: &Line) -> Motor {
    let d = [a.e01(), a.e02(), a.e03()];
    let o = [a.e23(), a.e31(), a.e12()];
    let aa = dot3(o, o);
    if aa == 0.0 {
        log::trace!("exp of line with no rotation is a pure translation");
        return Motor::from_coefs([d[0], d[1], d[2], 0.0, 0.0, 0.0, 0.0, 1.0]);
    }
    let m = dot3(o, d);
    let angle = aa.sqrt();
    let (sin, cos) = angle.sin_cos();
    let sinc = sin / angle;
    let t = m / aa * (cos - sinc);
    Motor::from_coefs([
        sinc * d[0] + t * o[0],
        sinc * d[1] + t * o[1],
        sinc * d[2] + t * o[2],
        m * sinc,
        sinc * o[0],
        sinc * o[1],
        sinc * o[2],
        cos,
    ])
}

/// Logarithm of a normalized translator.
pub fn log_translator(a: &Translator) -> IdealLine {
    let s = a.s();
    IdealLine::new(a.e01() / s, a.e02() / s, a.e03() / s)
}

/// Logarithm of a normalized rotor.
///
/// Returns NaN if the scalar part is outside `[-1, 1]`.
pub fn log_rotor(a: &Rotor) -> OriginLine {
    let bivector = a.bivector();
    if bivector.is_zero() {
        return OriginLine::zero();
    }
    let angle = a.s().acos();
    let sin = angle.sin();
    let scale = match sin == 0.0 {
        true => 1.0,
        false => angle / sin,
    };
    bivector * scale
}

/// Logarithm of a normalized motor.
///
/// When the scalar part is near zero (a rotation near 180°), the ideal part of
/// the angle is recovered from the pseudoscalar instead of by dividing by the
/// scalar.
pub fn log_motor(a: &Motor) -> Line {
    let d = [a.e01(), a.e02(), a.e03()];
    let o = [a.e23(), a.e31(), a.e12()];
    let (p, s) = (a.e0123(), a.s());
    let aa = dot3(o, o);
    if aa == 0.0 {
        log::trace!("log of motor with no rotation is a pure translation");
        return Line::new(d[0] / s, d[1] / s, d[2] / s, 0.0, 0.0, 0.0);
    }
    let m = dot3(o, d);
    let len = aa.sqrt();
    // `u + vI` is the dual angle of the motor.
    let u = len.atan2(s);
    let v = if s.abs() >= LOG_SCALAR_EPSILON {
        -m / len / s
    } else {
        log::trace!("log of motor near 180° rotation; using pseudoscalar part");
        -p / len
    };
    let k = u / len;
    let h = u * m / (aa * len) + v / len;
    Line::new(
        k * d[0] - h * o[0],
        k * d[1] - h * o[1],
        k * d[2] - h * o[2],
        k * o[0],
        k * o[1],
        k * o[2],
    )
}

/// Square root of a normalized translator.
pub fn sqrt_translator(a: &Translator) -> Translator {
    let k = (a.s() + 1.0).recip();
    Translator::from_coefs([a.e01() * k, a.e02() * k, a.e03() * k, 1.0])
}

/// Square root of a normalized rotor.
pub fn sqrt_rotor(a: &Rotor) -> Rotor {
    let mut ret = *a;
    ret.set_s(a.s() + 1.0);
    let len_sq = ret.coefs().iter().map(|c| c * c).sum::<Float>();
    ret * len_sq.sqrt().recip()
}

/// Square root of a normalized motor.
pub fn sqrt_motor(a: &Motor) -> Motor {
    let mut coefs = a.to_coefs();
    coefs[7] += 1.0;
    let scale: DualNumber = even_norm_sq(coefs).rsqrt();
    Motor::from_coefs(scale_even_by_dual(coefs, scale))
}

/// Square root of a line, treated as a motor.
pub fn sqrt_line(a: &Line) -> Motor {
    sqrt_motor(&Motor::from_coefs(a.to_coefs()))
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::*;
    use crate::assert_approx_eq;
    use crate::elements::Normed;
    use crate::products::geometric;

    #[test]
    fn test_exp_log_rotor() {
        let axis = OriginLine::new(1.0, 2.0, 2.0) / 3.0;
        let r = exp_origin_line(&(axis * 0.6));
        assert_approx_eq!(r.length(), 1.0);
        assert_approx_eq!(r, Rotor::new(1.0, 2.0, 2.0, 1.2));
        assert_approx_eq!(log_rotor(&r), axis * 0.6);
        assert_eq!(exp_origin_line(&OriginLine::zero()), Rotor::ident());
        assert_eq!(log_rotor(&Rotor::ident()), OriginLine::zero());
        assert!(log_rotor(&Rotor::from_coefs([0.1, 0.0, 0.0, 2.0])).e23().is_nan());
    }

    #[test]
    fn test_exp_log_translator() {
        let t = exp_ideal_line(&IdealLine::new(-0.5, 1.0, 0.0));
        assert_eq!(t, Translator::new(1.0, -2.0, 0.0));
        assert_eq!(log_translator(&t), IdealLine::new(-0.5, 1.0, 0.0));
    }

    #[test]
    fn test_exp_log_motor() {
        let l = Line::new(0.3, -0.2, 0.5, 0.1, 0.4, -0.7);
        let m = exp_line(&l);
        assert_approx_eq!(geometric::motor_motor(&m, &m.reversed()), Motor::ident());
        assert_approx_eq!(log_motor(&m), l);

        // Pure translation
        let l = Line::new(1.0, 2.0, 3.0, 0.0, 0.0, 0.0);
        assert_approx_eq!(exp_line(&l), Motor::from(Translator::new(-2.0, -4.0, -6.0)));
        assert_approx_eq!(log_motor(&exp_line(&l)), l);
    }

    #[test]
    fn test_log_motor_near_half_turn() {
        // Rotation by 180° about the Z axis through (1, 0, 0).
        let r = Rotor::new(0.0, 0.0, 1.0, PI);
        let t = Translator::new(1.0, 0.0, 0.0);
        let m = geometric::motor_motor(
            &geometric::translator_rotor(&t, &r),
            &Motor::from(Translator::new(-1.0, 0.0, 0.0)),
        );
        assert!(m.s().abs() < LOG_SCALAR_EPSILON);
        let l = log_motor(&m);
        assert!(l.is_finite());
        assert_approx_eq!(exp_line(&l), m);
        assert_approx_eq!(l.e12(), FRAC_PI_2);
    }

    #[test]
    fn test_sqrt() {
        let t = Translator::new(4.0, 0.0, -2.0);
        assert_approx_eq!(sqrt_translator(&t), Translator::new(2.0, 0.0, -1.0));

        let r = Rotor::new(1.0, 1.0, 0.0, 1.0);
        let half = sqrt_rotor(&r);
        assert_approx_eq!(half, Rotor::new(1.0, 1.0, 0.0, 0.5));
        assert_approx_eq!(geometric::rotor_rotor(&half, &half), r);

        let m = exp_line(&Line::new(0.3, -0.2, 0.5, 0.1, 0.4, -0.7));
        let half = sqrt_motor(&m);
        assert_approx_eq!(geometric::motor_motor(&half, &half), m);
        assert_approx_eq!(sqrt_line(&m.to_line()), half);
    }
}

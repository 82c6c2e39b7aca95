//! Geometric products.
//!
//! Products between primitives use every coefficient, including the scalar
//! and pseudoscalar slots of lines. The product of two ideal lines is
//! identically zero and has no formula here.

use crate::{IdealLine, Line, Motor, Multivector, OriginLine, Plane, Point, Rotor, Translator};

/// Geometric product of a plane and a plane.
pub fn plane_plane(a: &Plane, b: &Plane) -> Motor {
    Motor::from_coefs([
        -a[0] * b[3] + a[3] * b[0],
        -a[1] * b[3] + a[3] * b[1],
        -a[2] * b[3] + a[3] * b[2],
        0.0,
        a[1] * b[2] - a[2] * b[1],
        -a[0] * b[2] + a[2] * b[0],
        a[0] * b[1] - a[1] * b[0],
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2],
    ])
}

/// Geometric product of a plane and an ideal line.
pub fn plane_ideal_line(a: &Plane, b: &IdealLine) -> Multivector {
    Multivector::from_coefs([
        0.0,
        -a[0] * b[0] - a[1] * b[1] - a[2] * b[2],
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        a[0] * b[1] - a[1] * b[0] + a[2] * b[3],
        -a[0] * b[2] + a[1] * b[3] + a[2] * b[0],
        a[0] * b[3] + a[1] * b[2] - a[2] * b[1],
        0.0,
        0.0,
    ])
}

/// Geometric product of a plane and an origin line.
pub fn plane_origin_line(a: &Plane, b: &OriginLine) -> Multivector {
    Multivector::from_coefs([
        0.0,
        a[3] * b[3],
        a[0] * b[3] - a[1] * b[2] + a[2] * b[1],
        a[0] * b[2] + a[1] * b[3] - a[2] * b[0],
        -a[0] * b[1] + a[1] * b[0] + a[2] * b[3],
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        -a[3] * b[2],
        -a[3] * b[1],
        -a[3] * b[0],
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2],
        0.0,
    ])
}

/// Geometric product of a plane and a line.
pub fn plane_line(a: &Plane, b: &Line) -> Multivector {
    Multivector::from_coefs([
        0.0,
        -a[0] * b[0] - a[1] * b[1] - a[2] * b[2] + a[3] * b[7],
        a[0] * b[7] - a[1] * b[6] + a[2] * b[5],
        a[0] * b[6] + a[1] * b[7] - a[2] * b[4],
        -a[0] * b[5] + a[1] * b[4] + a[2] * b[7],
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        a[0] * b[1] - a[1] * b[0] + a[2] * b[3] - a[3] * b[6],
        -a[0] * b[2] + a[1] * b[3] + a[2] * b[0] - a[3] * b[5],
        a[0] * b[3] + a[1] * b[2] - a[2] * b[1] - a[3] * b[4],
        a[0] * b[4] + a[1] * b[5] + a[2] * b[6],
        0.0,
    ])
}

/// Geometric product of a plane and a point.
pub fn plane_point(a: &Plane, b: &Point) -> Motor {
    Motor::from_coefs([
        -a[1] * b[2] + a[2] * b[1],
        a[0] * b[2] - a[2] * b[0],
        -a[0] * b[1] + a[1] * b[0],
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3],
        a[0] * b[3],
        a[1] * b[3],
        a[2] * b[3],
        0.0,
    ])
}

/// Geometric product of an ideal line and a plane.
pub fn ideal_line_plane(a: &IdealLine, b: &Plane) -> Multivector {
    Multivector::from_coefs([
        0.0,
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2],
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        -a[0] * b[1] + a[1] * b[0] - a[3] * b[2],
        a[0] * b[2] - a[2] * b[0] - a[3] * b[1],
        -a[1] * b[2] + a[2] * b[1] - a[3] * b[0],
        0.0,
        0.0,
    ])
}

/// Geometric product of an ideal line and an origin line.
pub fn ideal_line_origin_line(a: &IdealLine, b: &OriginLine) -> Motor {
    Motor::from_coefs([
        a[0] * b[3] - a[1] * b[2] + a[2] * b[1] - a[3] * b[0],
        a[0] * b[2] + a[1] * b[3] - a[2] * b[0] - a[3] * b[1],
        -a[0] * b[1] + a[1] * b[0] + a[2] * b[3] - a[3] * b[2],
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3],
        0.0,
        0.0,
        0.0,
        0.0,
    ])
}

/// Geometric product of an ideal line and a line.
pub fn ideal_line_line(a: &IdealLine, b: &Line) -> Motor {
    Motor::from_coefs([
        a[0] * b[7] - a[1] * b[6] + a[2] * b[5] - a[3] * b[4],
        a[0] * b[6] + a[1] * b[7] - a[2] * b[4] - a[3] * b[5],
        -a[0] * b[5] + a[1] * b[4] + a[2] * b[7] - a[3] * b[6],
        a[0] * b[4] + a[1] * b[5] + a[2] * b[6] + a[3] * b[7],
        0.0,
        0.0,
        0.0,
        0.0,
    ])
}

/// Geometric product of an ideal line and a point.
pub fn ideal_line_point(a: &IdealLine, b: &Point) -> Multivector {
    Multivector::from_coefs([
        0.0,
        -a[3] * b[3],
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        -a[2] * b[3],
        -a[1] * b[3],
        -a[0] * b[3],
        0.0,
        0.0,
    ])
}

/// Geometric product of an origin line and a plane.
pub fn origin_line_plane(a: &OriginLine, b: &Plane) -> Multivector {
    Multivector::from_coefs([
        0.0,
        a[3] * b[3],
        -a[1] * b[2] + a[2] * b[1] + a[3] * b[0],
        a[0] * b[2] - a[2] * b[0] + a[3] * b[1],
        -a[0] * b[1] + a[1] * b[0] + a[3] * b[2],
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        -a[2] * b[3],
        -a[1] * b[3],
        -a[0] * b[3],
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2],
        0.0,
    ])
}

/// Geometric product of an origin line and an ideal line.
pub fn origin_line_ideal_line(a: &OriginLine, b: &IdealLine) -> Motor {
    Motor::from_coefs([
        -a[0] * b[3] - a[1] * b[2] + a[2] * b[1] + a[3] * b[0],
        a[0] * b[2] - a[1] * b[3] - a[2] * b[0] + a[3] * b[1],
        -a[0] * b[1] + a[1] * b[0] - a[2] * b[3] + a[3] * b[2],
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3],
        0.0,
        0.0,
        0.0,
        0.0,
    ])
}

/// Geometric product of an origin line and an origin line.
pub fn origin_line_origin_line(a: &OriginLine, b: &OriginLine) -> Rotor {
    Rotor::from_coefs([
        a[0] * b[3] - a[1] * b[2] + a[2] * b[1] + a[3] * b[0],
        a[0] * b[2] + a[1] * b[3] - a[2] * b[0] + a[3] * b[1],
        -a[0] * b[1] + a[1] * b[0] + a[2] * b[3] + a[3] * b[2],
        -a[0] * b[0] - a[1] * b[1] - a[2] * b[2] + a[3] * b[3],
    ])
}

/// Geometric product of an origin line and a line.
pub fn origin_line_line(a: &OriginLine, b: &Line) -> Motor {
    Motor::from_coefs([
        -a[0] * b[3] - a[1] * b[2] + a[2] * b[1] + a[3] * b[0],
        a[0] * b[2] - a[1] * b[3] - a[2] * b[0] + a[3] * b[1],
        -a[0] * b[1] + a[1] * b[0] - a[2] * b[3] + a[3] * b[2],
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3],
        a[0] * b[7] - a[1] * b[6] + a[2] * b[5] + a[3] * b[4],
        a[0] * b[6] + a[1] * b[7] - a[2] * b[4] + a[3] * b[5],
        -a[0] * b[5] + a[1] * b[4] + a[2] * b[7] + a[3] * b[6],
        -a[0] * b[4] - a[1] * b[5] - a[2] * b[6] + a[3] * b[7],
    ])
}

/// Geometric product of an origin line and a point.
pub fn origin_line_point(a: &OriginLine, b: &Point) -> Multivector {
    Multivector::from_coefs([
        0.0,
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2],
        -a[0] * b[3],
        -a[1] * b[3],
        -a[2] * b[3],
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        -a[0] * b[1] + a[1] * b[0] + a[3] * b[2],
        a[0] * b[2] - a[2] * b[0] + a[3] * b[1],
        -a[1] * b[2] + a[2] * b[1] + a[3] * b[0],
        a[3] * b[3],
        0.0,
    ])
}

/// Geometric product of a line and a plane.
pub fn line_plane(a: &Line, b: &Plane) -> Multivector {
    Multivector::from_coefs([
        0.0,
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[7] * b[3],
        -a[5] * b[2] + a[6] * b[1] + a[7] * b[0],
        a[4] * b[2] - a[6] * b[0] + a[7] * b[1],
        -a[4] * b[1] + a[5] * b[0] + a[7] * b[2],
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        -a[0] * b[1] + a[1] * b[0] - a[3] * b[2] - a[6] * b[3],
        a[0] * b[2] - a[2] * b[0] - a[3] * b[1] - a[5] * b[3],
        -a[1] * b[2] + a[2] * b[1] - a[3] * b[0] - a[4] * b[3],
        a[4] * b[0] + a[5] * b[1] + a[6] * b[2],
        0.0,
    ])
}

/// Geometric product of a line and an ideal line.
pub fn line_ideal_line(a: &Line, b: &IdealLine) -> Motor {
    Motor::from_coefs([
        -a[4] * b[3] - a[5] * b[2] + a[6] * b[1] + a[7] * b[0],
        a[4] * b[2] - a[5] * b[3] - a[6] * b[0] + a[7] * b[1],
        -a[4] * b[1] + a[5] * b[0] - a[6] * b[3] + a[7] * b[2],
        a[4] * b[0] + a[5] * b[1] + a[6] * b[2] + a[7] * b[3],
        0.0,
        0.0,
        0.0,
        0.0,
    ])
}

/// Geometric product of a line and an origin line.
pub fn line_origin_line(a: &Line, b: &OriginLine) -> Motor {
    Motor::from_coefs([
        a[0] * b[3] - a[1] * b[2] + a[2] * b[1] - a[3] * b[0],
        a[0] * b[2] + a[1] * b[3] - a[2] * b[0] - a[3] * b[1],
        -a[0] * b[1] + a[1] * b[0] + a[2] * b[3] - a[3] * b[2],
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3],
        a[4] * b[3] - a[5] * b[2] + a[6] * b[1] + a[7] * b[0],
        a[4] * b[2] + a[5] * b[3] - a[6] * b[0] + a[7] * b[1],
        -a[4] * b[1] + a[5] * b[0] + a[6] * b[3] + a[7] * b[2],
        -a[4] * b[0] - a[5] * b[1] - a[6] * b[2] + a[7] * b[3],
    ])
}

/// Geometric product of a line and a line.
pub fn line_line(a: &Line, b: &Line) -> Motor {
    Motor::from_coefs([
        a[0] * b[7] - a[1] * b[6] + a[2] * b[5] - a[3] * b[4] - a[4] * b[3] - a[5] * b[2]
            + a[6] * b[1] + a[7] * b[0],
        a[0] * b[6] + a[1] * b[7] - a[2] * b[4] - a[3] * b[5] + a[4] * b[2] - a[5] * b[3]
            - a[6] * b[0] + a[7] * b[1],
        -a[0] * b[5] + a[1] * b[4] + a[2] * b[7] - a[3] * b[6] - a[4] * b[1] + a[5] * b[0]
            - a[6] * b[3] + a[7] * b[2],
        a[0] * b[4] + a[1] * b[5] + a[2] * b[6] + a[3] * b[7] + a[4] * b[0] + a[5] * b[1]
            + a[6] * b[2] + a[7] * b[3],
        a[4] * b[7] - a[5] * b[6] + a[6] * b[5] + a[7] * b[4],
        a[4] * b[6] + a[5] * b[7] - a[6] * b[4] + a[7] * b[5],
        -a[4] * b[5] + a[5] * b[4] + a[6] * b[7] + a[7] * b[6],
        -a[4] * b[4] - a[5] * b[5] - a[6] * b[6] + a[7] * b[7],
    ])
}

/// Geometric product of a line and a point.
pub fn line_point(a: &Line, b: &Point) -> Multivector {
    Multivector::from_coefs([
        0.0,
        -a[3] * b[3] + a[4] * b[0] + a[5] * b[1] + a[6] * b[2],
        -a[4] * b[3],
        -a[5] * b[3],
        -a[6] * b[3],
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        -a[2] * b[3] - a[4] * b[1] + a[5] * b[0] + a[7] * b[2],
        -a[1] * b[3] + a[4] * b[2] - a[6] * b[0] + a[7] * b[1],
        -a[0] * b[3] - a[5] * b[2] + a[6] * b[1] + a[7] * b[0],
        a[7] * b[3],
        0.0,
    ])
}

/// Geometric product of a point and a plane.
pub fn point_plane(a: &Point, b: &Plane) -> Motor {
    Motor::from_coefs([
        a[1] * b[2] - a[2] * b[1],
        -a[0] * b[2] + a[2] * b[0],
        a[0] * b[1] - a[1] * b[0],
        -a[0] * b[0] - a[1] * b[1] - a[2] * b[2] - a[3] * b[3],
        a[3] * b[0],
        a[3] * b[1],
        a[3] * b[2],
        0.0,
    ])
}

/// Geometric product of a point and an ideal line.
pub fn point_ideal_line(a: &Point, b: &IdealLine) -> Multivector {
    Multivector::from_coefs([
        0.0,
        a[3] * b[3],
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        a[3] * b[2],
        a[3] * b[1],
        a[3] * b[0],
        0.0,
        0.0,
    ])
}

/// Geometric product of a point and an origin line.
pub fn point_origin_line(a: &Point, b: &OriginLine) -> Multivector {
    Multivector::from_coefs([
        0.0,
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2],
        -a[3] * b[0],
        -a[3] * b[1],
        -a[3] * b[2],
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        -a[0] * b[1] + a[1] * b[0] + a[2] * b[3],
        a[0] * b[2] + a[1] * b[3] - a[2] * b[0],
        a[0] * b[3] - a[1] * b[2] + a[2] * b[1],
        a[3] * b[3],
        0.0,
    ])
}

/// Geometric product of a point and a line.
pub fn point_line(a: &Point, b: &Line) -> Multivector {
    Multivector::from_coefs([
        0.0,
        a[0] * b[4] + a[1] * b[5] + a[2] * b[6] + a[3] * b[3],
        -a[3] * b[4],
        -a[3] * b[5],
        -a[3] * b[6],
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        -a[0] * b[5] + a[1] * b[4] + a[2] * b[7] + a[3] * b[2],
        a[0] * b[6] + a[1] * b[7] - a[2] * b[4] + a[3] * b[1],
        a[0] * b[7] - a[1] * b[6] + a[2] * b[5] + a[3] * b[0],
        a[3] * b[7],
        0.0,
    ])
}

/// Geometric product of a point and a point.
pub fn point_point(a: &Point, b: &Point) -> Translator {
    Translator::from_coefs([
        a[0] * b[3] - a[3] * b[0],
        a[1] * b[3] - a[3] * b[1],
        a[2] * b[3] - a[3] * b[2],
        -a[3] * b[3],
    ])
}

/// Geometric product of a motor and a motor.
pub fn motor_motor(a: &Motor, b: &Motor) -> Motor {
    Motor::from_coefs([
        a[0] * b[7] - a[1] * b[6] + a[2] * b[5] - a[3] * b[4] - a[4] * b[3] - a[5] * b[2]
            + a[6] * b[1] + a[7] * b[0],
        a[0] * b[6] + a[1] * b[7] - a[2] * b[4] - a[3] * b[5] + a[4] * b[2] - a[5] * b[3]
            - a[6] * b[0] + a[7] * b[1],
        -a[0] * b[5] + a[1] * b[4] + a[2] * b[7] - a[3] * b[6] - a[4] * b[1] + a[5] * b[0]
            - a[6] * b[3] + a[7] * b[2],
        a[0] * b[4] + a[1] * b[5] + a[2] * b[6] + a[3] * b[7] + a[4] * b[0] + a[5] * b[1]
            + a[6] * b[2] + a[7] * b[3],
        a[4] * b[7] - a[5] * b[6] + a[6] * b[5] + a[7] * b[4],
        a[4] * b[6] + a[5] * b[7] - a[6] * b[4] + a[7] * b[5],
        -a[4] * b[5] + a[5] * b[4] + a[6] * b[7] + a[7] * b[6],
        -a[4] * b[4] - a[5] * b[5] - a[6] * b[6] + a[7] * b[7],
    ])
}

/// Geometric product of a motor and a rotor.
pub fn motor_rotor(a: &Motor, b: &Rotor) -> Motor {
    Motor::from_coefs([
        a[0] * b[3] - a[1] * b[2] + a[2] * b[1] - a[3] * b[0],
        a[0] * b[2] + a[1] * b[3] - a[2] * b[0] - a[3] * b[1],
        -a[0] * b[1] + a[1] * b[0] + a[2] * b[3] - a[3] * b[2],
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3],
        a[4] * b[3] - a[5] * b[2] + a[6] * b[1] + a[7] * b[0],
        a[4] * b[2] + a[5] * b[3] - a[6] * b[0] + a[7] * b[1],
        -a[4] * b[1] + a[5] * b[0] + a[6] * b[3] + a[7] * b[2],
        -a[4] * b[0] - a[5] * b[1] - a[6] * b[2] + a[7] * b[3],
    ])
}

/// Geometric product of a motor and a translator.
pub fn motor_translator(a: &Motor, b: &Translator) -> Motor {
    Motor::from_coefs([
        a[0] * b[3] - a[5] * b[2] + a[6] * b[1] + a[7] * b[0],
        a[1] * b[3] + a[4] * b[2] - a[6] * b[0] + a[7] * b[1],
        a[2] * b[3] - a[4] * b[1] + a[5] * b[0] + a[7] * b[2],
        a[3] * b[3] + a[4] * b[0] + a[5] * b[1] + a[6] * b[2],
        a[4] * b[3],
        a[5] * b[3],
        a[6] * b[3],
        a[7] * b[3],
    ])
}

/// Geometric product of a rotor and a motor.
pub fn rotor_motor(a: &Rotor, b: &Motor) -> Motor {
    Motor::from_coefs([
        -a[0] * b[3] - a[1] * b[2] + a[2] * b[1] + a[3] * b[0],
        a[0] * b[2] - a[1] * b[3] - a[2] * b[0] + a[3] * b[1],
        -a[0] * b[1] + a[1] * b[0] - a[2] * b[3] + a[3] * b[2],
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3],
        a[0] * b[7] - a[1] * b[6] + a[2] * b[5] + a[3] * b[4],
        a[0] * b[6] + a[1] * b[7] - a[2] * b[4] + a[3] * b[5],
        -a[0] * b[5] + a[1] * b[4] + a[2] * b[7] + a[3] * b[6],
        -a[0] * b[4] - a[1] * b[5] - a[2] * b[6] + a[3] * b[7],
    ])
}

/// Geometric product of a rotor and a rotor.
pub fn rotor_rotor(a: &Rotor, b: &Rotor) -> Rotor {
    Rotor::from_coefs([
        a[0] * b[3] - a[1] * b[2] + a[2] * b[1] + a[3] * b[0],
        a[0] * b[2] + a[1] * b[3] - a[2] * b[0] + a[3] * b[1],
        -a[0] * b[1] + a[1] * b[0] + a[2] * b[3] + a[3] * b[2],
        -a[0] * b[0] - a[1] * b[1] - a[2] * b[2] + a[3] * b[3],
    ])
}

/// Geometric product of a rotor and a translator.
pub fn rotor_translator(a: &Rotor, b: &Translator) -> Motor {
    Motor::from_coefs([
        -a[1] * b[2] + a[2] * b[1] + a[3] * b[0],
        a[0] * b[2] - a[2] * b[0] + a[3] * b[1],
        -a[0] * b[1] + a[1] * b[0] + a[3] * b[2],
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2],
        a[0] * b[3],
        a[1] * b[3],
        a[2] * b[3],
        a[3] * b[3],
    ])
}

/// Geometric product of a translator and a motor.
pub fn translator_motor(a: &Translator, b: &Motor) -> Motor {
    Motor::from_coefs([
        a[0] * b[7] - a[1] * b[6] + a[2] * b[5] + a[3] * b[0],
        a[0] * b[6] + a[1] * b[7] - a[2] * b[4] + a[3] * b[1],
        -a[0] * b[5] + a[1] * b[4] + a[2] * b[7] + a[3] * b[2],
        a[0] * b[4] + a[1] * b[5] + a[2] * b[6] + a[3] * b[3],
        a[3] * b[4],
        a[3] * b[5],
        a[3] * b[6],
        a[3] * b[7],
    ])
}

/// Geometric product of a translator and a rotor.
pub fn translator_rotor(a: &Translator, b: &Rotor) -> Motor {
    Motor::from_coefs([
        a[0] * b[3] - a[1] * b[2] + a[2] * b[1],
        a[0] * b[2] + a[1] * b[3] - a[2] * b[0],
        -a[0] * b[1] + a[1] * b[0] + a[2] * b[3],
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2],
        a[3] * b[0],
        a[3] * b[1],
        a[3] * b[2],
        a[3] * b[3],
    ])
}

/// Geometric product of a translator and a translator.
pub fn translator_translator(a: &Translator, b: &Translator) -> Translator {
    Translator::from_coefs([
        a[0] * b[3] + a[3] * b[0],
        a[1] * b[3] + a[3] * b[1],
        a[2] * b[3] + a[3] * b[2],
        a[3] * b[3],
    ])
}

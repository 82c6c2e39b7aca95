//! Regressive products (join) between primitives, equal to
//! `dual(dual(a) ∧ dual(b))`.
//!
//! Operands are treated as pure blades: lines contribute only their bivector
//! parts.

use crate::{Float, IdealLine, Line, OriginLine, Plane, Point};

/// Regressive product (join) of a plane and a point.
pub fn plane_point(a: &Plane, b: &Point) -> Float {
    -a[0] * b[0] - a[1] * b[1] - a[2] * b[2] - a[3] * b[3]
}

/// Regressive product (join) of an ideal line and an origin line.
pub fn ideal_line_origin_line(a: &IdealLine, b: &OriginLine) -> Float {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Regressive product (join) of an ideal line and a line.
pub fn ideal_line_line(a: &IdealLine, b: &Line) -> Float {
    a[0] * b[4] + a[1] * b[5] + a[2] * b[6]
}

/// Regressive product (join) of an ideal line and a point.
pub fn ideal_line_point(a: &IdealLine, b: &Point) -> Plane {
    Plane::from_coefs([
        -a[0] * b[3],
        -a[1] * b[3],
        -a[2] * b[3],
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2],
    ])
}

/// Regressive product (join) of an origin line and an ideal line.
pub fn origin_line_ideal_line(a: &OriginLine, b: &IdealLine) -> Float {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Regressive product (join) of an origin line and a line.
pub fn origin_line_line(a: &OriginLine, b: &Line) -> Float {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Regressive product (join) of an origin line and a point.
pub fn origin_line_point(a: &OriginLine, b: &Point) -> Plane {
    Plane::from_coefs([
        -a[1] * b[2] + a[2] * b[1],
        a[0] * b[2] - a[2] * b[0],
        -a[0] * b[1] + a[1] * b[0],
        0.0,
    ])
}

/// Regressive product (join) of a line and an ideal line.
pub fn line_ideal_line(a: &Line, b: &IdealLine) -> Float {
    a[4] * b[0] + a[5] * b[1] + a[6] * b[2]
}

/// Regressive product (join) of a line and an origin line.
pub fn line_origin_line(a: &Line, b: &OriginLine) -> Float {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Regressive product (join) of a line and a line.
pub fn line_line(a: &Line, b: &Line) -> Float {
    a[0] * b[4] + a[1] * b[5] + a[2] * b[6] + a[4] * b[0] + a[5] * b[1] + a[6] * b[2]
}

/// Regressive product (join) of a line and a point.
pub fn line_point(a: &Line, b: &Point) -> Plane {
    Plane::from_coefs([
        -a[0] * b[3] - a[5] * b[2] + a[6] * b[1],
        -a[1] * b[3] + a[4] * b[2] - a[6] * b[0],
        -a[2] * b[3] - a[4] * b[1] + a[5] * b[0],
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2],
    ])
}

/// Regressive product (join) of a point and a plane.
pub fn point_plane(a: &Point, b: &Plane) -> Float {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
}

/// Regressive product (join) of a point and an ideal line.
pub fn point_ideal_line(a: &Point, b: &IdealLine) -> Plane {
    Plane::from_coefs([
        -a[3] * b[0],
        -a[3] * b[1],
        -a[3] * b[2],
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2],
    ])
}

/// Regressive product (join) of a point and an origin line.
pub fn point_origin_line(a: &Point, b: &OriginLine) -> Plane {
    Plane::from_coefs([
        a[1] * b[2] - a[2] * b[1],
        -a[0] * b[2] + a[2] * b[0],
        a[0] * b[1] - a[1] * b[0],
        0.0,
    ])
}

/// Regressive product (join) of a point and a line.
pub fn point_line(a: &Point, b: &Line) -> Plane {
    Plane::from_coefs([
        a[1] * b[6] - a[2] * b[5] - a[3] * b[0],
        -a[0] * b[6] + a[2] * b[4] - a[3] * b[1],
        a[0] * b[5] - a[1] * b[4] - a[3] * b[2],
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2],
    ])
}

/// Regressive product (join) of a point and a point.
pub fn point_point(a: &Point, b: &Point) -> Line {
    Line::from_coefs([
        a[1] * b[2] - a[2] * b[1],
        -a[0] * b[2] + a[2] * b[0],
        a[0] * b[1] - a[1] * b[0],
        0.0,
        -a[0] * b[3] + a[3] * b[0],
        -a[1] * b[3] + a[3] * b[1],
        -a[2] * b[3] + a[3] * b[2],
        0.0,
    ])
}

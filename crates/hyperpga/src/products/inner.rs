//! Inner (dot) products between primitives.
//!
//! Operands are treated as pure blades: lines contribute only their bivector
//! parts. Each product keeps the terms whose grade is the difference of the
//! operand grades.

use crate::{Float, IdealLine, Line, OriginLine, Plane, Point};

/// Inner product of a plane and a plane.
pub fn plane_plane(a: &Plane, b: &Plane) -> Float {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Inner product of a plane and an ideal line.
pub fn plane_ideal_line(a: &Plane, b: &IdealLine) -> Plane {
    Plane::from_coefs([
        0.0,
        0.0,
        0.0,
        -a[0] * b[0] - a[1] * b[1] - a[2] * b[2],
    ])
}

/// Inner product of a plane and an origin line.
pub fn plane_origin_line(a: &Plane, b: &OriginLine) -> Plane {
    Plane::from_coefs([
        -a[1] * b[2] + a[2] * b[1],
        a[0] * b[2] - a[2] * b[0],
        -a[0] * b[1] + a[1] * b[0],
        0.0,
    ])
}

/// Inner product of a plane and a line.
pub fn plane_line(a: &Plane, b: &Line) -> Plane {
    Plane::from_coefs([
        -a[1] * b[6] + a[2] * b[5],
        a[0] * b[6] - a[2] * b[4],
        -a[0] * b[5] + a[1] * b[4],
        -a[0] * b[0] - a[1] * b[1] - a[2] * b[2],
    ])
}

/// Inner product of a plane and a point.
pub fn plane_point(a: &Plane, b: &Point) -> Line {
    Line::from_coefs([
        -a[1] * b[2] + a[2] * b[1],
        a[0] * b[2] - a[2] * b[0],
        -a[0] * b[1] + a[1] * b[0],
        0.0,
        a[0] * b[3],
        a[1] * b[3],
        a[2] * b[3],
        0.0,
    ])
}

/// Inner product of an ideal line and a plane.
pub fn ideal_line_plane(a: &IdealLine, b: &Plane) -> Plane {
    Plane::from_coefs([
        0.0,
        0.0,
        0.0,
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2],
    ])
}

/// Inner product of an origin line and a plane.
pub fn origin_line_plane(a: &OriginLine, b: &Plane) -> Plane {
    Plane::from_coefs([
        -a[1] * b[2] + a[2] * b[1],
        a[0] * b[2] - a[2] * b[0],
        -a[0] * b[1] + a[1] * b[0],
        0.0,
    ])
}

/// Inner product of an origin line and an origin line.
pub fn origin_line_origin_line(a: &OriginLine, b: &OriginLine) -> Float {
    -a[0] * b[0] - a[1] * b[1] - a[2] * b[2]
}

/// Inner product of an origin line and a line.
pub fn origin_line_line(a: &OriginLine, b: &Line) -> Float {
    -a[0] * b[4] - a[1] * b[5] - a[2] * b[6]
}

/// Inner product of an origin line and a point.
pub fn origin_line_point(a: &OriginLine, b: &Point) -> Plane {
    Plane::from_coefs([
        -a[0] * b[3],
        -a[1] * b[3],
        -a[2] * b[3],
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2],
    ])
}

/// Inner product of a line and a plane.
pub fn line_plane(a: &Line, b: &Plane) -> Plane {
    Plane::from_coefs([
        -a[5] * b[2] + a[6] * b[1],
        a[4] * b[2] - a[6] * b[0],
        -a[4] * b[1] + a[5] * b[0],
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2],
    ])
}

/// Inner product of a line and an origin line.
pub fn line_origin_line(a: &Line, b: &OriginLine) -> Float {
    -a[4] * b[0] - a[5] * b[1] - a[6] * b[2]
}

/// Inner product of a line and a line.
pub fn line_line(a: &Line, b: &Line) -> Float {
    -a[4] * b[4] - a[5] * b[5] - a[6] * b[6]
}

/// Inner product of a line and a point.
pub fn line_point(a: &Line, b: &Point) -> Plane {
    Plane::from_coefs([
        -a[4] * b[3],
        -a[5] * b[3],
        -a[6] * b[3],
        a[4] * b[0] + a[5] * b[1] + a[6] * b[2],
    ])
}

/// Inner product of a point and a plane.
pub fn point_plane(a: &Point, b: &Plane) -> Line {
    Line::from_coefs([
        a[1] * b[2] - a[2] * b[1],
        -a[0] * b[2] + a[2] * b[0],
        a[0] * b[1] - a[1] * b[0],
        0.0,
        a[3] * b[0],
        a[3] * b[1],
        a[3] * b[2],
        0.0,
    ])
}

/// Inner product of a point and an origin line.
pub fn point_origin_line(a: &Point, b: &OriginLine) -> Plane {
    Plane::from_coefs([
        -a[3] * b[0],
        -a[3] * b[1],
        -a[3] * b[2],
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2],
    ])
}

/// Inner product of a point and a line.
pub fn point_line(a: &Point, b: &Line) -> Plane {
    Plane::from_coefs([
        -a[3] * b[4],
        -a[3] * b[5],
        -a[3] * b[6],
        a[0] * b[4] + a[1] * b[5] + a[2] * b[6],
    ])
}

/// Inner product of a point and a point.
pub fn point_point(a: &Point, b: &Point) -> Float {
    -a[3] * b[3]
}

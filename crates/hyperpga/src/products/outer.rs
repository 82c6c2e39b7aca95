//! Outer products (meet) between primitives.
//!
//! Operands are treated as pure blades: lines contribute only their bivector
//! parts.

use crate::{Float, IdealLine, Line, OriginLine, Plane, Point};

/// Outer product (meet) of a plane and a plane.
pub fn plane_plane(a: &Plane, b: &Plane) -> Line {
    Line::from_coefs([
        -a[0] * b[3] + a[3] * b[0],
        -a[1] * b[3] + a[3] * b[1],
        -a[2] * b[3] + a[3] * b[2],
        0.0,
        a[1] * b[2] - a[2] * b[1],
        -a[0] * b[2] + a[2] * b[0],
        a[0] * b[1] - a[1] * b[0],
        0.0,
    ])
}

/// Outer product (meet) of a plane and an ideal line.
pub fn plane_ideal_line(a: &Plane, b: &IdealLine) -> Point {
    Point::from_coefs([
        a[1] * b[2] - a[2] * b[1],
        -a[0] * b[2] + a[2] * b[0],
        a[0] * b[1] - a[1] * b[0],
        0.0,
    ])
}

/// Outer product (meet) of a plane and an origin line.
pub fn plane_origin_line(a: &Plane, b: &OriginLine) -> Point {
    Point::from_coefs([
        -a[3] * b[0],
        -a[3] * b[1],
        -a[3] * b[2],
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2],
    ])
}

/// Outer product (meet) of a plane and a line.
pub fn plane_line(a: &Plane, b: &Line) -> Point {
    Point::from_coefs([
        a[1] * b[2] - a[2] * b[1] - a[3] * b[4],
        -a[0] * b[2] + a[2] * b[0] - a[3] * b[5],
        a[0] * b[1] - a[1] * b[0] - a[3] * b[6],
        a[0] * b[4] + a[1] * b[5] + a[2] * b[6],
    ])
}

/// Outer product (meet) of a plane and a point.
pub fn plane_point(a: &Plane, b: &Point) -> Float {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
}

/// Outer product (meet) of an ideal line and a plane.
pub fn ideal_line_plane(a: &IdealLine, b: &Plane) -> Point {
    Point::from_coefs([
        -a[1] * b[2] + a[2] * b[1],
        a[0] * b[2] - a[2] * b[0],
        -a[0] * b[1] + a[1] * b[0],
        0.0,
    ])
}

/// Outer product (meet) of an ideal line and an origin line.
pub fn ideal_line_origin_line(a: &IdealLine, b: &OriginLine) -> Float {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Outer product (meet) of an ideal line and a line.
pub fn ideal_line_line(a: &IdealLine, b: &Line) -> Float {
    a[0] * b[4] + a[1] * b[5] + a[2] * b[6]
}

/// Outer product (meet) of an origin line and a plane.
pub fn origin_line_plane(a: &OriginLine, b: &Plane) -> Point {
    Point::from_coefs([
        -a[0] * b[3],
        -a[1] * b[3],
        -a[2] * b[3],
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2],
    ])
}

/// Outer product (meet) of an origin line and an ideal line.
pub fn origin_line_ideal_line(a: &OriginLine, b: &IdealLine) -> Float {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Outer product (meet) of an origin line and a line.
pub fn origin_line_line(a: &OriginLine, b: &Line) -> Float {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Outer product (meet) of a line and a plane.
pub fn line_plane(a: &Line, b: &Plane) -> Point {
    Point::from_coefs([
        -a[1] * b[2] + a[2] * b[1] - a[4] * b[3],
        a[0] * b[2] - a[2] * b[0] - a[5] * b[3],
        -a[0] * b[1] + a[1] * b[0] - a[6] * b[3],
        a[4] * b[0] + a[5] * b[1] + a[6] * b[2],
    ])
}

/// Outer product (meet) of a line and an ideal line.
pub fn line_ideal_line(a: &Line, b: &IdealLine) -> Float {
    a[4] * b[0] + a[5] * b[1] + a[6] * b[2]
}

/// Outer product (meet) of a line and an origin line.
pub fn line_origin_line(a: &Line, b: &OriginLine) -> Float {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Outer product (meet) of a line and a line.
pub fn line_line(a: &Line, b: &Line) -> Float {
    a[0] * b[4] + a[1] * b[5] + a[2] * b[6] + a[4] * b[0] + a[5] * b[1] + a[6] * b[2]
}

/// Outer product (meet) of a point and a plane.
pub fn point_plane(a: &Point, b: &Plane) -> Float {
    -a[0] * b[0] - a[1] * b[1] - a[2] * b[2] - a[3] * b[3]
}

//! Poincaré duals.
//!
//! The buffer layouts are chosen so that the dual of each named basis blade is
//! another named basis blade with a positive sign. Most duals therefore just
//! reinterpret the coefficients as a different type.

use crate::{IdealLine, Line, Motor, Multivector, OriginLine, Plane, Point, Rotor};

/// Dual of a plane, which is its pole.
pub fn plane(a: &Plane) -> Point {
    Point::from_coefs(a.to_coefs())
}
/// Dual of a point, which is its polar plane.
pub fn point(a: &Point) -> Plane {
    Plane::from_coefs(a.to_coefs())
}
/// Dual of an ideal line.
pub fn ideal_line(a: &IdealLine) -> OriginLine {
    OriginLine::from_coefs(a.to_coefs())
}
/// Dual of a line through the origin.
pub fn origin_line(a: &OriginLine) -> IdealLine {
    IdealLine::from_coefs(a.to_coefs())
}
/// Dual of a line, which swaps its ideal and Euclidean halves.
pub fn line(a: &Line) -> Line {
    let [d1, d2, d3, p, o1, o2, o3, s] = a.to_coefs();
    Line::from_coefs([o1, o2, o3, s, d1, d2, d3, p])
}
/// Dual of a motor, which swaps its ideal and Euclidean halves.
pub fn motor(a: &Motor) -> Motor {
    let [d1, d2, d3, p, o1, o2, o3, s] = a.to_coefs();
    Motor::from_coefs([o1, o2, o3, s, d1, d2, d3, p])
}
/// Dual of a rotor.
pub fn rotor(a: &Rotor) -> IdealLine {
    IdealLine::from_coefs(a.to_coefs())
}
/// Dual of a general multivector.
pub fn multivector(a: &Multivector) -> Multivector {
    a.dual()
}

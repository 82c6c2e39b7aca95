//! Distances and angles between primitives.
//!
//! Every function normalizes its operands internally, so the inputs need not
//! be normalized. Distances are non-negative. Angles are in radians.

use super::{inner, regressive};
use crate::elements::Normed;
use crate::util::clamped_acos;
use crate::{Float, Line, Plane, Point};

/// Returns the length of the direction (Euclidean bivector) part of a line,
/// ignoring its scalar slot.
fn direction_length(l: &Line) -> Float {
    (l.e23() * l.e23() + l.e31() * l.e31() + l.e12() * l.e12()).sqrt()
}

/// Distance between two points.
pub fn distance_point_point(a: &Point, b: &Point) -> Float {
    let join = regressive::point_point(a, b);
    direction_length(&join) / (a.e123() * b.e123()).abs()
}
/// Distance from a point to a plane.
pub fn distance_point_plane(a: &Point, b: &Plane) -> Float {
    regressive::point_plane(a, b).abs() / (a.e123().abs() * b.length())
}
/// Distance from a plane to a point.
pub fn distance_plane_point(a: &Plane, b: &Point) -> Float {
    distance_point_plane(b, a)
}
/// Distance from a point to a line.
pub fn distance_point_line(a: &Point, b: &Line) -> Float {
    // The join is the plane containing both; its normal has the length of the
    // cross product between the line direction and the offset to the point.
    let plane = regressive::point_line(a, b);
    plane.length() / (a.e123().abs() * direction_length(b))
}
/// Distance from a line to a point.
pub fn distance_line_point(a: &Line, b: &Point) -> Float {
    distance_point_line(b, a)
}

/// Angle between the normals of two planes, in `[0, π]`.
pub fn angle_plane_plane(a: &Plane, b: &Plane) -> Float {
    clamped_acos(inner::plane_plane(a, b) / (a.length() * b.length()))
}
/// Angle between the directions of two lines, in `[0, π]`.
pub fn angle_line_line(a: &Line, b: &Line) -> Float {
    // Lines square to a negative number.
    clamped_acos(-inner::line_line(a, b) / (direction_length(a) * direction_length(b)))
}
/// Angle between a plane and a line, in `[0, π/2]`.
pub fn angle_plane_line(a: &Plane, b: &Line) -> Float {
    // The inner product is the plane through the line perpendicular to `a`,
    // whose normal has length `|n| |d| sin(θ)` where `θ` is the angle between
    // the normal `n` and the direction `d`.
    let perp = inner::plane_line(a, b);
    clamped_acos(perp.length() / (a.length() * direction_length(b)))
}
/// Angle between a line and a plane, in `[0, π/2]`.
pub fn angle_line_plane(a: &Line, b: &Plane) -> Float {
    angle_plane_line(b, a)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use super::*;
    use crate::assert_approx_eq;

    fn line_through(a: Point, b: Point) -> Line {
        regressive::point_point(&a, &b)
    }

    #[test]
    fn test_distances() {
        let a = Point::new(1.0, 2.0, 3.0);
        let b = Point::with_weight(8.0, 12.0, 6.0, 2.0); // (4, 6, 3)
        assert_approx_eq!(distance_point_point(&a, &b), 5.0);
        assert_approx_eq!(distance_point_point(&b, &a), 5.0);

        let plane = Plane::new(0.0, 0.0, 2.0, -4.0); // z = 2
        assert_approx_eq!(distance_point_plane(&a, &plane), 1.0);
        assert_approx_eq!(distance_plane_point(&plane, &Point::new(0.0, 0.0, -1.0)), 3.0);

        // Line through (0, 1, 0) along X.
        let l = line_through(Point::new(0.0, 1.0, 0.0), Point::new(1.0, 1.0, 0.0));
        assert_approx_eq!(distance_point_line(&Point::new(3.0, 1.0, 4.0), &l), 4.0);
        assert_approx_eq!(distance_line_point(&(l * 3.0), &Point::new(-7.0, 4.0, 4.0)), 5.0);
    }

    #[test]
    fn test_angles() {
        let x = Plane::new(1.0, 0.0, 0.0, 0.0);
        let y = Plane::new(0.0, 2.0, 0.0, 5.0);
        assert_approx_eq!(angle_plane_plane(&x, &y), FRAC_PI_2);
        assert_approx_eq!(angle_plane_plane(&x, &(-x)), PI);
        assert_approx_eq!(angle_plane_plane(&x, &(x * 3.0)), 0.0);

        let o = Point::origin();
        let along_x = line_through(o, Point::new(1.0, 0.0, 0.0));
        let diagonal = line_through(Point::new(0.0, 0.0, 5.0), Point::new(1.0, 1.0, 5.0));
        assert_approx_eq!(angle_line_line(&along_x, &diagonal), FRAC_PI_4);
        assert_approx_eq!(angle_line_line(&along_x, &along_x), 0.0);

        let z = Plane::new(0.0, 0.0, 1.0, 0.0);
        let slanted = line_through(o, Point::new(1.0, 0.0, 1.0));
        assert_approx_eq!(angle_plane_line(&z, &slanted), FRAC_PI_4);
        assert_approx_eq!(angle_line_plane(&along_x, &z), 0.0);
        let vertical = line_through(o, Point::new(0.0, 0.0, 1.0));
        assert_approx_eq!(angle_plane_line(&z, &vertical), FRAC_PI_2);
    }
}

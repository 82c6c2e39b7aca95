//! Sandwich products `b * a * ~b`, which transform the primitive `a` by the
//! plane reflection or motion `b`.
//!
//! The result keeps the type of `a`. Normalize `b` first for a rigid
//! transformation; an unnormalized `b` also scales the result by its squared
//! norm.

use crate::{Line, Motor, Plane, Point, Rotor, Translator};

/// Reflects a plane across a plane.
pub fn plane_by_plane(a: &Plane, b: &Plane) -> Plane {
    Plane::from_coefs([
        a[0] * (b[0] * b[0] - b[1] * b[1] - b[2] * b[2])
            + a[1] * (b[0] * b[1] * 2.0)
            + a[2] * (b[0] * b[2] * 2.0),
        a[0] * (b[0] * b[1] * 2.0)
            + a[1] * (-b[0] * b[0] + b[1] * b[1] - b[2] * b[2])
            + a[2] * (b[1] * b[2] * 2.0),
        a[0] * (b[0] * b[2] * 2.0)
            + a[1] * (b[1] * b[2] * 2.0)
            + a[2] * (-b[0] * b[0] - b[1] * b[1] + b[2] * b[2]),
        a[0] * (b[0] * b[3] * 2.0)
            + a[1] * (b[1] * b[3] * 2.0)
            + a[2] * (b[2] * b[3] * 2.0)
            + a[3] * (-b[0] * b[0] - b[1] * b[1] - b[2] * b[2]),
    ])
}

/// Transforms a plane by a motor.
pub fn plane_by_motor(a: &Plane, b: &Motor) -> Plane {
    Plane::from_coefs([
        a[0] * (b[4] * b[4] - b[5] * b[5] - b[6] * b[6] + b[7] * b[7])
            + a[1] * (b[4] * b[5] * 2.0 + b[6] * b[7] * 2.0)
            + a[2] * (b[4] * b[6] * 2.0 - b[5] * b[7] * 2.0),
        a[0] * (b[4] * b[5] * 2.0 - b[6] * b[7] * 2.0)
            + a[1] * (-b[4] * b[4] + b[5] * b[5] - b[6] * b[6] + b[7] * b[7])
            + a[2] * (b[4] * b[7] * 2.0 + b[5] * b[6] * 2.0),
        a[0] * (b[4] * b[6] * 2.0 + b[5] * b[7] * 2.0)
            + a[1] * (-b[4] * b[7] * 2.0 + b[5] * b[6] * 2.0)
            + a[2] * (-b[4] * b[4] - b[5] * b[5] + b[6] * b[6] + b[7] * b[7]),
        a[0] * (b[0] * b[7] * 2.0 - b[1] * b[6] * 2.0 + b[2] * b[5] * 2.0 + b[3] * b[4] * 2.0)
            + a[1] * (b[0] * b[6] * 2.0 + b[1] * b[7] * 2.0 - b[2] * b[4] * 2.0 + b[3] * b[5] * 2.0)
            + a[2]
                * (-b[0] * b[5] * 2.0 + b[1] * b[4] * 2.0 + b[2] * b[7] * 2.0 + b[3] * b[6] * 2.0)
            + a[3] * (b[4] * b[4] + b[5] * b[5] + b[6] * b[6] + b[7] * b[7]),
    ])
}

/// Transforms a plane by a rotor.
pub fn plane_by_rotor(a: &Plane, b: &Rotor) -> Plane {
    Plane::from_coefs([
        a[0] * (b[0] * b[0] - b[1] * b[1] - b[2] * b[2] + b[3] * b[3])
            + a[1] * (b[0] * b[1] * 2.0 + b[2] * b[3] * 2.0)
            + a[2] * (b[0] * b[2] * 2.0 - b[1] * b[3] * 2.0),
        a[0] * (b[0] * b[1] * 2.0 - b[2] * b[3] * 2.0)
            + a[1] * (-b[0] * b[0] + b[1] * b[1] - b[2] * b[2] + b[3] * b[3])
            + a[2] * (b[0] * b[3] * 2.0 + b[1] * b[2] * 2.0),
        a[0] * (b[0] * b[2] * 2.0 + b[1] * b[3] * 2.0)
            + a[1] * (-b[0] * b[3] * 2.0 + b[1] * b[2] * 2.0)
            + a[2] * (-b[0] * b[0] - b[1] * b[1] + b[2] * b[2] + b[3] * b[3]),
        a[3] * (b[0] * b[0] + b[1] * b[1] + b[2] * b[2] + b[3] * b[3]),
    ])
}

/// Transforms a plane by a translator.
pub fn plane_by_translator(a: &Plane, b: &Translator) -> Plane {
    Plane::from_coefs([
        a[0] * b[3] * b[3],
        a[1] * b[3] * b[3],
        a[2] * b[3] * b[3],
        a[0] * (b[0] * b[3] * 2.0)
            + a[1] * (b[1] * b[3] * 2.0)
            + a[2] * (b[2] * b[3] * 2.0)
            + a[3] * b[3] * b[3],
    ])
}

/// Reflects a line across a plane.
pub fn line_by_plane(a: &Line, b: &Plane) -> Line {
    Line::from_coefs([
        a[0] * (-b[0] * b[0] + b[1] * b[1] + b[2] * b[2])
            + a[1] * (-b[0] * b[1] * 2.0)
            + a[2] * (-b[0] * b[2] * 2.0)
            + a[5] * (-b[2] * b[3] * 2.0)
            + a[6] * (b[1] * b[3] * 2.0),
        a[0] * (-b[0] * b[1] * 2.0)
            + a[1] * (b[0] * b[0] - b[1] * b[1] + b[2] * b[2])
            + a[2] * (-b[1] * b[2] * 2.0)
            + a[4] * (b[2] * b[3] * 2.0)
            + a[6] * (-b[0] * b[3] * 2.0),
        a[0] * (-b[0] * b[2] * 2.0)
            + a[1] * (-b[1] * b[2] * 2.0)
            + a[2] * (b[0] * b[0] + b[1] * b[1] - b[2] * b[2])
            + a[4] * (-b[1] * b[3] * 2.0)
            + a[5] * (b[0] * b[3] * 2.0),
        a[3] * (-b[0] * b[0] - b[1] * b[1] - b[2] * b[2]),
        a[4] * (b[0] * b[0] - b[1] * b[1] - b[2] * b[2])
            + a[5] * (b[0] * b[1] * 2.0)
            + a[6] * (b[0] * b[2] * 2.0),
        a[4] * (b[0] * b[1] * 2.0)
            + a[5] * (-b[0] * b[0] + b[1] * b[1] - b[2] * b[2])
            + a[6] * (b[1] * b[2] * 2.0),
        a[4] * (b[0] * b[2] * 2.0)
            + a[5] * (b[1] * b[2] * 2.0)
            + a[6] * (-b[0] * b[0] - b[1] * b[1] + b[2] * b[2]),
        a[7] * (b[0] * b[0] + b[1] * b[1] + b[2] * b[2]),
    ])
}

/// Transforms a line by a motor.
pub fn line_by_motor(a: &Line, b: &Motor) -> Line {
    Line::from_coefs([
        a[0] * (b[4] * b[4] - b[5] * b[5] - b[6] * b[6] + b[7] * b[7])
            + a[1] * (b[4] * b[5] * 2.0 + b[6] * b[7] * 2.0)
            + a[2] * (b[4] * b[6] * 2.0 - b[5] * b[7] * 2.0)
            + a[4] * (b[0] * b[4] * 2.0 - b[1] * b[5] * 2.0 - b[2] * b[6] * 2.0 - b[3] * b[7] * 2.0)
            + a[5] * (b[0] * b[5] * 2.0 + b[1] * b[4] * 2.0 + b[2] * b[7] * 2.0 - b[3] * b[6] * 2.0)
            + a[6]
                * (b[0] * b[6] * 2.0 - b[1] * b[7] * 2.0 + b[2] * b[4] * 2.0 + b[3] * b[5] * 2.0),
        a[0] * (b[4] * b[5] * 2.0 - b[6] * b[7] * 2.0)
            + a[1] * (-b[4] * b[4] + b[5] * b[5] - b[6] * b[6] + b[7] * b[7])
            + a[2] * (b[4] * b[7] * 2.0 + b[5] * b[6] * 2.0)
            + a[4] * (b[0] * b[5] * 2.0 + b[1] * b[4] * 2.0 - b[2] * b[7] * 2.0 + b[3] * b[6] * 2.0)
            + a[5]
                * (-b[0] * b[4] * 2.0 + b[1] * b[5] * 2.0 - b[2] * b[6] * 2.0 - b[3] * b[7] * 2.0)
            + a[6]
                * (b[0] * b[7] * 2.0 + b[1] * b[6] * 2.0 + b[2] * b[5] * 2.0 - b[3] * b[4] * 2.0),
        a[0] * (b[4] * b[6] * 2.0 + b[5] * b[7] * 2.0)
            + a[1] * (-b[4] * b[7] * 2.0 + b[5] * b[6] * 2.0)
            + a[2] * (-b[4] * b[4] - b[5] * b[5] + b[6] * b[6] + b[7] * b[7])
            + a[4] * (b[0] * b[6] * 2.0 + b[1] * b[7] * 2.0 + b[2] * b[4] * 2.0 - b[3] * b[5] * 2.0)
            + a[5]
                * (-b[0] * b[7] * 2.0 + b[1] * b[6] * 2.0 + b[2] * b[5] * 2.0 + b[3] * b[4] * 2.0)
            + a[6]
                * (-b[0] * b[4] * 2.0 - b[1] * b[5] * 2.0 + b[2] * b[6] * 2.0 - b[3] * b[7] * 2.0),
        a[3] * (b[4] * b[4] + b[5] * b[5] + b[6] * b[6] + b[7] * b[7])
            + a[7]
                * (-b[0] * b[4] * 2.0 - b[1] * b[5] * 2.0 - b[2] * b[6] * 2.0 + b[3] * b[7] * 2.0),
        a[4] * (b[4] * b[4] - b[5] * b[5] - b[6] * b[6] + b[7] * b[7])
            + a[5] * (b[4] * b[5] * 2.0 + b[6] * b[7] * 2.0)
            + a[6] * (b[4] * b[6] * 2.0 - b[5] * b[7] * 2.0),
        a[4] * (b[4] * b[5] * 2.0 - b[6] * b[7] * 2.0)
            + a[5] * (-b[4] * b[4] + b[5] * b[5] - b[6] * b[6] + b[7] * b[7])
            + a[6] * (b[4] * b[7] * 2.0 + b[5] * b[6] * 2.0),
        a[4] * (b[4] * b[6] * 2.0 + b[5] * b[7] * 2.0)
            + a[5] * (-b[4] * b[7] * 2.0 + b[5] * b[6] * 2.0)
            + a[6] * (-b[4] * b[4] - b[5] * b[5] + b[6] * b[6] + b[7] * b[7]),
        a[7] * (b[4] * b[4] + b[5] * b[5] + b[6] * b[6] + b[7] * b[7]),
    ])
}

/// Transforms a line by a rotor.
pub fn line_by_rotor(a: &Line, b: &Rotor) -> Line {
    Line::from_coefs([
        a[0] * (b[0] * b[0] - b[1] * b[1] - b[2] * b[2] + b[3] * b[3])
            + a[1] * (b[0] * b[1] * 2.0 + b[2] * b[3] * 2.0)
            + a[2] * (b[0] * b[2] * 2.0 - b[1] * b[3] * 2.0),
        a[0] * (b[0] * b[1] * 2.0 - b[2] * b[3] * 2.0)
            + a[1] * (-b[0] * b[0] + b[1] * b[1] - b[2] * b[2] + b[3] * b[3])
            + a[2] * (b[0] * b[3] * 2.0 + b[1] * b[2] * 2.0),
        a[0] * (b[0] * b[2] * 2.0 + b[1] * b[3] * 2.0)
            + a[1] * (-b[0] * b[3] * 2.0 + b[1] * b[2] * 2.0)
            + a[2] * (-b[0] * b[0] - b[1] * b[1] + b[2] * b[2] + b[3] * b[3]),
        a[3] * (b[0] * b[0] + b[1] * b[1] + b[2] * b[2] + b[3] * b[3]),
        a[4] * (b[0] * b[0] - b[1] * b[1] - b[2] * b[2] + b[3] * b[3])
            + a[5] * (b[0] * b[1] * 2.0 + b[2] * b[3] * 2.0)
            + a[6] * (b[0] * b[2] * 2.0 - b[1] * b[3] * 2.0),
        a[4] * (b[0] * b[1] * 2.0 - b[2] * b[3] * 2.0)
            + a[5] * (-b[0] * b[0] + b[1] * b[1] - b[2] * b[2] + b[3] * b[3])
            + a[6] * (b[0] * b[3] * 2.0 + b[1] * b[2] * 2.0),
        a[4] * (b[0] * b[2] * 2.0 + b[1] * b[3] * 2.0)
            + a[5] * (-b[0] * b[3] * 2.0 + b[1] * b[2] * 2.0)
            + a[6] * (-b[0] * b[0] - b[1] * b[1] + b[2] * b[2] + b[3] * b[3]),
        a[7] * (b[0] * b[0] + b[1] * b[1] + b[2] * b[2] + b[3] * b[3]),
    ])
}

/// Transforms a line by a translator.
pub fn line_by_translator(a: &Line, b: &Translator) -> Line {
    Line::from_coefs([
        a[0] * b[3] * b[3]
            + a[5] * (b[2] * b[3] * 2.0)
            + a[6] * (-b[1] * b[3] * 2.0),
        a[1] * b[3] * b[3]
            + a[4] * (-b[2] * b[3] * 2.0)
            + a[6] * (b[0] * b[3] * 2.0),
        a[2] * b[3] * b[3]
            + a[4] * (b[1] * b[3] * 2.0)
            + a[5] * (-b[0] * b[3] * 2.0),
        a[3] * b[3] * b[3],
        a[4] * b[3] * b[3],
        a[5] * b[3] * b[3],
        a[6] * b[3] * b[3],
        a[7] * b[3] * b[3],
    ])
}

/// Reflects a point across a plane.
pub fn point_by_plane(a: &Point, b: &Plane) -> Point {
    Point::from_coefs([
        a[0] * (-b[0] * b[0] + b[1] * b[1] + b[2] * b[2])
            + a[1] * (-b[0] * b[1] * 2.0)
            + a[2] * (-b[0] * b[2] * 2.0)
            + a[3] * (-b[0] * b[3] * 2.0),
        a[0] * (-b[0] * b[1] * 2.0)
            + a[1] * (b[0] * b[0] - b[1] * b[1] + b[2] * b[2])
            + a[2] * (-b[1] * b[2] * 2.0)
            + a[3] * (-b[1] * b[3] * 2.0),
        a[0] * (-b[0] * b[2] * 2.0)
            + a[1] * (-b[1] * b[2] * 2.0)
            + a[2] * (b[0] * b[0] + b[1] * b[1] - b[2] * b[2])
            + a[3] * (-b[2] * b[3] * 2.0),
        a[3] * (b[0] * b[0] + b[1] * b[1] + b[2] * b[2]),
    ])
}

/// Transforms a point by a motor.
pub fn point_by_motor(a: &Point, b: &Motor) -> Point {
    Point::from_coefs([
        a[0] * (b[4] * b[4] - b[5] * b[5] - b[6] * b[6] + b[7] * b[7])
            + a[1] * (b[4] * b[5] * 2.0 + b[6] * b[7] * 2.0)
            + a[2] * (b[4] * b[6] * 2.0 - b[5] * b[7] * 2.0)
            + a[3]
                * (-b[0] * b[7] * 2.0 - b[1] * b[6] * 2.0 + b[2] * b[5] * 2.0 - b[3] * b[4] * 2.0),
        a[0] * (b[4] * b[5] * 2.0 - b[6] * b[7] * 2.0)
            + a[1] * (-b[4] * b[4] + b[5] * b[5] - b[6] * b[6] + b[7] * b[7])
            + a[2] * (b[4] * b[7] * 2.0 + b[5] * b[6] * 2.0)
            + a[3]
                * (b[0] * b[6] * 2.0 - b[1] * b[7] * 2.0 - b[2] * b[4] * 2.0 - b[3] * b[5] * 2.0),
        a[0] * (b[4] * b[6] * 2.0 + b[5] * b[7] * 2.0)
            + a[1] * (-b[4] * b[7] * 2.0 + b[5] * b[6] * 2.0)
            + a[2] * (-b[4] * b[4] - b[5] * b[5] + b[6] * b[6] + b[7] * b[7])
            + a[3]
                * (-b[0] * b[5] * 2.0 + b[1] * b[4] * 2.0 - b[2] * b[7] * 2.0 - b[3] * b[6] * 2.0),
        a[3] * (b[4] * b[4] + b[5] * b[5] + b[6] * b[6] + b[7] * b[7]),
    ])
}

/// Transforms a point by a rotor.
pub fn point_by_rotor(a: &Point, b: &Rotor) -> Point {
    Point::from_coefs([
        a[0] * (b[0] * b[0] - b[1] * b[1] - b[2] * b[2] + b[3] * b[3])
            + a[1] * (b[0] * b[1] * 2.0 + b[2] * b[3] * 2.0)
            + a[2] * (b[0] * b[2] * 2.0 - b[1] * b[3] * 2.0),
        a[0] * (b[0] * b[1] * 2.0 - b[2] * b[3] * 2.0)
            + a[1] * (-b[0] * b[0] + b[1] * b[1] - b[2] * b[2] + b[3] * b[3])
            + a[2] * (b[0] * b[3] * 2.0 + b[1] * b[2] * 2.0),
        a[0] * (b[0] * b[2] * 2.0 + b[1] * b[3] * 2.0)
            + a[1] * (-b[0] * b[3] * 2.0 + b[1] * b[2] * 2.0)
            + a[2] * (-b[0] * b[0] - b[1] * b[1] + b[2] * b[2] + b[3] * b[3]),
        a[3] * (b[0] * b[0] + b[1] * b[1] + b[2] * b[2] + b[3] * b[3]),
    ])
}

/// Transforms a point by a translator.
pub fn point_by_translator(a: &Point, b: &Translator) -> Point {
    Point::from_coefs([
        a[0] * b[3] * b[3]
            + a[3] * (-b[0] * b[3] * 2.0),
        a[1] * b[3] * b[3]
            + a[3] * (-b[1] * b[3] * 2.0),
        a[2] * b[3] * b[3]
            + a[3] * (-b[2] * b[3] * 2.0),
        a[3] * b[3] * b[3],
    ])
}

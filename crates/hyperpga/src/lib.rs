//! Projective geometric algebra in three dimensions (signature 3,0,1).
//!
//! Planes, lines, points, and rigid motions are each represented by a small
//! fixed-size type. Products between them are closed-form formulas selected
//! by the pair of operand types; see [`dispatch`] for the dynamically-typed
//! entry points and [`products`] for the statically-typed formulas.

pub use {approx, num_traits as num};

/// Floating-point type used for geometry.
pub type Float = f64;

/// Small floating-point value used for comparisons.
pub const EPSILON: Float = 0.000001;

/// Threshold below which the scalar part of a motor is considered zero when
/// taking its logarithm.
pub const LOG_SCALAR_EPSILON: Float = 0.000001;

/// Asserts that both arguments are approximately equal.
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::approx::assert_abs_diff_eq!($a, $b, epsilon = $crate::EPSILON)
    };
}

#[macro_use]
mod elements;

pub mod any_element;
pub mod axes;
pub mod dispatch;
pub mod dual_number;
pub mod element_type;
pub mod error;
pub mod functional;
pub mod products;
pub mod sign;
pub mod term;
pub mod util;

pub use any_element::AnyElement;
pub use axes::Axes;
pub use element_type::ElementType;
pub use elements::*;
pub use error::{Operator, PgaError};
pub use sign::Sign;
pub use term::Term;

/// Structs, traits, and constants.
pub mod prelude {
    pub use crate::traits::*;
    pub use crate::{
        AnyElement, Axes, EPSILON, ElementType, Float, IdealLine, Line, Motor, Multivector,
        Operator, OriginLine, PgaError, Plane, Point, Rotor, Sign, Term, Translator,
    };
}

/// Traits only.
pub mod traits {
    pub use approx::AbsDiffEq;

    pub use crate::elements::{Element, Invertible, Normed};
}

#[cfg(test)]
mod tests;

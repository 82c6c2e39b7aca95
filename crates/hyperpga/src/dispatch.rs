//! Dynamically-typed operators.
//!
//! Each operator matches on the types of its operands and calls the
//! corresponding closed-form formula from [`crate::products`] or
//! [`crate::functional`]. Operand order matters; no operator retries with its
//! operands swapped.
//!
//! A binary operator applied to a pair of element types with no formula
//! returns [`PgaError::Vanishing`]. A unary operator applied to a type it does
//! not accept, or any operator applied to a bare scalar or pseudoscalar,
//! returns [`PgaError::Unsupported`].
//!
//! The `*_TABLE` constants list every supported combination of operand types
//! along with the type of the result.

use crate::products::{dual as dual_fns, geometric, inner, metric, outer, regressive, sandwich};
use crate::{AnyElement, ElementType, Float, Operator, PgaError, functional};

/// Signature of a binary operator: left operand, right operand, and result.
pub type BinarySignature = (ElementType, ElementType, ElementType);
/// Signature of a unary operator: operand and result.
pub type UnarySignature = (ElementType, ElementType);

/// Wraps the output of a formula in an [`AnyElement`].
macro_rules! wrap_output {
    (Scalar, $value:expr) => {
        AnyElement::Scalar($value)
    };
    (Pseudoscalar, $value:expr) => {
        AnyElement::Pseudoscalar($value)
    };
    ($out:ident, $value:expr) => {
        AnyElement::$out($value)
    };
}

fn reject_scalar_like(op: Operator, operand: &AnyElement) -> Result<(), PgaError> {
    let ty = operand.element_type();
    match ty.is_scalar_like() {
        true => Err(PgaError::unsupported(op, ty)),
        false => Ok(()),
    }
}

fn vanishing(op: Operator, lhs: &AnyElement, rhs: &AnyElement) -> PgaError {
    let (lhs, rhs) = (lhs.element_type(), rhs.element_type());
    ::log::trace!("no formula for {}", op.signature(lhs, rhs));
    PgaError::Vanishing { op, lhs, rhs }
}

macro_rules! binary_op {
    (
        $(#[$attr:meta])*
        pub fn $name:ident($op:ident) in $module:ident;
        pub const $table:ident;
        $($lhs:ident, $rhs:ident => $out:ident: $f:ident,)*
    ) => {
        #[doc = concat!("Operand and result types accepted by [`", stringify!($name), "()`].")]
        pub const $table: &[BinarySignature] = &[
            $((ElementType::$lhs, ElementType::$rhs, ElementType::$out),)*
        ];

        $(#[$attr])*
        pub fn $name(lhs: &AnyElement, rhs: &AnyElement) -> Result<AnyElement, PgaError> {
            reject_scalar_like(Operator::$op, lhs)?;
            reject_scalar_like(Operator::$op, rhs)?;
            match (lhs, rhs) {
                $(
                    (AnyElement::$lhs(a), AnyElement::$rhs(b)) => {
                        Ok(wrap_output!($out, $module::$f(a, b)))
                    }
                )*
                _ => Err(vanishing(Operator::$op, lhs, rhs)),
            }
        }
    };
}

macro_rules! metric_op {
    (
        $(#[$attr:meta])*
        pub fn $name:ident($op:ident);
        pub const $table:ident;
        $($lhs:ident, $rhs:ident => $f:ident,)*
    ) => {
        #[doc = concat!("Operand types accepted by [`", stringify!($name), "()`].")]
        pub const $table: &[(ElementType, ElementType)] = &[
            $((ElementType::$lhs, ElementType::$rhs),)*
        ];

        $(#[$attr])*
        pub fn $name(lhs: &AnyElement, rhs: &AnyElement) -> Result<Float, PgaError> {
            reject_scalar_like(Operator::$op, lhs)?;
            reject_scalar_like(Operator::$op, rhs)?;
            match (lhs, rhs) {
                $((AnyElement::$lhs(a), AnyElement::$rhs(b)) => Ok(metric::$f(a, b)),)*
                _ => Err(vanishing(Operator::$op, lhs, rhs)),
            }
        }
    };
}

macro_rules! unary_op {
    (
        $(#[$attr:meta])*
        pub fn $name:ident($op:ident);
        pub const $table:ident;
        $($ty:ident => $out:ident: $f:path,)*
    ) => {
        #[doc = concat!("Operand and result types accepted by [`", stringify!($name), "()`].")]
        pub const $table: &[UnarySignature] = &[
            $((ElementType::$ty, ElementType::$out),)*
        ];

        $(#[$attr])*
        pub fn $name(operand: &AnyElement) -> Result<AnyElement, PgaError> {
            match operand {
                $(AnyElement::$ty(a) => Ok(wrap_output!($out, $f(a))),)*
                _ => Err(PgaError::unsupported(Operator::$op, operand.element_type())),
            }
        }
    };
}

binary_op! {
    /// Geometric product.
    pub fn mul(Mul) in geometric;
    pub const MUL_TABLE;

    Plane, Plane => Motor: plane_plane,
    Plane, IdealLine => Multivector: plane_ideal_line,
    Plane, OriginLine => Multivector: plane_origin_line,
    Plane, Line => Multivector: plane_line,
    Plane, Point => Motor: plane_point,

    IdealLine, Plane => Multivector: ideal_line_plane,
    IdealLine, OriginLine => Motor: ideal_line_origin_line,
    IdealLine, Line => Motor: ideal_line_line,
    IdealLine, Point => Multivector: ideal_line_point,

    OriginLine, Plane => Multivector: origin_line_plane,
    OriginLine, IdealLine => Motor: origin_line_ideal_line,
    OriginLine, OriginLine => Rotor: origin_line_origin_line,
    OriginLine, Line => Motor: origin_line_line,
    OriginLine, Point => Multivector: origin_line_point,

    Line, Plane => Multivector: line_plane,
    Line, IdealLine => Motor: line_ideal_line,
    Line, OriginLine => Motor: line_origin_line,
    Line, Line => Motor: line_line,
    Line, Point => Multivector: line_point,

    Point, Plane => Motor: point_plane,
    Point, IdealLine => Multivector: point_ideal_line,
    Point, OriginLine => Multivector: point_origin_line,
    Point, Line => Multivector: point_line,
    Point, Point => Translator: point_point,

    Motor, Motor => Motor: motor_motor,
    Motor, Rotor => Motor: motor_rotor,
    Motor, Translator => Motor: motor_translator,
    Rotor, Motor => Motor: rotor_motor,
    Rotor, Rotor => Rotor: rotor_rotor,
    Rotor, Translator => Motor: rotor_translator,
    Translator, Motor => Motor: translator_motor,
    Translator, Rotor => Motor: translator_rotor,
    Translator, Translator => Translator: translator_translator,
}

binary_op! {
    /// Inner product (symmetric grade-lowering product).
    pub fn dot(Dot) in inner;
    pub const DOT_TABLE;

    Plane, Plane => Scalar: plane_plane,
    Plane, IdealLine => Plane: plane_ideal_line,
    Plane, OriginLine => Plane: plane_origin_line,
    Plane, Line => Plane: plane_line,
    Plane, Point => Line: plane_point,

    IdealLine, Plane => Plane: ideal_line_plane,

    OriginLine, Plane => Plane: origin_line_plane,
    OriginLine, OriginLine => Scalar: origin_line_origin_line,
    OriginLine, Line => Scalar: origin_line_line,
    OriginLine, Point => Plane: origin_line_point,

    Line, Plane => Plane: line_plane,
    Line, OriginLine => Scalar: line_origin_line,
    Line, Line => Scalar: line_line,
    Line, Point => Plane: line_point,

    Point, Plane => Line: point_plane,
    Point, OriginLine => Plane: point_origin_line,
    Point, Line => Plane: point_line,
    Point, Point => Scalar: point_point,
}

binary_op! {
    /// Outer product, which is the intersection of two primitives.
    ///
    /// Parallel planes meet in an ideal line, but two lines that do not
    /// intersect have a nonzero pseudoscalar meet.
    pub fn meet(Meet) in outer;
    pub const MEET_TABLE;

    Plane, Plane => Line: plane_plane,
    Plane, IdealLine => Point: plane_ideal_line,
    Plane, OriginLine => Point: plane_origin_line,
    Plane, Line => Point: plane_line,
    Plane, Point => Pseudoscalar: plane_point,

    IdealLine, Plane => Point: ideal_line_plane,
    IdealLine, OriginLine => Pseudoscalar: ideal_line_origin_line,
    IdealLine, Line => Pseudoscalar: ideal_line_line,

    OriginLine, Plane => Point: origin_line_plane,
    OriginLine, IdealLine => Pseudoscalar: origin_line_ideal_line,
    OriginLine, Line => Pseudoscalar: origin_line_line,

    Line, Plane => Point: line_plane,
    Line, IdealLine => Pseudoscalar: line_ideal_line,
    Line, OriginLine => Pseudoscalar: line_origin_line,
    Line, Line => Pseudoscalar: line_line,

    Point, Plane => Pseudoscalar: point_plane,
}

binary_op! {
    /// Regressive product, which is the span of two primitives.
    pub fn join(Join) in regressive;
    pub const JOIN_TABLE;

    Plane, Point => Scalar: plane_point,

    IdealLine, OriginLine => Scalar: ideal_line_origin_line,
    IdealLine, Line => Scalar: ideal_line_line,
    IdealLine, Point => Plane: ideal_line_point,

    OriginLine, IdealLine => Scalar: origin_line_ideal_line,
    OriginLine, Line => Scalar: origin_line_line,
    OriginLine, Point => Plane: origin_line_point,

    Line, IdealLine => Scalar: line_ideal_line,
    Line, OriginLine => Scalar: line_origin_line,
    Line, Line => Scalar: line_line,
    Line, Point => Plane: line_point,

    Point, Plane => Scalar: point_plane,
    Point, IdealLine => Plane: point_ideal_line,
    Point, OriginLine => Plane: point_origin_line,
    Point, Line => Plane: point_line,
    Point, Point => Line: point_point,
}

binary_op! {
    /// Sandwich product `rhs * lhs * ~rhs`, which transforms `lhs` by `rhs`.
    ///
    /// The result has the same type as `lhs`.
    pub fn sw(Sandwich) in sandwich;
    pub const SANDWICH_TABLE;

    Plane, Plane => Plane: plane_by_plane,
    Plane, Motor => Plane: plane_by_motor,
    Plane, Rotor => Plane: plane_by_rotor,
    Plane, Translator => Plane: plane_by_translator,

    Line, Plane => Line: line_by_plane,
    Line, Motor => Line: line_by_motor,
    Line, Rotor => Line: line_by_rotor,
    Line, Translator => Line: line_by_translator,

    Point, Plane => Point: point_by_plane,
    Point, Motor => Point: point_by_motor,
    Point, Rotor => Point: point_by_rotor,
    Point, Translator => Point: point_by_translator,
}

metric_op! {
    /// Euclidean distance between two primitives.
    pub fn distance(Distance);
    pub const DISTANCE_TABLE;

    Point, Point => distance_point_point,
    Point, Plane => distance_point_plane,
    Plane, Point => distance_plane_point,
    Point, Line => distance_point_line,
    Line, Point => distance_line_point,
}

metric_op! {
    /// Angle in radians between two primitives.
    pub fn angle(Angle);
    pub const ANGLE_TABLE;

    Plane, Plane => angle_plane_plane,
    Line, Line => angle_line_line,
    Plane, Line => angle_plane_line,
    Line, Plane => angle_line_plane,
}

unary_op! {
    /// Poincaré dual.
    pub fn dual(Dual);
    pub const DUAL_TABLE;

    Plane => Point: dual_fns::plane,
    Point => Plane: dual_fns::point,
    IdealLine => OriginLine: dual_fns::ideal_line,
    OriginLine => IdealLine: dual_fns::origin_line,
    Line => Line: dual_fns::line,
    Motor => Motor: dual_fns::motor,
    Rotor => IdealLine: dual_fns::rotor,
    Multivector => Multivector: dual_fns::multivector,
}

unary_op! {
    /// Exponential of a bivector.
    pub fn exp(Exp);
    pub const EXP_TABLE;

    IdealLine => Translator: functional::exp_ideal_line,
    OriginLine => Rotor: functional::exp_origin_line,
    Line => Motor: functional::exp_line,
}

unary_op! {
    /// Logarithm of a normalized motion.
    pub fn log(Log);
    pub const LOG_TABLE;

    Translator => IdealLine: functional::log_translator,
    Rotor => OriginLine: functional::log_rotor,
    Motor => Line: functional::log_motor,
}

unary_op! {
    /// Square root of a normalized motion.
    pub fn sqrt(Sqrt);
    pub const SQRT_TABLE;

    Translator => Translator: functional::sqrt_translator,
    Rotor => Rotor: functional::sqrt_rotor,
    Motor => Motor: functional::sqrt_motor,
    Line => Motor: functional::sqrt_line,
}

/// Returns the result type of a binary operator applied to operands of the
/// given types, or `None` if the operation vanishes or is unsupported.
pub fn binary_result_type(
    op: Operator,
    lhs: ElementType,
    rhs: ElementType,
) -> Option<ElementType> {
    let table = match op {
        Operator::Mul => MUL_TABLE,
        Operator::Dot => DOT_TABLE,
        Operator::Meet => MEET_TABLE,
        Operator::Join => JOIN_TABLE,
        Operator::Sandwich => SANDWICH_TABLE,
        Operator::Distance => {
            return DISTANCE_TABLE.contains(&(lhs, rhs)).then_some(ElementType::Scalar);
        }
        Operator::Angle => {
            return ANGLE_TABLE.contains(&(lhs, rhs)).then_some(ElementType::Scalar);
        }
        Operator::Dual | Operator::Exp | Operator::Log | Operator::Sqrt => return None,
    };
    table
        .iter()
        .find(|&&(l, r, _)| l == lhs && r == rhs)
        .map(|&(_, _, out)| out)
}

/// Returns the result type of a unary operator applied to an operand of the
/// given type, or `None` if the operator does not accept it.
pub fn unary_result_type(op: Operator, operand: ElementType) -> Option<ElementType> {
    let table = match op {
        Operator::Dual => DUAL_TABLE,
        Operator::Exp => EXP_TABLE,
        Operator::Log => LOG_TABLE,
        Operator::Sqrt => SQRT_TABLE,
        _ => return None,
    };
    table
        .iter()
        .find(|&&(ty, _)| ty == operand)
        .map(|&(_, out)| out)
}

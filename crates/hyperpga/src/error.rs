//! Operators and errors reported by typed dispatch.

use strum::Display;
use thiserror::Error;

use crate::ElementType;

/// Operator in the projective geometric algebra.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum Operator {
    /// Geometric product
    #[strum(serialize = "*")]
    Mul,
    /// Inner product
    #[strum(serialize = "·")]
    Dot,
    /// Outer product
    #[strum(serialize = "∧")]
    Meet,
    /// Regressive product
    #[strum(serialize = "∨")]
    Join,
    /// Sandwich product
    #[strum(serialize = ">>>")]
    Sandwich,
    /// Distance between two primitives
    Distance,
    /// Angle between two primitives
    Angle,
    /// Poincaré dual
    Dual,
    /// Exponential
    Exp,
    /// Logarithm
    Log,
    /// Square root
    Sqrt,
}

impl Operator {
    /// Returns whether the operator takes a single operand.
    pub fn is_unary(self) -> bool {
        matches!(
            self,
            Operator::Dual | Operator::Exp | Operator::Log | Operator::Sqrt
        )
    }

    /// Formats the operator applied to operands of the given types, such as
    /// `[Point∧Point]` or `[distance(Point, Line)]`.
    pub fn signature(self, lhs: ElementType, rhs: ElementType) -> String {
        match self {
            Operator::Distance | Operator::Angle => format!("[{self}({lhs}, {rhs})]"),
            _ => format!("[{lhs}{self}{rhs}]"),
        }
    }
}

/// Error produced by an operation in the projective geometric algebra.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PgaError {
    /// Component-wise arithmetic or comparison between different types
    #[error("invalid operand: expected {expected}, got {got}")]
    InvalidOperand {
        /// Type of the left-hand operand.
        expected: ElementType,
        /// Type of the right-hand operand.
        got: ElementType,
    },
    /// Binary operation whose result is identically zero or undefined for
    /// the pair of operand types
    #[error("operation vanishes: {}", signature(.op, .lhs, .rhs))]
    Vanishing {
        /// Operator.
        op: Operator,
        /// Type of the left-hand operand.
        lhs: ElementType,
        /// Type of the right-hand operand.
        rhs: ElementType,
    },
    /// Operand outside the set that an operation accepts
    #[error("unsupported operand: {0}")]
    Unsupported(String),
}

fn signature(op: &Operator, lhs: &ElementType, rhs: &ElementType) -> String {
    op.signature(*lhs, *rhs)
}

impl PgaError {
    /// Constructs an error for an operator applied to an operand type it does
    /// not accept.
    pub fn unsupported(op: Operator, operand: ElementType) -> Self {
        Self::Unsupported(match op.is_unary() {
            true => format!("{op}({operand})"),
            false => format!("{operand} as operand of {op}"),
        })
    }
}

//! Closed-form products between statically-typed elements.
//!
//! Each binary product has one function per supported pair of operand types,
//! named `lhs_rhs` (or `lhs_by_rhs` for sandwich products). The formulas are
//! fixed consequences of the 3,0,1 metric and are checked against the
//! term-by-term products on [`crate::Multivector`].

pub mod dual;
pub mod geometric;
pub mod inner;
pub mod metric;
pub mod outer;
pub mod regressive;
pub mod sandwich;

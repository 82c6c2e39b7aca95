//! Registry of element kinds.

use strum::{Display, IntoStaticStr};

use crate::PgaError;

/// Kind of a PGA element.
///
/// Every element value has exactly one type, which never changes.
#[derive(Debug, Display, IntoStaticStr, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum ElementType {
    Plane,
    IdealLine,
    OriginLine,
    Line,
    Point,
    Motor,
    Rotor,
    Translator,
    Multivector,
    Scalar,
    Pseudoscalar,
}

impl ElementType {
    /// Every element type, in declaration order.
    pub const ALL: [ElementType; 11] = [
        ElementType::Plane,
        ElementType::IdealLine,
        ElementType::OriginLine,
        ElementType::Line,
        ElementType::Point,
        ElementType::Motor,
        ElementType::Rotor,
        ElementType::Translator,
        ElementType::Multivector,
        ElementType::Scalar,
        ElementType::Pseudoscalar,
    ];

    /// Geometric primitives, which participate in incidence products.
    pub const PRIMITIVES: [ElementType; 5] = [
        ElementType::Plane,
        ElementType::IdealLine,
        ElementType::OriginLine,
        ElementType::Line,
        ElementType::Point,
    ];

    /// Returns the type with the given ordinal.
    pub fn from_index(index: usize) -> Result<Self, PgaError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| PgaError::Unsupported(format!("element type #{index}")))
    }
    /// Returns the ordinal of the type.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the human-readable name of the type.
    pub fn display_name(self) -> &'static str {
        self.into()
    }

    /// Returns the number of coefficients stored by an element of this type.
    pub const fn arity(self) -> usize {
        match self {
            ElementType::Line | ElementType::Motor => 8,
            ElementType::Multivector => 16,
            ElementType::Scalar | ElementType::Pseudoscalar => 1,
            _ => 4,
        }
    }

    /// Returns the grade that a geometric primitive is made of, or `None` for
    /// types that are not primitives.
    ///
    /// Lines store a scalar and pseudoscalar slot but are grade 2.
    pub const fn primary_grade(self) -> Option<u8> {
        match self {
            ElementType::Plane => Some(1),
            ElementType::IdealLine | ElementType::OriginLine | ElementType::Line => Some(2),
            ElementType::Point => Some(3),
            ElementType::Scalar => Some(0),
            ElementType::Pseudoscalar => Some(4),
            _ => None,
        }
    }

    /// Returns whether the type is a bare scalar or pseudoscalar, which are
    /// only ever produced as results and never accepted as operands.
    pub const fn is_scalar_like(self) -> bool {
        matches!(self, ElementType::Scalar | ElementType::Pseudoscalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index() {
        for (i, ty) in ElementType::ALL.into_iter().enumerate() {
            assert_eq!(ElementType::from_index(i), Ok(ty));
            assert_eq!(ty.index(), i);
        }
        assert!(matches!(ElementType::from_index(11), Err(PgaError::Unsupported(_))));
        assert!(matches!(ElementType::from_index(usize::MAX), Err(PgaError::Unsupported(_))));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(ElementType::IdealLine.to_string(), "IdealLine");
        assert_eq!(ElementType::Pseudoscalar.display_name(), "Pseudoscalar");
    }
}

//! Dynamically-typed element.

use std::fmt;

use crate::elements::Element;
use crate::{
    ElementType, Float, IdealLine, Line, Motor, Multivector, OriginLine, PgaError, Plane, Point,
    Rotor, Translator,
};

/// Element of any type, including bare scalar and pseudoscalar results.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum AnyElement {
    Plane(Plane),
    IdealLine(IdealLine),
    OriginLine(OriginLine),
    Line(Line),
    Point(Point),
    Motor(Motor),
    Rotor(Rotor),
    Translator(Translator),
    Multivector(Multivector),
    /// Scalar, such as the inner product of two planes
    Scalar(Float),
    /// Multiple of `e0123`, such as the outer product of two lines
    Pseudoscalar(Float),
}

/// Evaluates `$body` with `$e` bound to the element inside any non-scalar
/// variant, or `$scalar_body` with `$x` bound to the number inside a scalar or
/// pseudoscalar.
macro_rules! match_any_element {
    ($value:expr, $e:ident => $body:expr, $x:ident => $scalar_body:expr $(,)?) => {
        match $value {
            AnyElement::Plane($e) => $body,
            AnyElement::IdealLine($e) => $body,
            AnyElement::OriginLine($e) => $body,
            AnyElement::Line($e) => $body,
            AnyElement::Point($e) => $body,
            AnyElement::Motor($e) => $body,
            AnyElement::Rotor($e) => $body,
            AnyElement::Translator($e) => $body,
            AnyElement::Multivector($e) => $body,
            AnyElement::Scalar($x) | AnyElement::Pseudoscalar($x) => $scalar_body,
        }
    };
}

impl fmt::Display for AnyElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyElement::Pseudoscalar(x) => {
                fmt::Display::fmt(x, f)?;
                write!(f, " e0123")
            }
            _ => match_any_element!(
                self,
                e => fmt::Display::fmt(e, f),
                x => fmt::Display::fmt(x, f),
            ),
        }
    }
}

impl approx::AbsDiffEq for AnyElement {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        crate::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.element_type() == other.element_type()
            && std::iter::zip(self.coefs(), other.coefs())
                .all(|(a, b)| approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
    }
}

impl AnyElement {
    /// Returns the zero element of a type.
    pub fn zero(ty: ElementType) -> Self {
        match ty {
            ElementType::Plane => Plane::zero().into(),
            ElementType::IdealLine => IdealLine::zero().into(),
            ElementType::OriginLine => OriginLine::zero().into(),
            ElementType::Line => Line::zero().into(),
            ElementType::Point => Point::zero().into(),
            ElementType::Motor => Motor::zero().into(),
            ElementType::Rotor => Rotor::zero().into(),
            ElementType::Translator => Translator::zero().into(),
            ElementType::Multivector => Multivector::zero().into(),
            ElementType::Scalar => AnyElement::Scalar(0.0),
            ElementType::Pseudoscalar => AnyElement::Pseudoscalar(0.0),
        }
    }
    /// Constructs an element of type `ty` from its coefficients.
    ///
    /// Returns an error if the number of coefficients does not match the
    /// type.
    pub fn from_coefs(ty: ElementType, coefs: &[Float]) -> Result<Self, PgaError> {
        let mut ret = Self::zero(ty);
        if coefs.len() != ty.arity() {
            return Err(PgaError::Unsupported(format!(
                "{ty} with {} coefficients (expected {})",
                coefs.len(),
                ty.arity(),
            )));
        }
        ret.coefs_mut().copy_from_slice(coefs);
        Ok(ret)
    }

    /// Returns the type of the element.
    pub fn element_type(&self) -> ElementType {
        match self {
            AnyElement::Scalar(_) => ElementType::Scalar,
            AnyElement::Pseudoscalar(_) => ElementType::Pseudoscalar,
            _ => match_any_element!(self, e => element_type_of(e), _x => ElementType::Scalar),
        }
    }
    /// Returns the coefficients.
    pub fn coefs(&self) -> &[Float] {
        match_any_element!(self, e => e.coefs(), x => std::slice::from_ref(x))
    }
    /// Returns the coefficients mutably.
    pub fn coefs_mut(&mut self) -> &mut [Float] {
        match_any_element!(self, e => e.coefs_mut(), x => std::slice::from_mut(x))
    }
    /// Returns the element as a general multivector.
    pub fn to_multivector(&self) -> Multivector {
        match self {
            AnyElement::Scalar(x) => Multivector::from_terms([crate::Term::scalar(*x)]),
            AnyElement::Pseudoscalar(x) => {
                Multivector::from_terms([crate::Term::unit(crate::Axes::E0123) * *x])
            }
            _ => match_any_element!(
                self,
                e => Multivector::from_element(e),
                _x => Multivector::zero(),
            ),
        }
    }

    /// Returns the grade involution.
    #[must_use]
    pub fn involuted(&self) -> Self {
        match_any_element!(self, e => e.involuted().into(), _x => *self)
    }
    /// Returns the reverse.
    #[must_use]
    pub fn reversed(&self) -> Self {
        match_any_element!(self, e => e.reversed().into(), _x => *self)
    }
    /// Returns the Clifford conjugate.
    #[must_use]
    pub fn conjugated(&self) -> Self {
        match_any_element!(self, e => e.conjugated().into(), _x => *self)
    }
    /// Returns the negation.
    #[must_use]
    pub fn negated(&self) -> Self {
        let mut ret = *self;
        for c in ret.coefs_mut() {
            *c = -*c;
        }
        ret
    }

    /// Applies `f` to each pair of corresponding coefficients of `self` and
    /// `rhs`, or to each coefficient of `self` and the number `rhs` if it is a
    /// scalar.
    fn zip_with(&self, rhs: &Self, f: impl Fn(Float, Float) -> Float) -> Result<Self, PgaError> {
        let mut ret = *self;
        if self.element_type() == rhs.element_type() {
            for (a, &b) in std::iter::zip(ret.coefs_mut(), rhs.coefs()) {
                *a = f(*a, b);
            }
        } else if let AnyElement::Scalar(k) = *rhs {
            for a in ret.coefs_mut() {
                *a = f(*a, k);
            }
        } else {
            return Err(self.mismatch(rhs));
        }
        Ok(ret)
    }
    fn mismatch(&self, rhs: &Self) -> PgaError {
        PgaError::InvalidOperand {
            expected: self.element_type(),
            got: rhs.element_type(),
        }
    }

    /// Adds coefficients component-wise.
    pub fn try_add(&self, rhs: &Self) -> Result<Self, PgaError> {
        self.zip_with(rhs, |a, b| a + b)
    }
    /// Subtracts coefficients component-wise.
    pub fn try_sub(&self, rhs: &Self) -> Result<Self, PgaError> {
        self.zip_with(rhs, |a, b| a - b)
    }
    /// Multiplies coefficients component-wise. This is not the geometric
    /// product; see [`crate::dispatch::mul()`] for that.
    pub fn try_mul(&self, rhs: &Self) -> Result<Self, PgaError> {
        self.zip_with(rhs, |a, b| a * b)
    }
    /// Divides coefficients component-wise.
    pub fn try_div(&self, rhs: &Self) -> Result<Self, PgaError> {
        self.zip_with(rhs, |a, b| a / b)
    }

    /// Compares coefficients exactly. Returns an error if the types differ.
    pub fn try_eq(&self, rhs: &Self) -> Result<bool, PgaError> {
        match self.element_type() == rhs.element_type() {
            true => Ok(self.coefs() == rhs.coefs()),
            false => Err(self.mismatch(rhs)),
        }
    }
    /// Compares coefficients to within `epsilon`. Returns an error if the
    /// types differ.
    pub fn try_approx_eq(&self, rhs: &Self, epsilon: Float) -> Result<bool, PgaError> {
        match self.element_type() == rhs.element_type() {
            true => Ok(approx::AbsDiffEq::abs_diff_eq(self, rhs, epsilon)),
            false => Err(self.mismatch(rhs)),
        }
    }
}

fn element_type_of<E: Element>(_: &E) -> ElementType {
    E::TYPE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_type_fidelity() {
        for ty in ElementType::ALL {
            let e = AnyElement::zero(ty);
            assert_eq!(e.element_type(), ty);
            assert_eq!(e.coefs().len(), ty.arity());
        }
        assert_eq!(AnyElement::from(Point::origin()).element_type(), ElementType::Point);
        assert_eq!(Point::try_from(AnyElement::from(Point::origin())), Ok(Point::origin()));
        assert_eq!(
            Plane::try_from(AnyElement::from(Point::origin())),
            Err(PgaError::InvalidOperand {
                expected: ElementType::Plane,
                got: ElementType::Point,
            }),
        );
    }

    #[test]
    fn test_component_arithmetic() {
        let a = AnyElement::from(Plane::new(1.0, 2.0, 3.0, 4.0));
        let b = AnyElement::from(Plane::new(4.0, 3.0, 2.0, 1.0));
        assert_eq!(a.try_add(&b), Ok(Plane::new(5.0, 5.0, 5.0, 5.0).into()));
        assert_eq!(a.try_sub(&b), Ok(Plane::new(-3.0, -1.0, 1.0, 3.0).into()));
        assert_eq!(a.try_mul(&b), Ok(Plane::new(4.0, 6.0, 6.0, 4.0).into()));
        assert_eq!(
            a.try_div(&AnyElement::Scalar(2.0)),
            Ok(Plane::new(0.5, 1.0, 1.5, 2.0).into()),
        );
        let p = AnyElement::from(Point::origin());
        assert_eq!(
            a.try_add(&p),
            Err(PgaError::InvalidOperand {
                expected: ElementType::Plane,
                got: ElementType::Point,
            }),
        );
        assert!(a.try_eq(&p).is_err());
        assert_eq!(a.try_eq(&a), Ok(true));
        assert_eq!(a.try_eq(&b), Ok(false));
        let nudged = a.try_add(&AnyElement::Scalar(1e-9)).unwrap_or(a);
        assert_eq!(a.try_approx_eq(&nudged, crate::EPSILON), Ok(true));
        assert_eq!(a.try_eq(&nudged), Ok(false));
    }

    #[test]
    fn test_from_coefs() {
        let e = AnyElement::from_coefs(ElementType::Rotor, &[1.0, 0.0, 0.0, 0.0]);
        assert_eq!(e, Ok(Rotor::from_coefs([1.0, 0.0, 0.0, 0.0]).into()));
        assert!(AnyElement::from_coefs(ElementType::Rotor, &[1.0]).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(AnyElement::Pseudoscalar(2.0).to_string(), "2 e0123");
        assert_eq!(AnyElement::Scalar(-1.0).to_string(), "-1");
        assert_eq!(AnyElement::from(Point::new(1.0, 0.0, 0.0)).to_string(), "1 e032 + 1 e123");
    }
}

//! Element value types.
//!
//! Each type stores a fixed-size array of coefficients. The basis blade for
//! each coefficient is given by [`Element::BASIS`].

use std::fmt;
use std::ops::MulAssign;

use approx::AbsDiffEq;

use crate::{AnyElement, Axes, ElementType, Float, Sign, Term};

/// Defines an element type backed by a fixed-size coefficient array.
///
/// Each slot is declared as `[index] getter, setter: basis_term`. Slots must
/// be listed in index order.
macro_rules! define_element {
    (
        $(#[$attr:meta])*
        pub struct $name:ident[$len:literal] {
            $([$index:literal] $getter:ident, $setter:ident: $basis:expr),+ $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq)]
        #[repr(C)]
        #[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            coefficients: [$crate::Float; $len],
        }

        impl $name {
            /// Number of coefficients.
            pub const LEN: usize = $len;

            /// Constructs an element from its coefficients.
            pub const fn from_coefs(coefficients: [$crate::Float; $len]) -> Self {
                Self { coefficients }
            }
            /// Constructs an element with every coefficient zero.
            pub const fn zero() -> Self {
                Self::from_coefs([0.0; $len])
            }
            /// Returns the array of coefficients.
            pub const fn to_coefs(self) -> [$crate::Float; $len] {
                self.coefficients
            }

            $(
                #[doc = concat!("Returns the `", stringify!($getter), "` coefficient.")]
                pub const fn $getter(&self) -> $crate::Float {
                    self.coefficients[$index]
                }
                #[doc = concat!("Sets the `", stringify!($getter), "` coefficient.")]
                pub fn $setter(&mut self, value: $crate::Float) -> &mut Self {
                    self.coefficients[$index] = value;
                    self
                }
            )+

            /// Multiplies each coefficient by the corresponding coefficient of
            /// `other`.
            #[must_use]
            pub fn mul_components(mut self, other: Self) -> Self {
                for (a, b) in std::iter::zip(&mut self.coefficients, other.coefficients) {
                    *a *= b;
                }
                self
            }
            /// Divides each coefficient by the corresponding coefficient of
            /// `other`.
            #[must_use]
            pub fn div_components(mut self, other: Self) -> Self {
                for (a, b) in std::iter::zip(&mut self.coefficients, other.coefficients) {
                    *a /= b;
                }
                self
            }
        }

        impl $crate::elements::Element for $name {
            const TYPE: $crate::ElementType = $crate::ElementType::$name;
            const BASIS: &'static [$crate::Term] = &[$($basis),+];
            const LABELS: &'static [&'static str] = &[$(stringify!($getter)),+];

            fn zero() -> Self {
                Self::zero()
            }
            fn coefs(&self) -> &[$crate::Float] {
                &self.coefficients
            }
            fn coefs_mut(&mut self) -> &mut [$crate::Float] {
                &mut self.coefficients
            }
        }

        impl From<$name> for $crate::AnyElement {
            fn from(value: $name) -> Self {
                $crate::AnyElement::$name(value)
            }
        }
        impl TryFrom<$crate::AnyElement> for $name {
            type Error = $crate::PgaError;

            fn try_from(value: $crate::AnyElement) -> Result<Self, Self::Error> {
                match value {
                    $crate::AnyElement::$name(e) => Ok(e),
                    other => Err($crate::PgaError::InvalidOperand {
                        expected: $crate::ElementType::$name,
                        got: other.element_type(),
                    }),
                }
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let mut ret = f.debug_struct(stringify!($name));
                $( ret.field(stringify!($getter), &self.coefficients[$index]); )+
                ret.finish()
            }
        }
        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                $crate::elements::display_terms(
                    f,
                    std::iter::zip(
                        <Self as $crate::elements::Element>::LABELS.iter().copied(),
                        self.coefficients,
                    ),
                )
            }
        }

        impl approx::AbsDiffEq for $name {
            type Epsilon = $crate::Float;

            fn default_epsilon() -> Self::Epsilon {
                $crate::EPSILON
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                std::iter::zip(self.coefficients, other.coefficients)
                    .all(|(a, b)| approx::AbsDiffEq::abs_diff_eq(&a, &b, epsilon))
            }
        }

        impl std::ops::Index<usize> for $name {
            type Output = $crate::Float;

            fn index(&self, index: usize) -> &Self::Output {
                &self.coefficients[index]
            }
        }
        impl std::ops::IndexMut<usize> for $name {
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                &mut self.coefficients[index]
            }
        }

        impl std::ops::Neg for $name {
            type Output = Self;

            fn neg(mut self) -> Self::Output {
                for c in &mut self.coefficients {
                    *c = -*c;
                }
                self
            }
        }
        impl std::ops::AddAssign for $name {
            fn add_assign(&mut self, rhs: Self) {
                for (a, b) in std::iter::zip(&mut self.coefficients, rhs.coefficients) {
                    *a += b;
                }
            }
        }
        impl std::ops::SubAssign for $name {
            fn sub_assign(&mut self, rhs: Self) {
                for (a, b) in std::iter::zip(&mut self.coefficients, rhs.coefficients) {
                    *a -= b;
                }
            }
        }
        impl std::ops::MulAssign<$crate::Float> for $name {
            fn mul_assign(&mut self, rhs: $crate::Float) {
                for c in &mut self.coefficients {
                    *c *= rhs;
                }
            }
        }
        impl std::ops::DivAssign<$crate::Float> for $name {
            fn div_assign(&mut self, rhs: $crate::Float) {
                for c in &mut self.coefficients {
                    *c /= rhs;
                }
            }
        }
        impl std::ops::Add for $name {
            type Output = Self;

            fn add(mut self, rhs: Self) -> Self::Output {
                self += rhs;
                self
            }
        }
        impl std::ops::Sub for $name {
            type Output = Self;

            fn sub(mut self, rhs: Self) -> Self::Output {
                self -= rhs;
                self
            }
        }
        impl std::ops::Mul<$crate::Float> for $name {
            type Output = Self;

            fn mul(mut self, rhs: $crate::Float) -> Self::Output {
                self *= rhs;
                self
            }
        }
        impl std::ops::Mul<$name> for $crate::Float {
            type Output = $name;

            fn mul(self, rhs: $name) -> Self::Output {
                rhs * self
            }
        }
        impl std::ops::Div<$crate::Float> for $name {
            type Output = Self;

            fn div(mut self, rhs: $crate::Float) -> Self::Output {
                self /= rhs;
                self
            }
        }
    };
}

mod ideal_line;
mod line;
mod motor;
mod multivector;
mod origin_line;
mod plane;
mod point;
mod rotor;
mod translator;

pub use ideal_line::IdealLine;
pub use line::Line;
pub use motor::Motor;
pub use multivector::Multivector;
pub use origin_line::OriginLine;
pub use plane::Plane;
pub use point::Point;
pub use rotor::Rotor;
pub use translator::Translator;

/// Value in the projective geometric algebra with a fixed type and a
/// fixed-size array of coefficients.
pub trait Element:
    'static
    + fmt::Debug
    + fmt::Display
    + Copy
    + PartialEq
    + Default
    + AbsDiffEq<Epsilon = Float>
    + MulAssign<Float>
    + Into<AnyElement>
{
    /// Type of the element.
    const TYPE: ElementType;
    /// Signed basis blade for each coefficient.
    const BASIS: &'static [Term];
    /// Conventional name of the basis blade for each coefficient.
    const LABELS: &'static [&'static str];

    /// Returns the element with every coefficient zero.
    fn zero() -> Self;
    /// Returns the coefficients.
    fn coefs(&self) -> &[Float];
    /// Returns the coefficients mutably.
    fn coefs_mut(&mut self) -> &mut [Float];

    /// Returns the terms of the element with canonical basis blades.
    fn terms(&self) -> impl Iterator<Item = Term> + '_ {
        std::iter::zip(Self::BASIS, self.coefs()).map(|(&basis, &coef)| basis * coef)
    }

    /// Returns whether every coefficient is exactly zero.
    fn is_zero(&self) -> bool {
        self.coefs().iter().all(|&c| c == 0.0)
    }
    /// Returns whether every coefficient is finite.
    fn is_finite(&self) -> bool {
        self.coefs().iter().all(|c| c.is_finite())
    }
    /// Returns whether `self` and `other` are equal to within `epsilon` in
    /// every coefficient.
    fn approx_eq(&self, other: &Self, epsilon: Float) -> bool {
        self.abs_diff_eq(other, epsilon)
    }

    /// Multiplies each coefficient by the sign that `sign_of` returns for its
    /// basis blade.
    fn flip_grades(&mut self, sign_of: impl Fn(Axes) -> Sign) -> &mut Self {
        for (c, basis) in std::iter::zip(self.coefs_mut(), Self::BASIS) {
            *c *= sign_of(basis.axes);
        }
        self
    }
    /// Applies the grade involution in place, negating odd grades.
    fn involute(&mut self) -> &mut Self {
        self.flip_grades(Axes::sign_of_involute)
    }
    /// Applies the reverse in place, negating grades 2 and 3.
    fn reverse(&mut self) -> &mut Self {
        self.flip_grades(Axes::sign_of_reverse)
    }
    /// Applies the Clifford conjugate in place, negating grades 1 and 2.
    fn conjugate(&mut self) -> &mut Self {
        self.flip_grades(Axes::sign_of_conjugate)
    }
    /// Negates every coefficient in place.
    fn negate(&mut self) -> &mut Self {
        self.flip_grades(|_| Sign::Neg)
    }
    /// Returns the grade involution.
    #[must_use]
    fn involuted(&self) -> Self {
        let mut ret = *self;
        ret.involute();
        ret
    }
    /// Returns the reverse.
    #[must_use]
    fn reversed(&self) -> Self {
        let mut ret = *self;
        ret.reverse();
        ret
    }
    /// Returns the Clifford conjugate.
    #[must_use]
    fn conjugated(&self) -> Self {
        let mut ret = *self;
        ret.conjugate();
        ret
    }
    /// Returns the negation.
    #[must_use]
    fn negated(&self) -> Self {
        let mut ret = *self;
        ret.negate();
        ret
    }
}

/// Element with a primary (Euclidean) norm and an infinity (ideal) norm.
pub trait Normed: Element {
    /// Returns the square of the primary norm.
    fn length_sq(&self) -> Float;
    /// Returns the square of the infinity norm.
    fn infinity_length_sq(&self) -> Float;

    /// Returns the primary norm.
    fn length(&self) -> Float {
        self.length_sq().sqrt()
    }
    /// Returns the infinity norm.
    fn infinity_length(&self) -> Float {
        self.infinity_length_sq().sqrt()
    }

    /// Rescales the element in place so that its primary norm is 1.
    ///
    /// A zero norm produces non-finite coefficients; use
    /// [`Normed::try_normalized()`] to detect this.
    fn normalize(&mut self) -> &mut Self {
        *self *= self.length().recip();
        self
    }
    /// Returns the element rescaled so that its primary norm is 1.
    #[must_use]
    fn normalized(&self) -> Self {
        let mut ret = *self;
        ret.normalize();
        ret
    }
    /// Returns the normalized element, or `None` if the norm is zero.
    fn try_normalized(&self) -> Option<Self> {
        Some(self.normalized()).filter(|ret| ret.is_finite())
    }
}

/// Element with a multiplicative inverse under the geometric product.
pub trait Invertible: Element {
    /// Replaces the element with its inverse.
    ///
    /// A non-invertible element produces non-finite coefficients; use
    /// [`Invertible::try_inverted()`] to detect this.
    fn invert(&mut self) -> &mut Self;

    /// Returns the inverse.
    #[must_use]
    fn inverted(&self) -> Self {
        let mut ret = *self;
        ret.invert();
        ret
    }
    /// Returns the inverse, or `None` if the element is not invertible.
    fn try_inverted(&self) -> Option<Self> {
        Some(self.inverted()).filter(|ret| ret.is_finite())
    }
}

/// Writes the nonzero terms of an element, such as `1 e01 - 2.5 e23`.
pub(crate) fn display_terms(
    f: &mut fmt::Formatter<'_>,
    terms: impl IntoIterator<Item = (&'static str, Float)>,
) -> fmt::Result {
    let mut is_first = true;
    for (label, coef) in terms {
        if coef == 0.0 {
            continue;
        }
        if is_first {
            fmt::Display::fmt(&coef, f)?;
        } else if coef < 0.0 {
            write!(f, " - ")?;
            fmt::Display::fmt(&-coef, f)?;
        } else {
            write!(f, " + ")?;
            fmt::Display::fmt(&coef, f)?;
        }
        if label != "s" {
            write!(f, " {label}")?;
        }
        is_first = false;
    }
    if is_first {
        write!(f, "0")?;
    }
    Ok(())
}

// ============================================================================
// Scalar
// Matrix element type: a decimal or a complex number
// ============================================================================

use super::complex::ComplexValue;
use crate::numeric::{AlgebraResult, DecimalValue};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A matrix element.
///
/// Mixed operations promote the decimal side to a complex number; results
/// are never demoted back to a decimal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Scalar {
    Decimal(DecimalValue),
    Complex(ComplexValue),
}

impl Scalar {
    pub fn zero() -> Self {
        Scalar::Decimal(DecimalValue::zero())
    }

    pub fn one() -> Self {
        Scalar::Decimal(DecimalValue::one())
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Scalar::Decimal(d) => d.is_zero(),
            Scalar::Complex(c) => c.is_zero(),
        }
    }

    pub fn negated(&self) -> Self {
        match self {
            Scalar::Decimal(d) => Scalar::Decimal(d.negated()),
            Scalar::Complex(c) => Scalar::Complex(c.negated()),
        }
    }

    pub fn add(&self, other: &Self) -> Self {
        match (self, other) {
            (Scalar::Decimal(a), Scalar::Decimal(b)) => Scalar::Decimal(a.add(b)),
            (Scalar::Complex(a), Scalar::Complex(b)) => Scalar::Complex(a.add(b)),
            (Scalar::Complex(c), Scalar::Decimal(d)) | (Scalar::Decimal(d), Scalar::Complex(c)) => {
                Scalar::Complex(c.add_decimal(d))
            },
        }
    }

    pub fn subtract(&self, other: &Self) -> Self {
        match (self, other) {
            (Scalar::Decimal(a), Scalar::Decimal(b)) => Scalar::Decimal(a.subtract(b)),
            (Scalar::Complex(a), Scalar::Complex(b)) => Scalar::Complex(a.subtract(b)),
            (Scalar::Complex(c), Scalar::Decimal(d)) => Scalar::Complex(c.subtract_decimal(d)),
            (Scalar::Decimal(d), Scalar::Complex(c)) => {
                Scalar::Complex(ComplexValue::from(d.clone()).subtract(c))
            },
        }
    }

    pub fn multiply(&self, other: &Self) -> Self {
        match (self, other) {
            (Scalar::Decimal(a), Scalar::Decimal(b)) => Scalar::Decimal(a.multiply(b)),
            (Scalar::Complex(a), Scalar::Complex(b)) => Scalar::Complex(a.multiply(b)),
            (Scalar::Complex(c), Scalar::Decimal(d)) | (Scalar::Decimal(d), Scalar::Complex(c)) => {
                Scalar::Complex(c.multiply_decimal(d))
            },
        }
    }

    /// # Errors
    /// Returns `DivisionByZero` if `other` is zero.
    pub fn divide(&self, other: &Self) -> AlgebraResult<Self> {
        Ok(match (self, other) {
            (Scalar::Decimal(a), Scalar::Decimal(b)) => Scalar::Decimal(a.divide(b)?),
            (Scalar::Complex(a), Scalar::Complex(b)) => Scalar::Complex(a.divide(b)?),
            (Scalar::Complex(c), Scalar::Decimal(d)) => Scalar::Complex(c.divide_decimal(d)?),
            (Scalar::Decimal(d), Scalar::Complex(c)) => {
                Scalar::Complex(ComplexValue::from(d.clone()).divide(c)?)
            },
        })
    }

    /// Multiplicative inverse, `1 / self`.
    pub fn inverse(&self) -> AlgebraResult<Self> {
        Scalar::one().divide(self)
    }
}

impl From<DecimalValue> for Scalar {
    #[inline]
    fn from(value: DecimalValue) -> Self {
        Scalar::Decimal(value)
    }
}

impl From<ComplexValue> for Scalar {
    #[inline]
    fn from(value: ComplexValue) -> Self {
        Scalar::Complex(value)
    }
}

impl From<i32> for Scalar {
    #[inline]
    fn from(value: i32) -> Self {
        Scalar::Decimal(DecimalValue::from(value))
    }
}

impl From<i64> for Scalar {
    #[inline]
    fn from(value: i64) -> Self {
        Scalar::Decimal(DecimalValue::from(value))
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Decimal(d) => write!(f, "{}", d),
            Scalar::Complex(c) => write!(f, "{}", c),
        }
    }
}

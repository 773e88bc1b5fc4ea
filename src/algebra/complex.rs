// ============================================================================
// Complex Value
// Complex numbers over exact decimals
// ============================================================================

use crate::numeric::{AlgebraResult, DecimalValue};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable complex number `real + imaginary·i`.
///
/// All arithmetic is carried out by the decimal engine. A value built here
/// stays complex even when its imaginary part is zero; only
/// [`Value::complex`](crate::dispatch::Value::complex) collapses to a
/// decimal, and only at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComplexValue {
    real: DecimalValue,
    imaginary: DecimalValue,
}

impl ComplexValue {
    pub fn new(real: impl Into<DecimalValue>, imaginary: impl Into<DecimalValue>) -> Self {
        Self {
            real: real.into(),
            imaginary: imaginary.into(),
        }
    }

    #[inline]
    pub fn real(&self) -> &DecimalValue {
        &self.real
    }

    #[inline]
    pub fn imaginary(&self) -> &DecimalValue {
        &self.imaginary
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.real.is_zero() && self.imaginary.is_zero()
    }

    /// `real - imaginary·i`
    pub fn conjugate(&self) -> Self {
        Self::new(self.real.clone(), self.imaginary.negated())
    }

    pub fn negated(&self) -> Self {
        Self::new(self.real.negated(), self.imaginary.negated())
    }

    // ========================================================================
    // Complex Operands
    // ========================================================================

    pub fn add(&self, other: &Self) -> Self {
        Self::new(
            self.real.add(&other.real),
            self.imaginary.add(&other.imaginary),
        )
    }

    pub fn subtract(&self, other: &Self) -> Self {
        Self::new(
            self.real.subtract(&other.real),
            self.imaginary.subtract(&other.imaginary),
        )
    }

    /// `(a + bi)(c + di) = (ac - bd) + (ad + bc)i`
    pub fn multiply(&self, other: &Self) -> Self {
        let (a, b) = (&self.real, &self.imaginary);
        let (c, d) = (&other.real, &other.imaginary);
        Self::new(
            a.multiply(c).subtract(&b.multiply(d)),
            a.multiply(d).add(&b.multiply(c)),
        )
    }

    /// `(a + bi) / (c + di) = ((ac + bd) + (bc - ad)i) / (c² + d²)`
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `other` is zero.
    pub fn divide(&self, other: &Self) -> AlgebraResult<Self> {
        let (a, b) = (&self.real, &self.imaginary);
        let (c, d) = (&other.real, &other.imaginary);
        let denominator = c.multiply(c).add(&d.multiply(d));

        let real = a.multiply(c).add(&b.multiply(d)).divide(&denominator)?;
        let imaginary = b.multiply(c).subtract(&a.multiply(d)).divide(&denominator)?;
        Ok(Self::new(real, imaginary))
    }

    // ========================================================================
    // Decimal Operands
    // ========================================================================

    /// Adds to the real component only.
    pub fn add_decimal(&self, other: &DecimalValue) -> Self {
        Self::new(self.real.add(other), self.imaginary.clone())
    }

    /// Subtracts from the real component only.
    pub fn subtract_decimal(&self, other: &DecimalValue) -> Self {
        Self::new(self.real.subtract(other), self.imaginary.clone())
    }

    pub fn multiply_decimal(&self, other: &DecimalValue) -> Self {
        self.multiply(&Self::from(other.clone()))
    }

    /// # Errors
    /// Returns `DivisionByZero` if `other` is zero.
    pub fn divide_decimal(&self, other: &DecimalValue) -> AlgebraResult<Self> {
        self.divide(&Self::from(other.clone()))
    }
}

impl From<DecimalValue> for ComplexValue {
    #[inline]
    fn from(real: DecimalValue) -> Self {
        Self::new(real, DecimalValue::zero())
    }
}

impl fmt::Display for ComplexValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}i", self.real, self.imaginary)
    }
}

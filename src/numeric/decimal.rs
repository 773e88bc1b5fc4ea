// ============================================================================
// Decimal Value
// Exact base-10 fixed-point arithmetic over digit sequences
// ============================================================================

use super::digits::{self, Digits};
use super::errors::{AlgebraError, AlgebraResult};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Maximum number of fraction digits emitted by [`DecimalValue::divide`].
///
/// Non-terminating quotients such as `1 / 3` are truncated (not rounded)
/// after this many digits. This is the only source of imprecision in the
/// engine.
pub const DIVISION_FRACTION_DIGITS: usize = 18;

/// Sign of a [`DecimalValue`]. Zero is always `Positive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// Sign of a product or quotient of two values with these signs.
    #[inline]
    pub fn combine(self, other: Sign) -> Sign {
        if self == other {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }

    #[inline]
    pub fn flip(self) -> Sign {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::Positive => write!(f, "+"),
            Sign::Negative => write!(f, "-"),
        }
    }
}

/// Exact base-10 fixed-point number of arbitrary length.
///
/// Stored as a sign, the integer digits (most significant first, no leading
/// zeros unless the integer part is zero) and the fraction digits (no
/// trailing zeros). Because every constructor normalizes, structural
/// equality is numeric equality.
///
/// Values are immutable: every operation returns a new value.
///
/// # Example
/// ```
/// use decimal_algebra::numeric::DecimalValue;
///
/// let a: DecimalValue = "0.1".parse().unwrap();
/// let b: DecimalValue = "0.2".parse().unwrap();
/// assert_eq!(a.add(&b).to_string(), "0.3");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DecimalValue {
    sign: Sign,
    integer: Digits,
    fraction: Digits,
}

impl DecimalValue {
    // ========================================================================
    // Construction
    // ========================================================================

    fn normalized(sign: Sign, mut integer: Digits, mut fraction: Digits) -> Self {
        digits::trim_leading_zeros(&mut integer);
        digits::trim_trailing_zeros(&mut fraction);

        let is_zero = fraction.is_empty() && integer.as_slice() == [0];
        Self {
            sign: if is_zero { Sign::Positive } else { sign },
            integer,
            fraction,
        }
    }

    /// Zero value
    pub fn zero() -> Self {
        Self::from_i128(0)
    }

    /// One (1)
    pub fn one() -> Self {
        Self::from_i128(1)
    }

    /// Create from an integer value.
    pub fn from_i128(value: i128) -> Self {
        let sign = if value < 0 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        let integer = value
            .unsigned_abs()
            .to_string()
            .bytes()
            .map(|b| b - b'0')
            .collect();
        Self::normalized(sign, integer, Digits::new())
    }

    /// Build a value from its sign and digit strings.
    ///
    /// An empty integer string is read as `0`. The result is normalized, so
    /// `build(Negative, "007", "500")` is `-7.5`.
    ///
    /// # Errors
    /// Returns `InvalidInput` if either string contains a non-digit.
    pub fn build(sign: Sign, integer: &str, fraction: &str) -> AlgebraResult<Self> {
        let integer = digits::parse_digits(integer)?;
        let fraction = digits::parse_digits(fraction)?;
        Ok(Self::normalized(sign, integer, fraction))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Integer digits, most significant first.
    #[inline]
    pub fn integer_digits(&self) -> &[u8] {
        &self.integer
    }

    /// Fraction digits, most significant first. Empty for integers.
    #[inline]
    pub fn fraction_digits(&self) -> &[u8] {
        &self.fraction
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.fraction.is_empty() && self.integer.as_slice() == [0]
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.fraction.is_empty()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Positive && !self.is_zero()
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self {
            sign: Sign::Positive,
            integer: self.integer.clone(),
            fraction: self.fraction.clone(),
        }
    }

    /// Value with the opposite sign.
    pub fn negated(&self) -> Self {
        let sign = if self.is_zero() {
            Sign::Positive
        } else {
            self.sign.flip()
        };
        Self {
            sign,
            integer: self.integer.clone(),
            fraction: self.fraction.clone(),
        }
    }

    /// The value as a native integer, when it is one and fits.
    pub fn as_i128(&self) -> Option<i128> {
        // 38 digits always fit in an i128
        if !self.fraction.is_empty() || self.integer.len() > 38 {
            return None;
        }
        let magnitude = self
            .integer
            .iter()
            .fold(0i128, |acc, &d| acc * 10 + i128::from(d));
        Some(match self.sign {
            Sign::Positive => magnitude,
            Sign::Negative => -magnitude,
        })
    }

    /// Compare absolute values.
    pub fn cmp_magnitude(&self, other: &Self) -> Ordering {
        self.integer
            .len()
            .cmp(&other.integer.len())
            .then_with(|| self.integer.cmp(&other.integer))
            .then_with(|| {
                let (alpha, beta) = digits::equalize_right(&self.fraction, &other.fraction);
                alpha.cmp(&beta)
            })
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Exact addition.
    pub fn add(&self, other: &Self) -> Self {
        if let (Some(alpha), Some(beta)) = (self.as_i128(), other.as_i128()) {
            if let Some(sum) = alpha.checked_add(beta) {
                return Self::from_i128(sum);
            }
        }

        match (self.sign, other.sign) {
            // a + (-b) = a - b
            (Sign::Positive, Sign::Negative) => self.subtract(&other.abs()),
            // (-a) + b = b - a
            (Sign::Negative, Sign::Positive) => other.subtract(&self.abs()),
            (sign, _) => Self::add_magnitudes(self, other, sign),
        }
    }

    /// Exact subtraction.
    pub fn subtract(&self, other: &Self) -> Self {
        if let (Some(alpha), Some(beta)) = (self.as_i128(), other.as_i128()) {
            if let Some(difference) = alpha.checked_sub(beta) {
                return Self::from_i128(difference);
            }
        }

        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Positive) => {
                if other.cmp_magnitude(self) == Ordering::Greater {
                    other.subtract(self).negated()
                } else {
                    Self::subtract_magnitudes(self, other)
                }
            },
            // a - b = a + (-b) whenever a negative sign is involved
            _ => self.add(&other.negated()),
        }
    }

    /// Exact multiplication using schoolbook long multiplication.
    pub fn multiply(&self, other: &Self) -> Self {
        if let (Some(alpha), Some(beta)) = (self.as_i128(), other.as_i128()) {
            if let Some(product) = alpha.checked_mul(beta) {
                return Self::from_i128(product);
            }
        }

        let sign = self.sign.combine(other.sign);
        let fraction_len = self.fraction.len() + other.fraction.len();

        let mut alpha = self.integer.clone();
        alpha.extend_from_slice(&self.fraction);
        let mut beta = other.integer.clone();
        beta.extend_from_slice(&other.fraction);
        let alpha = digits::reversed(&alpha);
        let beta = digits::reversed(&beta);

        // Least significant first
        let mut accumulator = vec![0u64; alpha.len() + beta.len()];
        for (i, &b) in beta.iter().enumerate() {
            for (j, &a) in alpha.iter().enumerate() {
                accumulator[i + j] += u64::from(a) * u64::from(b);
            }
        }

        let mut carry = 0u64;
        for slot in accumulator.iter_mut() {
            let total = *slot + carry;
            *slot = total % 10;
            carry = total / 10;
        }
        while carry > 0 {
            accumulator.push(carry % 10);
            carry /= 10;
        }

        let product: Digits = accumulator.iter().rev().map(|&d| d as u8).collect();
        let cut = product.len() - fraction_len;
        let integer = Digits::from_slice(&product[..cut]);
        let fraction = Digits::from_slice(&product[cut..]);
        Self::normalized(sign, integer, fraction)
    }

    /// Long division, truncated after [`DIVISION_FRACTION_DIGITS`] fraction
    /// digits when the quotient does not terminate.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `other` is zero.
    pub fn divide(&self, other: &Self) -> AlgebraResult<Self> {
        if other.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }

        if let (Some(alpha), Some(beta)) = (self.as_i128(), other.as_i128()) {
            if alpha.checked_rem(beta) == Some(0) {
                if let Some(quotient) = alpha.checked_div(beta) {
                    return Ok(Self::from_i128(quotient));
                }
            }
        }

        let sign = self.sign.combine(other.sign);

        // Scale both operands to integers: a / b = (A * 10^fb) / (B * 10^fa)
        let mut dividend = self.integer.clone();
        dividend.extend_from_slice(&self.fraction);
        let dividend = digits::pad_right(&dividend, 0, other.fraction.len());

        let mut divisor = other.integer.clone();
        divisor.extend_from_slice(&other.fraction);
        let divisor = Self::normalized(
            Sign::Positive,
            digits::pad_right(&divisor, 0, self.fraction.len()),
            Digits::new(),
        );

        let mut remainder = Self::zero();
        let mut integer = Digits::with_capacity(dividend.len());
        for &digit in dividend.iter() {
            remainder = remainder.shifted_in(digit);
            integer.push(Self::quotient_digit(&mut remainder, &divisor));
        }

        let mut fraction = Digits::new();
        while !remainder.is_zero() {
            if fraction.len() == DIVISION_FRACTION_DIGITS {
                tracing::trace!(
                    dividend = %self,
                    divisor = %other,
                    digits = DIVISION_FRACTION_DIGITS,
                    "quotient truncated at fixed-point cutoff"
                );
                break;
            }
            remainder = remainder.shifted_in(0);
            fraction.push(Self::quotient_digit(&mut remainder, &divisor));
        }

        Ok(Self::normalized(sign, integer, fraction))
    }

    /// Multiplicative inverse, `1 / self`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if the value is zero.
    pub fn inverse(&self) -> AlgebraResult<Self> {
        Self::one().divide(self)
    }

    // ========================================================================
    // Digit Algorithms
    // ========================================================================

    fn add_magnitudes(alpha: &Self, beta: &Self, sign: Sign) -> Self {
        let (alpha_fraction, beta_fraction) =
            digits::equalize_right(&alpha.fraction, &beta.fraction);
        let (alpha_integer, beta_integer) = digits::equalize_left(&alpha.integer, &beta.integer);

        let mut carry = 0u8;

        let mut fraction = Digits::with_capacity(alpha_fraction.len());
        for (a, b) in digits::reversed(&alpha_fraction)
            .iter()
            .zip(digits::reversed(&beta_fraction).iter())
        {
            let sum = a + b + carry;
            fraction.push(sum % 10);
            carry = sum / 10;
        }

        // Fraction overflow seeds the integer carry
        let mut integer = Digits::with_capacity(alpha_integer.len() + 1);
        for (a, b) in digits::reversed(&alpha_integer)
            .iter()
            .zip(digits::reversed(&beta_integer).iter())
        {
            let sum = a + b + carry;
            integer.push(sum % 10);
            carry = sum / 10;
        }
        if carry > 0 {
            integer.push(carry);
        }

        Self::normalized(sign, digits::reversed(&integer), digits::reversed(&fraction))
    }

    /// `|alpha| - |beta|`, requires `|alpha| >= |beta|`.
    fn subtract_magnitudes(alpha: &Self, beta: &Self) -> Self {
        let (alpha_fraction, beta_fraction) =
            digits::equalize_right(&alpha.fraction, &beta.fraction);
        let (alpha_integer, beta_integer) = digits::equalize_left(&alpha.integer, &beta.integer);

        let mut borrow = 0i8;

        let mut fraction = Digits::with_capacity(alpha_fraction.len());
        for (&a, &b) in digits::reversed(&alpha_fraction)
            .iter()
            .zip(digits::reversed(&beta_fraction).iter())
        {
            let mut difference = a as i8 - b as i8 - borrow;
            borrow = 0;
            if difference < 0 {
                difference += 10;
                borrow = 1;
            }
            fraction.push(difference as u8);
        }

        let mut integer = Digits::with_capacity(alpha_integer.len());
        for (&a, &b) in digits::reversed(&alpha_integer)
            .iter()
            .zip(digits::reversed(&beta_integer).iter())
        {
            let mut difference = a as i8 - b as i8 - borrow;
            borrow = 0;
            if difference < 0 {
                difference += 10;
                borrow = 1;
            }
            integer.push(difference as u8);
        }

        Self::normalized(
            Sign::Positive,
            digits::reversed(&integer),
            digits::reversed(&fraction),
        )
    }

    /// `self * 10 + digit` for a non-negative integer.
    fn shifted_in(&self, digit: u8) -> Self {
        let mut integer = self.integer.clone();
        integer.push(digit);
        Self::normalized(Sign::Positive, integer, Digits::new())
    }

    /// Largest `q` in `0..=9` with `q * divisor <= remainder`; leaves the
    /// remainder reduced by `q * divisor`.
    fn quotient_digit(remainder: &mut Self, divisor: &Self) -> u8 {
        let mut digit = 0;
        while remainder.cmp_magnitude(divisor) != Ordering::Less {
            *remainder = remainder.subtract(divisor);
            digit += 1;
        }
        digit
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for DecimalValue {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialOrd for DecimalValue {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DecimalValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => self.cmp_magnitude(other),
            (Sign::Negative, Sign::Negative) => other.cmp_magnitude(self),
        }
    }
}

impl std::ops::Neg for DecimalValue {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl std::ops::Neg for &DecimalValue {
    type Output = DecimalValue;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negated()
    }
}

// Division is fallible and stays a method
macro_rules! forward_binop {
    ($trait:ident, $method:ident, $engine:ident) => {
        impl std::ops::$trait for DecimalValue {
            type Output = DecimalValue;

            #[inline]
            fn $method(self, rhs: DecimalValue) -> DecimalValue {
                DecimalValue::$engine(&self, &rhs)
            }
        }

        impl<'a> std::ops::$trait<&'a DecimalValue> for &'a DecimalValue {
            type Output = DecimalValue;

            #[inline]
            fn $method(self, rhs: &'a DecimalValue) -> DecimalValue {
                DecimalValue::$engine(self, rhs)
            }
        }
    };
}

forward_binop!(Add, add, add);
forward_binop!(Sub, sub, subtract);
forward_binop!(Mul, mul, multiply);

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign == Sign::Negative {
            write!(f, "-")?;
        }
        for d in self.integer.iter() {
            write!(f, "{}", d)?;
        }
        if !self.fraction.is_empty() {
            write!(f, ".")?;
            for d in self.fraction.iter() {
                write!(f, "{}", d)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecimalValue({})", self)
    }
}

// ============================================================================
// Conversions
// ============================================================================

macro_rules! from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for DecimalValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::from_i128(i128::from(value))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32, u64, i128);

impl TryFrom<f64> for DecimalValue {
    type Error = AlgebraError;

    /// Convert through the shortest round-tripping decimal representation.
    ///
    /// # Errors
    /// - `InvalidInput` for NaN
    /// - `NotFinite` for infinities
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.is_nan() {
            return Err(AlgebraError::InvalidInput);
        }
        if value.is_infinite() {
            return Err(AlgebraError::NotFinite);
        }
        // f64 Display never uses exponent notation
        value.to_string().parse()
    }
}

impl DecimalValue {
    /// Convert from rust_decimal::Decimal.
    ///
    /// This is intended for API boundaries only.
    pub fn from_decimal(d: rust_decimal::Decimal) -> Self {
        let sign = if d.is_sign_negative() {
            Sign::Negative
        } else {
            Sign::Positive
        };
        let mantissa: Digits = d
            .mantissa()
            .unsigned_abs()
            .to_string()
            .bytes()
            .map(|b| b - b'0')
            .collect();

        let scale = d.scale() as usize;
        let mantissa = digits::pad_left(&mantissa, 0, (scale + 1).saturating_sub(mantissa.len()));
        let cut = mantissa.len() - scale;
        Self::normalized(
            sign,
            Digits::from_slice(&mantissa[..cut]),
            Digits::from_slice(&mantissa[cut..]),
        )
    }

    /// Convert to rust_decimal::Decimal.
    ///
    /// # Errors
    /// Returns `PrecisionLoss` if the value needs more than the 28-29
    /// significant digits `Decimal` can hold.
    pub fn to_decimal(&self) -> AlgebraResult<rust_decimal::Decimal> {
        rust_decimal::Decimal::from_str_exact(&self.to_string())
            .map_err(|_| AlgebraError::PrecisionLoss)
    }
}

impl From<rust_decimal::Decimal> for DecimalValue {
    #[inline]
    fn from(d: rust_decimal::Decimal) -> Self {
        Self::from_decimal(d)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for DecimalValue {
    type Err = AlgebraError;

    /// Parse from a decimal string.
    ///
    /// # Examples
    /// - "123" -> 123
    /// - "-0.500" -> -0.5
    /// - "+.25" -> 0.25
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let (sign, s) = if let Some(rest) = s.strip_prefix('-') {
            (Sign::Negative, rest)
        } else if let Some(rest) = s.strip_prefix('+') {
            (Sign::Positive, rest)
        } else {
            (Sign::Positive, s)
        };

        let (int_str, frac_str) = match s.split_once('.') {
            Some((int_str, frac_str)) => (int_str, frac_str),
            None => (s, ""),
        };

        if int_str.is_empty() && frac_str.is_empty() {
            return Err(AlgebraError::InvalidInput);
        }

        Self::build(sign, int_str, frac_str)
    }
}

#[cfg(feature = "serde")]
impl Serialize for DecimalValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for DecimalValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================

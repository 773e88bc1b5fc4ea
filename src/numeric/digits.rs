// ============================================================================
// Digit Sequences
// Pure helpers over base-10 digit sequences used by the decimal engine
// ============================================================================

use super::errors::{AlgebraError, AlgebraResult};
use smallvec::SmallVec;
use std::ops::RangeInclusive;

/// Number of digits stored inline before spilling to the heap.
pub const INLINE_DIGITS: usize = 24;

/// Ordered base-10 digit sequence, each element in `0..=9`.
pub type Digits = SmallVec<[u8; INLINE_DIGITS]>;

/// Parse an ASCII digit string into a digit sequence.
///
/// # Errors
/// Returns `InvalidInput` if any character is not `0-9`.
pub fn parse_digits(text: &str) -> AlgebraResult<Digits> {
    text.bytes()
        .map(|b| {
            if b.is_ascii_digit() {
                Ok(b - b'0')
            } else {
                Err(AlgebraError::InvalidInput)
            }
        })
        .collect()
}

/// Copy of `digits` in reverse order.
#[inline]
pub fn reversed(digits: &[u8]) -> Digits {
    digits.iter().rev().copied().collect()
}

/// Prepend `count` copies of `fill`.
pub fn pad_left(digits: &[u8], fill: u8, count: usize) -> Digits {
    let mut padded = Digits::with_capacity(digits.len() + count);
    padded.extend(std::iter::repeat(fill).take(count));
    padded.extend_from_slice(digits);
    padded
}

/// Append `count` copies of `fill`.
pub fn pad_right(digits: &[u8], fill: u8, count: usize) -> Digits {
    let mut padded = Digits::with_capacity(digits.len() + count);
    padded.extend_from_slice(digits);
    padded.extend(std::iter::repeat(fill).take(count));
    padded
}

/// Left-pad the shorter sequence with zeros so both have equal length.
///
/// Used for integer digits, where alignment is at the least-significant end.
pub fn equalize_left(alpha: &[u8], beta: &[u8]) -> (Digits, Digits) {
    let len = alpha.len().max(beta.len());
    (
        pad_left(alpha, 0, len - alpha.len()),
        pad_left(beta, 0, len - beta.len()),
    )
}

/// Right-pad the shorter sequence with zeros so both have equal length.
///
/// Used for fraction digits, where alignment is at the decimal point.
pub fn equalize_right(alpha: &[u8], beta: &[u8]) -> (Digits, Digits) {
    let len = alpha.len().max(beta.len());
    (
        pad_right(alpha, 0, len - alpha.len()),
        pad_right(beta, 0, len - beta.len()),
    )
}

/// Drop leading zeros, keeping at least one digit.
pub fn trim_leading_zeros(digits: &mut Digits) {
    let first = digits
        .iter()
        .position(|&d| d != 0)
        .unwrap_or(digits.len().saturating_sub(1));
    if first > 0 {
        digits.drain(..first);
    }
    if digits.is_empty() {
        digits.push(0);
    }
}

/// Drop trailing zeros (possibly leaving the sequence empty).
pub fn trim_trailing_zeros(digits: &mut Digits) {
    while digits.last() == Some(&0) {
        digits.pop();
    }
}

/// Ascending inclusive index range; the bounds are swapped if reversed.
#[inline]
pub fn range(minimum: usize, maximum: usize) -> RangeInclusive<usize> {
    if minimum > maximum {
        maximum..=minimum
    } else {
        minimum..=maximum
    }
}

// ============================================================================
// Numeric Module
// Arbitrary-precision base-10 fixed-point arithmetic
// ============================================================================
//
// This module provides:
// - DecimalValue: exact decimal with digit-sequence storage
// - AlgebraError: Error taxonomy shared by every layer of the crate
// - digits: pure digit-sequence helpers (padding, reversal, ranges)
//
// Design principles:
// - No floating-point operations
// - Every fallible operation returns Result (no panics)
// - Values are normalized on construction, so equality is structural
// - Division is the only lossy operation (fixed 18-digit cutoff)

pub mod digits;

mod decimal;
mod errors;

pub use decimal::{DecimalValue, Sign, DIVISION_FRACTION_DIGITS};
pub use errors::{AlgebraError, AlgebraResult, ErrorClass};

// ============================================================================
// Decimal Algebra Library
// Exact decimal, complex and matrix arithmetic with kind-based dispatch
// ============================================================================

//! # Decimal Algebra
//!
//! Arbitrary-precision base-10 arithmetic without binary floating point.
//!
//! ## Features
//!
//! - **Exact decimals** stored as digit sequences (`0.1 + 0.2 == 0.3`)
//! - **Truncated division** at a fixed 18 fractional digits
//! - **Complex numbers** with decimal components
//! - **Matrices** of decimal or complex elements: determinant, adjugate, inverse
//! - **Overload dispatch** selecting an implementation by argument kinds
//!
//! ## Example
//!
//! ```rust
//! use decimal_algebra::prelude::*;
//!
//! let a: DecimalValue = "0.1".parse().unwrap();
//! let b: DecimalValue = "0.2".parse().unwrap();
//! assert_eq!(a.add(&b).to_string(), "0.3");
//!
//! let third = DecimalValue::one().divide(&DecimalValue::from(3)).unwrap();
//! assert_eq!(third.to_string(), "0.333333333333333333");
//!
//! let m = Matrix::from_rows([[1, 2], [3, 4]]).unwrap();
//! assert_eq!(m.determinant().unwrap(), Scalar::from(-2));
//! assert_eq!(m.inverse().unwrap().to_string(), "-2, 1\n1.5, -0.5");
//!
//! // Mixed-kind arithmetic through dispatch
//! let sum = Value::from(1).add(&Value::from(m)).unwrap();
//! assert_eq!(sum.to_string(), "2, 3\n4, 5");
//! ```

pub mod algebra;
pub mod dispatch;
pub mod numeric;

#[cfg(feature = "logging")]
pub mod logging;

// Re-exports for convenience
pub mod prelude {
    pub use crate::algebra::{ComplexValue, Matrix, MatrixBuilder, Scalar};
    pub use crate::dispatch::{Kind, Overloaded, Value};
    pub use crate::numeric::{AlgebraError, AlgebraResult, DecimalValue, Sign};
}

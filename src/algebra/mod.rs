// ============================================================================
// Algebra Module
// Complex numbers and matrices built on the decimal engine
// ============================================================================

mod builder;
mod complex;
mod matrix;
mod scalar;

pub use builder::MatrixBuilder;
pub use complex::ComplexValue;
pub use matrix::Matrix;
pub use scalar::Scalar;

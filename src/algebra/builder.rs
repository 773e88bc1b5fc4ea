// ============================================================================
// Matrix Builder
// Fluent construction of matrices with validation on build
// ============================================================================

use super::matrix::Matrix;
use super::scalar::Scalar;
use crate::numeric::AlgebraResult;

/// Builder for creating matrices with a fluent API
///
/// # Example
/// ```
/// use decimal_algebra::algebra::{MatrixBuilder, Scalar};
/// use decimal_algebra::numeric::DecimalValue;
///
/// let half: DecimalValue = "0.5".parse().unwrap();
/// let m = MatrixBuilder::new()
///     .row([1, 2])
///     .row([Scalar::from(half), Scalar::from(3)])
///     .build()
///     .unwrap();
///
/// assert_eq!(m.to_string(), "1, 2\n0.5, 3");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MatrixBuilder {
    rows: Vec<Vec<Scalar>>,
}

impl MatrixBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Rows
    // ========================================================================

    /// Append one row
    pub fn row<I, T>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Scalar>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
        self
    }

    /// Append several rows
    pub fn rows<R, I, T>(self, rows: R) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
        T: Into<Scalar>,
    {
        rows.into_iter().fold(self, |builder, row| builder.row(row))
    }

    /// Replace a single element (1-based). Out-of-range positions are left
    /// for `build` to reject.
    pub fn with_item(mut self, row: usize, column: usize, value: impl Into<Scalar>) -> Self {
        if let Some(slot) = row
            .checked_sub(1)
            .and_then(|r| self.rows.get_mut(r))
            .and_then(|r| column.checked_sub(1).and_then(|c| r.get_mut(c)))
        {
            *slot = value.into();
        }
        self
    }

    // ========================================================================
    // Presets
    // ========================================================================

    /// Every element set to `value`
    pub fn filled(rows: usize, columns: usize, value: impl Into<Scalar>) -> Self {
        let value = value.into();
        Self {
            rows: vec![vec![value; columns]; rows],
        }
    }

    /// All zeros
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self::filled(rows, columns, Scalar::zero())
    }

    /// Ones on the diagonal, zeros elsewhere
    pub fn identity(size: usize) -> Self {
        (1..=size).fold(Self::zeros(size, size), |builder, index| {
            builder.with_item(index, index, Scalar::one())
        })
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Validate and build the matrix
    pub fn build(self) -> AlgebraResult<Matrix> {
        Matrix::new(self.rows)
    }

    /// Get the pending rows without building (for inspection)
    pub fn get_rows(&self) -> &[Vec<Scalar>] {
        &self.rows
    }
}

// ============================================================================
// Matrix
// Rectangular grid of scalars with cofactor-expansion linear algebra
// ============================================================================

use super::builder::MatrixBuilder;
use super::scalar::Scalar;
use crate::numeric::digits::range;
use crate::numeric::{AlgebraError, AlgebraResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable rectangular matrix of [`Scalar`] elements.
///
/// Public element access is 1-based. Every transform returns a new matrix.
///
/// Determinant, minor, cofactor, adjugate and inverse use direct cofactor
/// expansion, which is factorial-time in the dimension. Callers must bound
/// matrix size accordingly.
///
/// # Example
/// ```
/// use decimal_algebra::algebra::{Matrix, Scalar};
///
/// let m = Matrix::from_rows([[1, 2], [3, 4]]).unwrap();
/// assert_eq!(m.determinant().unwrap(), Scalar::from(-2));
/// assert_eq!(m.multiply(&m.inverse().unwrap()).unwrap(), Matrix::identity(2).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<Vec<Scalar>>", into = "Vec<Vec<Scalar>>")
)]
pub struct Matrix {
    data: Vec<Vec<Scalar>>,
}

impl Matrix {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a matrix from its rows.
    ///
    /// # Errors
    /// Returns `MalformedMatrix` if there are no rows, a row is empty, or
    /// the rows differ in length.
    pub fn new(data: Vec<Vec<Scalar>>) -> AlgebraResult<Self> {
        let columns = data.first().map(Vec::len).ok_or(AlgebraError::MalformedMatrix)?;
        if columns == 0 || data.iter().any(|row| row.len() != columns) {
            return Err(AlgebraError::MalformedMatrix);
        }
        Ok(Self { data })
    }

    /// Create a matrix from anything that converts into scalars.
    pub fn from_rows<R, T>(rows: impl IntoIterator<Item = R>) -> AlgebraResult<Self>
    where
        R: IntoIterator<Item = T>,
        T: Into<Scalar>,
    {
        Self::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }

    /// The `size`×`size` identity matrix.
    pub fn identity(size: usize) -> AlgebraResult<Self> {
        MatrixBuilder::identity(size).build()
    }

    /// Already-validated rows from an internal transform.
    fn from_valid(data: Vec<Vec<Scalar>>) -> Self {
        Self { data }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn rows(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.data[0].len()
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows() == self.columns()
    }

    /// Iterate over rows as slices.
    pub fn row_iter(&self) -> impl Iterator<Item = &[Scalar]> {
        self.data.iter().map(Vec::as_slice)
    }

    /// Owned copy of the element at 1-based (`row`, `column`).
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` if either index is 0 or past the end.
    pub fn item(&self, row: usize, column: usize) -> AlgebraResult<Scalar> {
        self.check_index(row, column)?;
        Ok(self.data[row - 1][column - 1].clone())
    }

    fn check_index(&self, row: usize, column: usize) -> AlgebraResult<()> {
        if row < 1 || column < 1 || row > self.rows() || column > self.columns() {
            return Err(AlgebraError::IndexOutOfRange { row, column });
        }
        Ok(())
    }

    fn require_square(&self) -> AlgebraResult<usize> {
        if !self.is_square() {
            return Err(AlgebraError::NotSquare {
                rows: self.rows(),
                columns: self.columns(),
            });
        }
        Ok(self.rows())
    }

    #[inline]
    fn dimensions(&self) -> (usize, usize) {
        (self.rows(), self.columns())
    }

    // 1-based, unchecked
    #[inline]
    fn at(&self, row: usize, column: usize) -> &Scalar {
        &self.data[row - 1][column - 1]
    }

    fn map(&self, f: impl Fn(&Scalar) -> Scalar) -> Self {
        Self::from_valid(
            self.data
                .iter()
                .map(|row| row.iter().map(&f).collect())
                .collect(),
        )
    }

    // ========================================================================
    // Linear Algebra
    // ========================================================================

    pub fn transpose(&self) -> Self {
        Self::from_valid(
            range(1, self.columns())
                .map(|column| {
                    range(1, self.rows())
                        .map(|row| self.at(row, column).clone())
                        .collect()
                })
                .collect(),
        )
    }

    /// Sum of the principal diagonal.
    pub fn trace(&self) -> AlgebraResult<Scalar> {
        let size = self.require_square()?;
        Ok(range(1, size).fold(Scalar::zero(), |sum, index| sum.add(self.at(index, index))))
    }

    /// Determinant by expansion along the first row.
    pub fn determinant(&self) -> AlgebraResult<Scalar> {
        let size = self.require_square()?;
        match size {
            1 => Ok(self.at(1, 1).clone()),
            2 => Ok(self
                .at(1, 1)
                .multiply(self.at(2, 2))
                .subtract(&self.at(1, 2).multiply(self.at(2, 1)))),
            _ => range(1, size).try_fold(Scalar::zero(), |sum, column| -> AlgebraResult<Scalar> {
                Ok(sum.add(&self.at(1, column).multiply(&self.cofactor(1, column)?)))
            }),
        }
    }

    /// Determinant of the submatrix without `row` and `column`.
    ///
    /// The minor of a 1×1 matrix is the empty determinant, 1.
    pub fn minor(&self, row: usize, column: usize) -> AlgebraResult<Scalar> {
        let size = self.require_square()?;
        self.check_index(row, column)?;

        if size == 1 {
            return Ok(Scalar::one());
        }

        let data = range(1, size)
            .filter(|&index| index != row)
            .map(|index| {
                range(1, size)
                    .filter(|&sub_index| sub_index != column)
                    .map(|sub_index| self.at(index, sub_index).clone())
                    .collect()
            })
            .collect();

        Self::from_valid(data).determinant()
    }

    /// `(-1)^(row + column) · minor(row, column)`
    pub fn cofactor(&self, row: usize, column: usize) -> AlgebraResult<Scalar> {
        let minor = self.minor(row, column)?;
        Ok(if (row + column) % 2 == 0 {
            minor
        } else {
            minor.negated()
        })
    }

    /// Transpose of the cofactor matrix.
    pub fn adjugate(&self) -> AlgebraResult<Self> {
        let size = self.require_square()?;
        let cofactors = range(1, size)
            .map(|row| {
                range(1, size)
                    .map(|column| self.cofactor(row, column))
                    .collect::<AlgebraResult<Vec<_>>>()
            })
            .collect::<AlgebraResult<Vec<_>>>()?;

        Ok(Self::from_valid(cofactors).transpose())
    }

    /// `adjugate · determinant⁻¹`
    ///
    /// # Errors
    /// - `NotSquare` if the matrix is not square
    /// - `Singular` if the determinant is zero
    pub fn inverse(&self) -> AlgebraResult<Self> {
        self.require_square()?;

        let determinant = self.determinant()?;
        if determinant.is_zero() {
            tracing::debug!(rows = self.rows(), "matrix inversion rejected: singular");
            return Err(AlgebraError::Singular);
        }

        Ok(self.adjugate()?.multiply_scalar(&determinant.inverse()?))
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Element-wise sum.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` unless both matrices have the same shape.
    pub fn add(&self, other: &Self) -> AlgebraResult<Self> {
        if self.dimensions() != other.dimensions() {
            return Err(AlgebraError::DimensionMismatch {
                left: self.dimensions(),
                right: other.dimensions(),
            });
        }

        Ok(Self::from_valid(
            self.data
                .iter()
                .zip(other.data.iter())
                .map(|(left, right)| left.iter().zip(right.iter()).map(|(a, b)| a.add(b)).collect())
                .collect(),
        ))
    }

    /// `self + (-1 · other)`
    pub fn subtract(&self, other: &Self) -> AlgebraResult<Self> {
        self.add(&other.multiply_scalar(&Scalar::from(-1)))
    }

    /// Standard row-by-column product.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` unless `self.columns() == other.rows()`.
    pub fn multiply(&self, other: &Self) -> AlgebraResult<Self> {
        if self.columns() != other.rows() {
            return Err(AlgebraError::DimensionMismatch {
                left: self.dimensions(),
                right: other.dimensions(),
            });
        }

        Ok(Self::from_valid(
            range(1, self.rows())
                .map(|row| {
                    range(1, other.columns())
                        .map(|column| {
                            range(1, self.columns()).fold(Scalar::zero(), |sum, k| {
                                self.at(row, k).multiply(other.at(k, column)).add(&sum)
                            })
                        })
                        .collect()
                })
                .collect(),
        ))
    }

    /// Adds `scalar` to every element.
    pub fn add_scalar(&self, scalar: &Scalar) -> Self {
        self.map(|element| element.add(scalar))
    }

    /// `self + (-1 · scalar)`
    pub fn subtract_scalar(&self, scalar: &Scalar) -> Self {
        self.add_scalar(&scalar.multiply(&Scalar::from(-1)))
    }

    /// Multiplies every element by `scalar`.
    pub fn multiply_scalar(&self, scalar: &Scalar) -> Self {
        self.map(|element| element.multiply(scalar))
    }
}

impl TryFrom<Vec<Vec<Scalar>>> for Matrix {
    type Error = AlgebraError;

    #[inline]
    fn try_from(data: Vec<Vec<Scalar>>) -> Result<Self, Self::Error> {
        Self::new(data)
    }
}

impl From<Matrix> for Vec<Vec<Scalar>> {
    #[inline]
    fn from(matrix: Matrix) -> Self {
        matrix.data
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.data.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for (sub_index, element) in row.iter().enumerate() {
                if sub_index > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", element)?;
            }
        }
        Ok(())
    }
}

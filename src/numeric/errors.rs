// ============================================================================
// Algebra Errors
// Error types for decimal, complex and matrix operations
// ============================================================================

use std::fmt;

/// Broad classification of an [`AlgebraError`].
///
/// `Type` errors mean an argument had the wrong shape or kind; `Range`
/// errors mean an argument was of the right kind but outside the
/// domain the operation accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    Type,
    Range,
}

/// Errors that can occur during decimal, complex or matrix operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AlgebraError {
    /// Input string or value is not a number
    InvalidInput,
    /// Numeric input is infinite
    NotFinite,
    /// No dispatch alternative accepts the operand kinds
    UnmatchedArguments {
        operation: &'static str,
        receiver: &'static str,
        arguments: Vec<&'static str>,
    },
    /// Matrix rows are missing, empty or ragged
    MalformedMatrix,
    /// 1-based element index outside the matrix
    IndexOutOfRange { row: usize, column: usize },
    /// Operation requires a square matrix
    NotSquare { rows: usize, columns: usize },
    /// Operand shapes are incompatible
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Matrix determinant is zero
    Singular,
    /// Attempted division by zero
    DivisionByZero,
    /// Conversion would lose significant digits
    PrecisionLoss,
}

impl AlgebraError {
    /// Classify the error as a type or range failure.
    pub fn class(&self) -> ErrorClass {
        match self {
            AlgebraError::InvalidInput
            | AlgebraError::UnmatchedArguments { .. }
            | AlgebraError::MalformedMatrix => ErrorClass::Type,
            AlgebraError::NotFinite
            | AlgebraError::IndexOutOfRange { .. }
            | AlgebraError::NotSquare { .. }
            | AlgebraError::DimensionMismatch { .. }
            | AlgebraError::Singular
            | AlgebraError::DivisionByZero
            | AlgebraError::PrecisionLoss => ErrorClass::Range,
        }
    }

    #[inline]
    pub fn is_type_error(&self) -> bool {
        self.class() == ErrorClass::Type
    }

    #[inline]
    pub fn is_range_error(&self) -> bool {
        self.class() == ErrorClass::Range
    }
}

impl fmt::Display for AlgebraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgebraError::InvalidInput => write!(f, "invalid input: could not parse value"),
            AlgebraError::NotFinite => write!(f, "value is not finite"),
            AlgebraError::UnmatchedArguments {
                operation,
                receiver,
                arguments,
            } => write!(
                f,
                "unexpected arguments: {}.{}({})",
                receiver,
                operation,
                arguments.join(", ")
            ),
            AlgebraError::MalformedMatrix => write!(f, "malformed matrix"),
            AlgebraError::IndexOutOfRange { row, column } => {
                write!(f, "index ({}, {}) is out of range", row, column)
            },
            AlgebraError::NotSquare { rows, columns } => {
                write!(f, "matrix is not square: {}x{}", rows, columns)
            },
            AlgebraError::DimensionMismatch { left, right } => write!(
                f,
                "dimension mismatch: {}x{} and {}x{}",
                left.0, left.1, right.0, right.1
            ),
            AlgebraError::Singular => write!(f, "determinant of the matrix is zero"),
            AlgebraError::DivisionByZero => write!(f, "division by zero"),
            AlgebraError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
        }
    }
}

impl std::error::Error for AlgebraError {}

/// Result type alias for algebra operations
pub type AlgebraResult<T> = Result<T, AlgebraError>;

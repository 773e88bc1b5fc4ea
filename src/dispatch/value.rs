// ============================================================================
// Value
// The closed operand set and its dispatch tables
// ============================================================================

use super::registry::Overloaded;
use crate::algebra::{ComplexValue, Matrix, Scalar};
use crate::numeric::{AlgebraResult, DecimalValue};
use std::fmt;
use std::sync::LazyLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Runtime kind tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Kind {
    Decimal,
    Complex,
    Matrix,
}

impl Kind {
    pub fn name(self) -> &'static str {
        match self {
            Kind::Decimal => "Decimal",
            Kind::Complex => "Complex",
            Kind::Matrix => "Matrix",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Any operand of the arithmetic operations.
///
/// `add`, `subtract`, `multiply` and `divide` select their implementation
/// from the kinds of both operands through the dispatch registry. Pairs
/// without a registered alternative fail with `UnmatchedArguments`:
/// Decimal ÷ Matrix, Complex with Matrix, and Matrix ÷ anything.
///
/// # Example
/// ```
/// use decimal_algebra::dispatch::Value;
/// use decimal_algebra::numeric::DecimalValue;
///
/// let two = Value::from(2);
/// let z = Value::complex(DecimalValue::from(1), DecimalValue::from(1));
/// assert_eq!(two.add(&z).unwrap().to_string(), "3 + 1i");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    Decimal(DecimalValue),
    Complex(ComplexValue),
    Matrix(Matrix),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Value {
    /// Build a complex number, collapsing to a decimal when `imaginary` is
    /// zero.
    ///
    /// The collapse happens here only: arithmetic on a `ComplexValue` keeps
    /// it complex.
    pub fn complex(real: impl Into<DecimalValue>, imaginary: impl Into<DecimalValue>) -> Self {
        let real = real.into();
        let imaginary = imaginary.into();
        if imaginary.is_zero() {
            Value::Decimal(real)
        } else {
            Value::Complex(ComplexValue::new(real, imaginary))
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Decimal(_) => Kind::Decimal,
            Value::Complex(_) => Kind::Complex,
            Value::Matrix(_) => Kind::Matrix,
        }
    }

    pub fn as_decimal(&self) -> Option<&DecimalValue> {
        match self {
            Value::Decimal(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_complex(&self) -> Option<&ComplexValue> {
        match self {
            Value::Complex(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&Matrix> {
        match self {
            Value::Matrix(m) => Some(m),
            _ => None,
        }
    }

    pub fn add(&self, other: &Value) -> AlgebraResult<Value> {
        self.dispatch(Operation::Add, other)
    }

    pub fn subtract(&self, other: &Value) -> AlgebraResult<Value> {
        self.dispatch(Operation::Subtract, other)
    }

    pub fn multiply(&self, other: &Value) -> AlgebraResult<Value> {
        self.dispatch(Operation::Multiply, other)
    }

    pub fn divide(&self, other: &Value) -> AlgebraResult<Value> {
        self.dispatch(Operation::Divide, other)
    }

    fn dispatch(&self, operation: Operation, other: &Value) -> AlgebraResult<Value> {
        let arguments = std::slice::from_ref(other);
        match self {
            Value::Decimal(d) => DECIMAL.get(operation).call(d, arguments),
            Value::Complex(c) => COMPLEX.get(operation).call(c, arguments),
            Value::Matrix(m) => MATRIX.get(operation).call(m, arguments),
        }
    }
}

// ============================================================================
// Dispatch Tables
// ============================================================================

struct OperationTable<R> {
    add: Overloaded<R>,
    subtract: Overloaded<R>,
    multiply: Overloaded<R>,
    divide: Overloaded<R>,
}

impl<R> OperationTable<R> {
    fn get(&self, operation: Operation) -> &Overloaded<R> {
        match operation {
            Operation::Add => &self.add,
            Operation::Subtract => &self.subtract,
            Operation::Multiply => &self.multiply,
            Operation::Divide => &self.divide,
        }
    }
}

static DECIMAL: LazyLock<OperationTable<DecimalValue>> = LazyLock::new(|| OperationTable {
    add: Overloaded::<DecimalValue>::new("add", Kind::Decimal, |o| {
        o.overload(&[Kind::Complex], |d, args| match args {
            [Value::Complex(c)] => Ok(Value::Complex(c.add_decimal(d))),
            _ => Err(DECIMAL.add.unmatched(args)),
        })
        .overload(&[Kind::Matrix], |d, args| match args {
            [Value::Matrix(m)] => Ok(Value::Matrix(m.add_scalar(&Scalar::from(d.clone())))),
            _ => Err(DECIMAL.add.unmatched(args)),
        })
        .overload(&[Kind::Decimal], |d, args| match args {
            [Value::Decimal(e)] => Ok(Value::Decimal(d.add(e))),
            _ => Err(DECIMAL.add.unmatched(args)),
        });
    }),
    subtract: Overloaded::<DecimalValue>::new("subtract", Kind::Decimal, |o| {
        o.overload(&[Kind::Complex], |d, args| match args {
            [Value::Complex(c)] => Ok(Value::Complex(ComplexValue::from(d.clone()).subtract(c))),
            _ => Err(DECIMAL.subtract.unmatched(args)),
        })
        .overload(&[Kind::Matrix], |d, args| match args {
            // d - M = (-1 · M) + d
            [Value::Matrix(m)] => Ok(Value::Matrix(
                m.multiply_scalar(&Scalar::from(-1))
                    .add_scalar(&Scalar::from(d.clone())),
            )),
            _ => Err(DECIMAL.subtract.unmatched(args)),
        })
        .overload(&[Kind::Decimal], |d, args| match args {
            [Value::Decimal(e)] => Ok(Value::Decimal(d.subtract(e))),
            _ => Err(DECIMAL.subtract.unmatched(args)),
        });
    }),
    multiply: Overloaded::<DecimalValue>::new("multiply", Kind::Decimal, |o| {
        o.overload(&[Kind::Complex], |d, args| match args {
            [Value::Complex(c)] => Ok(Value::Complex(c.multiply_decimal(d))),
            _ => Err(DECIMAL.multiply.unmatched(args)),
        })
        .overload(&[Kind::Matrix], |d, args| match args {
            [Value::Matrix(m)] => Ok(Value::Matrix(m.multiply_scalar(&Scalar::from(d.clone())))),
            _ => Err(DECIMAL.multiply.unmatched(args)),
        })
        .overload(&[Kind::Decimal], |d, args| match args {
            [Value::Decimal(e)] => Ok(Value::Decimal(d.multiply(e))),
            _ => Err(DECIMAL.multiply.unmatched(args)),
        });
    }),
    divide: Overloaded::<DecimalValue>::new("divide", Kind::Decimal, |o| {
        o.overload(&[Kind::Complex], |d, args| match args {
            [Value::Complex(c)] => Ok(Value::Complex(ComplexValue::from(d.clone()).divide(c)?)),
            _ => Err(DECIMAL.divide.unmatched(args)),
        })
        .overload(&[Kind::Decimal], |d, args| match args {
            [Value::Decimal(e)] => Ok(Value::Decimal(d.divide(e)?)),
            _ => Err(DECIMAL.divide.unmatched(args)),
        });
    }),
});

static COMPLEX: LazyLock<OperationTable<ComplexValue>> = LazyLock::new(|| OperationTable {
    add: Overloaded::<ComplexValue>::new("add", Kind::Complex, |o| {
        o.overload(&[Kind::Complex], |c, args| match args {
            [Value::Complex(w)] => Ok(Value::Complex(c.add(w))),
            _ => Err(COMPLEX.add.unmatched(args)),
        })
        .overload(&[Kind::Decimal], |c, args| match args {
            [Value::Decimal(d)] => Ok(Value::Complex(c.add_decimal(d))),
            _ => Err(COMPLEX.add.unmatched(args)),
        });
    }),
    subtract: Overloaded::<ComplexValue>::new("subtract", Kind::Complex, |o| {
        o.overload(&[Kind::Complex], |c, args| match args {
            [Value::Complex(w)] => Ok(Value::Complex(c.subtract(w))),
            _ => Err(COMPLEX.subtract.unmatched(args)),
        })
        .overload(&[Kind::Decimal], |c, args| match args {
            [Value::Decimal(d)] => Ok(Value::Complex(c.subtract_decimal(d))),
            _ => Err(COMPLEX.subtract.unmatched(args)),
        });
    }),
    multiply: Overloaded::<ComplexValue>::new("multiply", Kind::Complex, |o| {
        o.overload(&[Kind::Complex], |c, args| match args {
            [Value::Complex(w)] => Ok(Value::Complex(c.multiply(w))),
            _ => Err(COMPLEX.multiply.unmatched(args)),
        })
        .overload(&[Kind::Decimal], |c, args| match args {
            [Value::Decimal(d)] => Ok(Value::Complex(c.multiply_decimal(d))),
            _ => Err(COMPLEX.multiply.unmatched(args)),
        });
    }),
    divide: Overloaded::<ComplexValue>::new("divide", Kind::Complex, |o| {
        o.overload(&[Kind::Complex], |c, args| match args {
            [Value::Complex(w)] => Ok(Value::Complex(c.divide(w)?)),
            _ => Err(COMPLEX.divide.unmatched(args)),
        })
        .overload(&[Kind::Decimal], |c, args| match args {
            [Value::Decimal(d)] => Ok(Value::Complex(c.divide_decimal(d)?)),
            _ => Err(COMPLEX.divide.unmatched(args)),
        });
    }),
});

static MATRIX: LazyLock<OperationTable<Matrix>> = LazyLock::new(|| OperationTable {
    add: Overloaded::<Matrix>::new("add", Kind::Matrix, |o| {
        o.overload(&[Kind::Matrix], |m, args| match args {
            [Value::Matrix(n)] => Ok(Value::Matrix(m.add(n)?)),
            _ => Err(MATRIX.add.unmatched(args)),
        })
        .overload(&[Kind::Complex], |m, args| match args {
            [Value::Complex(c)] => Ok(Value::Matrix(m.add_scalar(&Scalar::from(c.clone())))),
            _ => Err(MATRIX.add.unmatched(args)),
        })
        .overload(&[Kind::Decimal], |m, args| match args {
            [Value::Decimal(d)] => Ok(Value::Matrix(m.add_scalar(&Scalar::from(d.clone())))),
            _ => Err(MATRIX.add.unmatched(args)),
        });
    }),
    subtract: Overloaded::<Matrix>::new("subtract", Kind::Matrix, |o| {
        o.overload(&[Kind::Matrix], |m, args| match args {
            [Value::Matrix(n)] => Ok(Value::Matrix(m.subtract(n)?)),
            _ => Err(MATRIX.subtract.unmatched(args)),
        })
        .overload(&[Kind::Complex], |m, args| match args {
            [Value::Complex(c)] => Ok(Value::Matrix(m.subtract_scalar(&Scalar::from(c.clone())))),
            _ => Err(MATRIX.subtract.unmatched(args)),
        })
        .overload(&[Kind::Decimal], |m, args| match args {
            [Value::Decimal(d)] => Ok(Value::Matrix(m.subtract_scalar(&Scalar::from(d.clone())))),
            _ => Err(MATRIX.subtract.unmatched(args)),
        });
    }),
    multiply: Overloaded::<Matrix>::new("multiply", Kind::Matrix, |o| {
        o.overload(&[Kind::Matrix], |m, args| match args {
            [Value::Matrix(n)] => Ok(Value::Matrix(m.multiply(n)?)),
            _ => Err(MATRIX.multiply.unmatched(args)),
        })
        .overload(&[Kind::Complex], |m, args| match args {
            [Value::Complex(c)] => Ok(Value::Matrix(m.multiply_scalar(&Scalar::from(c.clone())))),
            _ => Err(MATRIX.multiply.unmatched(args)),
        })
        .overload(&[Kind::Decimal], |m, args| match args {
            [Value::Decimal(d)] => Ok(Value::Matrix(m.multiply_scalar(&Scalar::from(d.clone())))),
            _ => Err(MATRIX.multiply.unmatched(args)),
        });
    }),
    // No alternatives: every call reports UnmatchedArguments
    divide: Overloaded::<Matrix>::new("divide", Kind::Matrix, |_| {}),
});

// ============================================================================
// Conversions
// ============================================================================

impl From<DecimalValue> for Value {
    #[inline]
    fn from(value: DecimalValue) -> Self {
        Value::Decimal(value)
    }
}

impl From<ComplexValue> for Value {
    #[inline]
    fn from(value: ComplexValue) -> Self {
        Value::Complex(value)
    }
}

impl From<Matrix> for Value {
    #[inline]
    fn from(value: Matrix) -> Self {
        Value::Matrix(value)
    }
}

impl From<Scalar> for Value {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Decimal(d) => Value::Decimal(d),
            Scalar::Complex(c) => Value::Complex(c),
        }
    }
}

impl From<i32> for Value {
    #[inline]
    fn from(value: i32) -> Self {
        Value::Decimal(DecimalValue::from(value))
    }
}

impl From<i64> for Value {
    #[inline]
    fn from(value: i64) -> Self {
        Value::Decimal(DecimalValue::from(value))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Decimal(d) => write!(f, "{}", d),
            Value::Complex(c) => write!(f, "{}", c),
            Value::Matrix(m) => write!(f, "{}", m),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::AlgebraError;

    fn dec(s: &str) -> Value {
        Value::Decimal(s.parse().unwrap())
    }

    fn complex(real: &str, imaginary: &str) -> Value {
        Value::Complex(ComplexValue::new(
            real.parse::<DecimalValue>().unwrap(),
            imaginary.parse::<DecimalValue>().unwrap(),
        ))
    }

    fn matrix() -> Value {
        Value::Matrix(Matrix::from_rows([[1, 2], [3, 4]]).unwrap())
    }

    #[test]
    fn test_kind() {
        assert_eq!(dec("1").kind(), Kind::Decimal);
        assert_eq!(complex("1", "1").kind(), Kind::Complex);
        assert_eq!(matrix().kind(), Kind::Matrix);
        assert_eq!(Kind::Matrix.to_string(), "Matrix");
    }

    #[test]
    fn test_construction_collapse() {
        assert_eq!(Value::complex(DecimalValue::from(3), DecimalValue::zero()), dec("3"));
        assert_eq!(Value::complex(3, 1).kind(), Kind::Complex);

        // Arithmetic never collapses
        let z = complex("1", "1");
        let result = z.subtract(&complex("0", "1")).unwrap();
        assert_eq!(result.kind(), Kind::Complex);
        assert_eq!(result.to_string(), "1 + 0i");
    }

    #[test]
    fn test_decimal_pairs() {
        assert_eq!(dec("0.1").add(&dec("0.2")).unwrap(), dec("0.3"));
        assert_eq!(dec("1").subtract(&dec("0.25")).unwrap(), dec("0.75"));
        assert_eq!(dec("1.1").multiply(&dec("1.1")).unwrap(), dec("1.21"));
        assert_eq!(dec("1").divide(&dec("8")).unwrap(), dec("0.125"));
        assert_eq!(
            dec("1").divide(&dec("0")),
            Err(AlgebraError::DivisionByZero)
        );
    }

    #[test]
    fn test_dispatch_symmetry() {
        let d = dec("2.5");
        let z = complex("1", "-1");
        assert_eq!(z.add(&d).unwrap(), d.add(&z).unwrap());
        assert_eq!(z.multiply(&d).unwrap(), d.multiply(&z).unwrap());
        assert_eq!(d.add(&z).unwrap(), complex("3.5", "-1"));
    }

    #[test]
    fn test_decimal_with_complex() {
        let d = dec("1");
        let z = complex("3", "2");
        assert_eq!(d.subtract(&z).unwrap(), complex("-2", "-2"));
        assert_eq!(z.subtract(&d).unwrap(), complex("2", "2"));
        assert_eq!(dec("2").divide(&complex("1", "1")).unwrap(), complex("1", "-1"));
        assert_eq!(complex("3", "-1.5").divide(&dec("2")).unwrap(), complex("1.5", "-0.75"));
    }

    #[test]
    fn test_decimal_with_matrix() {
        let m = matrix();
        assert_eq!(
            dec("1").add(&m).unwrap(),
            Value::Matrix(Matrix::from_rows([[2, 3], [4, 5]]).unwrap())
        );
        assert_eq!(
            dec("10").subtract(&m).unwrap(),
            Value::Matrix(Matrix::from_rows([[9, 8], [7, 6]]).unwrap())
        );
        assert_eq!(
            dec("2").multiply(&m).unwrap(),
            m.multiply(&dec("2")).unwrap()
        );
        assert_eq!(
            m.subtract(&dec("1")).unwrap(),
            Value::Matrix(Matrix::from_rows([[0, 1], [2, 3]]).unwrap())
        );
    }

    #[test]
    fn test_matrix_with_matrix() {
        let m = matrix();
        assert_eq!(
            m.multiply(&m).unwrap(),
            Value::Matrix(Matrix::from_rows([[7, 10], [15, 22]]).unwrap())
        );
        assert_eq!(
            m.add(&m).unwrap(),
            Value::Matrix(Matrix::from_rows([[2, 4], [6, 8]]).unwrap())
        );

        let row = Value::Matrix(Matrix::from_rows([[1, 2, 3]]).unwrap());
        assert!(m.add(&row).unwrap_err().is_range_error());
    }

    #[test]
    fn test_matrix_with_complex() {
        let m = matrix();
        let i = complex("0", "1");
        let shifted = m.add(&i).unwrap();
        let Value::Matrix(shifted) = shifted else {
            panic!("expected a matrix");
        };
        assert_eq!(
            shifted.item(2, 2).unwrap(),
            Scalar::Complex(ComplexValue::new(4, 1))
        );
        assert_eq!(m.subtract(&i).unwrap().kind(), Kind::Matrix);
        assert_eq!(m.multiply(&i).unwrap().kind(), Kind::Matrix);
    }

    #[test]
    fn test_unmatched_pairs() {
        let m = matrix();
        let err = dec("1").divide(&m).unwrap_err();
        assert_eq!(
            err,
            AlgebraError::UnmatchedArguments {
                operation: "divide",
                receiver: "Decimal",
                arguments: vec!["Matrix"],
            }
        );
        assert!(err.is_type_error());

        assert!(complex("1", "1").add(&m).unwrap_err().is_type_error());
        assert!(m.divide(&dec("2")).unwrap_err().is_type_error());
        assert!(m.divide(&m).is_err());
    }

    #[test]
    fn test_from_scalar() {
        assert_eq!(Value::from(Scalar::from(4)), dec("4"));
        assert_eq!(
            Value::from(Scalar::Complex(ComplexValue::new(1, 2))).kind(),
            Kind::Complex
        );
        assert_eq!(dec("4").as_decimal(), Some(&DecimalValue::from(4)));
        assert!(dec("4").as_matrix().is_none());
        assert!(matrix().as_matrix().is_some());
        assert!(complex("1", "2").as_complex().is_some());
    }

    #[test]
    fn test_dispatch_table_coverage() {
        let operands = [dec("2"), complex("1", "1"), matrix()];
        let unmatched = |receiver: Kind, operation: &str, argument: Kind| match receiver {
            Kind::Decimal => operation == "divide" && argument == Kind::Matrix,
            Kind::Complex => argument == Kind::Matrix,
            Kind::Matrix => operation == "divide",
        };

        for receiver in &operands {
            for argument in &operands {
                let results = [
                    ("add", receiver.add(argument)),
                    ("subtract", receiver.subtract(argument)),
                    ("multiply", receiver.multiply(argument)),
                    ("divide", receiver.divide(argument)),
                ];
                for (operation, result) in results {
                    let expect_unmatched =
                        unmatched(receiver.kind(), operation, argument.kind());
                    match result {
                        Err(AlgebraError::UnmatchedArguments { .. }) => assert!(
                            expect_unmatched,
                            "{}.{}({}) should dispatch",
                            receiver.kind(),
                            operation,
                            argument.kind()
                        ),
                        Err(other) => panic!(
                            "{}.{}({}) failed: {}",
                            receiver.kind(),
                            operation,
                            argument.kind(),
                            other
                        ),
                        Ok(_) => assert!(
                            !expect_unmatched,
                            "{}.{}({}) should be unmatched",
                            receiver.kind(),
                            operation,
                            argument.kind()
                        ),
                    }
                }
            }
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_round_trip() {
        let value = Value::Matrix(
            Matrix::from_rows([
                [Scalar::from(1), Scalar::from(ComplexValue::new(0, -1))],
                [Scalar::from("0.25".parse::<DecimalValue>().unwrap()), Scalar::from(4)],
            ])
            .unwrap(),
        );
        let json = serde_json::to_string(&value).unwrap();
        assert!(json.contains("\"0.25\""));
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);

        // Ragged rows are rejected on the way in
        let ragged = r#"{"Matrix":[[{"Decimal":"1"}],[]]}"#;
        assert!(serde_json::from_str::<Value>(ragged).is_err());
    }
}

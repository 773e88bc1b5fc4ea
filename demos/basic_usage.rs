// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_algebra::prelude::*;

fn main() {
    println!("=== Decimal Algebra Example ===\n");

    // Exact decimal addition
    let a: DecimalValue = "0.1".parse().unwrap();
    let b: DecimalValue = "0.2".parse().unwrap();
    println!("0.1 + 0.2 = {}", a.add(&b));

    // Non-terminating quotients are truncated at 18 fraction digits
    let third = DecimalValue::one().divide(&DecimalValue::from(3)).unwrap();
    println!("1 / 3 = {}\n", third);

    // Matrix inverse by cofactor expansion
    let m = Matrix::from_rows([[1, 2], [3, 4]]).unwrap();
    println!("M =\n{}", m);
    println!("det(M) = {}", m.determinant().unwrap());
    let inverse = m.inverse().unwrap();
    println!("M^-1 =\n{}", inverse);
    println!("M * M^-1 =\n{}\n", m.multiply(&inverse).unwrap());

    // Mixed-kind arithmetic through dispatch
    let z = Value::complex(DecimalValue::from(1), DecimalValue::from(2));
    let scaled = Value::from(m).multiply(&z).unwrap();
    let shifted = Value::from(3).add(&scaled).unwrap();
    println!("3 + M * (1 + 2i) =\n{}\n", shifted);

    match z.divide(&shifted) {
        Ok(result) => println!("unexpected: {}", result),
        Err(e) => println!("Complex / Matrix: {} (type error: {})", e, e.is_type_error()),
    }
}

// ============================================================================
// Property Tests
// Algebraic laws of the decimal engine checked against i128 arithmetic
// ============================================================================

use decimal_algebra::algebra::{ComplexValue, Matrix, Scalar};
use decimal_algebra::dispatch::Value;
use decimal_algebra::numeric::{DecimalValue, DIVISION_FRACTION_DIGITS};
use proptest::prelude::*;
use quickcheck::quickcheck;

fn dec(s: &str) -> DecimalValue {
    s.parse().unwrap()
}

/// 10^40, far beyond the i128 fast paths.
fn ten_pow_40() -> DecimalValue {
    dec(&format!("1{}", "0".repeat(40)))
}

fn canonical() -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        prop_oneof!["0", "[1-9][0-9]{0,45}"],
        prop_oneof!["", "[0-9]{0,20}[1-9]"],
    )
        .prop_filter("zero has no sign", |(negative, integer, fraction)| {
            !(*negative && integer == "0" && fraction.is_empty())
        })
        .prop_map(|(negative, integer, fraction)| {
            let sign = if negative { "-" } else { "" };
            if fraction.is_empty() {
                format!("{}{}", sign, integer)
            } else {
                format!("{}{}.{}", sign, integer, fraction)
            }
        })
}

fn decimal() -> impl Strategy<Value = DecimalValue> {
    canonical().prop_map(|s| dec(&s))
}

proptest! {
    #[test]
    fn prop_display_parse_round_trip(text in canonical()) {
        prop_assert_eq!(dec(&text).to_string(), text);
    }

    #[test]
    fn prop_addition_commutes(a in decimal(), b in decimal()) {
        prop_assert_eq!(a.add(&b), b.add(&a));
    }

    #[test]
    fn prop_multiplication_commutes(a in decimal(), b in decimal()) {
        prop_assert_eq!(a.multiply(&b), b.multiply(&a));
    }

    #[test]
    fn prop_subtract_undoes_add(a in decimal(), b in decimal()) {
        prop_assert_eq!(a.add(&b).subtract(&b), a.clone());
        prop_assert_eq!(a.subtract(&b).add(&b), a);
    }

    #[test]
    fn prop_self_subtraction_is_positive_zero(a in decimal()) {
        let zero = a.subtract(&a);
        prop_assert!(zero.is_zero());
        prop_assert!(!zero.is_negative());
        prop_assert_eq!(zero.to_string(), "0");
    }

    #[test]
    fn prop_order_agrees_with_difference(a in decimal(), b in decimal()) {
        let difference = a.subtract(&b);
        match a.cmp(&b) {
            std::cmp::Ordering::Less => prop_assert!(difference.is_negative()),
            std::cmp::Ordering::Equal => prop_assert!(difference.is_zero()),
            std::cmp::Ordering::Greater => prop_assert!(difference.is_positive()),
        }
    }

    #[test]
    fn prop_division_truncates(a in decimal(), b in decimal()) {
        prop_assume!(!b.is_zero());
        let quotient = a.divide(&b).unwrap();
        prop_assert!(quotient.fraction_digits().len() <= DIVISION_FRACTION_DIGITS);

        // |a - q·b| < |b| · 10^-18
        let remainder = a.subtract(&quotient.multiply(&b));
        let unit = dec(&format!("0.{}1", "0".repeat(DIVISION_FRACTION_DIGITS - 1)));
        prop_assert_eq!(
            remainder.cmp_magnitude(&b.multiply(&unit)),
            std::cmp::Ordering::Less
        );
    }

    #[test]
    fn prop_exact_quotients_round_trip(a in decimal(), b in -999i64..999) {
        prop_assume!(b != 0);
        let b = DecimalValue::from(b);
        // Wider fractions may exceed the division cutoff
        prop_assume!(a.fraction_digits().len() <= 12);
        prop_assert_eq!(a.multiply(&b).divide(&b).unwrap(), a);
    }

    #[test]
    fn prop_complex_conjugate_product_is_real(re in decimal(), im in decimal()) {
        let z = ComplexValue::new(re.clone(), im.clone());
        let product = z.multiply(&z.conjugate());
        prop_assert!(product.imaginary().is_zero());
        prop_assert_eq!(product.real(), &re.multiply(&re).add(&im.multiply(&im)));
    }

    #[test]
    fn prop_scalar_broadcast_commutes(a in -50i32..50, b in -50i32..50, s in decimal()) {
        let m = Value::from(Matrix::from_rows([[a, b], [b, a]]).unwrap());
        let s = Value::from(s);
        prop_assert_eq!(s.add(&m).unwrap(), m.add(&s).unwrap());
        prop_assert_eq!(s.multiply(&m).unwrap(), m.multiply(&s).unwrap());
    }
}

// ============================================================================
// Fast Path Agreement
// The i128 shortcuts and the digit algorithms must give identical results
// ============================================================================

quickcheck! {
    fn qc_add_matches_i128(a: i64, b: i64) -> bool {
        DecimalValue::from(a).add(&DecimalValue::from(b))
            == DecimalValue::from_i128(a as i128 + b as i128)
    }

    fn qc_subtract_matches_i128(a: i64, b: i64) -> bool {
        DecimalValue::from(a).subtract(&DecimalValue::from(b))
            == DecimalValue::from_i128(a as i128 - b as i128)
    }

    fn qc_multiply_matches_i128(a: i64, b: i64) -> bool {
        DecimalValue::from(a).multiply(&DecimalValue::from(b))
            == DecimalValue::from_i128(a as i128 * b as i128)
    }

    fn qc_wide_add_matches_scaled(a: i64, b: i64) -> bool {
        let scale = ten_pow_40();
        let wide_a = DecimalValue::from(a).multiply(&scale);
        let wide_b = DecimalValue::from(b).multiply(&scale);
        wide_a.add(&wide_b) == DecimalValue::from_i128(a as i128 + b as i128).multiply(&scale)
    }

    fn qc_wide_subtract_matches_scaled(a: i64, b: i64) -> bool {
        let scale = ten_pow_40();
        let wide_a = DecimalValue::from(a).multiply(&scale);
        let wide_b = DecimalValue::from(b).multiply(&scale);
        wide_a.subtract(&wide_b)
            == DecimalValue::from_i128(a as i128 - b as i128).multiply(&scale)
    }

    fn qc_wide_divide_matches_i128(a: i64, b: i64) -> bool {
        if b == 0 {
            return true;
        }
        // Integer operands scaled by the same factor keep the same quotient
        let scale = ten_pow_40();
        let wide = DecimalValue::from(a)
            .multiply(&scale)
            .divide(&DecimalValue::from(b).multiply(&scale));
        let narrow = DecimalValue::from(a).divide(&DecimalValue::from(b));
        wide == narrow
    }

    fn qc_value_collapses_only_on_construction(re: i32) -> bool {
        let collapsed = Value::complex(DecimalValue::from(re), DecimalValue::zero());
        let kept = Scalar::Complex(ComplexValue::new(re, 1))
            .subtract(&Scalar::Complex(ComplexValue::new(0, 1)));
        collapsed == Value::from(re) && matches!(kept, Scalar::Complex(_))
    }
}

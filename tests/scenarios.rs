//! End-to-end scenarios and quantified invariants for the decimal kernel,
//! run as a separate test binary from the unit tests in `src/`.

use decicore::{
    abs, acos, add, asin, atan2, div, e, exp, get_scale, ln, mul, negate, pi, pow, set_scale,
    square_root, sub, DecimalNumber, Error,
};

// Scale itself is thread-local, but the pi/e caches in `consts.rs` are
// shared across threads; serialize the tests that read or mutate them so
// assertions about cache refinement don't interleave.
fn test_lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

#[test]
fn scenario_01_parse_format_round_trip() {
    let v: DecimalNumber = "93402.5184".parse().unwrap();
    assert_eq!(v.to_string(), "93402.5184");
}

#[test]
fn scenario_02_addition() {
    let _guard = test_lock();
    set_scale(16);
    let a: DecimalNumber = "7.3329".parse().unwrap();
    let b: DecimalNumber = "157.82".parse().unwrap();
    assert_eq!(add(&a, &b).to_string(), "165.1529");
}

#[test]
fn scenario_03_integer_power() {
    let _guard = test_lock();
    set_scale(16);
    let base: DecimalNumber = "1.01234567".parse().unwrap();
    assert_eq!(pow(&base, 15).unwrap().to_string(), "1.2020774344056969");
}

#[test]
fn scenario_04_square_root() {
    let _guard = test_lock();
    let v: DecimalNumber = "620433.785".parse().unwrap();
    assert_eq!(square_root(&v).unwrap().to_string(), "787.6761929879561873");
}

#[test]
fn scenario_05_square_root_at_scale_30() {
    let _guard = test_lock();
    set_scale(30);
    let v = DecimalNumber::from_int(2i64);
    assert_eq!(
        square_root(&v).unwrap().to_string(),
        "1.414213562373095048801688724209"
    );
    set_scale(16);
}

#[test]
fn scenario_06_exp() {
    let _guard = test_lock();
    set_scale(16);
    let v: DecimalNumber = "0.732".parse().unwrap();
    assert_eq!(exp(&v).to_string(), "2.0792349218188443");
}

#[test]
fn scenario_07_ln() {
    let _guard = test_lock();
    set_scale(16);
    let v: DecimalNumber = "0.732".parse().unwrap();
    assert_eq!(ln(&v).unwrap().to_string(), "-0.3119747650208255");
}

#[test]
fn scenario_08_pi_cache_refinement() {
    let _guard = test_lock();
    set_scale(16);
    assert_eq!(pi().to_string(), "3.1415926535897932");
    set_scale(36);
    assert_eq!(
        pi().to_string(),
        "3.141592653589793238462643383279502884"
    );
    set_scale(16);
}

#[test]
fn scenario_09_max_length_truncation() {
    let v: DecimalNumber = "123456789.012".parse().unwrap();
    assert_eq!(v.to_string_max_length(11), "123456789");
}

#[test]
fn scenario_10_max_length_overflow() {
    let v: DecimalNumber = "123456789.012".parse().unwrap();
    assert_eq!(v.to_string_max_length(8), "Overflow");
}

#[test]
fn scenario_11_large_integer_power() {
    let two = DecimalNumber::from_int(2i64);
    let result = sub(&pow(&two, 107).unwrap(), &DecimalNumber::from_int(1i64));
    assert_eq!(result.to_string(), "162259276829213363391578010288127");
}

#[test]
fn scenario_12_square_root_of_negative() {
    let v = DecimalNumber::from_int(-1i64);
    assert_eq!(square_root(&v), Err(Error::MathDomainError));
}

#[test]
fn scenario_13_division_by_zero() {
    let one = DecimalNumber::from_int(1i64);
    let zero = DecimalNumber::from_int(0i64);
    assert_eq!(div(&one, &zero), Err(Error::DivisionByZero));
}

#[test]
fn scenario_14_atan2_of_origin() {
    let zero = DecimalNumber::from_int(0i64);
    assert_eq!(atan2(&zero, &zero), Err(Error::MathDomainError));
}

#[test]
fn invariant_canonical_form() {
    let _guard = test_lock();
    set_scale(4);
    let v: DecimalNumber = "1.23456789".parse().unwrap();
    let result = add(&v, &DecimalNumber::from_int(0i64));
    let fractional_digits = result.to_string_plain().split('.').nth(1).map_or(0, str::len);
    assert!(fractional_digits <= get_scale() as usize);
    set_scale(16);
    assert_eq!(DecimalNumber::new().to_string(), "0");
    assert_eq!(negate(&DecimalNumber::new()).to_string(), "0");
}

#[test]
fn invariant_additive_identity_and_inverse() {
    let _guard = test_lock();
    set_scale(16);
    let v: DecimalNumber = "42.5".parse().unwrap();
    let zero = add(&v, &negate(&v));
    assert_eq!(zero, DecimalNumber::from_int(0i64));
}

#[test]
fn invariant_commutativity() {
    let _guard = test_lock();
    set_scale(16);
    let a: DecimalNumber = "3.14".parse().unwrap();
    let b: DecimalNumber = "2.71".parse().unwrap();
    assert_eq!(add(&a, &b), add(&b, &a));
    assert_eq!(mul(&a, &b), mul(&b, &a));
}

#[test]
fn invariant_distributivity_up_to_rounding() {
    let _guard = test_lock();
    set_scale(16);
    let a: DecimalNumber = "3.7".parse().unwrap();
    let b: DecimalNumber = "1.2".parse().unwrap();
    let c: DecimalNumber = "5.9".parse().unwrap();
    let lhs = mul(&a, &add(&b, &c));
    let rhs = add(&mul(&a, &b), &mul(&a, &c));
    let diff = abs(&sub(&lhs, &rhs));
    let ulp: DecimalNumber = format!("0.{}1", "0".repeat(15)).parse().unwrap();
    assert!(diff <= ulp);
}

#[test]
fn invariant_division_inverse() {
    let _guard = test_lock();
    set_scale(16);
    let a: DecimalNumber = "17".parse().unwrap();
    let b: DecimalNumber = "3".parse().unwrap();
    let quotient = div(&a, &b).unwrap();
    let back = mul(&quotient, &b);
    let diff = abs(&sub(&back, &a));
    let ulp: DecimalNumber = format!("0.{}1", "0".repeat(15)).parse().unwrap();
    assert!(diff <= ulp);
}

#[test]
fn invariant_square_root_inverse() {
    let _guard = test_lock();
    set_scale(16);
    let v: DecimalNumber = "2".parse().unwrap();
    let r = square_root(&v).unwrap();
    assert!(mul(&r, &r) <= v);
    let ulp: DecimalNumber = format!("0.{}1", "0".repeat(15)).parse().unwrap();
    let next = add(&r, &ulp);
    assert!(mul(&next, &next) > v);
}

#[test]
fn invariant_round_half_to_even_ties() {
    use dashu_int::IBig;
    let ties = [("0.5", 0), ("1.5", 2), ("2.5", 2), ("3.5", 4)];
    for (literal, expected) in ties {
        let v: DecimalNumber = literal.parse().unwrap();
        assert_eq!(v.to_int_round(), IBig::from(expected));
    }
}

#[test]
fn invariant_cache_monotonicity() {
    let _guard = test_lock();
    set_scale(30);
    let hi = pi();
    set_scale(10);
    let lo = pi();
    assert_eq!(decicore::normalize_to_scale(&hi), lo);
    set_scale(16);
}

#[test]
fn invariant_trigonometric_identity() {
    let _guard = test_lock();
    set_scale(16);
    let x: DecimalNumber = "0.9".parse().unwrap();
    let s = decicore::sin(&x);
    let c = decicore::cos(&x);
    let sum = add(&mul(&s, &s), &mul(&c, &c));
    let diff = abs(&sub(&sum, &DecimalNumber::from_int(1i64)));
    let tolerance: DecimalNumber = "0.0000000000001".parse().unwrap();
    assert!(diff <= tolerance);
}

#[test]
fn acos_matches_identity() {
    let _guard = test_lock();
    set_scale(16);
    let v: DecimalNumber = "0.6".parse().unwrap();
    let a = asin(&v).unwrap();
    let half_pi = div(&pi(), &DecimalNumber::from_int(2i64)).unwrap();
    let diff = abs(&sub(&add(&a, &acos(&v).unwrap()), &half_pi));
    let tolerance: DecimalNumber = "0.0000000000001".parse().unwrap();
    assert!(diff <= tolerance);
}

#[test]
fn e_and_pi_are_distinct_at_same_scale() {
    let _guard = test_lock();
    set_scale(16);
    assert_ne!(e(), pi());
}

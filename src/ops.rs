//! Core arithmetic: `add`, `sub`, `mul`, `div`, `pow`, and the corresponding
//! operator overloads.

use core::ops;
use dashu_base::Sign;
use dashu_int::{IBig, UBig};

use crate::error::{Error, Result};
use crate::repr::{to_signed, DecimalNumber};
use crate::round::{align, normalize};
use crate::scale;
use crate::sign::negate;

/// `a + b`, aligned to a common decimal count, normalized to scale.
pub fn add(a: &DecimalNumber, b: &DecimalNumber) -> DecimalNumber {
    let (ma, mb, d) = align(a, b);
    let sum = to_signed(&ma, a.positive) + to_signed(&mb, b.positive);
    normalize(&DecimalNumber::from_signed_mantissa(sum, d))
}

/// `a - b`, defined as `add(a, negate(b))`.
pub fn sub(a: &DecimalNumber, b: &DecimalNumber) -> DecimalNumber {
    add(a, &negate(b))
}

/// `a * b`: mantissas multiply, decimals add, signs XOR.
pub fn mul(a: &DecimalNumber, b: &DecimalNumber) -> DecimalNumber {
    let mantissa = &a.mantissa * &b.mantissa;
    let decimals = a.decimals + b.decimals;
    let positive = a.positive == b.positive;
    normalize(&DecimalNumber::canonical(mantissa, decimals, positive))
}

/// `a / b`. Fails with [`Error::DivisionByZero`] if `b`'s mantissa is zero.
///
/// An extra guard digit (`scale + 1` fractional digits in the raw quotient)
/// ensures the final round-half-to-even has the correct rounding direction.
pub fn div(a: &DecimalNumber, b: &DecimalNumber) -> Result<DecimalNumber> {
    if b.mantissa.is_zero() {
        return Err(Error::DivisionByZero);
    }

    let scale = scale::get_scale();
    // dividend = a.mantissa * 10 ^ (scale + 1 + b.decimals - a.decimals)
    let shift = scale as i64 + 1 + b.decimals as i64 - a.decimals as i64;
    let dividend: UBig = if shift >= 0 {
        &a.mantissa * UBig::from(10u8).pow(shift as usize)
    } else {
        &a.mantissa / UBig::from(10u8).pow((-shift) as usize)
    };

    let quotient = &dividend / &b.mantissa;
    let positive = a.positive == b.positive;
    Ok(normalize(&DecimalNumber::canonical(
        quotient,
        scale + 1,
        positive,
    )))
}

/// Extra digits carried through the repeated squarings so that per-step
/// rounding doesn't compound into an incorrect final digit; discarded by
/// the final [`normalize`].
const POW_GUARD_DIGITS: u32 = 8;

/// `base ^ n` via exponentiation by squaring. `n == 0` yields `1` even when
/// `base` is zero. Negative `n` computes `1 / base^|n|`.
pub fn pow(base: &DecimalNumber, n: i64) -> Result<DecimalNumber> {
    if n == 0 {
        return Ok(DecimalNumber::from_int(1i64));
    }
    if n < 0 {
        let positive_pow = pow(base, -n)?;
        return div(&DecimalNumber::from_int(1i64), &positive_pow);
    }

    let result = scale::with_guard(POW_GUARD_DIGITS, || {
        let mut exp = n as u64;
        let mut result = DecimalNumber::from_int(1i64);
        let mut squared = base.clone();
        while exp > 0 {
            if exp & 1 == 1 {
                result = mul(&result, &squared);
            }
            squared = mul(&squared, &squared);
            exp >>= 1;
        }
        result
    });
    Ok(normalize(&result))
}

/// Lifts an integer operand the way the specification requires: `n` becomes
/// `(mantissa = |n|, decimals = 0, positive = n >= 0)`.
fn lift(n: i64) -> DecimalNumber {
    let (sign, magnitude) = IBig::from(n).into_parts();
    DecimalNumber::canonical(magnitude, 0, sign != Sign::Negative)
}

/// Splits `x` into `(floor, fraction)` with `fraction` in `[0, 1)`, used by
/// the transcendentals to separate the integer part of an argument before
/// reduction.
pub(crate) fn floor_parts(x: &DecimalNumber) -> (IBig, DecimalNumber) {
    let trunc = x.to_int_truncate();
    let trunc_dec = DecimalNumber::from_int(trunc.clone());
    let frac = sub(x, &trunc_dec);
    if !x.positive && !frac.mantissa.is_zero() {
        (trunc - IBig::from(1), add(&frac, &DecimalNumber::from_int(1i64)))
    } else {
        (trunc, frac)
    }
}

impl ops::Add for &DecimalNumber {
    type Output = DecimalNumber;
    fn add(self, rhs: &DecimalNumber) -> DecimalNumber {
        add(self, rhs)
    }
}

impl ops::Sub for &DecimalNumber {
    type Output = DecimalNumber;
    fn sub(self, rhs: &DecimalNumber) -> DecimalNumber {
        sub(self, rhs)
    }
}

impl ops::Mul for &DecimalNumber {
    type Output = DecimalNumber;
    fn mul(self, rhs: &DecimalNumber) -> DecimalNumber {
        mul(self, rhs)
    }
}

impl ops::Neg for &DecimalNumber {
    type Output = DecimalNumber;
    fn neg(self) -> DecimalNumber {
        negate(self)
    }
}

/// `a / b`. The output is fallible since the specification's `div` can fail
/// with [`Error::DivisionByZero`]; unlike `+`/`-`/`*`, `/` has no total
/// operator form.
impl ops::Div for &DecimalNumber {
    type Output = Result<DecimalNumber>;
    fn div(self, rhs: &DecimalNumber) -> Result<DecimalNumber> {
        div(self, rhs)
    }
}

impl ops::AddAssign<&DecimalNumber> for DecimalNumber {
    fn add_assign(&mut self, rhs: &DecimalNumber) {
        *self = add(self, rhs);
    }
}

impl ops::SubAssign<&DecimalNumber> for DecimalNumber {
    fn sub_assign(&mut self, rhs: &DecimalNumber) {
        *self = sub(self, rhs);
    }
}

impl ops::MulAssign<&DecimalNumber> for DecimalNumber {
    fn mul_assign(&mut self, rhs: &DecimalNumber) {
        *self = mul(self, rhs);
    }
}

macro_rules! impl_int_ops {
    ($($t:ty),*) => {
        $(
            impl ops::Add<$t> for &DecimalNumber {
                type Output = DecimalNumber;
                fn add(self, rhs: $t) -> DecimalNumber {
                    add(self, &lift(rhs as i64))
                }
            }
            impl ops::Sub<$t> for &DecimalNumber {
                type Output = DecimalNumber;
                fn sub(self, rhs: $t) -> DecimalNumber {
                    sub(self, &lift(rhs as i64))
                }
            }
            impl ops::Mul<$t> for &DecimalNumber {
                type Output = DecimalNumber;
                fn mul(self, rhs: $t) -> DecimalNumber {
                    mul(self, &lift(rhs as i64))
                }
            }
        )*
    };
}

impl_int_ops!(i32, i64);

impl DecimalNumber {
    /// `self / other`; see [`div`].
    pub fn checked_div(&self, other: &DecimalNumber) -> Result<DecimalNumber> {
        div(self, other)
    }

    /// `self ^ n`; see [`pow`].
    pub fn powi(&self, n: i64) -> Result<DecimalNumber> {
        pow(self, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addition_matches_scenario() {
        let a: DecimalNumber = "7.3329".parse().unwrap();
        let b: DecimalNumber = "157.82".parse().unwrap();
        assert_eq!(add(&a, &b).to_string(), "165.1529");
    }

    #[test]
    fn power_matches_scenario() {
        let _guard = scale::test_lock();
        let base: DecimalNumber = "1.01234567".parse().unwrap();
        let result = pow(&base, 15).unwrap();
        assert_eq!(result.to_string(), "1.2020774344056969");
    }

    #[test]
    fn integer_power_large_exponent() {
        let two = DecimalNumber::from_int(2i64);
        let result = sub(&pow(&two, 107).unwrap(), &DecimalNumber::from_int(1i64));
        assert_eq!(result.to_string(), "162259276829213363391578010288127");
    }

    #[test]
    fn division_by_zero_fails() {
        let one = DecimalNumber::from_int(1i64);
        let zero = DecimalNumber::from_int(0i64);
        assert_eq!(div(&one, &zero), Err(Error::DivisionByZero));
    }

    #[test]
    fn additive_identity_and_inverse() {
        let v: DecimalNumber = "42.5".parse().unwrap();
        assert_eq!(add(&v, &DecimalNumber::from_int(0i64)), normalize(&v));
        let zero = add(&v, &negate(&v));
        assert_eq!(zero, DecimalNumber::from_int(0i64));
        assert!(zero.positive);
    }

    #[test]
    fn commutativity() {
        let a: DecimalNumber = "3.14".parse().unwrap();
        let b: DecimalNumber = "2.71".parse().unwrap();
        assert_eq!(add(&a, &b), add(&b, &a));
        assert_eq!(mul(&a, &b), mul(&b, &a));
    }
}

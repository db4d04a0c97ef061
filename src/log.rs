//! Natural logarithm via decade reduction and the `artanh`-style series.

use crate::error::{Error, Result};
use crate::ops::{add, div, mul, pow, sub};
use crate::repr::DecimalNumber;
use crate::round::normalize;
use crate::scale;

/// Extra digits absorbed by the series summation before the final
/// [`normalize`] back to the user's scale.
const GUARD_DIGITS: u32 = 6;

/// `2 * Σ u^(2k+1)/(2k+1)` with `u = (m-1)/(m+1)`, converging to `ln(m)` for
/// any `m > 0` (fastest when `m` is near `1`).
fn ln_series(m: &DecimalNumber) -> DecimalNumber {
    let one = DecimalNumber::from_int(1i64);
    let u = div(&sub(m, &one), &add(m, &one)).expect("m + 1 is never zero for m > 0");
    let u2 = mul(&u, &u);
    let mut power = u.clone();
    let mut sum = u.clone();
    let mut denom = 1i64;
    loop {
        power = mul(&power, &u2);
        denom += 2;
        let term = div(&power, &DecimalNumber::from_int(denom)).expect("denom is never zero");
        let next = add(&sum, &term);
        if next == sum {
            break;
        }
        sum = next;
    }
    mul(&sum, &DecimalNumber::from_int(2i64))
}

/// `ln(x)`. Fails with [`Error::MathDomainError`] when `x <= 0`.
pub fn ln(x: &DecimalNumber) -> Result<DecimalNumber> {
    if x.mantissa.is_zero() || !x.positive {
        return Err(Error::MathDomainError);
    }

    let result = scale::with_guard(GUARD_DIGITS, || {
        // x = m * 10^k with m in [1, 10); k is the position of x's leading
        // digit relative to the decimal point.
        let digit_count = x.mantissa.to_string().len() as i64;
        let k = digit_count - x.decimals as i64 - 1;
        let ten = DecimalNumber::from_int(10i64);
        let scale_factor = pow(&ten, k).expect("ten is never zero");
        let m = div(x, &scale_factor).expect("scale_factor is never zero");

        let ln10 = ln_series(&ten);
        let ln_m = ln_series(&m);
        add(&mul(&DecimalNumber::from_int(k), &ln10), &ln_m)
    });
    Ok(normalize(&result))
}

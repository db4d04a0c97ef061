//! `e^x` via integer/fractional argument reduction and a Maclaurin series.

use crate::consts;
use crate::ops::{self, add, div, mul, pow};
use crate::repr::DecimalNumber;
use crate::round::normalize;
use crate::scale;

/// Extra digits carried through the series summation and the power of the
/// cached `e`, discarded by the final [`normalize`].
const GUARD_DIGITS: u32 = 6;

/// `Σ r^n/n!` for `r` in `[0, 1)`, halting when the running sum stops
/// changing — the same criterion [`crate::consts::compute_e`] uses.
fn maclaurin_exp(r: &DecimalNumber) -> DecimalNumber {
    let mut term = DecimalNumber::from_int(1i64);
    let mut sum = DecimalNumber::from_int(1i64);
    let mut k = 0i64;
    loop {
        k += 1;
        term = div(&mul(&term, r), &DecimalNumber::from_int(k)).expect("k is never zero");
        let next = add(&sum, &term);
        if next == sum {
            break;
        }
        sum = next;
    }
    sum
}

/// `e^x` for any finite `x`: split `x = q + r` with `q` integral and `r` in
/// `[0, 1)`, then `e^x = e^q * e^r`, with `e^q` from the cached constant via
/// integer exponentiation and `e^r` from the Maclaurin series.
pub fn exp(x: &DecimalNumber) -> DecimalNumber {
    let result = scale::with_guard(GUARD_DIGITS, || {
        let (q, r) = ops::floor_parts(x);
        let series = maclaurin_exp(&r);
        let q: i64 = i64::try_from(q).expect("exponent too large for argument reduction");
        let whole = pow(&consts::e(), q).expect("e is never zero");
        mul(&whole, &series)
    });
    normalize(&result)
}

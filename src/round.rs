//! Scale-aware rounding: `align`, `round_to`, `normalize`.

use core::cmp::Ordering;
use dashu_base::DivRem;
use dashu_int::UBig;

use crate::repr::DecimalNumber;
use crate::scale;

fn pow10(exp: u32) -> UBig {
    UBig::from(10u8).pow(exp as usize)
}

/// Rescales the operand with fewer fractional digits so both share the
/// larger `decimals` count. Pure; returns newly aligned mantissas and the
/// shared decimal count.
pub(crate) fn align(a: &DecimalNumber, b: &DecimalNumber) -> (UBig, UBig, u32) {
    let common = a.decimals.max(b.decimals);
    let ma = if common > a.decimals {
        &a.mantissa * pow10(common - a.decimals)
    } else {
        a.mantissa.clone()
    };
    let mb = if common > b.decimals {
        &b.mantissa * pow10(common - b.decimals)
    } else {
        b.mantissa.clone()
    };
    (ma, mb, common)
}

/// Rounds `v` to `target_decimals` fractional digits using round-half-to-even.
/// If `v` already has `decimals <= target_decimals`, it is returned unchanged.
pub fn round_to(v: &DecimalNumber, target_decimals: u32) -> DecimalNumber {
    if v.decimals <= target_decimals {
        return v.clone();
    }
    let k = v.decimals - target_decimals;
    let divisor = pow10(k);
    let (quotient, remainder) = v.mantissa.clone().div_rem(divisor.clone());
    let half = &divisor / 2u32;

    let quotient = match remainder.cmp(&half) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + UBig::ONE,
        Ordering::Equal => {
            let is_odd = &quotient % 2u32 == 1u32;
            if is_odd {
                quotient + UBig::ONE
            } else {
                quotient
            }
        }
    };

    DecimalNumber::canonical(quotient, target_decimals, v.positive)
}

/// Rounds `v` to the current global [`scale`]; applied to every operation
/// result before it is returned to the caller.
pub fn normalize(v: &DecimalNumber) -> DecimalNumber {
    round_to(v, scale::get_scale())
}

/// `+v`: re-normalizes `v` to the current scale. An idempotent-looking
/// operation that is not actually a no-op once the global scale has changed.
pub fn unary_plus(v: &DecimalNumber) -> DecimalNumber {
    normalize(v)
}

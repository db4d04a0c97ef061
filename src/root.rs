//! Square root via Newton–Raphson iteration over extended-precision integers.

use dashu_base::BitTest;
use dashu_int::UBig;

use crate::error::{Error, Result};
use crate::repr::DecimalNumber;
use crate::scale;

/// Extra fractional digits carried during the integer square root so that
/// rounding to the user's scale is correctly directed.
const GUARD_DIGITS: u32 = 2;

/// Integer `floor(sqrt(m))`, computed by Newton's method starting from a
/// power-of-two estimate derived from `m`'s bit length.
fn isqrt(m: &UBig) -> UBig {
    if m.is_zero() {
        return UBig::ZERO;
    }
    let bits = m.bit_len();
    let mut x = UBig::ONE << (bits / 2 + 1);
    loop {
        let y = (&x + m / &x) / 2u32;
        if y >= x {
            break;
        }
        x = y;
    }
    x
}

/// `sqrt(v)`. Fails with [`Error::MathDomainError`] for negative `v`.
pub fn square_root(v: &DecimalNumber) -> Result<DecimalNumber> {
    if !v.positive && !v.mantissa.is_zero() {
        return Err(Error::MathDomainError);
    }
    if v.mantissa.is_zero() {
        return Ok(DecimalNumber::new());
    }

    // lift so the integer root carries `target_decimals` fractional digits
    let target_decimals = scale::get_scale() + GUARD_DIGITS;
    let exponent = 2 * target_decimals as i64 - v.decimals as i64;
    let lifted = if exponent >= 0 {
        &v.mantissa * UBig::from(10u8).pow(exponent as usize)
    } else {
        &v.mantissa / UBig::from(10u8).pow((-exponent) as usize)
    };

    let root = isqrt(&lifted);
    // Truncate (never round) the guard digits away: `isqrt` already floors,
    // and rounding up here could violate the square-root inverse invariant
    // (`square_root(v)^2 <= v`) for values exactly on a rounding boundary.
    let scale = scale::get_scale();
    let truncated = &root / UBig::from(10u8).pow(GUARD_DIGITS as usize);
    Ok(DecimalNumber::canonical(truncated, scale, true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqrt_of_negative_fails() {
        let v = DecimalNumber::from_int(-1i64);
        assert_eq!(square_root(&v), Err(Error::MathDomainError));
    }

    #[test]
    fn sqrt_of_zero_is_zero() {
        let v = DecimalNumber::from_int(0i64);
        assert_eq!(square_root(&v).unwrap(), DecimalNumber::from_int(0i64));
    }

    #[test]
    fn sqrt_matches_scenario() {
        let _guard = crate::scale::test_lock();
        let v: DecimalNumber = "620433.785".parse().unwrap();
        let r = square_root(&v).unwrap();
        assert_eq!(r.to_string(), "787.6761929879561873");
    }

    #[test]
    fn sqrt_inverse_bound() {
        let v: DecimalNumber = "2".parse().unwrap();
        let r = square_root(&v).unwrap();
        let squared = crate::ops::mul(&r, &r);
        assert!(squared <= v);
    }
}

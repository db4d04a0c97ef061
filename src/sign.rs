//! Sign-only operations: `abs`, `negate`.

use crate::repr::DecimalNumber;

/// Returns `-v`. Mantissa and decimals are preserved; a zero mantissa always
/// keeps `positive = true` (no negative zero).
pub fn negate(v: &DecimalNumber) -> DecimalNumber {
    if v.mantissa.is_zero() {
        return v.clone();
    }
    DecimalNumber::canonical(v.mantissa.clone(), v.decimals, !v.positive)
}

/// Returns `|v|`.
pub fn abs(v: &DecimalNumber) -> DecimalNumber {
    DecimalNumber::canonical(v.mantissa.clone(), v.decimals, true)
}

impl DecimalNumber {
    /// `true` for values strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.positive && !self.mantissa.is_zero()
    }

    /// `true` for values strictly less than zero.
    pub fn is_negative(&self) -> bool {
        !self.positive
    }

    /// `-1`, `0`, or `1` according to the sign of `self`.
    pub fn signum(&self) -> DecimalNumber {
        if self.mantissa.is_zero() {
            DecimalNumber::new()
        } else if self.positive {
            DecimalNumber::from_int(1i64)
        } else {
            DecimalNumber::from_int(-1i64)
        }
    }
}

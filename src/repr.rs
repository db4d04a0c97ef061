//! The [`DecimalNumber`] representation and its constructors.

use dashu_base::Sign;
use dashu_int::{IBig, UBig};

use crate::error::{Error, Result};

/// An arbitrary-precision decimal value of the form
/// `(positive ? +1 : -1) * mantissa * 10^(-decimals)`.
///
/// `mantissa` always holds all significant digits, including those to the
/// right of the decimal point, and is never negative: the sign is carried
/// exclusively by `positive`. This mirrors the `mantissa`/`exponent` split
/// used by [`dashu_float`](https://docs.rs/dashu-float)'s `Repr`, except the
/// exponent here is always `-decimals` (base 10, never positive) and the
/// rounding target (`scale`) is a mutable process-wide value rather than a
/// per-value context.
#[derive(Clone, Debug)]
pub struct DecimalNumber {
    pub(crate) mantissa: UBig,
    pub(crate) decimals: u32,
    pub(crate) positive: bool,
}

impl DecimalNumber {
    /// The canonical zero value: `mantissa = 0`, `decimals = 0`, `positive = true`.
    pub fn new() -> Self {
        DecimalNumber {
            mantissa: UBig::ZERO,
            decimals: 0,
            positive: true,
        }
    }

    /// Builds a value from a signed integer; `decimals` is `0`.
    pub fn from_int<T: Into<IBig>>(n: T) -> Self {
        let (sign, magnitude) = n.into().into_parts();
        DecimalNumber {
            mantissa: magnitude,
            decimals: 0,
            positive: sign != Sign::Negative,
        }
    }

    /// Builds a value from a signed integer mantissa (`digits`) and a
    /// fractional digit count (`decimals`). Fails with [`Error::BadInit`] if
    /// `decimals` is negative. The literal's declared precision is retained
    /// as-is; no rounding to scale happens here.
    pub fn from_parts(digits: IBig, decimals: i64) -> Result<Self> {
        if decimals < 0 {
            return Err(Error::BadInit);
        }
        let (sign, magnitude) = digits.into_parts();
        Ok(DecimalNumber {
            mantissa: magnitude,
            decimals: decimals as u32,
            positive: sign != Sign::Negative,
        })
    }

    /// Parses a decimal literal; see [`core::str::FromStr`] for the accepted
    /// grammar. Fails with [`Error::ParseError`] on malformed input.
    pub fn from_string(s: &str) -> Result<Self> {
        s.parse()
    }

    /// Overwrites `self` in place with a copy of `other`.
    ///
    /// Provided for API parity with implementations that cannot override the
    /// assignment operator; in Rust, `self.clone_from(other)` or plain
    /// assignment of a `.clone()` are equivalent.
    pub fn copy_from(&mut self, other: &DecimalNumber) {
        self.clone_from(other);
    }

    pub(crate) fn canonical(mantissa: UBig, decimals: u32, positive: bool) -> Self {
        let positive = if mantissa.is_zero() { true } else { positive };
        DecimalNumber {
            mantissa,
            decimals,
            positive,
        }
    }

    /// Reinterprets this value as a signed big integer carrying the same
    /// digits, discarding the decimal point position. Used internally to lift
    /// aligned mantissas into signed arithmetic.
    pub(crate) fn signed_mantissa(&self) -> IBig {
        to_signed(&self.mantissa, self.positive)
    }

    pub(crate) fn from_signed_mantissa(value: IBig, decimals: u32) -> Self {
        let (sign, magnitude) = value.into_parts();
        Self::canonical(magnitude, decimals, sign != Sign::Negative)
    }
}

/// Lifts a `(mantissa, sign)` pair into a signed big integer.
pub(crate) fn to_signed(mantissa: &UBig, positive: bool) -> IBig {
    let sign = if positive {
        Sign::Positive
    } else {
        Sign::Negative
    };
    IBig::from_parts(sign, mantissa.clone())
}

impl Default for DecimalNumber {
    fn default() -> Self {
        Self::new()
    }
}

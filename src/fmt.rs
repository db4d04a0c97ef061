//! Rendering a [`DecimalNumber`] back to a decimal string.

use core::fmt::{self, Display, Formatter};

use crate::repr::DecimalNumber;
use crate::round::round_to;

impl DecimalNumber {
    /// Digit string of the mantissa with no sign and no decimal point.
    fn digits(&self) -> String {
        self.mantissa.to_string()
    }

    /// Splits the rendering into `(sign, integer_part, fractional_part)`,
    /// left-padding the mantissa with zeros when it has fewer digits than
    /// `decimals` requires. `fractional_part` is empty when `decimals == 0`.
    fn parts(&self) -> (&'static str, String, String) {
        let sign = if self.positive { "" } else { "-" };
        let digits = self.digits();
        let decimals = self.decimals as usize;

        if decimals == 0 {
            return (sign, digits, String::new());
        }

        if digits.len() <= decimals {
            let padded = format!("{:0>width$}", digits, width = decimals + 1);
            let split = padded.len() - decimals;
            (sign, padded[..split].to_string(), padded[split..].to_string())
        } else {
            let split = digits.len() - decimals;
            (sign, digits[..split].to_string(), digits[split..].to_string())
        }
    }

    /// Canonical rendering: optional `-`, integer digits, optional `.` with
    /// fractional digits. Trailing fractional zeros are preserved.
    pub fn to_string_plain(&self) -> String {
        let (sign, int_part, frac_part) = self.parts();
        if frac_part.is_empty() {
            format!("{sign}{int_part}")
        } else {
            format!("{sign}{int_part}.{frac_part}")
        }
    }

    /// Same as [`to_string_plain`][Self::to_string_plain], but groups the
    /// integer part's digits in threes (right to left) with `,` separators.
    pub fn to_string_thousands(&self) -> String {
        let (sign, int_part, frac_part) = self.parts();
        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        let bytes = int_part.as_bytes();
        for (i, b) in bytes.iter().enumerate() {
            if i > 0 && (bytes.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(*b as char);
        }
        if frac_part.is_empty() {
            format!("{sign}{grouped}")
        } else {
            format!("{sign}{grouped}.{frac_part}")
        }
    }

    /// Renders within `max_len` characters. If the full rendering doesn't
    /// fit, the fractional part is dropped entirely (point included), not
    /// truncated digit by digit. Returns the literal `"Overflow"` if even
    /// the integer portion alone would exceed `max_len`.
    ///
    /// # Panics
    ///
    /// Panics if `max_len < 8`, per the external contract.
    pub fn to_string_max_length(&self, max_len: usize) -> String {
        assert!(max_len >= 8, "max_len must be at least 8");

        let (sign, int_part, frac_part) = self.parts();
        let integer_only = format!("{sign}{int_part}");
        if integer_only.len() > max_len {
            return "Overflow".to_string();
        }
        if frac_part.is_empty() {
            return integer_only;
        }

        let full = format!("{integer_only}.{frac_part}");
        if full.len() <= max_len {
            full
        } else {
            integer_only
        }
    }

    /// Truncates toward zero to an integer, discarding fractional digits.
    pub fn to_int_truncate(&self) -> dashu_int::IBig {
        use dashu_base::Sign;
        let shift = dashu_int::UBig::from(10u8).pow(self.decimals as usize);
        let whole = &self.mantissa / shift;
        let sign = if self.positive {
            Sign::Positive
        } else {
            Sign::Negative
        };
        dashu_int::IBig::from_parts(sign, whole)
    }

    /// Rounds to an integer using round-half-to-even, then returns the
    /// signed mantissa.
    pub fn to_int_round(&self) -> dashu_int::IBig {
        round_to(self, 0).signed_mantissa()
    }
}

impl Display for DecimalNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_plain())
    }
}

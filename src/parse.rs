//! Decimal string parsing: `FromStr` for [`DecimalNumber`].
//!
//! Accepts the grammar `-?([0-9]+(\.[0-9]*)? | \.[0-9]+)`. A leading `+` is
//! not accepted, at most one `-` and at most one `.` are allowed, and the
//! literal's declared precision is retained verbatim (no rounding to scale).

use core::str::FromStr;
use dashu_int::UBig;

use crate::error::Error;
use crate::repr::DecimalNumber;

impl FromStr for DecimalNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        if rest.is_empty() {
            return Err(Error::ParseError);
        }

        let mut parts = rest.splitn(3, '.');
        let int_part = parts.next().unwrap_or("");
        let frac_part = parts.next();
        if parts.next().is_some() {
            // a second '.' was present
            return Err(Error::ParseError);
        }

        if int_part.is_empty() && frac_part.is_none() {
            return Err(Error::ParseError);
        }
        if int_part.is_empty() && frac_part == Some("") {
            return Err(Error::ParseError);
        }
        if !int_part.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::ParseError);
        }
        let frac_digits = frac_part.unwrap_or("");
        if !frac_digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::ParseError);
        }

        let mut digits = String::with_capacity(int_part.len() + frac_digits.len());
        digits.push_str(if int_part.is_empty() { "0" } else { int_part });
        digits.push_str(frac_digits);

        let mantissa = UBig::from_str_radix(&digits, 10).map_err(|_| Error::ParseError)?;
        let decimals = frac_digits.len() as u32;

        Ok(DecimalNumber::canonical(mantissa, decimals, !negative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_fractional() {
        let v: DecimalNumber = "93402.5184".parse().unwrap();
        assert_eq!(v.to_string(), "93402.5184");
    }

    #[test]
    fn parses_leading_dot() {
        let v: DecimalNumber = ".25".parse().unwrap();
        assert_eq!(v.to_string(), "0.25");
    }

    #[test]
    fn parses_negative() {
        let v: DecimalNumber = "-12.5".parse().unwrap();
        assert!(!v.positive);
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!("".parse::<DecimalNumber>(), Err(Error::ParseError));
        assert_eq!("--1".parse::<DecimalNumber>(), Err(Error::ParseError));
        assert_eq!("1.2.3".parse::<DecimalNumber>(), Err(Error::ParseError));
        assert_eq!("1a".parse::<DecimalNumber>(), Err(Error::ParseError));
        assert_eq!("+1".parse::<DecimalNumber>(), Err(Error::ParseError));
        assert_eq!(".".parse::<DecimalNumber>(), Err(Error::ParseError));
    }

    #[test]
    fn negative_zero_normalizes_positive() {
        let v: DecimalNumber = "-0.0".parse().unwrap();
        assert!(v.positive);
    }
}

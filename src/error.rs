//! Error types returned by fallible operations on [DecimalNumber][crate::DecimalNumber].

use core::fmt::{self, Display, Formatter};

/// The error taxonomy for the decimal arithmetic kernel.
///
/// There is no out-of-band sentinel (no NaN, no infinity): every failure mode
/// is surfaced through one of these variants and propagated to the caller.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// A string passed to [`from_str`][core::str::FromStr::from_str] or
    /// [`DecimalNumber::from_string`][crate::DecimalNumber::from_string] is not
    /// a well-formed decimal literal.
    ParseError,
    /// A negative `decimals` was passed to a constructor.
    BadInit,
    /// The mathematical domain of a function does not contain the argument
    /// (e.g. square root of a negative value, logarithm of a non-positive
    /// value, `asin`/`acos` outside `[-1, 1]`, `atan2(0, 0)`).
    MathDomainError,
    /// The divisor's mantissa is zero, or `tan` was evaluated where `cos`
    /// rounds to exactly zero at the current scale.
    DivisionByZero,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::ParseError => f.write_str("not a well-formed decimal literal"),
            Error::BadInit => f.write_str("decimals must not be negative"),
            Error::MathDomainError => f.write_str("value is outside the domain of the operation"),
            Error::DivisionByZero => f.write_str("division by zero"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

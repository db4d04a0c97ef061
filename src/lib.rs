//! Arbitrary-precision decimal arithmetic for constrained environments.
//!
//! [`DecimalNumber`] represents an exact rational of the form
//! `sign * mantissa * 10^(-decimals)` with an unbounded integer mantissa.
//! Every operation rounds its result to a process-wide [`get_scale`]
//! (maximum fractional digits) using round-half-to-even, so repeated
//! computation never accumulates unbounded precision.
//!
//! ```
//! use decicore::DecimalNumber;
//!
//! let a: DecimalNumber = "7.3329".parse().unwrap();
//! let b: DecimalNumber = "157.82".parse().unwrap();
//! assert_eq!((&a + &b).to_string(), "165.1529");
//! ```

mod cmp;
mod consts;
mod convert;
mod error;
mod exp;
mod fmt;
mod log;
mod ops;
mod parse;
mod repr;
mod root;
mod round;
mod scale;
mod sign;
mod trig;

#[cfg(any(feature = "serde", feature = "num-traits"))]
mod third_party;

pub use cmp::compare;
pub use consts::{e, pi};
pub use error::{Error, Result};
pub use exp::exp;
pub use log::ln;
pub use ops::{add, div, mul, pow, sub};
pub use repr::DecimalNumber;
pub use root::square_root;
pub use round::{normalize, unary_plus as normalize_to_scale};
pub use scale::{get_scale, set_scale, DEFAULT_SCALE};
pub use sign::{abs, negate};
pub use trig::{acos, asin, atan, atan2, cos, sin, tan};

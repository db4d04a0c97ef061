//! Conversions between [`DecimalNumber`] and native integer types.

use dashu_int::IBig;

use crate::repr::DecimalNumber;

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for DecimalNumber {
                fn from(n: $t) -> Self {
                    DecimalNumber::from_int(IBig::from(n))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

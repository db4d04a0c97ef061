//! Ordering and equality between [`DecimalNumber`]s.

use core::cmp::Ordering;

use crate::repr::DecimalNumber;
use crate::round::align;

/// Compares two values by their exact rational value (aligning decimals
/// first, so `1.50 == 1.5`).
pub fn compare(a: &DecimalNumber, b: &DecimalNumber) -> Ordering {
    let (ma, mb, _) = align(a, b);
    match (a.positive, b.positive) {
        (true, true) => ma.cmp(&mb),
        (false, false) => mb.cmp(&ma),
        (true, false) => {
            if ma.is_zero() && mb.is_zero() {
                Ordering::Equal
            } else {
                Ordering::Greater
            }
        }
        (false, true) => {
            if ma.is_zero() && mb.is_zero() {
                Ordering::Equal
            } else {
                Ordering::Less
            }
        }
    }
}

impl PartialEq for DecimalNumber {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other) == Ordering::Equal
    }
}

impl Eq for DecimalNumber {}

impl PartialOrd for DecimalNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DecimalNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl PartialEq<i64> for DecimalNumber {
    fn eq(&self, other: &i64) -> bool {
        compare(self, &DecimalNumber::from_int(*other)) == Ordering::Equal
    }
}

impl PartialOrd<i64> for DecimalNumber {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(compare(self, &DecimalNumber::from_int(*other)))
    }
}

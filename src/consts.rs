//! Cached constants π and e, with progressive refinement as the global
//! scale grows.
//!
//! Both are lazily materialized and held behind a shared-read/exclusive-write
//! lock, following the `static LazyLock<...>` pattern used elsewhere in the
//! pack for process-wide caches. The cache is monotone: `computed_decimals`
//! only ever grows, so a reader that races with a refinement either observes
//! the previous value (still valid at or above the decimals it asked for) or
//! the refined one.

use std::sync::{LazyLock, RwLock};

use crate::ops::{add, div, mul};
use crate::repr::DecimalNumber;
use crate::round::round_to;
use crate::scale;

/// Extra digits computed beyond the requested scale, to absorb the error of
/// the final rounding step.
const GUARD_DIGITS: u32 = 5;

struct ConstCache {
    value: DecimalNumber,
    computed_decimals: u32,
}

impl ConstCache {
    fn empty() -> Self {
        ConstCache {
            value: DecimalNumber::new(),
            computed_decimals: 0,
        }
    }
}

static PI_CACHE: LazyLock<RwLock<ConstCache>> = LazyLock::new(|| RwLock::new(ConstCache::empty()));
static E_CACHE: LazyLock<RwLock<ConstCache>> = LazyLock::new(|| RwLock::new(ConstCache::empty()));

fn cached(cache: &LazyLock<RwLock<ConstCache>>, compute: impl Fn() -> DecimalNumber) -> DecimalNumber {
    let requested = scale::get_scale();
    {
        let guard = cache.read().unwrap();
        if guard.computed_decimals >= requested {
            return round_to(&guard.value, requested);
        }
    }

    let mut guard = cache.write().unwrap();
    if guard.computed_decimals < requested {
        let computed_decimals = requested + GUARD_DIGITS;
        scale::set_scale(computed_decimals);
        guard.value = compute();
        scale::set_scale(requested);
        guard.computed_decimals = computed_decimals;
    }
    round_to(&guard.value, requested)
}

/// Computes π using the quadratic-convergence series
/// `s = sum of t_n`, `t_n = t_{n-1} * n / d`, with `n`/`d` advancing by
/// `8`/`32` each step — the same recipe used by Python's `decimal` module
/// reference implementation of `Context.pi`. Halts when the running sum is
/// unchanged by the next term.
fn compute_pi() -> DecimalNumber {
    let mut lasts = DecimalNumber::from_int(0i64);
    let mut t = DecimalNumber::from_int(3i64);
    let mut s = DecimalNumber::from_int(3i64);
    let mut n = DecimalNumber::from_int(1i64);
    let mut na = DecimalNumber::from_int(0i64);
    let mut d = DecimalNumber::from_int(0i64);
    let mut da = DecimalNumber::from_int(24i64);

    while s != lasts {
        lasts = s.clone();
        n = add(&n, &na);
        na = add(&na, &DecimalNumber::from_int(8i64));
        d = add(&d, &da);
        da = add(&da, &DecimalNumber::from_int(32i64));
        t = div(&mul(&t, &n), &d).expect("d never reaches zero in the pi series");
        s = add(&s, &t);
    }
    s
}

/// Computes e using `s = sum 1/k!`, halting when the running sum is
/// unchanged by the next term.
fn compute_e() -> DecimalNumber {
    let mut s = DecimalNumber::from_int(1i64);
    let mut term = DecimalNumber::from_int(1i64);
    let mut k = 0i64;
    loop {
        k += 1;
        term = div(&term, &DecimalNumber::from_int(k)).expect("k is never zero");
        let next = add(&s, &term);
        if next == s {
            break;
        }
        s = next;
    }
    s
}

/// Returns π at the current scale, recomputing and caching if the cache
/// doesn't yet hold enough digits.
pub fn pi() -> DecimalNumber {
    cached(&PI_CACHE, compute_pi)
}

/// Returns e at the current scale, recomputing and caching if the cache
/// doesn't yet hold enough digits.
pub fn e() -> DecimalNumber {
    cached(&E_CACHE, compute_e)
}

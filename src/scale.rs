//! Configuration: the maximum number of fractional digits ("scale")
//! retained by any returned value.
//!
//! Scale is read and written through plain functions rather than threaded
//! through every call, matching the "context value" contract described by
//! the specification: changing it never mutates values already created, it
//! only affects the normalization step of subsequent operations.
//!
//! Scale is thread-local, not a single process-wide cell shared by every
//! thread: the specification allows either a mutual-exclusion discipline or
//! thread-local storage for this value under a multi-threaded host, and a
//! global cell would mean one thread's transient guard-digit raise (see
//! [`with_guard`]) is visible to every other thread's unrelated computation
//! for the duration of the raise, silently rounding their results to the
//! wrong precision. Thread-local storage rules that out without requiring
//! every caller of `add`/`mul`/`normalize`/etc. to contend on a lock.

use std::cell::Cell;

/// Default scale used until [`set_scale`] is called.
pub const DEFAULT_SCALE: u32 = 16;

thread_local! {
    static SCALE: Cell<u32> = const { Cell::new(DEFAULT_SCALE) };
}

/// Returns the current scale for this thread.
#[inline]
pub fn get_scale() -> u32 {
    SCALE.with(Cell::get)
}

/// Sets the scale for this thread. Existing values are unaffected; only
/// future operations on this thread (including the idempotent-looking `+v`)
/// observe the new scale.
///
/// # Panics
///
/// Panics if `n` is zero; the specification requires scale to be a positive
/// integer.
#[inline]
pub fn set_scale(n: u32) {
    assert!(n > 0, "scale must be a positive integer");
    SCALE.with(|s| s.set(n));
}

/// Temporarily raises the scale by `guard` digits for the duration of `f`,
/// then restores the previous scale before returning `f`'s result.
///
/// Every transcendental function uses this to absorb rounding error from
/// series summation without leaking the extra precision to the caller.
pub(crate) fn with_guard<T>(guard: u32, f: impl FnOnce() -> T) -> T {
    let previous = get_scale();
    set_scale(previous + guard);
    let result = f();
    set_scale(previous);
    result
}

/// Serializes tests that read or mutate scale and the shared π/e caches.
///
/// Scale itself is thread-local, so tests no longer race on it directly, but
/// [`crate::consts`]'s π/e caches are still shared across threads; this lock
/// keeps assertions about cache contents (e.g. refinement, monotonicity)
/// from interleaving with each other.
#[cfg(test)]
pub(crate) fn test_lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

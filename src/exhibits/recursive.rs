//! Exhibits whose growth comes from recursion.
//!
//! Native recursion is used throughout: every recursion depth here is bounded by the validated
//! bound itself ([countdown_loop]: ≤ n, [halving_depth]: ≤ ⌊log₂ n⌋ + 1) or by the configured
//! ceiling ([fibonacci]: ≤ n ≤ [configs::FIBONACCI_BOUND_CEILING]), all comfortably within the
//! default thread stack.

use std::hint::black_box;
use crate::{
    configs,
    error::ExhibitError,
};
use super::non_negative;

/// Halving recursion: the base case at `n ≤ 1` answers 1; otherwise recurse on `⌊n/2⌋` and add 1.\
/// The returned value is the recursion depth itself -- `⌊log₂ n⌋ + 1` for `n ≥ 1` (and 1 for
/// `n = 0`), always ≥ 1 -- so the Θ(log₂ n) growth is the routine's own output.
pub fn halving_depth(n: i64) -> Result<u64, ExhibitError> {
    let n = non_negative("halving_depth", n)?;
    Ok(halve(n))
}

fn halve(n: u64) -> u64 {
    if n <= 1 {
        return 1;
    }
    halve(n / 2) + 1
}

/// The outer loop counts `1..=n`; each outer value `i` invokes a helper that recurses from `i`
/// down to 0, performing one elementary action per positive step.\
/// Returns the action tally: `1 + 2 + ... + n = n.(n+1)/2` -- the same Θ(n²) total as
/// [triangular_loop](super::triangular_loop), reached through recursion depth instead of an
/// inner loop: the outer count and the per-call depth combine multiplicatively.
pub fn countdown_loop(n: i64) -> Result<u64, ExhibitError> {
    let n = non_negative("countdown_loop", n)?;
    let mut actions: u64 = 0;
    for i in 1..=n {
        countdown(i, &mut actions);
    }
    Ok(actions)
}

fn countdown(m: u64, actions: &mut u64) {
    if m == 0 {
        return;
    }
    black_box(m);               // the elementary action
    *actions += 1;
    countdown(m - 1, actions);
}

/// Doubly-recursive Fibonacci: the base case at `n ≤ 1` answers `n`; otherwise
/// `fibonacci(n-1) + fibonacci(n-2)`.\
/// Deliberately NOT memoized -- the exponentially-shaped call tree, recomputation included, is
/// the exhibited inefficiency, not a bug. Anyone wanting a fast Fibonacci is in the wrong crate.\
/// Negative bounds are refused with [ExhibitError::InvalidArgument] (the recursion would never
/// reach its base case); bounds above [configs::FIBONACCI_BOUND_CEILING] with
/// [ExhibitError::ResourceExceeded].
pub fn fibonacci(n: i64) -> Result<u64, ExhibitError> {
    let (value, _calls) = counted_fibonacci("fibonacci", n)?;
    Ok(value)
}

/// Same recursion as [fibonacci], but reports how many calls the recursion enters for the given
/// bound -- `2.fib(n+1) - 1` -- which is the count that makes the exponential class verifiable
/// without wall-clock time.
pub fn fibonacci_call_count(n: i64) -> Result<u64, ExhibitError> {
    let (_value, calls) = counted_fibonacci("fibonacci_call_count", n)?;
    Ok(calls)
}

fn counted_fibonacci(routine: &'static str, n: i64) -> Result<(u64, u64), ExhibitError> {
    let validated = non_negative(routine, n)?;
    let ceiling = *configs::FIBONACCI_BOUND_CEILING;
    if validated > ceiling as u64 {
        return Err(ExhibitError::ResourceExceeded { routine, bound: n, ceiling });
    }
    let mut calls: u64 = 0;
    let value = fib(validated, &mut calls);
    Ok((value, calls))
}

fn fib(n: u64, calls: &mut u64) -> u64 {
    *calls += 1;                // the elementary action: one call entered
    if n <= 1 {
        return black_box(n);
    }
    fib(n - 1, calls) + fib(n - 2, calls)
}

//! Contains runtime-tunable constants used throughout this crate -- most notably the safety
//! ceilings that keep the exponential exhibits from consuming unbounded run time & stack depth.\
//! Each ceiling is read once per process from an environment variable, falling back to a safe
//! default when the variable is absent, malformed, negative or above the hard maximum the
//! implementation can count without overflowing.

use once_cell::sync::Lazy;

/// environment variable overriding [DOUBLING_BOUND_CEILING]
pub const DOUBLING_CEILING_VAR: &str = "BIG_O_EXHIBITS_MAX_DOUBLING";
/// environment variable overriding [FIBONACCI_BOUND_CEILING]
pub const FIBONACCI_CEILING_VAR: &str = "BIG_O_EXHIBITS_MAX_FIBONACCI";

/// 2²⁶ ≈ 67M actions -- noticeable, but still finishes
const DEFAULT_DOUBLING_BOUND_CEILING: i64 = 26;
/// ≈ 7M recursive calls for the Fibonacci exhibits
const DEFAULT_FIBONACCI_BOUND_CEILING: i64 = 32;

/// `1u64 << n` must not overflow
const MAX_DOUBLING_CEILING: i64 = 62;
/// `2.fib(n+1) - 1` must fit a `u64`
const MAX_FIBONACCI_CEILING: i64 = 91;

/// Highest bound accepted by [crate::exhibits::doubling_loop] before it fails with
/// [crate::ExhibitError::ResourceExceeded].\
/// Override with the [DOUBLING_CEILING_VAR] environment variable -- read once per process.
pub static DOUBLING_BOUND_CEILING: Lazy<i64> = Lazy::new(||
    ceiling_from_env(DOUBLING_CEILING_VAR, DEFAULT_DOUBLING_BOUND_CEILING, MAX_DOUBLING_CEILING));

/// Highest bound accepted by [crate::exhibits::fibonacci] & [crate::exhibits::fibonacci_call_count]
/// before they fail with [crate::ExhibitError::ResourceExceeded].\
/// Override with the [FIBONACCI_CEILING_VAR] environment variable -- read once per process.
pub static FIBONACCI_BOUND_CEILING: Lazy<i64> = Lazy::new(||
    ceiling_from_env(FIBONACCI_CEILING_VAR, DEFAULT_FIBONACCI_BOUND_CEILING, MAX_FIBONACCI_CEILING));


/// A rejected override must never make the pure routines fail unpredictably,
/// so anything out of `0..=max` (or unparseable) falls back to `default`
fn ceiling_from_env(var: &str, default: i64, max: i64) -> i64 {
    std::env::var(var).ok()
        .and_then(|value| value.parse::<i64>().ok())
        .filter(|ceiling| (0..=max).contains(ceiling))
        .unwrap_or(default)
}

//! The complexity-exhibit suite: five self-contained routines, each built to make one asymptotic
//! growth class observable by counting *elementary actions* -- never to be efficient.\
//! The loop & recursion shapes ARE the contract: an optimized equivalent would defeat the teaching
//! purpose, so each routine performs its characteristic structure literally, tallying one action
//! per step, and reports the tally (or its documented value). See [crate::runners] for turning two
//! such counts into a verified [crate::GrowthClass].
//!
//! All routines accept their bound as an `i64` and reject negative values up front -- a negative
//! bound either makes no sense or would never terminate downstream.

mod iterative;
mod recursive;

pub use iterative::{triangular_loop, doubling_loop};
pub use recursive::{halving_depth, countdown_loop, fibonacci, fibonacci_call_count};

use crate::error::ExhibitError;

/// guards a routine's bound before any iteration or recursion begins
fn non_negative(routine: &'static str, n: i64) -> Result<u64, ExhibitError> {
    if n < 0 {
        Err(ExhibitError::InvalidArgument {
            routine,
            reason: format!("bound must be non-negative, got {n}"),
        })
    } else {
        Ok(n as u64)
    }
}

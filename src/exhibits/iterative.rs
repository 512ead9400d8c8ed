//! Exhibits whose growth comes from plain iteration.

use std::hint::black_box;
use crate::{
    configs,
    error::ExhibitError,
};
use super::non_negative;

/// Runs the nested count-up: the outer loop counts `1..=n` and, for each outer value `i`, the
/// inner loop counts `1..=i`, performing one elementary action per inner step -- the inner bound
/// depends on the outer index, which is what makes the total quadratic.\
/// Returns the action tally: `n.(n+1)/2`, i.e. Θ(n²).
pub fn triangular_loop(n: i64) -> Result<u64, ExhibitError> {
    let n = non_negative("triangular_loop", n)?;
    let mut actions: u64 = 0;
    for i in 1..=n {
        for j in 1..=i {
            black_box((i, j));      // the elementary action: one constant-time observation per pair
            actions += 1;
        }
    }
    Ok(actions)
}

/// Runs a single loop over `0 .. 2ⁿ`, one elementary action per step -- the bound is computed as
/// 2 raised to the `n`, so the step count doubles with every increment of the bound.\
/// Returns the action tally: `2ⁿ`, i.e. Θ(2ⁿ).\
/// Bounds above [configs::DOUBLING_BOUND_CEILING] are refused with
/// [ExhibitError::ResourceExceeded]: the blowup is the teaching point, unbounded run time is not.
pub fn doubling_loop(n: i64) -> Result<u64, ExhibitError> {
    let validated = non_negative("doubling_loop", n)?;
    let ceiling = *configs::DOUBLING_BOUND_CEILING;
    if validated > ceiling as u64 {
        return Err(ExhibitError::ResourceExceeded { routine: "doubling_loop", bound: n, ceiling });
    }
    let mut actions: u64 = 0;
    let upper = 1u64 << validated;
    for i in 0..upper {
        black_box(i);               // the elementary action
        actions += 1;
    }
    Ok(actions)
}

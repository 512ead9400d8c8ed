//! Extremum scan over integer sequences -- the linear, single-pass exhibit.

use crate::error::ExhibitError;

/// Returns the greatest element of `values`.\
/// The running maximum is seeded with element 0, then every following element is visited exactly
/// once, in index order, strictly within bounds -- updating on strictly-greater, so ties don't
/// affect the result. Θ(n) time, O(1) auxiliary space.\
/// An empty sequence has no maximum and is rejected with [ExhibitError::InvalidArgument]
/// rather than answered with a sentinel.
pub fn max_element(values: &[i64]) -> Result<i64, ExhibitError> {
    let Some(&first) = values.first() else {
        return Err(ExhibitError::InvalidArgument {
            routine: "max_element",
            reason:  "cannot take the maximum of an empty sequence".to_string(),
        });
    };
    let mut max = first;
    for &candidate in &values[1..] {
        if candidate > max {
            max = candidate;
        }
    }
    Ok(max)
}

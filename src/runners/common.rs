//! Contains code shared between this module's submodules

use crate::error::ExhibitError;

/// Runs a single counted pass of `exhibit` with the given `bound` and outputs the resulting
/// elementary-action tally as progress, before returning it.\
/// An `exhibit` is a closure receiving the bound and answering its action count (or its
/// documented value, for the routines whose value IS the count):
/// ```
///     /// Exhibit function under verification
///     fn exhibit(bound: i64) -> Result<u64, big_o_exhibits::ExhibitError> {
///         Ok(bound as u64)
///     }
/// ```
pub fn run_counted_pass_verbosely(result_prefix: &str,
                                  result_suffix: &str,
                                  exhibit:       &mut impl FnMut(i64) -> Result<u64, ExhibitError>,
                                  bound:         i64,
                                  output:        impl FnOnce(&str))
                                 -> Result<u64, ExhibitError> {
    let steps = exhibit(bound)?;
    output(&format!("{}{} actions{}", result_prefix, steps, result_suffix));
    Ok(steps)
}

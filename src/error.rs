//! Error types for the exhibit & extremum routines.
//!
//! These computations are deterministic and pure: there are no transient failure modes, no
//! retries and no recovery -- every variant is final and returns synchronously to the caller,
//! who decides how to surface it.

use std::fmt;

/// Errors reported by the routines in [crate::exhibits] & [crate::extremum].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExhibitError {
    /// The caller passed an input outside the routine's domain -- an empty sequence
    /// or a negative bound
    InvalidArgument {
        /// routine that rejected the input
        routine: &'static str,
        /// what was wrong with it
        reason:  String,
    },
    /// The requested bound would make the routine run past its configured safety ceiling\
    /// -- see [crate::configs] for the ceilings & their environment overrides
    ResourceExceeded {
        /// routine that refused to run
        routine: &'static str,
        /// the rejected bound
        bound:   i64,
        /// the configured maximum
        ceiling: i64,
    },
}

impl fmt::Display for ExhibitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { routine, reason } =>
                write!(f, "invalid argument to '{routine}': {reason}"),
            Self::ResourceExceeded { routine, bound, ceiling } =>
                write!(f, "bound {bound} passed to '{routine}' exceeds the configured ceiling of {ceiling}"),
        }
    }
}

impl std::error::Error for ExhibitError {}


#[cfg(test)]
mod tests {
    use super::*;

    /// assures implementors of *Display* work without panics -- also outputs them for manual inspection
    #[test]
    fn display_mentions_the_failing_routine() {
        let invalid = ExhibitError::InvalidArgument {
            routine: "max_element",
            reason:  "cannot take the maximum of an empty sequence".to_string(),
        };
        let exceeded = ExhibitError::ResourceExceeded { routine: "doubling_loop", bound: 63, ceiling: 26 };
        for (error, routine) in [(invalid, "max_element"), (exceeded, "doubling_loop")] {
            let rendered = error.to_string();
            println!("{rendered}");
            assert!(rendered.contains(routine), "'{rendered}' doesn't name the failing routine");
        }
    }
}

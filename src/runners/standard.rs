//! Knows how to run the exhibit routines & classify the growth of their action counts.\
//! See `tests/growth_classes.rs` for examples.

use crate::{
    error::ExhibitError,
    features::OUTPUT,
    growth_analysis::{
        classify_growth,
        types::{
            ExhibitAnalysis,
            ExhibitMeasurements,
            ExhibitPassesInfo,
            GrowthClass,
            StepMeasurements,
        },
    },
    runners::common::run_counted_pass_verbosely,
};

/// Runs `exhibit` twice -- with `pass1_bound` & `pass2_bound` -- classifies the growth of its
/// elementary-action counts and issues a detailed run log with measurements & analysis results
/// through [OUTPUT].\
/// Pass bounds must satisfy `1 < pass1_bound < pass2_bound` (the classification ratios degenerate
/// otherwise); errors raised by the exhibit itself -- negative bound, ceiling hit -- propagate
/// to the caller untouched.
pub fn analyse_exhibit<'a>(exhibit_name: &'a str,
                           mut exhibit:  impl FnMut(i64) -> Result<u64, ExhibitError>,
                           pass1_bound:  i64,
                           pass2_bound:  i64)
                          -> Result<ExhibitAnalysis<'a>, ExhibitError> {
    if pass1_bound < 2 || pass2_bound <= pass1_bound {
        return Err(ExhibitError::InvalidArgument {
            routine: "analyse_exhibit",
            reason:  format!("pass bounds must satisfy 1 < pass1 < pass2, got {pass1_bound} & {pass2_bound}"),
        });
    }
    OUTPUT(&format!("Running '{}' exhibit:\n", exhibit_name));
    let pass_1_steps = run_counted_pass_verbosely("  Pass 1: ", "", &mut exhibit, pass1_bound, OUTPUT)?;
    let pass_2_steps = run_counted_pass_verbosely("; Pass 2: ", "\n\n", &mut exhibit, pass2_bound, OUTPUT)?;
    let measurements = ExhibitMeasurements {
        exhibit_name,
        passes_info:       ExhibitPassesInfo { pass1_bound, pass2_bound },
        step_measurements: StepMeasurements { pass_1_steps, pass_2_steps },
    };
    let growth_class = classify_growth(pass_1_steps, pass_2_steps,
                                       pass1_bound as u64, pass2_bound as u64);
    let analysis = ExhibitAnalysis { growth_class, measurements };
    OUTPUT(&format!("{}\n", analysis));
    Ok(analysis)
}

/// Runs [analyse_exhibit()] and asserts the observed growth class is exactly
/// `expected_growth_class` -- the test-suite entry point.\
/// Exact, not at-most: an exhibit observed in a *cheaper* class than declared means its
/// characteristic structure got optimized away, which is as much a defect here as growing
/// costlier. Panics with the full report on mismatch, or if the exhibit fails to run.
pub fn assert_growth_class(exhibit_name:          &str,
                           exhibit:               impl FnMut(i64) -> Result<u64, ExhibitError>,
                           pass1_bound:           i64,
                           pass2_bound:           i64,
                           expected_growth_class: GrowthClass) {
    let analysis = match analyse_exhibit(exhibit_name, exhibit, pass1_bound, pass2_bound) {
        Ok(analysis) => analysis,
        Err(error) => panic!("'{}' exhibit failed to run: {}", exhibit_name, error),
    };
    if analysis.growth_class != expected_growth_class {
        let msg = format!("\n ** Growth mismatch on the '{}' exhibit: declared: {:?}, observed: {:?}\n\n",
                          exhibit_name, expected_growth_class, analysis.growth_class);
        OUTPUT(&msg);
        panic!("{}", msg);
    }
}

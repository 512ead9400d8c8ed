//! Verifies, out of elementary-action counts alone, that each exhibit routine grows in its
//! declared complexity class -- no wall-clock time involved, so no retries & no idle-machine
//! requirements.

use big_o_exhibits::*;
use ctor::ctor;


/// Sets up the ENV, affecting the configurable ceilings of this test binary\
/// -- must run before `main` so the lazy statics are decided by these values
#[ctor]
fn setup_env() {
    std::env::set_var(configs::DOUBLING_CEILING_VAR, "22");
}


#[test]
fn nested_iteration_is_quadratic() {
    assert_growth_class("nested count-up", triangular_loop, 100, 200, GrowthClass::Quadratic);
}

#[test]
fn looped_recursive_countdown_is_quadratic() {
    assert_growth_class("looped recursive countdown", countdown_loop, 100, 200, GrowthClass::Quadratic);
}

#[test]
fn halving_recursion_is_logarithmic() {
    assert_growth_class("halving recursion", halving_depth, 1024, 1024 * 1024, GrowthClass::Logarithmic);
}

#[test]
fn doubling_iteration_is_exponential() {
    assert_growth_class("power-of-two count-up", doubling_loop, 10, 20, GrowthClass::Exponential);
}

#[test]
fn fibonacci_call_tree_is_exponential() {
    assert_growth_class("Fibonacci call tree", fibonacci_call_count, 10, 20, GrowthClass::Exponential);
}

/// reference closures with known growth keep the classification honest from the outside
#[test]
fn reference_closures_classify_as_declared() {
    assert_growth_class("linear reference", |n| Ok(n as u64), 1000, 2000, GrowthClass::Linear);
    assert_growth_class("constant reference", |_| Ok(42), 1000, 2000, GrowthClass::Constant);
}

#[test]
#[should_panic(expected = "Growth mismatch")]
fn a_constant_closure_cannot_pose_as_quadratic() {
    assert_growth_class("constant posing as quadratic", |_| Ok(7), 100, 200, GrowthClass::Quadratic);
}

#[test]
fn analysis_report_carries_the_measurements() {
    let analysis = analyse_exhibit("nested count-up", triangular_loop, 100, 200)
        .expect("in-ceiling quadratic exhibit should run");
    assert_eq!(analysis.growth_class, GrowthClass::Quadratic);
    assert_eq!(analysis.measurements.step_measurements.pass_1_steps, 100 * 101 / 2);
    assert_eq!(analysis.measurements.step_measurements.pass_2_steps, 200 * 201 / 2);
    let report = analysis.to_string();
    assert!(report.contains("O(n²)"), "report should name the observed class: {report}");
}

#[test]
fn degenerate_pass_bounds_are_rejected() {
    for (pass1, pass2) in [(1, 2), (100, 100), (200, 100)] {
        let result = analyse_exhibit("degenerate bounds", triangular_loop, pass1, pass2);
        assert!(matches!(result, Err(ExhibitError::InvalidArgument { routine: "analyse_exhibit", .. })),
                "bounds {pass1} & {pass2} should have been rejected, got {result:?}");
    }
}

/// the ceiling for the doubling exhibit was lowered to 22 by [setup_env]
#[test]
fn doubling_ceiling_override_is_honored() {
    assert_eq!(doubling_loop(22), Ok(1 << 22));
    assert!(matches!(doubling_loop(23),
                     Err(ExhibitError::ResourceExceeded { routine: "doubling_loop", bound: 23, ceiling: 22 })));
}

#[test]
fn extremum_scan_end_to_end() {
    assert_eq!(max_element(&[-45, -34, -2, -34, -7, -5]), Ok(-2));
    assert_eq!(max_element(&[2, 9, 6, 35, 30, 12, 11, 32]), Ok(35));
    assert!(matches!(max_element(&[]), Err(ExhibitError::InvalidArgument { .. })));
}

#[test]
fn fibonacci_end_to_end() {
    assert_eq!(fibonacci(0), Ok(0));
    assert_eq!(fibonacci(1), Ok(1));
    assert_eq!(fibonacci(5), Ok(5));
    assert_eq!(fibonacci(10), Ok(55));
    assert!(matches!(fibonacci(-1), Err(ExhibitError::InvalidArgument { .. })));
}

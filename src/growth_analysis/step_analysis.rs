//! Contains the function that turns two counted passes into a [GrowthClass].

use crate::features::PERCENT_TOLERANCE;
use super::types::GrowthClass;


/// Classifies the growth of an exhibit's elementary-action count, where `c1` & `c2` are the
/// tallies observed when running it with bounds `n1` & `n2` -- the `n` of the big-O notation...
/// `O(n)`, `O(log(n))`, `O(n²)`, etc.\
/// Each rung compares the observed count ratio against the theoretical ratio for that class,
/// within [PERCENT_TOLERANCE]: exact counts of real structures sit *near* their asymptotic
/// ratios, not at them -- `n.(n+1)/2` against `n²/2`, `⌊log₂ n⌋ + 1` against `log₂ n`.\
/// Constraints: `1 < n1 < n2`, and `c1 ≥ 2` whenever exponential growth is in play (the
/// exponent comparison divides by `log₂ c1`).
pub fn classify_growth(c1: u64, c2: u64, n1: u64, n2: u64) -> GrowthClass {
    debug_assert!(n1 > 1 && n2 > n1, "pass bounds must grow and stay above 1: got {n1} & {n2}");
    let (c1, c2) = (c1 as f64, c2 as f64);
    let (n1, n2) = (n1 as f64, n2 as f64);
    let r = c2 / c1;
    if r < 1.0 - PERCENT_TOLERANCE {
        GrowthClass::BetterThanConstant
    } else if (r - 1.0).abs() <= PERCENT_TOLERANCE {
        GrowthClass::Constant
    } else if (r / (n2.log2() / n1.log2())) < 1.0 - PERCENT_TOLERANCE {
        GrowthClass::BetweenConstantAndLogarithmic
    } else if ((r / (n2.log2() / n1.log2())) - 1.0).abs() <= PERCENT_TOLERANCE {
        GrowthClass::Logarithmic
    } else if (r / (n2 / n1)) < 1.0 - PERCENT_TOLERANCE {
        GrowthClass::BetweenLogarithmicAndLinear
    } else if ((r / (n2 / n1)) - 1.0).abs() <= PERCENT_TOLERANCE {
        GrowthClass::Linear
    } else if (r / ((n2 * n2.log2()) / (n1 * n1.log2()))) < 1.0 - PERCENT_TOLERANCE {
        GrowthClass::BetweenLinearAndLinearithmic
    } else if ((r / ((n2 * n2.log2()) / (n1 * n1.log2()))) - 1.0).abs() <= PERCENT_TOLERANCE {
        GrowthClass::Linearithmic
    } else if (r / (n2 / n1).powi(2)) < 1.0 - PERCENT_TOLERANCE {
        GrowthClass::BetweenLinearithmicAndQuadratic
    } else if ((r / (n2 / n1).powi(2)) - 1.0).abs() <= PERCENT_TOLERANCE {
        GrowthClass::Quadratic
    } else if (r / (n2 / n1).powi(3)) < 1.0 - PERCENT_TOLERANCE {
        GrowthClass::BetweenQuadraticAndCubic
    } else if ((r / (n2 / n1).powi(3)) - 1.0).abs() <= PERCENT_TOLERANCE {
        GrowthClass::Cubic
    } else {
        // past cubic, compare exponents instead of ratios: any c = k.bⁿ keeps log₂(c)/n constant,
        // so a constant factor k (Fibonacci call counts are ≈ 1.45.φⁿ) stays on the rung
        let e = c2.log2() / c1.log2();
        if (e / (n2 / n1)) < 1.0 - PERCENT_TOLERANCE {
            GrowthClass::BetweenCubicAndExponential
        } else if ((e / (n2 / n1)) - 1.0).abs() <= PERCENT_TOLERANCE {
            GrowthClass::Exponential
        } else {
            GrowthClass::WorseThanExponential
        }
    }
}

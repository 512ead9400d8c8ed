//! Types shared by the growth classification & the verification runners.

use std::fmt::{Display, Formatter};

/// Possible growth classification results for an exhibit's elementary-action counts, in big-O
/// notation.\
/// Counts that sit between two well-known classes get their own "between" variant, so a mismatch
/// report can say how far off an observation landed rather than just "not it".
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum GrowthClass {
    BetterThanConstant,
    Constant,
    BetweenConstantAndLogarithmic,
    Logarithmic,
    BetweenLogarithmicAndLinear,
    Linear,
    BetweenLinearAndLinearithmic,
    Linearithmic,
    BetweenLinearithmicAndQuadratic,
    Quadratic,
    BetweenQuadraticAndCubic,
    Cubic,
    BetweenCubicAndExponential,
    Exponential,
    WorseThanExponential,
}

impl GrowthClass {
    /// verbose description for each enum element
    pub fn as_pretty_str(&self) -> &'static str {
        match self {
            Self::BetterThanConstant              => "Better than O(1) -- the action count shrank as the bound grew; is the exhibit doing any work?",
            Self::Constant                        => "O(1)",
            Self::BetweenConstantAndLogarithmic   => "Worse than O(1), but better than O(log(n))",
            Self::Logarithmic                     => "O(log(n))",
            Self::BetweenLogarithmicAndLinear     => "Worse than O(log(n)), but better than O(n)",
            Self::Linear                          => "O(n)",
            Self::BetweenLinearAndLinearithmic    => "Worse than O(n), but better than O(n.log(n))",
            Self::Linearithmic                    => "O(n.log(n))",
            Self::BetweenLinearithmicAndQuadratic => "Worse than O(n.log(n)), but better than O(n²)",
            Self::Quadratic                       => "O(n²)",
            Self::BetweenQuadraticAndCubic        => "Worse than O(n²), but better than O(n³)",
            Self::Cubic                           => "O(n³)",
            Self::BetweenCubicAndExponential      => "Worse than O(n³), but better than O(kⁿ)",
            Self::Exponential                     => "O(kⁿ)",
            Self::WorseThanExponential            => "Worse than O(kⁿ) -- really, really bad growth or a hidden bug?",
        }
    }
}

/// Represents the bound information for the two passes an exhibit is run with
/// when having its growth classified.
#[derive(Debug)]
pub struct ExhibitPassesInfo {
    /// bound the first pass ran with
    pub pass1_bound: i64,
    /// bound the second pass ran with (usually several times the first)
    pub pass2_bound: i64,
}

/// represents an exhibit's elementary-action tallies for passes 1 & 2
#[derive(Debug)]
pub struct StepMeasurements {
    pub pass_1_steps: u64,
    pub pass_2_steps: u64,
}

/// Contains everything observed while running an exhibit twice -- the input to the growth
/// classification and to the [Display] report.
#[derive(Debug)]
pub struct ExhibitMeasurements<'a> {
    /// a name for these measurements, for presentation purposes
    pub exhibit_name:      &'a str,
    /// bounds the two passes ran with
    pub passes_info:       ExhibitPassesInfo,
    /// action tallies counted on each pass
    pub step_measurements: StepMeasurements,
}

/// Return result of [crate::runners::standard::analyse_exhibit()].
#[derive(Debug)]
pub struct ExhibitAnalysis<'a> {
    pub growth_class: GrowthClass,
    pub measurements: ExhibitMeasurements<'a>,
}

impl Display for ExhibitMeasurements<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' exhibit measurements:\n\
                   pass         bound        actions   actions/bound\n\
                   1) {:>13}  {:>13}  {:>14.3}\n\
                   2) {:>13}  {:>13}  {:>14.3}\n",
               self.exhibit_name,
               self.passes_info.pass1_bound, self.step_measurements.pass_1_steps,
               self.step_measurements.pass_1_steps as f64 / self.passes_info.pass1_bound as f64,
               self.passes_info.pass2_bound, self.step_measurements.pass_2_steps,
               self.step_measurements.pass_2_steps as f64 / self.passes_info.pass2_bound as f64)
    }
}

impl Display for ExhibitAnalysis<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\
                   --> Growth Analysis: {}\n",
               self.measurements,
               self.growth_class.as_pretty_str())
    }
}


#[cfg(test)]
mod tests {

    //! Unit tests for [types](super) submodule.

    use super::*;

    /// assures implementors of *Display* work without panics -- also outputs them for manual inspection
    #[test]
    fn serialization() {
        println!("GrowthClass enum members, as strings:");
        let enum_members = [
            GrowthClass::BetterThanConstant,
            GrowthClass::Constant,
            GrowthClass::BetweenConstantAndLogarithmic,
            GrowthClass::Logarithmic,
            GrowthClass::BetweenLogarithmicAndLinear,
            GrowthClass::Linear,
            GrowthClass::BetweenLinearAndLinearithmic,
            GrowthClass::Linearithmic,
            GrowthClass::BetweenLinearithmicAndQuadratic,
            GrowthClass::Quadratic,
            GrowthClass::BetweenQuadraticAndCubic,
            GrowthClass::Cubic,
            GrowthClass::BetweenCubicAndExponential,
            GrowthClass::Exponential,
            GrowthClass::WorseThanExponential,
        ];
        for enum_member in enum_members {
            println!("\t{:?}:\n\t\t=> '{}'", enum_member, enum_member.as_pretty_str());
        }

        let analysis = ExhibitAnalysis {
            growth_class: GrowthClass::Quadratic,
            measurements: ExhibitMeasurements {
                exhibit_name:      "nested count-up",
                passes_info:       ExhibitPassesInfo { pass1_bound: 100, pass2_bound: 200 },
                step_measurements: StepMeasurements { pass_1_steps: 5050, pass_2_steps: 20100 },
            },
        };
        let report = format!("{analysis}");
        println!("{report}");
        assert!(report.contains("nested count-up"), "report doesn't name the exhibit");
        assert!(report.contains("O(n²)"),           "report doesn't name the growth class");
        assert!(report.contains("20100"),           "report doesn't show the pass-2 tally");
    }
}

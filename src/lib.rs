#![doc = include_str!("../README.md")]

pub mod exhibits;
pub mod extremum;
pub mod growth_analysis;
pub mod runners;
pub mod error;
pub mod features;
pub mod configs;


// exported symbols
pub use {
    error::ExhibitError,
    exhibits::{
        triangular_loop,
        halving_depth,
        countdown_loop,
        doubling_loop,
        fibonacci,
        fibonacci_call_count,
    },
    extremum::max_element,
    features::OUTPUT,
    growth_analysis::types::GrowthClass,
    runners::standard::{analyse_exhibit, assert_growth_class},
};

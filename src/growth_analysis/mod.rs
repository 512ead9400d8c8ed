//! Exports the growth classification of elementary-action counts, as well as the needed types
//! to operate on it. See:
//!   - [step_analysis]
//!   - [types]

mod step_analysis;
pub use step_analysis::*;
pub mod types;

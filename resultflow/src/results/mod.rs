//! The result functions the pipeline is built from.
//!
//! - [`combine_results`]: sum three raw results into one output
//! - [`collect_result_1`] / [`collect_result_2`]: gather the raw results
//! - [`validate_result_range`] / [`validate_test_type`]: check user input

mod collect;
mod combine;
mod validation;

pub use collect::{
    collect_result_1, collect_result_2, collect_result_2_by_name, RandomPicker, ResultPicker,
};
pub use combine::{combine_results, parse_suffix, round_score, ROUNDING_THRESHOLD};
pub use validation::{validate_result_range, validate_test_type};

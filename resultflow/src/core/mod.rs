//! Core domain types for resultflow.
//!
//! - [`Difficulty`]: the test type and its fixed score table
//! - [`ResultValue`]: a single raw result as stored in the log

mod difficulty;
mod value;

pub use difficulty::Difficulty;
pub use value::ResultValue;

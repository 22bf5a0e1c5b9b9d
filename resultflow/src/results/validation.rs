//! Validation of user-supplied pipeline inputs.
//!
//! Inputs arrive untyped (from JSON config or the command line). Validation
//! turns them into the typed values the rest of the pipeline works with, so a
//! value that passes here cannot fail for type reasons later.

use serde_json::Value;

use crate::core::Difficulty;
use crate::errors::ValidationError;

/// Validates that every value in the result range is an integer.
///
/// Floats are rejected even when they have no fractional part, and so are
/// booleans. Integers too large for an `i64` get their own error. An empty
/// range is valid; it is only an error once a result has to be picked from it.
pub fn validate_result_range(result_range: &[Value]) -> Result<Vec<i64>, ValidationError> {
    result_range
        .iter()
        .map(|value| match value.as_i64() {
            Some(v) => Ok(v),
            None if value.is_u64() => Err(ValidationError::IntegerOutOfRange {
                value: value.to_string(),
            }),
            None => Err(ValidationError::non_integer_range(result_range)),
        })
        .collect()
}

/// Validates that the test type names a known [`Difficulty`].
pub fn validate_test_type(test_type: &str) -> Result<Difficulty, ValidationError> {
    test_type.parse()
}

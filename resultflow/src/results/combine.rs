//! Combining the three raw results into one integer output.

use tracing::warn;

use crate::errors::CombineError;

/// Scores below this value are floored, scores at or above it are ceiled.
pub const ROUNDING_THRESHOLD: f64 = 51.0;

/// Sums the integer values of three different result sets.
///
/// `result_2` is rounded with [`round_score`] and the numeric suffix of
/// `result_3` is extracted with [`parse_suffix`].
///
/// # Examples
///
/// ```
/// use resultflow::results::combine_results;
///
/// assert_eq!(combine_results(3, 4.6, "Number_3"), Ok(10));
/// assert_eq!(combine_results(4, 51.1, "Number_2"), Ok(58));
/// ```
pub fn combine_results(result_1: i64, result_2: f64, result_3: &str) -> Result<i64, CombineError> {
    let combined = round_score(result_2).and_then(|score| {
        let suffix = parse_suffix(result_3)?;
        result_1
            .checked_add(score)
            .and_then(|sum| sum.checked_add(suffix))
            .ok_or(CombineError::Overflow)
    });

    if let Err(ref err) = combined {
        warn!(
            result_1,
            result_2,
            result_3,
            error = %err,
            "Unable to process the values: {}, {} and {}",
            result_1,
            result_2,
            result_3
        );
    }

    combined
}

/// Rounds a score to an integer: floor below [`ROUNDING_THRESHOLD`], ceil otherwise.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn round_score(score: f64) -> Result<i64, CombineError> {
    if !score.is_finite() {
        return Err(CombineError::NonFiniteScore(score.to_string()));
    }

    let rounded = if score < ROUNDING_THRESHOLD {
        score.floor()
    } else {
        score.ceil()
    };

    // i64::MAX is not representable as f64; the nearest value is 2^63.
    if rounded < i64::MIN as f64 || rounded >= i64::MAX as f64 {
        return Err(CombineError::Overflow);
    }

    Ok(rounded as i64)
}

/// Extracts the integer after the first `_` of a token such as `"Number_123"`.
///
/// Only the second `_`-separated segment is considered, so `"a_1_2"` yields 1.
pub fn parse_suffix(value: &str) -> Result<i64, CombineError> {
    let suffix = value
        .split('_')
        .nth(1)
        .ok_or_else(|| CombineError::MissingSuffix {
            value: value.to_string(),
        })?;

    suffix
        .trim()
        .parse::<i64>()
        .map_err(|_| CombineError::InvalidSuffix {
            value: value.to_string(),
            suffix: suffix.to_string(),
        })
}

//! Collecting the raw results that feed [`combine_results`](super::combine_results).

use rand::seq::SliceRandom;
use tracing::debug;

use crate::core::Difficulty;
use crate::errors::{PipelineError, ValidationError};

/// Chooses `result_1` out of a range of candidate results.
///
/// This is the seam tests replace to make a pipeline run deterministic.
pub trait ResultPicker: Send + Sync {
    /// Picks one value from `range`, or `None` if the range is empty.
    fn pick(&self, range: &[i64]) -> Option<i64>;
}

/// Picks uniformly at random using the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPicker;

impl RandomPicker {
    /// Creates a new random picker.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ResultPicker for RandomPicker {
    fn pick(&self, range: &[i64]) -> Option<i64> {
        range.choose(&mut rand::thread_rng()).copied()
    }
}

/// Selects a result from the provided range using `picker`.
pub fn collect_result_1(picker: &dyn ResultPicker, range: &[i64]) -> Result<i64, PipelineError> {
    let picked = picker.pick(range).ok_or(PipelineError::EmptyRange)?;
    debug!(picked, range_len = range.len(), "Collected result_1");
    Ok(picked)
}

/// Returns the score for the given difficulty.
#[must_use]
pub fn collect_result_2(difficulty: Difficulty) -> f64 {
    difficulty.score()
}

/// Looks up the score for a difficulty given by name.
pub fn collect_result_2_by_name(test_type: &str) -> Result<f64, ValidationError> {
    test_type.parse::<Difficulty>().map(collect_result_2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("easy", 23.8)]
    #[case("medium", 49.9)]
    #[case("hard", 105.1)]
    fn test_collect_result_2(#[case] in_val: &str, #[case] exp_out_val: f64) {
        let out_val = collect_result_2_by_name(in_val);

        assert_eq!(out_val, Ok(exp_out_val));
    }

    #[test]
    fn test_collect_result_2_unknown_name() {
        assert_eq!(
            collect_result_2_by_name("impossible"),
            Err(ValidationError::unknown_test_type("impossible"))
        );
    }

    #[test]
    fn test_random_picker_stays_in_range() {
        let range = [1, 1, 5, 12, 13, 14, 55];
        let picker = RandomPicker::new();

        for _ in 0..100 {
            let picked = collect_result_1(&picker, &range).unwrap();
            assert!(range.contains(&picked));
        }
    }

    #[test]
    fn test_random_picker_single_value() {
        assert_eq!(collect_result_1(&RandomPicker, &[42]).unwrap(), 42);
    }

    #[test]
    fn test_collect_result_1_empty_range() {
        let err = collect_result_1(&RandomPicker, &[]).unwrap_err();
        assert!(matches!(err, PipelineError::EmptyRange));
    }
}

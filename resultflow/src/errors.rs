//! Error types for the resultflow pipeline.
//!
//! Each stage of the pipeline has its own error type. [`PipelineError`]
//! aggregates them so callers of
//! [`ResultsPipeline::process_results`](crate::pipeline::ResultsPipeline::process_results)
//! only have to match on one enum.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for pipeline runs.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// An input failed validation.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The three results could not be combined.
    #[error("{0}")]
    Combine(#[from] CombineError),

    /// The result log could not be read or written.
    #[error("{0}")]
    Log(#[from] LogError),

    /// The picker had nothing to choose from.
    #[error("Cannot collect a result from an empty result range")]
    EmptyRange,

    /// The configuration file could not be loaded.
    #[error("Invalid configuration in {path}: {message}")]
    Config {
        /// The config file path.
        path: PathBuf,
        /// What went wrong.
        message: String,
    },
}

/// Errors raised when user-supplied inputs are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The result range contained something other than integers.
    #[error("Provided results: {range} must contain only integers")]
    NonIntegerRange {
        /// The provided range, rendered as JSON.
        range: String,
    },

    /// An integer in the result range does not fit in an `i64`.
    #[error("Provided result {value} is outside the supported integer range")]
    IntegerOutOfRange {
        /// The offending value, rendered as JSON.
        value: String,
    },

    /// The test type is not one of the known difficulties.
    #[error("Provided test_type: {test_type} is not a valid test type")]
    UnknownTestType {
        /// The rejected name.
        test_type: String,
    },
}

impl ValidationError {
    /// Creates a non-integer range error from the offending values.
    #[must_use]
    pub fn non_integer_range(values: &[serde_json::Value]) -> Self {
        let range = serde_json::Value::Array(values.to_vec()).to_string();
        Self::NonIntegerRange { range }
    }

    /// Creates an unknown test type error.
    #[must_use]
    pub fn unknown_test_type(test_type: impl Into<String>) -> Self {
        Self::UnknownTestType {
            test_type: test_type.into(),
        }
    }
}

/// Errors raised by [`combine_results`](crate::results::combine_results).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CombineError {
    /// The third result has no `_`-separated suffix.
    #[error("Result '{value}' has no numeric suffix after '_'")]
    MissingSuffix {
        /// The raw third result.
        value: String,
    },

    /// The suffix of the third result is not an integer.
    #[error("Result '{value}' has a non-integer suffix '{suffix}'")]
    InvalidSuffix {
        /// The raw third result.
        value: String,
        /// The segment that failed to parse.
        suffix: String,
    },

    /// The second result is NaN or infinite.
    #[error("Score {0} is not a finite number")]
    NonFiniteScore(String),

    /// The sum does not fit in an `i64`.
    #[error("Combined result overflows a 64-bit integer")]
    Overflow,
}

/// Errors raised by the result log.
#[derive(Debug, Error)]
pub enum LogError {
    /// Reading or writing the log file failed.
    #[error("IO error on log {path}: {source}")]
    Io {
        /// The log path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The log file does not hold a JSON object of result lists.
    #[error("Malformed log {path}: {message}")]
    Parse {
        /// The log path.
        path: PathBuf,
        /// The parser message.
        message: String,
    },

    /// The log could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl LogError {
    /// Wraps an IO error with the path it happened on.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}

//! Configuration for a pipeline run.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::PipelineError;
use crate::result_log::DEFAULT_LOG_PATH;

/// Configuration for [`ResultsPipeline`](super::ResultsPipeline).
///
/// Every field has a default, so an empty JSON object is a valid config.
/// `result_range` and `test_type` are kept untyped here; they are checked by
/// the pipeline's validation step like any other user input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    /// Where the result log lives.
    #[serde(default = "default_log_path")]
    pub log_path: PathBuf,
    /// Candidate values for `result_1`.
    #[serde(default = "default_result_range")]
    pub result_range: Vec<serde_json::Value>,
    /// Difficulty name used to look up `result_2`.
    #[serde(default = "default_test_type")]
    pub test_type: String,
    /// The token used as `result_3`.
    #[serde(default = "default_result_3")]
    pub result_3: String,
}

fn default_log_path() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_PATH)
}

fn default_result_range() -> Vec<serde_json::Value> {
    [1, 1, 5, 12, 13, 14, 55].into_iter().map(serde_json::Value::from).collect()
}

fn default_test_type() -> String {
    "medium".to_string()
}

fn default_result_3() -> String {
    "number_3".to_string()
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            log_path: default_log_path(),
            result_range: default_result_range(),
            test_type: default_test_type(),
            result_3: default_result_3(),
        }
    }
}

impl PipelineConfig {
    /// Creates a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| PipelineError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&contents).map_err(|e| PipelineError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Sets the log path.
    #[must_use]
    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = path.into();
        self
    }

    /// Sets the result range.
    #[must_use]
    pub fn with_result_range(mut self, range: Vec<serde_json::Value>) -> Self {
        self.result_range = range;
        self
    }

    /// Sets the test type.
    #[must_use]
    pub fn with_test_type(mut self, test_type: impl Into<String>) -> Self {
        self.test_type = test_type.into();
        self
    }

    /// Sets the `result_3` token.
    #[must_use]
    pub fn with_result_3(mut self, token: impl Into<String>) -> Self {
        self.result_3 = token.into();
        self
    }
}

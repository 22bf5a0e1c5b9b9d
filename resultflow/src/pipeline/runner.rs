//! Running the results pipeline end to end.

use serde::Serialize;
use serde_json::Value;
use std::fmt::{self, Debug};
use tracing::{debug, info, info_span};
use uuid::Uuid;

use super::PipelineConfig;
use crate::core::{Difficulty, ResultValue};
use crate::errors::PipelineError;
use crate::result_log::{LogStore, ResultLog};
use crate::results::{
    collect_result_1, collect_result_2, combine_results, validate_result_range,
    validate_test_type, RandomPicker, ResultPicker,
};

/// The outcome of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    /// Identifier attached to the run's tracing span.
    pub run_id: Uuid,
    /// The picked result.
    pub result_1: i64,
    /// The difficulty `result_2` was looked up for.
    pub difficulty: Difficulty,
    /// The looked-up score.
    pub result_2: f64,
    /// The textual token.
    pub result_3: String,
    /// The combined output.
    pub output: i64,
    /// Whether the log gained a new entry.
    pub logged: bool,
}

/// The results pipeline: validate, collect, combine, log.
///
/// Where `result_1` comes from and where outputs are logged are both
/// injected, so tests can substitute either.
pub struct ResultsPipeline {
    picker: Box<dyn ResultPicker>,
    store: Box<dyn LogStore>,
    result_3: String,
}

impl Debug for ResultsPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultsPipeline")
            .field("result_3", &self.result_3)
            .finish_non_exhaustive()
    }
}

impl ResultsPipeline {
    /// Creates a pipeline from a picker and a log store.
    #[must_use]
    pub fn new(picker: Box<dyn ResultPicker>, store: Box<dyn LogStore>) -> Self {
        Self {
            picker,
            store,
            result_3: "number_3".to_string(),
        }
    }

    /// Creates a pipeline with a random picker and the configured file log.
    pub fn from_config(config: &PipelineConfig) -> Result<Self, PipelineError> {
        let log = ResultLog::open(&config.log_path)?;
        Ok(Self::new(Box::new(RandomPicker::new()), Box::new(log))
            .with_result_3(config.result_3.clone()))
    }

    /// Sets the token used as `result_3`.
    #[must_use]
    pub fn with_result_3(mut self, token: impl Into<String>) -> Self {
        self.result_3 = token.into();
        self
    }

    /// Runs the pipeline with the range and test type from `config`.
    pub fn run(&mut self, config: &PipelineConfig) -> Result<RunReport, PipelineError> {
        self.process_results(&config.result_range, &config.test_type)
    }

    /// Validates the inputs, combines the three results and logs the output.
    ///
    /// Both inputs are validated before anything is picked or logged.
    pub fn process_results(
        &mut self,
        input_result_range: &[Value],
        input_test_type: &str,
    ) -> Result<RunReport, PipelineError> {
        let run_id = Uuid::new_v4();
        let span = info_span!("process_results", %run_id, test_type = input_test_type);
        let _guard = span.enter();

        let range = validate_result_range(input_result_range)?;
        let difficulty = validate_test_type(input_test_type)?;
        debug!(range_len = range.len(), %difficulty, "Inputs validated");

        let result_1 = collect_result_1(self.picker.as_ref(), &range)?;
        let result_2 = collect_result_2(difficulty);
        let result_3 = self.result_3.clone();
        let output = combine_results(result_1, result_2, &result_3)?;

        let logged = self
            .store
            .write_log(output, &ResultValue::triple(result_1, result_2, result_3.as_str()))?;

        info!(result_1, result_2, %result_3, output, logged, "Processed results");

        Ok(RunReport {
            run_id,
            result_1,
            difficulty,
            result_2,
            result_3,
            output,
            logged,
        })
    }
}

/// Runs the pipeline once against the default configuration.
///
/// Uses a random picker and the log at [`DEFAULT_LOG_PATH`](crate::result_log::DEFAULT_LOG_PATH).
pub fn process_results(
    input_result_range: &[Value],
    input_test_type: &str,
) -> Result<RunReport, PipelineError> {
    ResultsPipeline::from_config(&PipelineConfig::default())?
        .process_results(input_result_range, input_test_type)
}

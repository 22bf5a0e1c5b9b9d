//! Ready-made pipelines for tests.

use crate::pipeline::ResultsPipeline;
use crate::results::ResultPicker;

use super::mocks::{FixedPicker, RecordingLogStore};

/// A pipeline wired to an in-memory log, with a handle to inspect it.
#[derive(Debug)]
pub struct PipelineFixture {
    /// The pipeline under test.
    pub pipeline: ResultsPipeline,
    /// A handle sharing the pipeline's log store.
    pub store: RecordingLogStore,
}

impl PipelineFixture {
    /// Creates a fixture with the given picker.
    #[must_use]
    pub fn new(picker: impl ResultPicker + 'static) -> Self {
        let store = RecordingLogStore::new();
        let pipeline = ResultsPipeline::new(Box::new(picker), Box::new(store.clone()));
        Self { pipeline, store }
    }

    /// Creates a fixture whose picker prefers `value`.
    #[must_use]
    pub fn with_pick(value: i64) -> Self {
        Self::new(FixedPicker::new(value))
    }

    /// Sets the `result_3` token.
    #[must_use]
    pub fn with_result_3(mut self, token: impl Into<String>) -> Self {
        self.pipeline = self.pipeline.with_result_3(token);
        self
    }
}

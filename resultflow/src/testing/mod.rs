//! Testing utilities for resultflow pipelines.
//!
//! This module provides:
//! - Fake pickers and log stores
//! - A pipeline fixture wired to an in-memory log
//! - Assertions for combined outputs and log contents
//! - Capturing tracing output

mod assertions;
mod capture;
mod fixtures;
mod mocks;

pub use assertions::{
    assert_combine_fails, assert_combines_to, assert_logged, assert_not_logged,
};
pub use capture::LogCapture;
pub use fixtures::PipelineFixture;
pub use mocks::{
    FailingLogStore, FixedPicker, RecordedWrite, RecordingLogStore, SequencePicker,
};

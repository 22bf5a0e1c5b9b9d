//! # Resultflow
//!
//! A small results pipeline and the test suite that exercises it.
//!
//! The pipeline:
//!
//! - **Validates** a candidate range for the first result and a test type
//! - **Collects** three raw results: a picked integer, a looked-up score,
//!   and a textual token
//! - **Combines** them into a single integer output
//! - **Logs** the output and its inputs to a JSON file, first write wins
//!
//! The picker and the log store are traits, so tests can swap in fakes from
//! [`testing`] or `mockall` mocks.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use resultflow::prelude::*;
//! use serde_json::json;
//!
//! let config = PipelineConfig::new().with_log_path("data/log.json");
//! let mut pipeline = ResultsPipeline::from_config(&config)?;
//!
//! let report = pipeline.process_results(&[json!(1), json!(5), json!(12)], "medium")?;
//! println!("{} (logged: {})", report.output, report.logged);
//! # Ok::<(), resultflow::errors::PipelineError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod core;
pub mod errors;
pub mod observability;
pub mod pipeline;
pub mod result_log;
pub mod results;
pub mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{Difficulty, ResultValue};
    pub use crate::errors::{CombineError, LogError, PipelineError, ValidationError};
    pub use crate::observability::{init_tracing, LogFormat};
    pub use crate::pipeline::{process_results, PipelineConfig, ResultsPipeline, RunReport};
    pub use crate::result_log::{LogStore, ResultLog, DEFAULT_LOG_PATH};
    pub use crate::results::{
        collect_result_1, collect_result_2, combine_results, validate_result_range,
        validate_test_type, RandomPicker, ResultPicker,
    };
}

//! Pipeline configuration and execution.
//!
//! This module provides:
//! - [`PipelineConfig`], loadable from JSON
//! - [`ResultsPipeline`], which wires a picker and a log store together
//! - [`RunReport`], the outcome of a run

mod config;
mod runner;

pub use config::PipelineConfig;
pub use runner::{process_results, ResultsPipeline, RunReport};

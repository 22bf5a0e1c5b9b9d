//! Values stored against each combined output in the result log.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three raw results that went into a combined output.
///
/// Serialized untagged, so the JSON form is a bare number or string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultValue {
    /// An integer result (the picked `result_1`).
    Int(i64),
    /// A fractional score (`result_2`).
    Float(f64),
    /// A textual token such as `"number_3"` (`result_3`).
    Text(String),
}

impl ResultValue {
    /// Builds the `[result_1, result_2, result_3]` triple written to the log.
    #[must_use]
    pub fn triple(result_1: i64, result_2: f64, result_3: impl Into<String>) -> Vec<Self> {
        vec![
            Self::Int(result_1),
            Self::Float(result_2),
            Self::Text(result_3.into()),
        ]
    }
}

impl From<i64> for ResultValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for ResultValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ResultValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ResultValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for ResultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v}"),
        }
    }
}

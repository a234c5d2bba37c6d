//! Error types for Tubeflow.
//!
//! All fallible operations in Tubeflow return `TubeflowError`. The flow
//! generator itself never surfaces one to its caller: every error raised
//! while talking to the model is folded into a fallback flow.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all Tubeflow operations.
#[derive(Deserialize, Serialize, Error, Debug, Clone, PartialEq)]
pub enum TubeflowError {
    /// Configuration parsing or validation errors.
    #[error("{0}")]
    Config(String),

    /// Data conversion errors (JSON, TOML).
    #[error("{0}")]
    Convert(String),

    /// A value did not match its JSON schema.
    #[error("{0}")]
    Schema(String),

    /// Flow-level integrity errors.
    #[error("{0}")]
    Flow(String),

    /// Node definition errors.
    #[error("{0}")]
    Node(String),

    /// Edge definition errors.
    #[error("{0}")]
    Edge(String),

    /// Hosted model client errors (transport, status, payload).
    #[error("{0}")]
    Client(String),
}

impl From<serde_json::Error> for TubeflowError {
    fn from(error: serde_json::Error) -> Self {
        TubeflowError::Convert(error.to_string())
    }
}

impl From<toml::de::Error> for TubeflowError {
    fn from(error: toml::de::Error) -> Self {
        TubeflowError::Config(error.to_string())
    }
}

impl From<jsonschema::ValidationError<'_>> for TubeflowError {
    fn from(error: jsonschema::ValidationError<'_>) -> Self {
        TubeflowError::Schema(error.to_string())
    }
}

impl From<reqwest::Error> for TubeflowError {
    fn from(error: reqwest::Error) -> Self {
        TubeflowError::Client(error.to_string())
    }
}

use serde::Serialize;
use thiserror::Error;

use crate::{TubeflowError, model::AgentFlow};

/// Why a generation degraded to the fallback flow.
#[derive(Serialize, Error, Debug, Clone, PartialEq, strum::AsRefStr)]
#[serde(tag = "code", content = "detail", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FallbackReason {
    /// No credential configured for the hosted model.
    #[error("no model credential configured")]
    MissingCredential,
    /// The request itself failed (network, timeout, non-success status).
    #[error("model request failed: {0}")]
    Transport(String),
    /// The response text was not JSON.
    #[error("model returned malformed JSON: {0}")]
    MalformedJson(String),
    /// The response was JSON of the wrong shape.
    #[error("model response violates the flow schema: {0}")]
    SchemaViolation(String),
}

impl FallbackReason {
    /// Stable reason code, e.g. `schema_violation`.
    pub fn code(&self) -> &str {
        self.as_ref()
    }

    /// Classify an error raised while parsing a model response.
    pub(crate) fn from_parse_error(error: TubeflowError) -> Self {
        match error {
            TubeflowError::Schema(msg) => FallbackReason::SchemaViolation(msg),
            other => FallbackReason::MalformedJson(other.to_string()),
        }
    }
}

/// Result of a generation: always carries a usable flow.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Generation {
    /// The model's flow, validated and normalized.
    Generated { flow: AgentFlow },
    /// The deterministic fallback flow and why it was used.
    Fallback { flow: AgentFlow, reason: FallbackReason },
}

impl Generation {
    pub fn flow(&self) -> &AgentFlow {
        match self {
            Generation::Generated { flow } | Generation::Fallback { flow, .. } => flow,
        }
    }

    pub fn into_flow(self) -> AgentFlow {
        match self {
            Generation::Generated { flow } | Generation::Fallback { flow, .. } => flow,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Generation::Fallback { .. })
    }

    pub fn reason(&self) -> Option<&FallbackReason> {
        match self {
            Generation::Generated { .. } => None,
            Generation::Fallback { reason, .. } => Some(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_reason_codes() {
        assert_eq!(FallbackReason::MissingCredential.code(), "missing_credential");
        assert_eq!(FallbackReason::Transport("timeout".to_string()).code(), "transport");
        assert_eq!(FallbackReason::MalformedJson(String::new()).code(), "malformed_json");
        assert_eq!(FallbackReason::SchemaViolation(String::new()).code(), "schema_violation");
    }

    #[test]
    fn test_parse_error_classification() {
        assert_eq!(FallbackReason::from_parse_error(TubeflowError::Schema("x".to_string())), FallbackReason::SchemaViolation("x".to_string()));
        assert_eq!(FallbackReason::from_parse_error(TubeflowError::Convert("y".to_string())).code(), "malformed_json");
    }

    #[test]
    fn test_generation_serialize() {
        let generation = Generation::Fallback {
            flow: AgentFlow::default(),
            reason: FallbackReason::Transport("503".to_string()),
        };
        let value = serde_json::to_value(&generation).unwrap();
        assert_eq!(value["status"], json!("fallback"));
        assert_eq!(value["reason"], json!({"code": "transport", "detail": "503"}));
        assert!(generation.is_fallback());
        assert_eq!(generation.reason().map(|r| r.code()), Some("transport"));
    }
}

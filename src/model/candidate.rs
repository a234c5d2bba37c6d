//! Loosely typed flow shape accepted from untrusted producers.
//!
//! A candidate mirrors [`AgentFlow`](crate::AgentFlow) except that node types
//! are free strings and `config` may be absent. It is the only shape the
//! model's structured output is deserialized into; the normalizer turns it
//! into a canonical flow.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Result, model::FlowEdge};

pub type CandidateEdge = FlowEdge;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateFlow {
    pub name: String,
    pub goal: String,
    pub nodes: Vec<CandidateNode>,
    pub edges: Vec<CandidateEdge>,
}

impl CandidateFlow {
    /// Validates `value` against [`CandidateFlow::schema`] and deserializes it.
    ///
    /// Any shape mismatch is an error; nothing is partially accepted.
    pub fn create(value: Value) -> Result<Self> {
        jsonschema::validate(&Self::schema(), &value)?;
        let flow = serde_json::from_value::<Self>(value)?;
        Ok(flow)
    }

    /// JSON schema of the structured response contract.
    pub fn schema() -> Value {
        serde_json::json!({
            "type": "object",
            "required": ["name", "goal", "nodes", "edges"],
            "properties": {
                "name": { "type": "string" },
                "goal": { "type": "string" },
                "nodes": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "required": ["id", "type", "name"],
                        "properties": {
                            "id": { "type": "string" },
                            "type": {
                                "type": "string",
                                "description": "Node type, coerced to http.request when not recognised"
                            },
                            "name": { "type": "string" },
                            "description": { "type": "string" },
                            "config": {
                                "type": "object",
                                "description": "Free-form node configuration"
                            }
                        }
                    }
                },
                "edges": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "required": ["id", "source", "target"],
                        "properties": {
                            "id": { "type": "string" },
                            "source": { "type": "string" },
                            "target": { "type": "string" }
                        }
                    }
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::TubeflowError;

    fn valid() -> Value {
        json!({
            "name": "Clip Bot",
            "goal": "Repurpose clips",
            "nodes": [
                { "id": "a", "type": "schedule.cron", "name": "Trigger" },
                { "id": "b", "type": "webhook", "name": "Hook", "description": "custom", "config": { "url": "x", "extra": [1, 2] } }
            ],
            "edges": [ { "id": "e1", "source": "a", "target": "b" } ]
        })
    }

    #[test]
    fn test_create_valid() {
        let flow = CandidateFlow::create(valid()).unwrap();
        assert_eq!(flow.nodes.len(), 2);
        assert_eq!(flow.nodes[0].config, None);
        assert_eq!(flow.nodes[1].node_type, "webhook");
        assert_eq!(flow.nodes[1].config.as_ref().unwrap()["extra"], json!([1, 2]));
        assert_eq!(flow.edges[0], FlowEdge::new("e1", "a", "b"));
    }

    #[test]
    fn test_missing_edges_rejected() {
        let mut value = valid();
        value.as_object_mut().unwrap().remove("edges");
        let err = CandidateFlow::create(value).unwrap_err();
        assert!(matches!(err, TubeflowError::Schema(_)));
    }

    #[test]
    fn test_node_missing_name_rejected() {
        let mut value = valid();
        value["nodes"][0].as_object_mut().unwrap().remove("name");
        assert!(matches!(CandidateFlow::create(value), Err(TubeflowError::Schema(_))));
    }

    #[test]
    fn test_non_object_config_rejected() {
        let mut value = valid();
        value["nodes"][0]["config"] = json!("cron=daily");
        assert!(matches!(CandidateFlow::create(value), Err(TubeflowError::Schema(_))));
    }

    #[test]
    fn test_null_description_rejected() {
        let mut value = valid();
        value["nodes"][0]["description"] = Value::Null;
        assert!(CandidateFlow::create(value).is_err());
    }

    #[test]
    fn test_non_object_rejected() {
        assert!(CandidateFlow::create(json!([])).is_err());
        assert!(CandidateFlow::create(json!({})).is_err());
    }
}

use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
    Result, TubeflowError,
    model::{FlowEdge, FlowNode},
};

/// Suffix appended to exported file names.
const EXPORT_FILE_SUFFIX: &str = "-n8n-flow.json";

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// The full automation blueprint: name, goal, nodes and edges.
///
/// Node order carries display order. Producers always hand out fresh values,
/// nothing mutates a flow after construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentFlow {
    pub name: String,
    pub goal: String,
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

impl AgentFlow {
    pub fn from_json(s: &str) -> Result<Self> {
        let flow = serde_json::from_str::<AgentFlow>(s);
        match flow {
            Ok(v) => Ok(v),
            Err(e) => Err(TubeflowError::Flow(format!("{}", e))),
        }
    }

    /// Serialize for import, indented by two spaces.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// File name used when downloading the export, e.g. `growth-agent-n8n-flow.json`.
    pub fn export_file_name(&self) -> String {
        let slug = WHITESPACE_RUN.replace_all(&self.name.to_lowercase(), "-").into_owned();
        format!("{}{}", slug, EXPORT_FILE_SUFFIX)
    }

    /// get node by id
    pub fn node(
        &self,
        id: &str,
    ) -> Option<&FlowNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Plain-text overview: the goal followed by one `label → name` line per node.
    pub fn summary(&self) -> String {
        let stages = self.nodes.iter().map(|node| format!("{} → {}", node.node_type.label(), node.name)).collect::<Vec<_>>().join("\n");

        format!("Goal: {}\nNodes:\n{}", self.goal, stages)
    }

    /// Check id uniqueness and that every edge endpoint names an existing node.
    ///
    /// Ingestion does not call this; dangling edges are tolerated there and
    /// treated as "no next node" by [`crate::FlowGraph`].
    pub fn validate(&self) -> Result<()> {
        let mut node_ids = HashSet::new();
        for node in &self.nodes {
            if !node_ids.insert(node.id.as_str()) {
                return Err(TubeflowError::Node(format!("duplicate node id '{}'", node.id)));
            }
        }

        let mut edge_ids = HashSet::new();
        for edge in &self.edges {
            if !edge_ids.insert(edge.id.as_str()) {
                return Err(TubeflowError::Edge(format!("duplicate edge id '{}'", edge.id)));
            }
            if !node_ids.contains(edge.source.as_str()) {
                return Err(TubeflowError::Edge(format!("edge '{}': source node {} not found", edge.id, edge.source)));
            }
            if !node_ids.contains(edge.target.as_str()) {
                return Err(TubeflowError::Edge(format!("edge '{}': target node {} not found", edge.id, edge.target)));
            }
        }

        Ok(())
    }
}

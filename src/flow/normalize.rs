//! Coercion of candidate flows into the canonical model.

use std::{collections::HashSet, str::FromStr};

use tracing::{debug, warn};

use crate::{
    flow::defaults::default_config,
    model::{AgentFlow, CandidateFlow, CandidateNode, FlowNode, NodeType},
};

/// Type substituted for any node whose type is not recognised.
pub const FALLBACK_NODE_TYPE: NodeType = NodeType::HttpRequest;

/// Turn a candidate flow into an [`AgentFlow`]. Never fails.
///
/// Unknown node types become [`FALLBACK_NODE_TYPE`]; missing configs are
/// filled from the defaults of the (possibly substituted) type. Present
/// configs are kept verbatim, unknown keys included. Ids, names,
/// descriptions and edges pass through untouched; dangling edges are only
/// reported.
pub fn normalize(candidate: CandidateFlow) -> AgentFlow {
    let nodes: Vec<FlowNode> = candidate.nodes.into_iter().map(normalize_node).collect();

    let node_ids: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    for edge in candidate.edges.iter() {
        if !node_ids.contains(edge.source.as_str()) || !node_ids.contains(edge.target.as_str()) {
            warn!(edge = %edge.id, from = %edge.source, to = %edge.target, "edge references an unknown node");
        }
    }

    AgentFlow {
        name: candidate.name,
        goal: candidate.goal,
        nodes,
        edges: candidate.edges,
    }
}

fn normalize_node(node: CandidateNode) -> FlowNode {
    let node_type = NodeType::from_str(&node.node_type).unwrap_or_else(|_| {
        debug!(node = %node.id, from = %node.node_type, to = %FALLBACK_NODE_TYPE, "coercing unknown node type");
        FALLBACK_NODE_TYPE
    });
    let config = node.config.unwrap_or_else(|| default_config(node_type));

    FlowNode {
        id: node.id,
        node_type,
        name: node.name,
        description: node.description,
        config,
    }
}

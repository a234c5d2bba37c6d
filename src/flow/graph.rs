//! Read-only directed graph view over a flow.
//!
//! The view is lenient in the same way the canvas is: an edge whose source
//! or target does not exist is left out of the graph, so looking up the
//! next step across it simply finds nothing. Such edges are still reported
//! through [`FlowGraph::dangling_edges`].

use std::collections::HashMap;

use petgraph::{
    Direction,
    algo::toposort,
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};

use crate::model::{AgentFlow, EdgeId, FlowEdge, FlowNode};

pub struct FlowGraph<'a> {
    graph: DiGraph<&'a FlowNode, &'a FlowEdge>,
    index: HashMap<&'a str, NodeIndex>,
    dangling: Vec<&'a EdgeId>,
}

impl<'a> FlowGraph<'a> {
    pub fn new(flow: &'a AgentFlow) -> Self {
        let mut graph = DiGraph::new();
        let mut index = HashMap::new();
        let mut dangling = Vec::new();

        for node in flow.nodes.iter() {
            // first occurrence wins for duplicated ids
            index.entry(node.id.as_str()).or_insert_with(|| graph.add_node(node));
        }
        for edge in flow.edges.iter() {
            match (index.get(edge.source.as_str()), index.get(edge.target.as_str())) {
                (Some(source), Some(target)) => {
                    graph.add_edge(*source, *target, edge);
                }
                _ => dangling.push(&edge.id),
            }
        }

        Self {
            graph,
            index,
            dangling,
        }
    }

    fn id_of(
        &self,
        idx: NodeIndex,
    ) -> &'a str {
        let node: &'a FlowNode = self.graph[idx];
        node.id.as_str()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Ids of edges left out because an endpoint does not exist.
    pub fn dangling_edges(&self) -> &[&'a EdgeId] {
        &self.dangling
    }

    /// Targets of the outgoing edges of `id`, in edge order. Unknown ids have none.
    pub fn next_nodes(
        &self,
        id: &str,
    ) -> Vec<&'a str> {
        let Some(idx) = self.index.get(id) else {
            return Vec::new();
        };
        let mut edges: Vec<_> = self.graph.edges_directed(*idx, Direction::Outgoing).collect();
        edges.sort_by_key(|e| e.id());
        edges.into_iter().map(|e| self.id_of(e.target())).collect()
    }

    /// Nodes without incoming edges, in node order.
    pub fn root_nodes(&self) -> Vec<&'a str> {
        self.graph.node_indices().filter(|idx| self.graph.neighbors_directed(*idx, Direction::Incoming).next().is_none()).map(|idx| self.id_of(idx)).collect()
    }

    /// Topological order of node ids, `None` when the flow contains a cycle.
    pub fn ordered_ids(&self) -> Option<Vec<&'a str>> {
        toposort(&self.graph, None).ok().map(|order| order.into_iter().map(|idx| self.id_of(idx)).collect())
    }

    /// True when the nodes form one unbranched path and no edge dangles.
    pub fn is_linear_chain(&self) -> bool {
        let n = self.graph.node_count();
        if n == 0 || !self.dangling.is_empty() || self.graph.edge_count() != n - 1 {
            return false;
        }
        let unbranched = self.graph.node_indices().all(|idx| {
            self.graph.edges_directed(idx, Direction::Incoming).count() <= 1 && self.graph.edges_directed(idx, Direction::Outgoing).count() <= 1
        });

        unbranched && self.root_nodes().len() == 1 && self.ordered_ids().is_some()
    }

    /// Output a human-readable representation of the flow graph
    pub fn schema(&self) -> String {
        let mut lines = Vec::new();

        lines.push("=== Flow Graph ===".to_string());
        lines.push(format!("Nodes: {}, Edges: {}", self.graph.node_count(), self.graph.edge_count()));
        lines.push(String::new());

        lines.push("--- Nodes ---".to_string());
        for idx in self.graph.node_indices() {
            let node = self.graph[idx];
            lines.push(format!("[{}] {} (type: {})", node.id, node.name, node.node_type.as_ref()));
        }
        lines.push(String::new());

        lines.push("--- Edges ---".to_string());
        for idx in self.graph.edge_indices() {
            let edge = self.graph[idx];
            lines.push(format!("{} --> {} (id: {})", edge.source, edge.target, edge.id));
        }
        for id in self.dangling.iter() {
            lines.push(format!("(dangling: {})", id));
        }
        lines.push(String::new());

        lines.push("--- Graph Structure ---".to_string());
        for idx in self.graph.node_indices() {
            let id = self.graph[idx].id.as_str();
            let next = self.next_nodes(id);
            if next.is_empty() {
                lines.push(format!("{} -> (end)", id));
            } else {
                lines.push(format!("{} -> {}", id, next.join(", ")));
            }
        }

        lines.join("\n")
    }
}

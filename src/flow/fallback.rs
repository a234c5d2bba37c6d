//! Deterministic, network-free flow construction.

use serde_json::Value;

use crate::{
    flow::defaults::default_config,
    generator::GenerateParams,
    model::{AgentFlow, FlowEdge, FlowNode, NodeType},
};

/// Build the fixed fallback pipeline for `params`:
/// schedule → search → transcript fetch → [summarize] → analytics.
pub fn build_fallback_flow(params: &GenerateParams) -> AgentFlow {
    let mut search_config = default_config(NodeType::YoutubeSearch);
    search_config.insert("query".to_string(), Value::String(params.goal.clone()));

    let mut nodes = vec![
        FlowNode::new("schedule", NodeType::ScheduleCron, "Daily Kickoff", default_config(NodeType::ScheduleCron)).with_description("Trigger workflow every morning"),
        FlowNode::new("youtube-search", NodeType::YoutubeSearch, "Trend Pulse", search_config).with_description("Discover fresh topics aligned with the goal"),
        FlowNode::new("http-request", NodeType::HttpRequest, "Fetch Transcript", default_config(NodeType::HttpRequest))
            .with_description("Grab the latest video transcript from the channel"),
    ];

    if params.include_llm {
        nodes.push(
            FlowNode::new("llm-summarize", NodeType::LlmSummarize, "AI Summaries", default_config(NodeType::LlmSummarize))
                .with_description("Summarize transcript for captions and shorts"),
        );
    }

    nodes.push(FlowNode::new("analytics", NodeType::YoutubeAnalytics, "Performance Review", default_config(NodeType::YoutubeAnalytics)).with_description("Monitor weekly metrics"));

    let edges = chain_edges(&nodes);

    AgentFlow {
        name: title_case(&format!("{} agent", params.automation_style.as_ref())),
        goal: params.goal.clone(),
        nodes,
        edges,
    }
}

/// Connect consecutive nodes as `edge-0`, `edge-1`, ...
fn chain_edges(nodes: &[FlowNode]) -> Vec<FlowEdge> {
    nodes.windows(2).enumerate().map(|(index, pair)| FlowEdge::new(format!("edge-{}", index), pair[0].id.clone(), pair[1].id.clone())).collect()
}

/// Upper-case the first letter of every whitespace separated word.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut word_start = true;
    for c in s.chars() {
        if word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        word_start = c.is_whitespace();
    }
    out
}

//! Hand-authored starter flows.
//!
//! Templates double as the last-resort flow a caller shows when something
//! unexpected happens around generation, see [`starter_template`].

use std::sync::LazyLock;

use serde_json::{Value, json};

use crate::model::{AgentFlow, FlowEdge, FlowNode, NodeConfig, NodeType};

static TEMPLATES: LazyLock<Vec<AgentFlow>> = LazyLock::new(|| vec![content_repurposer(), audience_whisperer(), launch_radar()]);

/// All built-in templates, in display order.
pub fn template_flows() -> &'static [AgentFlow] {
    &TEMPLATES
}

/// The first template.
pub fn starter_template() -> &'static AgentFlow {
    &TEMPLATES[0]
}

fn node(
    id: &str,
    node_type: NodeType,
    name: &str,
    config: Value,
) -> FlowNode {
    let config = match config {
        Value::Object(map) => map,
        _ => NodeConfig::new(),
    };
    FlowNode::new(id, node_type, name, config)
}

fn chain(pairs: &[(&str, &str)]) -> Vec<FlowEdge> {
    pairs.iter().enumerate().map(|(i, (source, target))| FlowEdge::new(format!("e{}", i + 1), *source, *target)).collect()
}

fn content_repurposer() -> AgentFlow {
    AgentFlow {
        name: "Evergreen Content Repurposer".to_string(),
        goal: "Scale YouTube clips into shorts and newsletter content".to_string(),
        nodes: vec![
            node("cron", NodeType::ScheduleCron, "Weekly Trigger", json!({ "cron": "0 13 * * 1", "timezone": "UTC" })),
            node("analytics", NodeType::YoutubeAnalytics, "Surface Top Clips", json!({ "metrics": ["views", "watchTime"], "days": 7 })),
            node("http", NodeType::HttpRequest, "Grab Transcript", json!({ "method": "GET", "url": "https://yt.agent/api/transcript" })),
            node("llm", NodeType::LlmSummarize, "Spin Shorts Scripts", json!({ "prompt": "Write 60s short scripts", "temperature": 0.5 })),
            node("upload", NodeType::YoutubeUpload, "Schedule Shorts", json!({ "privacyStatus": "private" })),
        ],
        edges: chain(&[("cron", "analytics"), ("analytics", "http"), ("http", "llm"), ("llm", "upload")]),
    }
}

fn audience_whisperer() -> AgentFlow {
    AgentFlow {
        name: "Audience Whisperer".to_string(),
        goal: "Reply to community comments with AI-driven context".to_string(),
        nodes: vec![
            node("cron", NodeType::ScheduleCron, "Hourly Scan", json!({ "cron": "0 * * * *", "timezone": "UTC" })),
            node("comments", NodeType::YoutubeComment, "Fetch Mentions", json!({ "strategy": "questions" })),
            node("llm", NodeType::LlmSummarize, "Response Drafts", json!({ "prompt": "Draft friendly replies", "temperature": 0.4 })),
            node("http", NodeType::HttpRequest, "n8n Webhook", json!({ "method": "POST", "url": "https://n8n.cloud/webhook/reply" })),
        ],
        edges: chain(&[("cron", "comments"), ("comments", "llm"), ("llm", "http")]),
    }
}

fn launch_radar() -> AgentFlow {
    AgentFlow {
        name: "Launch Radar Alerts".to_string(),
        goal: "Notify growth team when competitor launches videos".to_string(),
        nodes: vec![
            node("cron", NodeType::ScheduleCron, "15 Minute Poll", json!({ "cron": "*/15 * * * *", "timezone": "UTC" })),
            node("search", NodeType::YoutubeSearch, "Competitor Sweep", json!({ "query": "competitor channel", "maxResults": 5 })),
            node("llm", NodeType::LlmSummarize, "Why It Matters", json!({ "prompt": "Explain impact for growth team", "temperature": 0.2 })),
            node("http", NodeType::HttpRequest, "Slack Broadcast", json!({ "method": "POST", "url": "https://hooks.slack.com/services/..." })),
        ],
        edges: chain(&[("cron", "search"), ("search", "llm"), ("llm", "http")]),
    }
}

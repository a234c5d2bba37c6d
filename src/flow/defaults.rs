use std::str::FromStr;

use serde_json::{Value, json};

use crate::model::{NodeConfig, NodeType};

/// Default configuration payload for a node type.
pub fn default_config(node_type: NodeType) -> NodeConfig {
    let value = match node_type {
        NodeType::YoutubeSearch => json!({
            "query": "trending AI tools",
            "channelId": "",
            "maxResults": 10
        }),
        NodeType::YoutubeUpload => json!({
            "titleTemplate": "{{title}}",
            "descriptionTemplate": "{{description}}",
            "privacyStatus": "public"
        }),
        NodeType::YoutubeComment => json!({
            "strategy": "engagement",
            "pattern": "Reply with insights and CTAs"
        }),
        NodeType::YoutubeAnalytics => json!({
            "metrics": ["views", "watchTime", "subscribers"],
            "days": 30
        }),
        NodeType::LlmSummarize => json!({
            "prompt": "Summarize the transcript focusing on key takeaways",
            "temperature": 0.3
        }),
        NodeType::LlmTranslate => json!({
            "targetLanguage": "es",
            "style": "informal"
        }),
        NodeType::ScheduleCron => json!({
            "cron": "0 9 * * *",
            "timezone": "UTC"
        }),
        NodeType::HttpRequest => json!({
            "method": "POST",
            "url": "https://hooks.zapier.com/hooks/catch/...",
            "headers": {
                "Content-Type": "application/json"
            },
            "body": {
                "payload": "{{data}}"
            }
        }),
    };

    match value {
        Value::Object(map) => map,
        _ => NodeConfig::new(),
    }
}

/// Like [`default_config`] but keyed by wire name; unknown names yield an empty object.
pub fn default_config_for(node_type: &str) -> NodeConfig {
    NodeType::from_str(node_type).map(default_config).unwrap_or_default()
}

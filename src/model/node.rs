use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// node id
pub type NodeId = String;

/// Node configuration payload. Its shape is a convention keyed by the node type.
pub type NodeConfig = Map<String, Value>;

/// The closed set of node kinds understood by the automation platform.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, strum::AsRefStr, strum::EnumString, strum::EnumIter, strum::Display)]
pub enum NodeType {
    #[serde(rename = "youtube.search")]
    #[strum(serialize = "youtube.search")]
    YoutubeSearch,
    #[serde(rename = "youtube.upload")]
    #[strum(serialize = "youtube.upload")]
    YoutubeUpload,
    #[serde(rename = "youtube.comment")]
    #[strum(serialize = "youtube.comment")]
    YoutubeComment,
    #[serde(rename = "youtube.analytics")]
    #[strum(serialize = "youtube.analytics")]
    YoutubeAnalytics,
    #[serde(rename = "llm.summarize")]
    #[strum(serialize = "llm.summarize")]
    LlmSummarize,
    #[serde(rename = "llm.translate")]
    #[strum(serialize = "llm.translate")]
    LlmTranslate,
    #[serde(rename = "schedule.cron")]
    #[strum(serialize = "schedule.cron")]
    ScheduleCron,
    #[serde(rename = "http.request")]
    #[strum(serialize = "http.request")]
    HttpRequest,
}

impl NodeType {
    /// Human-readable label shown next to a node's own name.
    pub fn label(&self) -> &'static str {
        match self {
            NodeType::YoutubeSearch => "YouTube Search",
            NodeType::YoutubeUpload => "YouTube Upload",
            NodeType::YoutubeComment => "Comment Automation",
            NodeType::YoutubeAnalytics => "Performance Analytics",
            NodeType::LlmSummarize => "AI Summarizer",
            NodeType::LlmTranslate => "AI Translator",
            NodeType::ScheduleCron => "Scheduler",
            NodeType::HttpRequest => "HTTP Request",
        }
    }
}

/// One step of an automation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNode {
    pub id: NodeId,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub config: NodeConfig,
}

impl FlowNode {
    pub fn new(
        id: impl Into<NodeId>,
        node_type: NodeType,
        name: impl Into<String>,
        config: NodeConfig,
    ) -> Self {
        Self {
            id: id.into(),
            node_type,
            name: name.into(),
            description: None,
            config,
        }
    }

    pub fn with_description(
        mut self,
        description: impl Into<String>,
    ) -> Self {
        self.description = Some(description.into());
        self
    }
}

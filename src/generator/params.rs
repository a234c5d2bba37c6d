use serde::{Deserialize, Serialize};

/// Framing of the generated automation. Not enforced structurally.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, strum::AsRefStr, strum::EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AutomationStyle {
    #[default]
    Growth,
    Repurposing,
    Alerts,
}

/// Inputs of a generation request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GenerateParams {
    /// natural-language automation goal
    pub goal: String,
    /// voice the generated copy should use
    pub tone: String,
    /// target channel, rendered as `unknown` in the prompt when absent
    #[serde(default)]
    pub channel_id: Option<String>,
    pub automation_style: AutomationStyle,
    /// whether AI summarization steps may be included
    pub include_llm: bool,
}

impl GenerateParams {
    pub fn new(
        goal: impl Into<String>,
        automation_style: AutomationStyle,
    ) -> Self {
        Self {
            goal: goal.into(),
            tone: String::new(),
            channel_id: None,
            automation_style,
            include_llm: true,
        }
    }

    pub fn tone(
        mut self,
        tone: impl Into<String>,
    ) -> Self {
        self.tone = tone.into();
        self
    }

    pub fn channel_id(
        mut self,
        channel_id: impl Into<String>,
    ) -> Self {
        self.channel_id = Some(channel_id.into());
        self
    }

    pub fn include_llm(
        mut self,
        include_llm: bool,
    ) -> Self {
        self.include_llm = include_llm;
        self
    }
}

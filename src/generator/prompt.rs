//! Prompt construction and response-contract checks.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::{Result, TubeflowError, generator::GenerateParams, model::CandidateFlow};

/// Upper bound on nodes the model is asked to produce.
pub const MAX_NODES: usize = 8;

pub const SYSTEM_PROMPT: &str = "You are an expert n8n automation architect. Respond strictly with valid JSON without code fences.";

const RESPONSE_CONTRACT: &str = r#"{
  "name": string;
  "goal": string;
  "nodes": {
    "id": string;
    "type": string;
    "name": string;
    "description"?: string;
    "config"?: Record<string, unknown>;
  }[];
  "edges": {
    "id": string;
    "source": string;
    "target": string;
  }[];
}"#;

/// Opening fence, optionally tagged `json`.
static OPENING_FENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^```(?:json)?\s*").unwrap());

/// User instruction embedding every generation parameter.
pub fn build_prompt(params: &GenerateParams) -> String {
    format!(
        "You are an n8n automation architect specialized in YouTube workflows.
Design a JSON payload with nodes and edges that could be imported into n8n to achieve the goal.
Constraints:
- Prefer YouTube API nodes, HTTP requests, Cron scheduling, and optional LLM nodes.
- Include at most {max_nodes} unique nodes.
- Respond strictly as JSON matching this schema:
{contract}

Goal: {goal}
Tone: {tone}
Channel: {channel}
Automation focus: {style}
Include LLM enhancement steps: {include_llm}",
        max_nodes = MAX_NODES,
        contract = RESPONSE_CONTRACT,
        goal = params.goal,
        tone = params.tone,
        channel = params.channel_id.as_deref().unwrap_or("unknown"),
        style = params.automation_style.as_ref(),
        include_llm = if params.include_llm { "yes" } else { "no" },
    )
}

/// Remove code-fence wrapping a model may add despite instructions.
pub fn strip_code_fences(raw: &str) -> &str {
    let text = raw.trim();
    let text = match OPENING_FENCE.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    };
    text.strip_suffix("```").unwrap_or(text).trim()
}

/// Parse a raw model response into a schema-checked candidate flow.
///
/// Returns [`TubeflowError::Convert`] for text that is not JSON and
/// [`TubeflowError::Schema`] for JSON of the wrong shape.
pub fn parse_response(raw: &str) -> Result<CandidateFlow> {
    let text = strip_code_fences(raw);
    let value: Value = serde_json::from_str(text).map_err(|e| TubeflowError::Convert(format!("response is not valid JSON: {}", e)))?;
    CandidateFlow::create(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::AutomationStyle;

    const VALID: &str = r#"{"name":"Clip Bot","goal":"Clips","nodes":[{"id":"a","type":"schedule.cron","name":"Tick"}],"edges":[]}"#;

    #[test]
    fn test_prompt_embeds_params() {
        let params = GenerateParams::new("Grow subscribers", AutomationStyle::Repurposing).tone("playful").channel_id("UC123").include_llm(false);
        let prompt = build_prompt(&params);
        assert!(prompt.contains("Goal: Grow subscribers\n"));
        assert!(prompt.contains("Tone: playful\n"));
        assert!(prompt.contains("Channel: UC123\n"));
        assert!(prompt.contains("Automation focus: repurposing\n"));
        assert!(prompt.ends_with("Include LLM enhancement steps: no"));
        assert!(prompt.contains("at most 8 unique nodes"));
        assert!(prompt.contains("\"description\"?: string;"));
    }

    #[test]
    fn test_prompt_unknown_channel() {
        let prompt = build_prompt(&GenerateParams::new("x", AutomationStyle::Growth));
        assert!(prompt.contains("Channel: unknown\n"));
        assert!(prompt.ends_with("Include LLM enhancement steps: yes"));
    }

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("{\"a\":1}"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("  ```JSON\n{\"a\":1}```  "), "{\"a\":1}");
        assert_eq!(strip_code_fences("```\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```json {\"a\":1}"), "{\"a\":1}");
        assert_eq!(strip_code_fences("{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn test_parse_response() {
        assert!(parse_response(VALID).is_ok());
        assert!(parse_response(&format!("```json\n{}\n```", VALID)).is_ok());
    }

    #[test]
    fn test_parse_response_errors() {
        assert!(matches!(parse_response("Sure! Here is your flow"), Err(TubeflowError::Convert(_))));
        assert!(matches!(parse_response(r#"{"name":"x","goal":"y","nodes":[]}"#), Err(TubeflowError::Schema(_))));
        assert!(matches!(parse_response("{}"), Err(TubeflowError::Schema(_))));
    }
}

//! Hosted language-model client seam.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, InvalidHeaderValue};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{LlmConfig, Result, TubeflowError};

/// Text returned when the first choice carries no content at all.
const EMPTY_COMPLETION: &str = "{}";

/// A single chat completion request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    /// system instruction
    pub system: String,
    /// user instruction
    pub user: String,
    /// sampling temperature
    pub temperature: f64,
    /// output token cap
    pub max_tokens: u32,
}

/// Anything that can answer a chat completion with free-form text.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends `request` and returns the text of the first choice.
    async fn complete(
        &self,
        request: &ChatRequest,
    ) -> Result<String>;

    /// Returns the model identifier used for requests.
    fn model_name(&self) -> &str;
}

/// OpenAI-compatible chat completion client.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    model: String,
    base_url: String,
}

impl OpenAiClient {
    /// Build a client from `config`, `None` when no credential is configured.
    pub fn from_config(config: &LlmConfig) -> Result<Option<Self>> {
        let Some(api_key) = config.credential() else {
            return Ok(None);
        };

        let mut headers = HeaderMap::new();
        let mut auth: HeaderValue = format!("Bearer {}", api_key).parse().map_err(|err: InvalidHeaderValue| TubeflowError::Config(err.to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder().default_headers(headers).timeout(Duration::from_millis(config.timeout_ms)).build()?;

        Ok(Some(Self {
            client,
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }))
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn body(
        &self,
        request: &ChatRequest,
    ) -> serde_json::Value {
        serde_json::json!({
            "model": &self.model,
            "temperature": request.temperature,
            "max_tokens": request.max_tokens,
            "messages": [
                {"role": "system", "content": &request.system},
                {"role": "user", "content": &request.user}
            ]
        })
    }
}

#[derive(Deserialize)]
struct Message {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

impl CompletionResponse {
    fn into_text(self) -> String {
        self.choices.into_iter().next().and_then(|c| c.message.content).unwrap_or_else(|| EMPTY_COMPLETION.to_string())
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn complete(
        &self,
        request: &ChatRequest,
    ) -> Result<String> {
        let res = self.client.post(self.endpoint()).json(&self.body(request)).send().await.map_err(|err| TubeflowError::Client(format!("Http error: {}", err)))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(TubeflowError::Client(format!("model api error {}: {}", status, body)));
        }

        let text = res.text().await?;
        debug!(model = %self.model, bytes = text.len(), "received completion");

        let completion: CompletionResponse = serde_json::from_str(&text)?;
        Ok(completion.into_text())
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

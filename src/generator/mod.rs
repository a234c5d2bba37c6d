//! AI-backed flow generation with a deterministic fallback.
//!
//! One generation issues at most one model request and awaits it. Every
//! failure on the way (no credential, transport, malformed JSON, schema
//! mismatch) degrades to [`build_fallback_flow`], so callers always receive
//! a usable [`AgentFlow`].

mod client;
mod outcome;
mod params;
pub mod prompt;

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::{
    Config, LlmConfig, Result,
    flow::{build_fallback_flow, normalize},
    model::AgentFlow,
};

pub use client::{ChatRequest, LlmClient, OpenAiClient};
pub use outcome::{FallbackReason, Generation};
pub use params::{AutomationStyle, GenerateParams};

use prompt::{SYSTEM_PROMPT, build_prompt, parse_response};

/// Turns generation parameters into a flow.
///
/// The model client is injected; a generator without one always uses the
/// fallback builder.
#[derive(Clone)]
pub struct FlowGenerator {
    client: Option<Arc<dyn LlmClient>>,
    temperature: f64,
    max_tokens: u32,
}

impl FlowGenerator {
    pub fn new(client: Option<Arc<dyn LlmClient>>) -> Self {
        let defaults = LlmConfig::default();
        Self {
            client,
            temperature: defaults.temperature,
            max_tokens: defaults.max_tokens,
        }
    }

    /// Generator with an [`OpenAiClient`] when `config` carries a credential.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = OpenAiClient::from_config(&config.llm)?.map(|c| Arc::new(c) as Arc<dyn LlmClient>);
        Ok(Self::new(client).temperature(config.llm.temperature).max_tokens(config.llm.max_tokens))
    }

    pub fn temperature(
        mut self,
        temperature: f64,
    ) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn max_tokens(
        mut self,
        max_tokens: u32,
    ) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn has_client(&self) -> bool {
        self.client.is_some()
    }

    /// The request that would be sent for `params`.
    pub fn request(
        &self,
        params: &GenerateParams,
    ) -> ChatRequest {
        ChatRequest {
            system: SYSTEM_PROMPT.to_string(),
            user: build_prompt(params),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }

    /// Generate a flow for `params`. Never fails.
    pub async fn generate(
        &self,
        params: &GenerateParams,
    ) -> AgentFlow {
        self.generate_detailed(params).await.into_flow()
    }

    /// Like [`FlowGenerator::generate`], but reports whether the fallback was used and why.
    pub async fn generate_detailed(
        &self,
        params: &GenerateParams,
    ) -> Generation {
        let Some(client) = self.client.as_ref() else {
            debug!("no model client configured, using fallback flow");
            return Self::fallback(params, FallbackReason::MissingCredential);
        };

        let request = self.request(params);
        let raw = match client.complete(&request).await {
            Ok(raw) => raw,
            Err(err) => {
                warn!(model = client.model_name(), error = %err, "model request failed");
                return Self::fallback(params, FallbackReason::Transport(err.to_string()));
            }
        };

        match parse_response(&raw) {
            Ok(candidate) => {
                let flow = normalize(candidate);
                info!(model = client.model_name(), nodes = flow.nodes.len(), edges = flow.edges.len(), "generated flow");
                Generation::Generated {
                    flow,
                }
            }
            Err(err) => {
                let reason = FallbackReason::from_parse_error(err);
                warn!(model = client.model_name(), reason = reason.code(), "rejected model response");
                Self::fallback(params, reason)
            }
        }
    }

    fn fallback(
        params: &GenerateParams,
        reason: FallbackReason,
    ) -> Generation {
        Generation::Fallback {
            flow: build_fallback_flow(params),
            reason,
        }
    }
}

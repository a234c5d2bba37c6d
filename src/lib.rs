//! # Tubeflow
//!
//! Tubeflow turns a natural-language automation goal into a workflow graph
//! (nodes + edges) that can be imported into n8n.
//!
//! ## Core Features
//!
//! - **AI Generation**: A single chat completion request to a hosted model, schema-checked
//! - **Deterministic Fallback**: Any generation failure degrades to a fixed, network-free pipeline
//! - **Normalization**: Untrusted flows are coerced into the closed set of node types
//! - **Templates**: Hand-authored starter flows for common YouTube automations
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tubeflow::{AutomationStyle, Config, FlowGenerator, GenerateParams};
//!
//! let generator = FlowGenerator::from_config(&Config::from_env())?;
//! let params = GenerateParams::new("Grow subscribers", AutomationStyle::Growth).tone("friendly");
//!
//! let flow = generator.generate(&params).await;
//! println!("{}", flow.to_json_pretty()?);
//! ```

mod config;
mod error;
mod flow;
mod generator;
mod model;

pub use config::{API_KEY_ENV, BASE_URL_ENV, Config, LlmConfig, MODEL_ENV};
pub use error::TubeflowError;
pub use flow::{FALLBACK_NODE_TYPE, FlowGraph, build_fallback_flow, default_config, default_config_for, normalize, starter_template, template_flows};
pub use generator::{AutomationStyle, ChatRequest, FallbackReason, FlowGenerator, GenerateParams, Generation, LlmClient, OpenAiClient, prompt};
pub use model::*;

/// Result type alias for Tubeflow operations.
pub type Result<T> = std::result::Result<T, TubeflowError>;

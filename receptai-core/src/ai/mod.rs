//! LLM client module for recipe text generation.
//!
//! This module provides:
//! - `AiClient` trait for abstracting chat-completion providers
//! - `OpenAiClient` for any OpenAI-compatible API
//! - `FakeAiClient` for tests and offline development
//! - `generate_recipe`, which prompts the model and parses its JSON answer
//!
//! # Configuration
//!
//! - `RECEPTAI_AI_PROVIDER` (optional): "openai" (default) or "fake"
//! - `OPENAI_API_KEY` (required for "openai"): API key
//! - `RECEPTAI_AI_MODEL` (optional): Model name, default "gpt-4o-mini"
//! - `RECEPTAI_AI_BASE_URL` (optional): API base URL

mod client;
mod config;
mod fake;
pub mod prompts;
mod recipe;
mod types;

pub use client::{AiClient, AiError, OpenAiClient};
pub use config::{AiConfig, ConfigError};
pub use fake::{FakeAiClient, SAMPLE_RECIPE_JSON};
pub use recipe::{generate_recipe, parse_recipe_response};
pub use types::{ChatMessage, ChatRequest, ChatResponse, Role, Usage};

/// Build the configured client.
pub fn create_client_from_env() -> Result<Box<dyn AiClient>, AiError> {
    let provider =
        std::env::var("RECEPTAI_AI_PROVIDER").unwrap_or_else(|_| "openai".to_string());

    match provider.as_str() {
        "fake" => Ok(Box::new(FakeAiClient::with_sample_recipe())),
        "openai" => Ok(Box::new(OpenAiClient::from_env()?)),
        other => Err(AiError::Config(ConfigError::UnknownProvider(
            other.to_string(),
        ))),
    }
}

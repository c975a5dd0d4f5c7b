//! Fake LLM client for testing.
//!
//! Returns deterministic responses based on prompt matching, so tests run
//! without network access or API costs.

use super::{AiClient, AiError, ChatRequest, ChatResponse, Usage};
use async_trait::async_trait;
use std::sync::Mutex;

/// A fake AI client.
///
/// Responses are matched by checking whether the last message contains a
/// registered substring (case-insensitive). If nothing matches, the default
/// response is returned, or an error when there is none.
#[derive(Debug, Default)]
pub struct FakeAiClient {
    responses: Vec<(String, String)>,
    default_response: Option<String>,
    requests: Mutex<Vec<ChatRequest>>,
}

pub const SAMPLE_RECIPE_JSON: &str = r#"{
  "title": "Омлет",
  "ingredients": ["яйцо (2 шт.)", "молоко (50 мл)"],
  "steps": ["Взбейте яйца с молоком.", "Вылейте на разогретую сковороду.", "Готовьте под крышкой 5 минут."],
  "cooking_time": "10 минут",
  "servings": "1 порция"
}"#;

impl FakeAiClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let mut client = Self::new();
        client.add_response(prompt_contains, response);
        client
    }

    pub fn add_response(&mut self, prompt_contains: &str, response: &str) {
        self.responses
            .push((prompt_contains.to_lowercase(), response.to_string()));
    }

    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// Answers every prompt with a well-formed omelette recipe.
    pub fn with_sample_recipe() -> Self {
        Self::new().with_default_response(SAMPLE_RECIPE_JSON)
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl AiClient for FakeAiClient {
    async fn complete(
        &self,
        _prompt_name: &str,
        request: ChatRequest,
    ) -> Result<ChatResponse, AiError> {
        let prompt = request
            .messages
            .last()
            .map(|m| m.content.to_lowercase())
            .unwrap_or_default();

        if let Ok(mut seen) = self.requests.lock() {
            seen.push(request);
        }

        let content = self
            .responses
            .iter()
            .find(|(pattern, _)| prompt.contains(pattern.as_str()))
            .map(|(_, response)| response.clone())
            .or_else(|| self.default_response.clone())
            .ok_or_else(|| {
                AiError::Api(format!(
                    "FakeAiClient: No response configured for prompt (first 100 chars): {}",
                    prompt.chars().take(100).collect::<String>()
                ))
            })?;

        Ok(ChatResponse {
            content,
            usage: Usage::default(),
        })
    }
}

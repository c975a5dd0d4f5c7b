//! Full recipe generation for a matched dish.

use crate::ai::prompts::recipe::{render_recipe_prompt, RECIPE_PROMPT_NAME, RECIPE_SYSTEM_PROMPT};
use crate::ai::{AiClient, AiError, ChatMessage, ChatRequest};
use crate::types::GeneratedRecipe;

/// Ask the model for a recipe of `dish_title` using `ingredients`.
pub async fn generate_recipe(
    ai_client: &dyn AiClient,
    dish_title: &str,
    ingredients: &[String],
) -> Result<GeneratedRecipe, AiError> {
    let request = ChatRequest {
        messages: vec![
            ChatMessage::system(RECIPE_SYSTEM_PROMPT),
            ChatMessage::user(render_recipe_prompt(dish_title, ingredients)),
        ],
        max_tokens: Some(1000),
        temperature: Some(0.7),
        json_response: true,
    };

    let response = ai_client.complete(RECIPE_PROMPT_NAME, request).await?;

    parse_recipe_response(&response.content)
}

/// Parse the model's answer, tolerating a surrounding markdown code fence.
pub fn parse_recipe_response(content: &str) -> Result<GeneratedRecipe, AiError> {
    let json = strip_code_fence(content.trim());

    serde_json::from_str(json)
        .map_err(|e| AiError::ParseError(format!("Failed to parse recipe response: {}", e)))
}

/// "```json\n{...}\n```" -> "{...}". Anything else is returned unchanged.
fn strip_code_fence(content: &str) -> &str {
    if !content.starts_with("```") {
        return content;
    }

    let body = content.split_once('\n').map(|(_, rest)| rest).unwrap_or("");
    let body = body.rsplit_once("```").map(|(head, _)| head).unwrap_or(body);
    body.trim()
}

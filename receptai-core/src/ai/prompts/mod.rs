//! Prompt templates.

pub mod recipe;

pub use recipe::{render_recipe_prompt, RECIPE_PROMPT_NAME, RECIPE_SYSTEM_PROMPT};

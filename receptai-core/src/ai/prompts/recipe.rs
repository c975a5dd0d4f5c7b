//! Recipe generation prompt.

/// Prompt name used in logs.
pub const RECIPE_PROMPT_NAME: &str = "generate_recipe";

pub const RECIPE_SYSTEM_PROMPT: &str =
    "You are a professional cook. Answer with valid JSON only.";

/// Render the user prompt asking for a full recipe of `dish_title` made from
/// the given ingredients.
pub fn render_recipe_prompt(dish_title: &str, ingredients: &[String]) -> String {
    let ingredients_list = ingredients.join(", ");

    format!(
        r#"You are a professional cook. Write a detailed recipe for the dish below.

Dish: {dish_title}
Available ingredients: {ingredients_list}

Respond STRICTLY with JSON in this shape (no markdown, no ```):
{{
  "title": "dish name",
  "ingredients": ["ingredient 1 (amount)", "ingredient 2 (amount)"],
  "steps": ["step 1", "step 2", "step 3"],
  "cooking_time": "30 минут",
  "servings": "2 порции"
}}

Use only the listed ingredients. Write all text values in Russian."#,
        dish_title = dish_title,
        ingredients_list = ingredients_list
    )
}

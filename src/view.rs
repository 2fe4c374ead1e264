//! Plain-text rendering of result cards and the recipe detail view

use crate::model::{IngredientLine, RecipeDetail, RecipeSummary};

pub const NO_RESULTS_MESSAGE: &str = "No recipes found. Try another search.";

/// One card per recipe, separated by blank lines
pub fn render_results(recipes: &[RecipeSummary]) -> String {
    if recipes.is_empty() {
        return NO_RESULTS_MESSAGE.to_string();
    }

    recipes
        .iter()
        .map(render_card)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_card(recipe: &RecipeSummary) -> String {
    let mut card = String::new();
    card.push_str(&format!("{}\n", recipe.name));
    card.push_str(&format!("  {} | {}\n", recipe.category, recipe.area));
    card.push_str(&format!("  id: {}\n", recipe.id));
    if !recipe.thumbnail_url.is_empty() {
        card.push_str(&format!("  image: {}\n", recipe.thumbnail_url));
    }
    card
}

fn render_ingredient(line: &IngredientLine) -> String {
    if line.measure.is_empty() {
        line.ingredient.clone()
    } else {
        format!("{} {}", line.measure, line.ingredient)
    }
}

/// Header, optional video link, ingredients and numbered steps
pub fn render_detail(recipe: &RecipeDetail) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", recipe.name));
    output.push_str(&format!("{} | {}\n", recipe.category, recipe.area));
    if !recipe.tags.is_empty() {
        output.push_str(&format!("Tags: {}\n", recipe.tags.join(", ")));
    }
    if !recipe.thumbnail_url.is_empty() {
        output.push_str(&format!("Image: {}\n", recipe.thumbnail_url));
    }
    if let Some(video) = &recipe.video_url {
        output.push_str(&format!("Watch video tutorial: {}\n", video));
    }

    output.push_str("\nIngredients\n");
    for line in recipe.ingredients() {
        output.push_str(&format!("  - {}\n", render_ingredient(&line)));
    }

    output.push_str("\nInstructions\n");
    for (index, step) in recipe.steps().iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", index + 1, step.text));
    }

    output
}

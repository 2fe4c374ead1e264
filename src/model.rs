use std::collections::HashMap;

use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::ingredients::{extract_ingredients, MAX_INGREDIENT_SLOTS};
use crate::instructions::segment_instructions;

/// Minimal display data for one recipe in a result set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeSummary {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
    pub category: String,
    pub area: String,
}

/// One ingredient position of a recipe, as delivered by the service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngredientSlot {
    pub ingredient: Option<String>,
    pub measure: Option<String>,
}

impl IngredientSlot {
    pub fn new(ingredient: impl Into<String>, measure: impl Into<String>) -> Self {
        Self {
            ingredient: Some(ingredient.into()),
            measure: Some(measure.into()),
        }
    }
}

/// Full record for one recipe
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecipeDetail {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
    pub category: String,
    pub area: String,
    pub tags: Vec<String>,
    pub video_url: Option<String>,
    pub instructions: Option<String>,
    pub ingredient_slots: Vec<IngredientSlot>,
}

impl RecipeDetail {
    /// Ingredient list for display, ending at the first empty slot
    pub fn ingredients(&self) -> Vec<IngredientLine> {
        extract_ingredients(&self.ingredient_slots)
    }

    /// Numbered-display steps segmented from the instructions text
    pub fn steps(&self) -> Vec<InstructionStep> {
        segment_instructions(self.instructions.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientLine {
    pub ingredient: String,
    pub measure: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstructionStep {
    pub text: String,
}

/// `{ "meals": [...] }` envelope returned by both search and lookup
///
/// The service sends `"meals": null` when nothing matched, and a bare string
/// such as `"Invalid ID"` for some bad lookups. Both read as no records.
#[derive(Debug, Deserialize)]
pub(crate) struct MealsEnvelope {
    #[serde(default)]
    pub meals: Value,
}

impl MealsEnvelope {
    /// Records that could be read; anything that is not a meal object is skipped
    pub fn into_records(self) -> Vec<MealRecord> {
        let meals = match self.meals {
            Value::Array(meals) => meals,
            Value::Null => return Vec::new(),
            other => {
                warn!("Ignoring unexpected meals value: {}", other);
                return Vec::new();
            }
        };

        meals
            .into_iter()
            .filter_map(|meal| match serde_json::from_value::<MealRecord>(meal) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("Skipping unreadable meal record: {}", e);
                    None
                }
            })
            .collect()
    }
}

/// Flat meal object as it appears on the wire
///
/// Scalar fields accept strings, numbers or null; anything else reads as absent.
#[derive(Debug, Deserialize)]
pub(crate) struct MealRecord {
    #[serde(rename = "idMeal", default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(rename = "strMeal", default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(rename = "strMealThumb", default, deserialize_with = "lenient_string")]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategory", default, deserialize_with = "lenient_string")]
    pub category: Option<String>,
    #[serde(rename = "strArea", default, deserialize_with = "lenient_string")]
    pub area: Option<String>,
    #[serde(rename = "strTags", default, deserialize_with = "lenient_string")]
    pub tags: Option<String>,
    #[serde(rename = "strYoutube", default, deserialize_with = "lenient_string")]
    pub youtube: Option<String>,
    #[serde(rename = "strInstructions", default, deserialize_with = "lenient_string")]
    pub instructions: Option<String>,
    // strIngredientN / strMeasureN and anything else the service adds
    #[serde(flatten)]
    pub rest: HashMap<String, Value>,
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_to_string(&Value::deserialize(deserializer)?))
}

impl MealRecord {
    fn field(&self, key: &str) -> Option<String> {
        self.rest.get(key).and_then(scalar_to_string)
    }

    /// Unpack the numbered slot keys into an ordered sequence
    fn ingredient_slots(&self) -> Vec<IngredientSlot> {
        (1..=MAX_INGREDIENT_SLOTS)
            .map(|n| IngredientSlot {
                ingredient: self.field(&format!("strIngredient{n}")),
                measure: self.field(&format!("strMeasure{n}")),
            })
            .collect()
    }
}

fn split_tags(tags: Option<&str>) -> Vec<String> {
    tags.map(|t| {
        t.split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(String::from)
            .collect()
    })
    .unwrap_or_default()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<MealRecord> for RecipeSummary {
    fn from(meal: MealRecord) -> Self {
        RecipeSummary {
            id: meal.id.unwrap_or_default(),
            name: meal.name.unwrap_or_default(),
            thumbnail_url: meal.thumbnail.unwrap_or_default(),
            category: meal.category.unwrap_or_default(),
            area: meal.area.unwrap_or_default(),
        }
    }
}

impl From<MealRecord> for RecipeDetail {
    fn from(meal: MealRecord) -> Self {
        let ingredient_slots = meal.ingredient_slots();
        RecipeDetail {
            tags: split_tags(meal.tags.as_deref()),
            video_url: non_blank(meal.youtube),
            instructions: meal.instructions,
            ingredient_slots,
            id: meal.id.unwrap_or_default(),
            name: meal.name.unwrap_or_default(),
            thumbnail_url: meal.thumbnail.unwrap_or_default(),
            category: meal.category.unwrap_or_default(),
            area: meal.area.unwrap_or_default(),
        }
    }
}

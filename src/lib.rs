pub mod client;
pub mod config;
pub mod error;
pub mod ingredients;
pub mod instructions;
pub mod model;
pub mod search;
pub mod view;

pub use client::{MealDbClient, RecipeSource};
pub use config::SearchConfig;
pub use error::{Flow, SearchError};
pub use ingredients::extract_ingredients;
pub use instructions::segment_instructions;
pub use model::{IngredientLine, IngredientSlot, InstructionStep, RecipeDetail, RecipeSummary};
pub use search::{RecipeSearch, RecipeSearchBuilder, SearchOutcome, SearchRequest};


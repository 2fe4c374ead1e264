use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use std::time::Duration;

use crate::model::{MealsEnvelope, RecipeDetail, RecipeSummary};
use crate::SearchError;

/// Read-only access to a recipe database
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Recipes whose name matches `query`; empty when nothing matched
    async fn search_by_name(&self, query: &str) -> Result<Vec<RecipeSummary>, SearchError>;

    /// Full record for one recipe, `None` when the id is unknown
    async fn lookup_by_id(&self, id: &str) -> Result<Option<RecipeDetail>, SearchError>;
}

/// HTTP client for the TheMealDB JSON API
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, SearchError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("mealdb-search/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn get_meals(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<MealsEnvelope, SearchError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {} {:?}", url, params);

        let response = self.client.get(&url).query(params).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("{} answered with status {}", url, status);
            return Err(SearchError::HttpStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl RecipeSource for MealDbClient {
    async fn search_by_name(&self, query: &str) -> Result<Vec<RecipeSummary>, SearchError> {
        let envelope = self.get_meals("search.php", &[("s", query)]).await?;
        let recipes: Vec<RecipeSummary> = envelope
            .into_records()
            .into_iter()
            .map(RecipeSummary::from)
            .collect();
        debug!("Search {:?} matched {} recipes", query, recipes.len());
        Ok(recipes)
    }

    async fn lookup_by_id(&self, id: &str) -> Result<Option<RecipeDetail>, SearchError> {
        let envelope = self.get_meals("lookup.php", &[("i", id)]).await?;
        Ok(envelope
            .into_records()
            .into_iter()
            .next()
            .map(RecipeDetail::from))
    }
}

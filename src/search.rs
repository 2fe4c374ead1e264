use log::{debug, info};
use std::sync::Arc;
use std::time::Duration;

use crate::client::{MealDbClient, RecipeSource};
use crate::config::SearchConfig;
use crate::model::{RecipeDetail, RecipeSummary};
use crate::SearchError;

/// What the user asked for
#[derive(Debug, Clone)]
pub enum SearchRequest {
    /// Search recipes by name
    Query(String),
    /// Load one recipe by id
    Lookup(String),
    /// The featured list shown before any search
    Featured,
}

/// Result of a search operation
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    /// Result cards, possibly empty
    Results(Vec<RecipeSummary>),
    /// One recipe opened in the detail view
    Detail(Box<RecipeDetail>),
}

/// Builder for configuring and executing recipe searches
#[derive(Default)]
pub struct RecipeSearchBuilder {
    request: Option<SearchRequest>,
    limit: Option<usize>,
    timeout: Option<Duration>,
    base_url: Option<String>,
    config: Option<SearchConfig>,
    source: Option<Arc<dyn RecipeSource>>,
}

impl RecipeSearchBuilder {
    /// Search recipes whose name matches `query`
    ///
    /// # Example
    /// ```
    /// use mealdb_search::RecipeSearch;
    ///
    /// let builder = RecipeSearch::builder().query("arrabiata");
    /// ```
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.request = Some(SearchRequest::Query(query.into()));
        self
    }

    /// Load the full recipe with the given id
    ///
    /// # Example
    /// ```
    /// use mealdb_search::RecipeSearch;
    ///
    /// let builder = RecipeSearch::builder().lookup("52772");
    /// ```
    pub fn lookup(mut self, id: impl Into<String>) -> Self {
        self.request = Some(SearchRequest::Lookup(id.into()));
        self
    }

    /// Load the featured list (configured query, capped at the featured limit)
    pub fn featured(mut self) -> Self {
        self.request = Some(SearchRequest::Featured);
        self
    }

    /// Keep at most `limit` search results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set a timeout for HTTP requests
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Point at a different API root, e.g. a local mock server
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Use an already loaded configuration instead of the defaults
    pub fn config(mut self, config: SearchConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Fetch from a custom source instead of the HTTP client
    pub fn source(mut self, source: Arc<dyn RecipeSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Build and execute the search
    ///
    /// # Errors
    /// Returns `SearchError` if:
    /// - No request was specified
    /// - The query is blank
    /// - The service cannot be reached or answers with garbage
    /// - A looked up recipe does not exist
    pub async fn build(self) -> Result<SearchOutcome, SearchError> {
        let request = self.request.ok_or_else(|| {
            SearchError::BuilderError(
                "No request specified. Use .query(), .lookup() or .featured()".to_string(),
            )
        })?;

        let mut config = self.config.unwrap_or_default();
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }

        let source: Arc<dyn RecipeSource> = match self.source {
            Some(source) => source,
            None => {
                let timeout = resolve_timeout(self.timeout, &config);
                Arc::new(MealDbClient::new(config.base_url.clone(), Some(timeout))?)
            }
        };

        match request {
            SearchRequest::Query(query) => {
                let query = query.trim();
                if query.is_empty() {
                    return Err(SearchError::EmptyQuery);
                }
                info!("Searching recipes for {:?}", query);
                let recipes = source.search_by_name(query).await?;
                Ok(SearchOutcome::Results(truncate(recipes, self.limit)))
            }

            SearchRequest::Featured => {
                debug!("Loading featured recipes for {:?}", config.featured_query);
                let recipes = source.search_by_name(&config.featured_query).await?;
                let limit = self.limit.unwrap_or(config.featured_limit);
                Ok(SearchOutcome::Results(truncate(recipes, Some(limit))))
            }

            SearchRequest::Lookup(id) => {
                info!("Loading recipe {}", id);
                let detail = source
                    .lookup_by_id(id.trim())
                    .await?
                    .ok_or(SearchError::NotFound)?;
                Ok(SearchOutcome::Detail(Box::new(detail)))
            }
        }
    }
}

/// Builder override wins unless it is zero, which reqwest would fail on at once
fn resolve_timeout(timeout: Option<Duration>, config: &SearchConfig) -> Duration {
    timeout
        .filter(|t| !t.is_zero())
        .unwrap_or_else(|| config.request_timeout())
}

fn truncate(mut recipes: Vec<RecipeSummary>, limit: Option<usize>) -> Vec<RecipeSummary> {
    if let Some(limit) = limit {
        recipes.truncate(limit);
    }
    recipes
}

/// Main entry point for the builder API
pub struct RecipeSearch;

impl RecipeSearch {
    /// Creates a new builder for searching recipes
    pub fn builder() -> RecipeSearchBuilder {
        RecipeSearchBuilder::default()
    }
}

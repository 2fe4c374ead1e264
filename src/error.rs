use thiserror::Error;

/// Errors that can occur while searching or loading recipes
#[derive(Error, Debug)]
pub enum SearchError {
    /// Transport failure talking to the recipe service
    #[error("Failed to fetch: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The recipe service answered with a non-success status
    #[error("Unexpected HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// The response body was not the JSON envelope we expect
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Lookup by id returned no recipe
    #[error("Recipe not found")]
    NotFound,

    /// Search was requested with a blank query
    #[error("Please enter a search term")]
    EmptyQuery,

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

/// Which user flow an error surfaced from; selects the message shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Search,
    Detail,
}

impl SearchError {
    /// Message suitable for showing to the user in place of results
    ///
    /// Network and decoding failures collapse into one generic message per
    /// flow; input and not-found errors keep their own wording.
    pub fn user_message(&self, flow: Flow) -> String {
        match self {
            SearchError::FetchError(_)
            | SearchError::HttpStatus { .. }
            | SearchError::ParseError(_) => match flow {
                Flow::Search => {
                    "Failed to fetch recipes. Please check your connection and try again."
                        .to_string()
                }
                Flow::Detail => "Failed to load recipe details.".to_string(),
            },
            other => other.to_string(),
        }
    }
}

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ErosError>;

#[derive(Debug, Error)]
pub enum ErosError {
    /// The upstream body could not be decoded as JSON.
    #[error("{0}")]
    DataNotFound(String),

    #[error("Unexpected response shape from {endpoint}: {source}")]
    Schema {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed endpoint: {0:?}")]
    MalformedEndpoint(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ErosError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ErosError::DataNotFound(_))
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

use std::env;
use std::time::Duration;

use crate::error::{ErosError, Result};

pub const DEFAULT_BASE_URL: &str = "https://eros.rest";

/// Client configuration. Fixed once an [`crate::Eros`] is built from it.
#[derive(Clone)]
pub struct ErosConfig {
    pub api_key: String,
    pub base_url: String,
    /// Transport timeout. `None` leaves reqwest's default in place.
    pub timeout: Option<Duration>,
    /// Also send request params as the query string. Off by default: the API
    /// keys off the path and params only name the item in not-found errors.
    pub send_params: bool,
}

impl ErosConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            send_params: false,
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_params_in_query(mut self) -> Self {
        self.send_params = true;
        self
    }

    /// Load configuration from `EROS_API_KEY`, `EROS_BASE_URL` and `EROS_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup("EROS_API_KEY")
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ErosError::Config("EROS_API_KEY environment variable is required".into()))?;

        let mut config = Self::new(api_key);

        if let Some(url) = lookup("EROS_BASE_URL") {
            config = config.with_base_url(&url);
            if config.base_url.is_empty() {
                return Err(ErosError::Config("EROS_BASE_URL must not be empty".into()));
            }
        }

        if let Some(secs) = lookup("EROS_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                ErosError::Config(format!("EROS_TIMEOUT_SECS must be a number, got {secs:?}"))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    pub fn log_redacted(&self) {
        tracing::info!(
            base_url = %self.base_url,
            api_key = %redact(&self.api_key),
            timeout_secs = ?self.timeout.map(|t| t.as_secs()),
            send_params = self.send_params,
            "Eros client configuration"
        );
    }
}

impl std::fmt::Debug for ErosConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErosConfig")
            .field("api_key", &redact(&self.api_key))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("send_params", &self.send_params)
            .finish()
    }
}

fn redact(secret: &str) -> String {
    match secret.char_indices().nth(4) {
        Some((idx, _)) => format!("{}***", &secret[..idx]),
        None => "***".to_string(),
    }
}

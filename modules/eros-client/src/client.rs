use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ErosConfig;
use crate::endpoint::Endpoint;
use crate::error::{ErosError, Result};
use crate::platforms::{Instagram, Pinterest, Threads, TikTok, Twitter, YouTube};

const API_KEY_HEADER: &str = "api-key";

/// Shared handle to the Eros API.
///
/// Cloning is cheap: clones share one connection pool and the same
/// configuration, which never changes after construction.
#[derive(Clone)]
pub struct Eros {
    client: reqwest::Client,
    config: Arc<ErosConfig>,
}

impl Eros {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            config: Arc::new(ErosConfig::new(api_key)),
        }
    }

    pub fn with_config(config: ErosConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            config: Arc::new(config),
        })
    }

    pub fn from_env() -> Result<Self> {
        let config = ErosConfig::from_env()?;
        config.log_redacted();
        Self::with_config(config)
    }

    pub fn api_key(&self) -> &str {
        &self.config.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}/{}", self.config.base_url, endpoint)
    }

    /// GET an endpoint and return the decoded JSON body untouched.
    ///
    /// The first value of `params` names the missing item in the not-found
    /// message. Params are only sent upstream, as the query string, when
    /// [`ErosConfig::send_params`] is set. Any JSON body is returned
    /// whatever the status code. A non-JSON body is reported as
    /// [`ErosError::DataNotFound`], except on 5xx where it becomes
    /// [`ErosError::Api`].
    pub async fn request(&self, endpoint: &Endpoint, params: &[(&str, &str)]) -> Result<Value> {
        let url = self.url(endpoint);

        let mut req = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, self.config.api_key.as_str());
        if self.config.send_params {
            req = req.query(params);
        }

        let resp = req.send().await?;

        let status = resp.status();
        tracing::debug!(%endpoint, status = status.as_u16(), "Eros response received");

        let body = resp.bytes().await?;
        match serde_json::from_slice::<Value>(&body) {
            Ok(value) => Ok(value),
            Err(_) if status.is_server_error() => Err(ErosError::Api {
                status: status.as_u16(),
                message: String::from_utf8_lossy(&body).into_owned(),
            }),
            Err(err) => {
                let identifier = params.first().map(|(_, value)| *value).unwrap_or_default();
                tracing::debug!(%endpoint, identifier, error = %err, "Body was not JSON, treating as not found");
                Err(ErosError::DataNotFound(endpoint.not_found_message(identifier)))
            }
        }
    }

    /// [`Eros::request`] followed by deserialization into a typed result.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let data = self.request(endpoint, params).await?;
        serde_json::from_value(data).map_err(|source| ErosError::Schema {
            endpoint: endpoint.to_string(),
            source,
        })
    }

    pub fn instagram(&self) -> Instagram {
        Instagram::new(self)
    }

    pub fn tiktok(&self) -> TikTok {
        TikTok::new(self)
    }

    pub fn pinterest(&self) -> Pinterest {
        Pinterest::new(self)
    }

    pub fn threads(&self) -> Threads {
        Threads::new(self)
    }

    pub fn youtube(&self) -> YouTube {
        YouTube::new(self)
    }

    pub fn twitter(&self) -> Twitter {
        Twitter::new(self)
    }
}

impl std::fmt::Debug for Eros {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Eros").field("config", &self.config).finish()
    }
}

//! `RelayBackend` over HTTP.

use std::time::Duration;

use relaypanel_app::ports::RelayBackend;
use relaypanel_domain::command::{RelayCommand, status_path};
use relaypanel_domain::error::BackendError;
use relaypanel_domain::relay::{RelayId, RelayState};
use reqwest::{Client, Url};

use crate::error::HttpError;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1/";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for [`ReqwestBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpBackendConfig {
    /// Root the relay paths are resolved against. A path prefix is kept.
    pub base_url: String,
    /// Upper bound for a whole request, connection included.
    pub timeout: Duration,
}

impl Default for HttpBackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Talks to the relay board's web controller.
#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    client: Client,
    base: Url,
}

impl ReqwestBackend {
    /// Build a backend from its configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidBaseUrl`] for an unusable base URL and
    /// [`HttpError::Client`] if the TLS backend cannot be initialised.
    pub fn new(config: &HttpBackendConfig) -> Result<Self, HttpError> {
        let base = parse_base(&config.base_url)?;
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(HttpError::Client)?;
        Ok(Self { client, base })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn url(&self, path: &str) -> Result<Url, HttpError> {
        self.base.join(path).map_err(|err| HttpError::InvalidBaseUrl {
            url: self.base.to_string(),
            reason: err.to_string(),
        })
    }

    async fn get(&self, path: &str) -> Result<String, BackendError> {
        let url = self.url(path)?;
        tracing::debug!(%url, "relay request");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| HttpError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "relay backend rejected request");
            return Err(BackendError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(|source| HttpError::Request {
            url: url.to_string(),
            source,
        })?;
        Ok(body)
    }
}

impl RelayBackend for ReqwestBackend {
    async fn send(&self, command: RelayCommand) -> Result<(), BackendError> {
        self.get(&command.path()).await.map(drop)
    }

    async fn status(&self, relay: RelayId) -> Result<RelayState, BackendError> {
        let body = self.get(&status_path(relay)).await?;
        Ok(RelayState::parse_status(&body)?)
    }
}

fn parse_base(raw: &str) -> Result<Url, HttpError> {
    let invalid = |reason: String| HttpError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let mut url = Url::parse(raw.trim()).map_err(|err| invalid(err.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(invalid("url cannot carry paths".to_string()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

//! `RelayBackend` over the browser's `fetch`, via `gloo-net`.
//!
//! Paths are resolved against the page unless a base URL is given, so the
//! panel works when served by the board's own web controller.

use gloo_net::http::{Request, Response};
use relaypanel_app::ports::RelayBackend;
use relaypanel_domain::command::{RelayCommand, status_path};
use relaypanel_domain::error::BackendError;
use relaypanel_domain::relay::{RelayId, RelayState};

/// Error raised by `fetch` before a response was received.
#[derive(Debug, Clone)]
pub struct FetchError {
    pub message: String,
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for FetchError {}

impl From<gloo_net::Error> for FetchError {
    fn from(err: gloo_net::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl From<FetchError> for BackendError {
    fn from(err: FetchError) -> Self {
        Self::Transport(Box::new(err))
    }
}

/// Check the HTTP response status and turn non-2xx into an error.
fn check_response(resp: Response) -> Result<Response, BackendError> {
    if resp.ok() {
        Ok(resp)
    } else {
        Err(BackendError::Status(resp.status()))
    }
}

#[derive(Debug, Clone, Default)]
pub struct GlooBackend {
    base_url: String,
}

impl GlooBackend {
    /// Backend rooted at `base_url`; an empty string means the page itself.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        if self.base_url.is_empty() {
            path.to_string()
        } else {
            format!("{}/{path}", self.base_url.trim_end_matches('/'))
        }
    }

    async fn get(&self, path: &str) -> Result<String, BackendError> {
        let resp = Request::get(&self.url(path))
            .send()
            .await
            .map_err(FetchError::from)?;
        let body = check_response(resp)?
            .text()
            .await
            .map_err(FetchError::from)?;
        Ok(body)
    }
}

impl RelayBackend for GlooBackend {
    async fn send(&self, command: RelayCommand) -> Result<(), BackendError> {
        self.get(&command.path()).await.map(drop)
    }

    async fn status(&self, relay: RelayId) -> Result<RelayState, BackendError> {
        let body = self.get(&status_path(relay)).await?;
        Ok(RelayState::parse_status(&body)?)
    }
}

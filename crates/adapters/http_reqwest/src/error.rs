//! Errors raised by the HTTP adapter.

use relaypanel_domain::error::BackendError;

#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The configured base URL cannot be parsed or cannot carry paths.
    #[error("invalid base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("unable to build http client")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl From<HttpError> for BackendError {
    fn from(err: HttpError) -> Self {
        Self::Transport(Box::new(err))
    }
}

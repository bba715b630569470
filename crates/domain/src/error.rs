//! Error types shared across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`PanelError`]
//! via `#[from]`.

/// A relay identifier outside `1..=max`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid relay id {value}, expected 1..={max}")]
pub struct InvalidRelayId {
    /// The rejected raw value.
    pub value: i64,
    /// Highest valid id for the panel.
    pub max: u8,
}

/// A relay count of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("relay count must be at least 1")]
pub struct InvalidRelayCount;

/// A `status/<id>` body that is not an integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed status body {body:?}")]
pub struct MalformedStatus {
    pub body: String,
}

/// Failure of a single backend request.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// Network or protocol failure before a response was received.
    #[error("transport error")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The backend answered with a non-success HTTP status.
    #[error("backend returned HTTP {0}")]
    Status(u16),

    /// The status endpoint answered with something other than a number.
    #[error(transparent)]
    MalformedStatus(#[from] MalformedStatus),
}

/// Top-level error for panel operations.
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    /// The operation was rejected before any request was sent.
    #[error("invalid relay")]
    InvalidRelayId(#[from] InvalidRelayId),

    /// A backend request failed.
    #[error("backend request failed")]
    Backend(#[from] BackendError),
}

//! Dialogs shown to the user.

use std::time::Duration;

use serde::Serialize;

use crate::labels::Labels;
use crate::relay::{RelayId, RelayState};

/// Icon / severity of a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Info,
    Error,
}

/// A dialog. Without `auto_dismiss` it stays until the user closes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub text: String,
    pub level: NotificationLevel,
    pub auto_dismiss: Option<Duration>,
}

impl Notification {
    /// A modal error dialog titled with the application name.
    #[must_use]
    pub fn error(labels: &Labels, text: impl Into<String>) -> Self {
        Self {
            title: labels.app_title.clone(),
            text: text.into(),
            level: NotificationLevel::Error,
            auto_dismiss: None,
        }
    }

    /// Rejection of an identifier outside the panel's range.
    #[must_use]
    pub fn invalid_relay(labels: &Labels) -> Self {
        Self::error(labels, labels.invalid_relay.clone())
    }

    /// Failure of a request aimed at one relay.
    #[must_use]
    pub fn relay_failure(labels: &Labels, relay: RelayId) -> Self {
        Self::error(labels, labels.relay_failure(relay))
    }

    /// Failure of an aggregate request, or of an announced status query.
    #[must_use]
    pub fn server_error(labels: &Labels) -> Self {
        Self::error(labels, labels.server_error.clone())
    }

    /// Transient announcement of a relay's current state.
    #[must_use]
    pub fn relay_status(
        labels: &Labels,
        relay: RelayId,
        state: RelayState,
        timeout: Duration,
    ) -> Self {
        Self {
            title: labels.relay_title(relay),
            text: labels.state(state).to_string(),
            level: match state {
                RelayState::On => NotificationLevel::Success,
                RelayState::Off => NotificationLevel::Info,
            },
            auto_dismiss: Some(timeout),
        }
    }

    #[must_use]
    pub fn is_modal(&self) -> bool {
        self.auto_dismiss.is_none()
    }
}

//! Backend commands and the route each one maps to.

use std::fmt;

use crate::relay::{RelayId, RelayState};

/// A state-changing request understood by the relay backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelayCommand {
    On(RelayId),
    Off(RelayId),
    Toggle(RelayId),
    /// Switch off, wait, switch back on. The wait happens on the backend.
    Reboot(RelayId),
    AllOn,
    AllOff,
}

impl RelayCommand {
    /// The command that drives `relay` to `state`.
    #[must_use]
    pub fn set(relay: RelayId, state: RelayState) -> Self {
        match state {
            RelayState::On => Self::On(relay),
            RelayState::Off => Self::Off(relay),
        }
    }

    /// The command that drives every relay to `state`.
    #[must_use]
    pub fn set_all(state: RelayState) -> Self {
        match state {
            RelayState::On => Self::AllOn,
            RelayState::Off => Self::AllOff,
        }
    }

    /// The relay this command targets, or `None` for aggregate commands.
    #[must_use]
    pub fn relay(self) -> Option<RelayId> {
        match self {
            Self::On(id) | Self::Off(id) | Self::Toggle(id) | Self::Reboot(id) => Some(id),
            Self::AllOn | Self::AllOff => None,
        }
    }

    /// Relative backend path, e.g. `on/3` or `all_off/`.
    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::On(id) => format!("on/{id}"),
            Self::Off(id) => format!("off/{id}"),
            Self::Toggle(id) => format!("toggle/{id}"),
            Self::Reboot(id) => format!("reboot/{id}"),
            Self::AllOn => "all_on/".to_string(),
            Self::AllOff => "all_off/".to_string(),
        }
    }
}

impl fmt::Display for RelayCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Relative backend path of the status query for `relay`.
#[must_use]
pub fn status_path(relay: RelayId) -> String {
    format!("status/{relay}")
}

//! Post-click cool-down of panel controls.
//!
//! Pressing a control disables it until [`ClickGuard::release`] is called,
//! which the controller does once the cool-down delay has elapsed. This only
//! throttles duplicate submissions; it does not serialize requests.

use std::collections::HashSet;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use relaypanel_domain::relay::{RelayId, RelayState};

/// A clickable control of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Set(RelayId, RelayState),
    Toggle(RelayId),
    Status(RelayId),
    Reboot(RelayId),
    SetAll(RelayState),
    ToggleAll,
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Set(relay, state) => write!(f, "{state}-{relay}"),
            Self::Toggle(relay) => write!(f, "toggle-{relay}"),
            Self::Status(relay) => write!(f, "status-{relay}"),
            Self::Reboot(relay) => write!(f, "reboot-{relay}"),
            Self::SetAll(state) => write!(f, "all-{state}"),
            Self::ToggleAll => f.write_str("toggle-all"),
        }
    }
}

/// Set of currently disabled controls.
#[derive(Debug, Default)]
pub struct ClickGuard {
    disabled: Mutex<HashSet<Control>>,
}

impl ClickGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable `control` and return `true`, or `false` if it already is.
    pub fn try_press(&self, control: Control) -> bool {
        self.lock().insert(control)
    }

    pub fn release(&self, control: Control) {
        self.lock().remove(&control);
    }

    #[must_use]
    pub fn is_disabled(&self, control: Control) -> bool {
        self.lock().contains(&control)
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<Control>> {
        self.disabled.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

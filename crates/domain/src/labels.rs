//! User-visible strings.
//!
//! The panel ships with Arabic state labels and English error texts, which
//! is what the stock controller page shows. An all-English set is available
//! through [`Locale::En`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::relay::{RelayId, RelayState};

/// Language of the state labels and relay titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ar,
    En,
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ar" => Ok(Self::Ar),
            "en" => Ok(Self::En),
            other => Err(format!("unsupported locale {other:?}")),
        }
    }
}

/// Every string the panel shows to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Title of error dialogs.
    pub app_title: String,
    pub on: String,
    pub off: String,
    /// Prefix of a relay title, followed by the relay number.
    pub relay_prefix: String,
    pub invalid_relay: String,
    /// Prefix of a per-relay failure, followed by the relay number.
    pub relay_failure_prefix: String,
    pub server_error: String,
    pub controls: ControlLabels,
    names: BTreeMap<RelayId, String>,
}

/// Captions of the panel's buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlLabels {
    pub toggle: String,
    pub status: String,
    pub reboot: String,
    pub all_on: String,
    pub all_off: String,
    pub toggle_all: String,
}

impl ControlLabels {
    #[must_use]
    pub fn for_locale(locale: Locale) -> Self {
        let captions = match locale {
            Locale::Ar => [
                "تبديل",
                "الحالة",
                "إعادة تشغيل",
                "تشغيل الكل",
                "إطفاء الكل",
                "تبديل الكل",
            ],
            Locale::En => ["Toggle", "Status", "Reboot", "All on", "All off", "Toggle all"],
        };
        let [toggle, status, reboot, all_on, all_off, toggle_all] = captions.map(String::from);
        Self {
            toggle,
            status,
            reboot,
            all_on,
            all_off,
            toggle_all,
        }
    }
}

impl Labels {
    #[must_use]
    pub fn for_locale(locale: Locale) -> Self {
        let (on, off, relay_prefix) = match locale {
            Locale::Ar => ("مُشغل", "مُطفأ", "الريلي"),
            Locale::En => ("On", "Off", "Relay"),
        };
        Self {
            app_title: "Pi Relay Controller".to_string(),
            on: on.to_string(),
            off: off.to_string(),
            relay_prefix: relay_prefix.to_string(),
            invalid_relay: "Invalid relay port passed to function setRelay".to_string(),
            relay_failure_prefix: "Failed to communicate with relay".to_string(),
            server_error: "Server returned an error".to_string(),
            controls: ControlLabels::for_locale(locale),
            names: BTreeMap::new(),
        }
    }

    /// Attach a channel name shown instead of the numbered relay title.
    #[must_use]
    pub fn with_channel_name(mut self, relay: RelayId, name: impl Into<String>) -> Self {
        self.names.insert(relay, name.into());
        self
    }

    /// Label for a relay state.
    #[must_use]
    pub fn state(&self, state: RelayState) -> &str {
        match state {
            RelayState::On => &self.on,
            RelayState::Off => &self.off,
        }
    }

    /// Title of a relay: its channel name if one is configured.
    #[must_use]
    pub fn relay_title(&self, relay: RelayId) -> String {
        match self.names.get(&relay) {
            Some(name) => name.clone(),
            None => format!("{} {relay}", self.relay_prefix),
        }
    }

    #[must_use]
    pub fn relay_failure(&self, relay: RelayId) -> String {
        format!("{} {relay}", self.relay_failure_prefix)
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

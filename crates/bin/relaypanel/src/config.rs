//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `relaypanel.toml` in the working directory unless a path is
//! given on the command line. Every field has a sensible default so the file
//! is optional. Environment variables take precedence over file values.

use std::collections::BTreeSet;
use std::path::Path;
use std::time::Duration;

use relaypanel_adapter_http_reqwest::HttpBackendConfig;
use relaypanel_app::services::controller::PanelConfig;
use relaypanel_domain::labels::{Labels, Locale};
use relaypanel_domain::relay::RelayCount;
use relaypanel_domain::timing::PanelTimings;
use serde::Deserialize;

const DEFAULT_PATH: &str = "relaypanel.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Relay board connection.
    pub backend: BackendConfig,
    /// Panel layout and language.
    pub panel: PanelSection,
    /// Delays around requests and clicks.
    pub timings: TimingsConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Optional names for individual relays.
    pub channels: Vec<ChannelConfig>,
}

/// Relay board connection.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Root URL of the board's web controller.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PanelSection {
    /// Number of relays on the board.
    pub relay_count: u8,
    pub locale: Locale,
}

/// Delays in milliseconds.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TimingsConfig {
    pub relay_settle_ms: u64,
    pub aggregate_settle_ms: u64,
    pub announce_timeout_ms: u64,
    pub click_cooldown_ms: u64,
    pub startup_delay_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Display name of one relay.
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelConfig {
    pub relay: u8,
    pub name: String,
}

impl Config {
    /// Load configuration from `path`, or from `relaypanel.toml` if present,
    /// then apply environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is malformed, if an explicit `path` does
    /// not exist, or if the resulting configuration is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path, false)?,
            None => Self::from_file(Path::new(DEFAULT_PATH), true)?,
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path, optional: bool) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if optional && err.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("RELAYPANEL_BACKEND_URL") {
            self.backend.base_url = val;
        }
        if let Some(val) = var("RELAYPANEL_RELAY_COUNT")
            && let Ok(count) = val.trim().parse()
        {
            self.panel.relay_count = count;
        }
        if let Some(val) = var("RELAYPANEL_LOCALE")
            && let Ok(locale) = val.parse()
        {
            self.panel.locale = locale;
        }
        if let Some(val) = var("RELAYPANEL_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.backend.base_url.trim().is_empty() {
            return Err(ConfigError::Validation("backend url must not be empty".to_string()));
        }
        if self.backend.timeout_secs == 0 {
            return Err(ConfigError::Validation("timeout must be non-zero".to_string()));
        }
        let count = self.relay_count()?;
        let mut seen = BTreeSet::new();
        for channel in &self.channels {
            if count.relay(i64::from(channel.relay)).is_err() {
                return Err(ConfigError::Validation(format!(
                    "channel relay {} is outside 1..={count}",
                    channel.relay
                )));
            }
            if channel.name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "channel {} has an empty name",
                    channel.relay
                )));
            }
            if !seen.insert(channel.relay) {
                return Err(ConfigError::Validation(format!(
                    "channel {} is named twice",
                    channel.relay
                )));
            }
        }
        Ok(())
    }

    fn relay_count(&self) -> Result<RelayCount, ConfigError> {
        RelayCount::new(self.panel.relay_count)
            .map_err(|err| ConfigError::Validation(err.to_string()))
    }

    /// Settings of the relay panel controller.
    ///
    /// # Errors
    ///
    /// Returns an error if the relay count or a channel is invalid.
    pub fn panel_config(&self) -> Result<PanelConfig, ConfigError> {
        let relay_count = self.relay_count()?;
        let mut labels = Labels::for_locale(self.panel.locale);
        for channel in &self.channels {
            let relay = relay_count
                .relay(i64::from(channel.relay))
                .map_err(|err| ConfigError::Validation(err.to_string()))?;
            labels = labels.with_channel_name(relay, channel.name.trim());
        }
        Ok(PanelConfig {
            relay_count,
            timings: self.timings.to_timings(),
            labels,
        })
    }

    /// Settings of the HTTP backend.
    #[must_use]
    pub fn http_backend(&self) -> HttpBackendConfig {
        HttpBackendConfig {
            base_url: self.backend.base_url.clone(),
            timeout: Duration::from_secs(self.backend.timeout_secs),
        }
    }
}

impl TimingsConfig {
    fn to_timings(&self) -> PanelTimings {
        PanelTimings {
            relay_settle: Duration::from_millis(self.relay_settle_ms),
            aggregate_settle: Duration::from_millis(self.aggregate_settle_ms),
            announce_timeout: Duration::from_millis(self.announce_timeout_ms),
            click_cooldown: Duration::from_millis(self.click_cooldown_ms),
            startup_delay: Duration::from_millis(self.startup_delay_ms),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        let http = HttpBackendConfig::default();
        Self {
            base_url: http.base_url,
            timeout_secs: http.timeout.as_secs(),
        }
    }
}

impl Default for PanelSection {
    fn default() -> Self {
        Self {
            relay_count: RelayCount::DEFAULT.get(),
            locale: Locale::default(),
        }
    }
}

impl Default for TimingsConfig {
    fn default() -> Self {
        let timings = PanelTimings::default();
        let millis = |duration: Duration| u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        Self {
            relay_settle_ms: millis(timings.relay_settle),
            aggregate_settle_ms: millis(timings.aggregate_settle),
            announce_timeout_ms: millis(timings.announce_timeout),
            click_cooldown_ms: millis(timings.click_cooldown),
            startup_delay_ms: millis(timings.startup_delay),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "relaypanel=info,relaypanel_app=info,relaypanel_adapter_http_reqwest=info"
                .to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

//! Fixed delays of the panel.

use std::time::Duration;

/// Delays applied around backend calls and clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelTimings {
    /// Wait between a successful per-relay command and the status refresh.
    pub relay_settle: Duration,
    /// Wait between a successful `all_on/` / `all_off/` and the refresh.
    pub aggregate_settle: Duration,
    /// Lifetime of a status announcement.
    pub announce_timeout: Duration,
    /// How long a control stays disabled after a click.
    pub click_cooldown: Duration,
    /// Wait before the initial status load.
    pub startup_delay: Duration,
}

impl PanelTimings {
    /// All delays zero, for tests and scripted use.
    #[must_use]
    pub fn immediate() -> Self {
        Self {
            relay_settle: Duration::ZERO,
            aggregate_settle: Duration::ZERO,
            announce_timeout: Duration::ZERO,
            click_cooldown: Duration::ZERO,
            startup_delay: Duration::ZERO,
        }
    }
}

impl Default for PanelTimings {
    fn default() -> Self {
        Self {
            relay_settle: Duration::from_millis(300),
            aggregate_settle: Duration::from_millis(500),
            announce_timeout: Duration::from_millis(2000),
            click_cooldown: Duration::from_millis(1000),
            startup_delay: Duration::from_millis(1500),
        }
    }
}

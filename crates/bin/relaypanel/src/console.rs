//! Terminal rendering of the panel.

use std::cell::RefCell;
use std::io::Write;

use relaypanel_app::ports::PanelView;
use relaypanel_domain::labels::Labels;
use relaypanel_domain::notification::{Notification, NotificationLevel};
use relaypanel_domain::relay::{RelayId, RelayState};

/// Prints relay states and notifications as lines of text.
///
/// Loading transitions are only logged.
pub struct ConsoleView<W> {
    labels: Labels,
    out: RefCell<W>,
}

impl<W: Write> ConsoleView<W> {
    pub fn new(labels: Labels, out: W) -> Self {
        Self {
            labels,
            out: RefCell::new(out),
        }
    }

    fn line(&self, line: std::fmt::Arguments<'_>) {
        if let Err(err) = writeln!(self.out.borrow_mut(), "{line}") {
            tracing::warn!(error = %err, "unable to write to console");
        }
    }
}

impl<W: Write> PanelView for ConsoleView<W> {
    fn show_state(&self, relay: RelayId, state: RelayState) {
        let title = self.labels.relay_title(relay);
        self.line(format_args!("{title}: {}", self.labels.state(state)));
    }

    fn set_loading(&self, relay: RelayId, loading: bool) {
        tracing::debug!(%relay, loading, "relay loading");
    }

    fn notify(&self, notification: Notification) {
        let tag = match notification.level {
            NotificationLevel::Success => "ok",
            NotificationLevel::Info => "info",
            NotificationLevel::Error => "error",
        };
        self.line(format_args!(
            "[{tag}] {}: {}",
            notification.title, notification.text
        ));
    }
}

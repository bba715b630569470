//! View port: whatever renders the panel.

use relaypanel_domain::notification::Notification;
use relaypanel_domain::relay::{RelayId, RelayState};

/// Renders relay state and user feedback.
///
/// All calls are synchronous and made from the event-loop thread.
pub trait PanelView {
    /// Update the status indicator and status text of `relay`.
    fn show_state(&self, relay: RelayId, state: RelayState);

    /// Show or hide the loading spinner of `relay`.
    fn set_loading(&self, relay: RelayId, loading: bool);

    /// Display a dialog.
    fn notify(&self, notification: Notification);
}

impl<T: PanelView> PanelView for std::rc::Rc<T> {
    fn show_state(&self, relay: RelayId, state: RelayState) {
        (**self).show_state(relay, state);
    }

    fn set_loading(&self, relay: RelayId, loading: bool) {
        (**self).set_loading(relay, loading);
    }

    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}

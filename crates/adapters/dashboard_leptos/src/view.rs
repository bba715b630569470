//! [`PanelView`] backed by Leptos signals.

use leptos::prelude::*;
use relaypanel_app::ports::PanelView;
use relaypanel_domain::notification::Notification;
use relaypanel_domain::relay::{RelayId, RelayState};

use crate::components::DialogProvider;

/// Reactive state of one relay card.
#[derive(Debug, Clone, Copy)]
pub struct RelaySignals {
    /// `None` until the first status has been read.
    pub state: RwSignal<Option<RelayState>>,
    pub loading: RwSignal<bool>,
}

impl RelaySignals {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(None),
            loading: RwSignal::new(false),
        }
    }
}

impl Default for RelaySignals {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes controller output into the signals the components render.
pub struct SignalView {
    relays: Vec<RelaySignals>,
    dialogs: DialogProvider,
}

impl SignalView {
    /// `relays` is indexed by relay position, one entry per relay.
    pub fn new(relays: Vec<RelaySignals>, dialogs: DialogProvider) -> Self {
        Self { relays, dialogs }
    }

    fn relay(&self, relay: RelayId) -> Option<&RelaySignals> {
        self.relays.get(relay.index())
    }
}

impl PanelView for SignalView {
    fn show_state(&self, relay: RelayId, state: RelayState) {
        if let Some(signals) = self.relay(relay) {
            signals.state.set(Some(state));
        }
    }

    fn set_loading(&self, relay: RelayId, loading: bool) {
        if let Some(signals) = self.relay(relay) {
            signals.loading.set(loading);
        }
    }

    fn notify(&self, notification: Notification) {
        self.dialogs.push(notification);
    }
}

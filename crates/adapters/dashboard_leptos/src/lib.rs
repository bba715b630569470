//! # relaypanel-adapter-dashboard-leptos
//!
//! Browser rendition of the relay panel. The board's web controller serves
//! the compiled bundle, so requests go to paths relative to the page unless
//! `RELAYPANEL_BACKEND_URL` is set at build time. `RELAYPANEL_RELAY_COUNT`
//! and `RELAYPANEL_LOCALE` are read at build time as well.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use relaypanel_app::services::controller::{PanelConfig, RelayPanelController};
use relaypanel_domain::element::ElementMap;
use relaypanel_domain::labels::{Labels, Locale};
use relaypanel_domain::relay::RelayCount;

pub mod backend;
mod components;
pub mod timer;
pub mod view;

use backend::GlooBackend;
use components::{DialogHost, PanelControls, RelayCard, use_dialogs};
use timer::GlooTimer;
use view::{RelaySignals, SignalView};

/// The controller as wired in the browser.
pub type Panel = RelayPanelController<GlooBackend, SignalView, GlooTimer>;

/// Copyable handle to the controller for event handlers.
pub type PanelHandle = StoredValue<Rc<Panel>, LocalStorage>;

fn panel_config() -> PanelConfig {
    let relay_count = option_env!("RELAYPANEL_RELAY_COUNT")
        .and_then(|raw| raw.trim().parse::<u8>().ok())
        .and_then(|raw| RelayCount::new(raw).ok())
        .unwrap_or_default();
    let locale = option_env!("RELAYPANEL_LOCALE")
        .and_then(|raw| raw.parse::<Locale>().ok())
        .unwrap_or_default();
    PanelConfig {
        relay_count,
        labels: Labels::for_locale(locale),
        ..PanelConfig::default()
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <DialogHost>
            <RelayPanel/>
        </DialogHost>
    }
}

/// Relay cards and aggregate controls; loads every status once mounted.
#[component]
fn RelayPanel() -> impl IntoView {
    let config = panel_config();
    let elements = ElementMap::new(config.relay_count);
    let relays: Vec<RelaySignals> = config.relay_count.ids().map(|_| RelaySignals::new()).collect();
    let labels = StoredValue::new(config.labels.clone());
    let title = config.labels.app_title.clone();

    let view = SignalView::new(relays.clone(), use_dialogs());
    let backend = GlooBackend::new(option_env!("RELAYPANEL_BACKEND_URL").unwrap_or_default());
    let controller = Rc::new(RelayPanelController::new(backend, view, GlooTimer, config));
    let panel: PanelHandle = StoredValue::new_local(Rc::clone(&controller));

    spawn_local(async move {
        controller.start().await;
    });

    let cards = elements
        .iter()
        .cloned()
        .zip(relays)
        .map(|(elements, signals)| {
            view! { <RelayCard panel=panel elements=elements signals=signals labels=labels/> }
        })
        .collect_view();

    view! {
        <header>
            <h1>{title}</h1>
            <PanelControls panel=panel labels=labels/>
        </header>
        <main class="relay-grid">{cards}</main>
    }
}

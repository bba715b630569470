//! One card per relay: status, spinner and the per-relay buttons.

use leptos::prelude::*;
use relaypanel_app::services::click_guard::Control;
use relaypanel_domain::element::{RelayElements, StatusAppearance};
use relaypanel_domain::labels::Labels;
use relaypanel_domain::relay::RelayState;

use super::{ControlButton, Loading};
use crate::PanelHandle;
use crate::view::RelaySignals;

#[component]
pub fn RelayCard(
    panel: PanelHandle,
    elements: RelayElements,
    signals: RelaySignals,
    labels: StoredValue<Labels>,
) -> impl IntoView {
    let relay = elements.relay;
    let (title, on, off, controls) = labels.with_value(|labels| {
        (
            labels.relay_title(relay),
            labels.on.clone(),
            labels.off.clone(),
            labels.controls.clone(),
        )
    });

    let appearance = move || StatusAppearance::of_known(signals.state.get());
    let status_text = move || {
        signals
            .state
            .get()
            .map(|state| labels.with_value(|labels| labels.state(state).to_string()))
            .unwrap_or_default()
    };
    let card_class = move || {
        if signals.loading.get() {
            "relay-card loading"
        } else {
            "relay-card"
        }
    };

    view! {
        <div id=elements.card class=card_class>
            <h3 class="relay-title">{title}</h3>
            <div class="relay-status">
                <span id=elements.indicator class=move || appearance().indicator_class></span>
                <span id=elements.text class=move || appearance().text_class>
                    {status_text}
                </span>
            </div>
            <Show when=move || signals.loading.get()>
                <Loading/>
            </Show>
            <div class="relay-actions">
                <ControlButton
                    panel=panel
                    control=Control::Set(relay, RelayState::On)
                    label=on
                    class="btn btn-on"
                />
                <ControlButton
                    panel=panel
                    control=Control::Set(relay, RelayState::Off)
                    label=off
                    class="btn btn-off"
                />
                <ControlButton
                    panel=panel
                    control=Control::Toggle(relay)
                    label=controls.toggle
                    class="btn btn-toggle"
                />
                <ControlButton
                    panel=panel
                    control=Control::Status(relay)
                    label=controls.status
                    class="btn btn-status"
                />
                <ControlButton
                    panel=panel
                    control=Control::Reboot(relay)
                    label=controls.reboot
                    class="btn btn-reboot"
                />
            </div>
        </div>
    }
}

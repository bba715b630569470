//! Buttons acting on every relay at once.

use leptos::prelude::*;
use relaypanel_app::services::click_guard::Control;
use relaypanel_domain::labels::Labels;
use relaypanel_domain::relay::RelayState;

use super::ControlButton;
use crate::PanelHandle;

#[component]
pub fn PanelControls(panel: PanelHandle, labels: StoredValue<Labels>) -> impl IntoView {
    let controls = labels.with_value(|labels| labels.controls.clone());

    view! {
        <div class="panel-controls">
            <ControlButton
                panel=panel
                control=Control::SetAll(RelayState::On)
                label=controls.all_on
                class="btn btn-on"
            />
            <ControlButton
                panel=panel
                control=Control::SetAll(RelayState::Off)
                label=controls.all_off
                class="btn btn-off"
            />
            <ControlButton
                panel=panel
                control=Control::ToggleAll
                label=controls.toggle_all
                class="btn btn-toggle"
            />
        </div>
    }
}

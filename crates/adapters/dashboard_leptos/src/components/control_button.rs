//! Button that routes a click through the controller's cool-down.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use relaypanel_app::services::click_guard::Control;

use crate::PanelHandle;

/// A panel button. It stays disabled for the cool-down that follows a click,
/// even while the action is still waiting on the board.
#[component]
pub fn ControlButton(
    panel: PanelHandle,
    control: Control,
    #[prop(into)] label: String,
    #[prop(into)] class: String,
) -> impl IntoView {
    let busy = RwSignal::new(false);

    let press = move |_| {
        let panel = panel.get_value();
        if !panel.try_press(control) {
            return;
        }
        busy.set(true);

        let action = Rc::clone(&panel);
        spawn_local(async move {
            action.dispatch(control).await;
        });
        spawn_local(async move {
            panel.cool_down(control).await;
            busy.set(false);
        });
    };

    view! {
        <button
            class=class
            data-control=control.to_string()
            disabled=move || busy.get()
            on:click=press
        >
            {label}
        </button>
    }
}

//! Loading spinner component.

use leptos::prelude::*;

/// Spinner shown over a relay card while a request is in flight.
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            <span class="spinner"></span>
        </div>
    }
}

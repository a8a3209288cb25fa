//! Loading indicators.

use leptos::prelude::*;

/// Inline spinner with an optional caption.
#[component]
pub fn Spinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! {
        <div class="spinner-wrap" role="status">
            <span class="spinner" aria-hidden="true"></span>
            {label.map(|text| view! { <span class="spinner-wrap__label">{text}</span> })}
        </div>
    }
}

/// Full-screen overlay shown while a form submission is in flight.
#[component]
pub fn BusyOverlay(#[prop(into)] active: Signal<bool>, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <Show when=move || active.get()>
            <div class="busy-overlay">
                <Spinner label=label.clone() />
            </div>
        </Show>
    }
}

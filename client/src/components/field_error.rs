//! Inline validation message rendered under a form input.

use leptos::prelude::*;

use crate::util::validate::FieldErrors;

#[component]
pub fn FieldError(errors: RwSignal<FieldErrors>, field: &'static str) -> impl IntoView {
    move || {
        errors
            .get()
            .get(field)
            .map(|msg| view! { <p class="field-error">{msg.to_owned()}</p> })
    }
}

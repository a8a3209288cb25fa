//! Renders the global toast stack.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// Fixed-position stack; clicking a toast dismisses it.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-root" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|t| t.id
                children=move |t| {
                    let id = t.id;
                    view! {
                        <div
                            class=t.kind.class()
                            role="alert"
                            on:click=move |_| toasts.update(|s| s.dismiss(id))
                        >
                            {t.message}
                        </div>
                    }
                }
            />
        </div>
    }
}

//! Participant analytics: fees of each registered camp as a bar chart.

use leptos::prelude::*;

use crate::components::bar_chart::BarChart;
use crate::components::spinner::Spinner;
use crate::state::auth::AuthState;
use crate::state::registrations::{RegistrationsState, for_email};
use crate::state::toast::ToastState;

use super::loaders::load_registrations;

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let list = RwSignal::new(RegistrationsState::default());

    let email = auth.with_untracked(|a| a.email().unwrap_or_default().to_owned());
    load_registrations(list, toasts, "Failed to load analytics data.", move |items| for_email(&items, &email));

    view! {
        <section class="panel">
            <h2 class="panel__title">"Analytics"</h2>
            <Show when=move || !list.with(|s| s.loading) fallback=|| view! { <Spinner label="Loading analytics..." /> }>
                <Show
                    when=move || !list.with(|s| s.items.is_empty())
                    fallback=|| view! { <p class="empty-state">"No registered camps found."</p> }
                >
                    {move || view! { <BarChart rows=list.get().items /> }}
                </Show>
            </Show>
        </section>
    }
}

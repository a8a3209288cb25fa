//! Participant payment history.

use leptos::prelude::*;

use crate::components::spinner::Spinner;
use crate::state::auth::AuthState;
use crate::state::registrations::{self, RegistrationsState, for_user_id};
use crate::state::toast::ToastState;
use crate::util::format::{format_datetime, format_fees, or_na};

use super::loaders::load_registrations;

#[component]
pub fn PaymentHistoryPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let list = RwSignal::new(RegistrationsState::default());

    let uid = auth.with_untracked(|a| a.uid().unwrap_or_default().to_owned());
    load_registrations(list, toasts, "Failed to load payment history.", move |items| for_user_id(&items, &uid));

    view! {
        <section class="panel">
            <h2 class="panel__title">"Payment History"</h2>
            <Show when=move || !list.with(|s| s.loading) fallback=|| view! { <Spinner label="Loading payments..." /> }>
                <Show
                    when=move || !list.with(|s| s.items.is_empty())
                    fallback=|| view! { <p class="empty-state">"No payment history found."</p> }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Camp Name"</th>
                                <th>"Fees"</th>
                                <th>"Date & Time"</th>
                                <th>"Location"</th>
                                <th>"Healthcare Professional"</th>
                                <th>"Payment Status"</th>
                                <th>"Confirmation Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || list.get().items
                                key=|row| row.id.clone()
                                children=move |row| {
                                    let paid = registrations::is_paid(&row);
                                    let confirmed = registrations::is_confirmed(&row);
                                    view! {
                                        <tr>
                                            <td>{row.camp_name.clone()}</td>
                                            <td>{format_fees(row.camp_fees)}</td>
                                            <td>{format_datetime(&row.date_time)}</td>
                                            <td>{or_na(&row.location).to_owned()}</td>
                                            <td>{or_na(&row.healthcare_professional).to_owned()}</td>
                                            <td>
                                                <span class="badge" class:badge--success=paid class:badge--warning=!paid>
                                                    {row.payment_status.as_str()}
                                                </span>
                                            </td>
                                            <td>
                                                <span class="badge" class:badge--success=confirmed class:badge--muted=!confirmed>
                                                    {row.confirmation_status.as_str()}
                                                </span>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </Show>
        </section>
    }
}

//! Organizer view of every registration with confirm and cancel actions.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::spinner::Spinner;
use crate::net::types::Registration;
use crate::state::registrations::{self, RegistrationsState};
use crate::state::toast::{self, ToastState};
use crate::util::format::format_fees;

use super::loaders::load_registrations;

pub const PAYMENT_REQUIRED_MESSAGE: &str = "Cannot confirm: Payment is not completed.";

#[component]
pub fn ManageRegistrationsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let list = RwSignal::new(RegistrationsState::default());
    let pending_cancel = RwSignal::new(None::<Registration>);
    let cancelling = RwSignal::new(false);

    load_registrations(list, toasts, "Failed to load registrations.", |items| items);

    let confirm = Callback::new(move |row: Registration| {
        if !registrations::is_paid(&row) {
            toast::error(toasts, PAYMENT_REQUIRED_MESSAGE);
            return;
        }
        if !registrations::can_confirm(&row) {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::confirm_registration(&row.id).await {
                Ok(()) => {
                    list.update(|s| {
                        s.mark_confirmed(&row.id);
                    });
                    toast::success(toasts, "Registration confirmed successfully!");
                }
                Err(e) => {
                    leptos::logging::warn!("confirm registration failed: {e}");
                    toast::error(toasts, "Failed to confirm registration.");
                }
            }
        });
    });

    let cancel = Callback::new(move |()| {
        let Some(row) = pending_cancel.get_untracked() else {
            return;
        };
        cancelling.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_registration(&row.id).await {
                Ok(()) => {
                    list.update(|s| s.remove(&row.id));
                    toast::success(toasts, "Registration cancelled successfully!");
                }
                Err(e) => {
                    leptos::logging::warn!("cancel registration failed: {e}");
                    toast::error(toasts, "Failed to cancel registration.");
                }
            }
            cancelling.set(false);
            pending_cancel.set(None);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = row;
    });

    view! {
        <section class="panel">
            <h2 class="panel__title">"Manage Registered Camps"</h2>
            <Show when=move || !list.with(|s| s.loading) fallback=|| view! { <Spinner label="Loading registrations..." /> }>
                <Show
                    when=move || !list.with(|s| s.items.is_empty())
                    fallback=|| view! { <p class="empty-state">"No registrations found."</p> }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Camp Name"</th>
                                <th>"Camp Fees"</th>
                                <th>"Participant"</th>
                                <th>"Payment Status"</th>
                                <th>"Confirmation Status"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || list.get().items
                                key=|row| (row.id.clone(), row.payment_status, row.confirmation_status)
                                children=move |row| {
                                    let paid = registrations::is_paid(&row);
                                    let confirmed = registrations::is_confirmed(&row);
                                    let cancellable = registrations::can_cancel_as_admin(&row);
                                    let confirm_target = row.clone();
                                    let cancel_target = row.clone();
                                    view! {
                                        <tr>
                                            <td>{row.camp_name.clone()}</td>
                                            <td>{format_fees(row.camp_fees)}</td>
                                            <td>{row.user_email.clone()}</td>
                                            <td>
                                                <span class="badge" class:badge--success=paid class:badge--warning=!paid>
                                                    {row.payment_status.as_str()}
                                                </span>
                                            </td>
                                            <td>
                                                <button
                                                    class="btn btn--small"
                                                    class:btn--success=confirmed
                                                    disabled=confirmed
                                                    on:click=move |_| confirm.run(confirm_target.clone())
                                                >
                                                    {row.confirmation_status.as_str()}
                                                </button>
                                            </td>
                                            <td class="table__actions">
                                                <button
                                                    class="btn btn--small btn--danger"
                                                    disabled=!cancellable
                                                    on:click=move |_| pending_cancel.set(Some(cancel_target.clone()))
                                                >
                                                    "Cancel"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </Show>

            <Show when=move || pending_cancel.with(Option::is_some)>
                <ConfirmDialog
                    title="Cancel Registration"
                    message="Are you sure you want to cancel this registration?"
                    confirm_label="Yes, cancel"
                    danger=true
                    busy=cancelling
                    on_confirm=cancel
                    on_cancel=Callback::new(move |()| pending_cancel.set(None))
                />
            </Show>
        </section>
    }
}

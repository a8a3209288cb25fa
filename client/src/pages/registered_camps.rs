//! Participant's registered camps: pay, cancel, and leave feedback.
//!
//! SYSTEM CONTEXT
//! ==============
//! Paying marks the registration first and posts the receipt second. A
//! receipt failure after the mark is reported but not rolled back.

#[cfg(test)]
#[path = "registered_camps_test.rs"]
mod registered_camps_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::field_error::FieldError;
use crate::components::spinner::Spinner;
use crate::components::star_rating::{StarInput, is_valid_rating};
use crate::net::types::{Feedback, Registration};
use crate::state::auth::AuthState;
use crate::state::registrations::{self, RegistrationsState, for_email};
#[cfg(feature = "hydrate")]
use crate::state::toast;
use crate::state::toast::ToastState;
use crate::util::format::format_fees;
use crate::util::validate::FieldErrors;

use super::loaders::load_registrations;

/// Toast text after a successful payment.
#[must_use]
pub fn payment_message(transaction_id: &str) -> String {
    format!("Payment successful! Transaction ID: {transaction_id}")
}

/// Check a feedback submission for `registration`.
///
/// # Errors
///
/// Returns a message for the text and for the rating when either is missing.
pub fn validate_feedback(
    registration: &Registration,
    text: &str,
    rating: u32,
    date: String,
) -> Result<Feedback, FieldErrors> {
    let mut errors = FieldErrors::new();
    errors.require("feedback", text, "Feedback is required");
    if !is_valid_rating(rating) {
        errors.add("rating", "Please select a rating between 1 and 5");
    }
    errors.into_result(Feedback {
        id: String::new(),
        camp_id: registration.camp_id.clone(),
        camp_name: registration.camp_name.clone(),
        user_email: registration.user_email.clone(),
        feedback: text.trim().to_owned(),
        rating,
        date,
    })
}

#[component]
pub fn RegisteredCampsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let list = RwSignal::new(RegistrationsState::default());

    let pending_pay = RwSignal::new(None::<Registration>);
    let paying = RwSignal::new(false);
    let pending_cancel = RwSignal::new(None::<Registration>);
    let cancelling = RwSignal::new(false);
    let feedback_for = RwSignal::new(None::<Registration>);

    let email = auth.with_untracked(|a| a.email().unwrap_or_default().to_owned());
    load_registrations(list, toasts, "Failed to load registered camps.", move |items| for_email(&items, &email));

    let pay = Callback::new(move |()| {
        let Some(row) = pending_pay.get_untracked() else {
            return;
        };
        paying.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::mark_registration_paid(&row.id).await {
                Ok(()) => {
                    list.update(|s| {
                        s.mark_paid(&row.id);
                    });
                    let transaction_id = registrations::generate_transaction_id();
                    let receipt = registrations::transaction_for(
                        &row,
                        transaction_id.clone(),
                        crate::util::format::now_iso(),
                    );
                    match crate::net::api::create_transaction(&receipt).await {
                        Ok(()) => toast::success(toasts, payment_message(&transaction_id)),
                        Err(e) => {
                            leptos::logging::warn!("transaction record failed: {e}");
                            toast::error(toasts, format!("Payment failed: {e}"));
                        }
                    }
                }
                Err(e) => toast::error(toasts, format!("Payment failed: {e}")),
            }
            paying.set(false);
            pending_pay.set(None);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = row;
    });

    let cancel = Callback::new(move |()| {
        let Some(row) = pending_cancel.get_untracked() else {
            return;
        };
        if !registrations::can_cancel_as_participant(&row) {
            pending_cancel.set(None);
            return;
        }
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
    });

    view! {
        <section class="panel">
            <h2 class="panel__title">"Registered Camps"</h2>
            <Show when=move || !list.with(|s| s.loading) fallback=|| view! { <Spinner label="Loading registered camps..." /> }>
                <Show
                    when=move || !list.with(|s| s.items.is_empty())
                    fallback=|| view! { <p class="empty-state">"You have not registered for any camps yet."</p> }
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
                                    let payable = registrations::can_pay(&row);
                                    let cancellable = registrations::can_cancel_as_participant(&row);
                                    let reviewable = registrations::can_leave_feedback(&row);
                                    let pay_target = row.clone();
                                    let cancel_target = row.clone();
                                    let feedback_target = row.clone();
                                    view! {
                                        <tr>
                                            <td>{row.camp_name.clone()}</td>
                                            <td>{format_fees(row.camp_fees)}</td>
                                            <td>{row.participant_name.clone()}</td>
                                            <td>
                                                <Show
                                                    when=move || payable
                                                    fallback=|| view! { <span class="badge badge--success">"Paid"</span> }
                                                >
                                                    <button
                                                        class="btn btn--small btn--primary"
                                                        on:click={
                                                            let target = pay_target.clone();
                                                            move |_| pending_pay.set(Some(target.clone()))
                                                        }
                                                    >
                                                        "Pay"
                                                    </button>
                                                </Show>
                                            </td>
                                            <td>{row.confirmation_status.as_str()}</td>
                                            <td class="table__actions">
                                                <button
                                                    class="btn btn--small btn--danger"
                                                    disabled=!cancellable
                                                    on:click=move |_| pending_cancel.set(Some(cancel_target.clone()))
                                                >
                                                    "Cancel"
                                                </button>
                                                <Show when=move || reviewable>
                                                    <button
                                                        class="btn btn--small"
                                                        on:click={
                                                            let target = feedback_target.clone();
                                                            move |_| feedback_for.set(Some(target.clone()))
                                                        }
                                                    >
                                                        "Feedback"
                                                    </button>
                                                </Show>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </Show>

            <Show when=move || pending_pay.with(Option::is_some)>
                <ConfirmDialog
                    title="Confirm Payment"
                    message={
                        pending_pay
                            .get_untracked()
                            .map(|r| format!("Pay {} for {}?", format_fees(r.camp_fees), r.camp_name))
                            .unwrap_or_default()
                    }
                    confirm_label="Pay"
                    busy=paying
                    on_confirm=pay
                    on_cancel=Callback::new(move |()| pending_pay.set(None))
                />
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

            {move || {
                feedback_for
                    .get()
                    .map(|row| {
                        view! {
                            <FeedbackDialog
                                registration=row
                                on_close=Callback::new(move |()| feedback_for.set(None))
                            />
                        }
                    })
            }}
        </section>
    }
}

#[component]
fn FeedbackDialog(registration: Registration, on_close: Callback<()>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let text = RwSignal::new(String::new());
    let rating = RwSignal::new(0_u32);
    let errors = RwSignal::new(FieldErrors::new());
    let submitting = RwSignal::new(false);
    let camp_name = registration.camp_name.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let feedback = match validate_feedback(
            &registration,
            &text.get_untracked(),
            rating.get_untracked(),
            crate::util::format::now_iso(),
        ) {
            Ok(feedback) => feedback,
            Err(found) => {
                errors.set(found);
                return;
            }
        };
        errors.set(FieldErrors::new());
        submitting.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_feedback(&feedback).await {
                Ok(()) => {
                    toast::success(toasts, "Feedback submitted successfully!");
                    on_close.run(());
                }
                Err(e) => toast::error(toasts, format!("Failed to submit feedback: {e}")),
            }
            submitting.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (feedback, toasts);
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{format!("Feedback for {camp_name}")}</h2>
                <form class="form" on:submit=on_submit>
                    <label class="form__field">
                        <span>"Your feedback"</span>
                        <textarea
                            rows="4"
                            prop:value=move || text.get()
                            on:input=move |ev| text.set(event_target_value(&ev))
                        ></textarea>
                        <FieldError errors=errors field="feedback" />
                    </label>
                    <div class="form__field">
                        <span>"Rating"</span>
                        <StarInput value=rating />
                        <FieldError errors=errors field="rating" />
                    </div>
                    <div class="form__actions">
                        <button type="button" class="btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Submitting..." } else { "Submit" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

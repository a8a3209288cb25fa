//! Single camp view and the "Join Camp" registration modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Joining writes two remote records in sequence: the registration itself,
//! then the camp's bumped participant count. The local camp copy and the
//! shared catalog are only incremented after both succeed.

#[cfg(test)]
#[path = "camp_detail_test.rs"]
mod camp_detail_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::camp_card::PLACEHOLDER_IMAGE;
use crate::components::field_error::FieldError;
use crate::components::spinner::Spinner;
use crate::net::types::{Camp, ConfirmationStatus, Gender, PaymentStatus, Registration, SessionUser};
use crate::state::auth::AuthState;
use crate::state::camps::CampsState;
use crate::state::toast::{self, ToastState};
use crate::util::format::{format_datetime, format_fees, or_na};
use crate::util::validate::{self, FieldErrors};

const PHONE_PATTERN_MESSAGE: &str = "Enter a valid phone number (e.g., +1234567890)";

/// Raw join-form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JoinDraft {
    pub age: String,
    pub phone: String,
    pub gender: String,
    pub emergency_contact: String,
}

/// Join-form inputs after validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JoinDetails {
    pub age: u32,
    pub phone: String,
    pub gender: Gender,
    pub emergency_contact: String,
}

impl JoinDraft {
    /// # Errors
    ///
    /// Returns the message for each failing field.
    pub fn validate(&self) -> Result<JoinDetails, FieldErrors> {
        let mut errors = FieldErrors::new();

        errors.require("age", &self.age, "Age is required");
        let age = validate::parse_age(&self.age);
        if !self.age.trim().is_empty() && age.is_none() {
            errors.add("age", "Age must be at least 1");
        }

        errors.require("phone", &self.phone, "Phone number is required");
        if !self.phone.trim().is_empty() && !validate::is_valid_phone(&self.phone) {
            errors.add("phone", PHONE_PATTERN_MESSAGE);
        }

        let gender = Gender::parse(self.gender.trim());
        if gender.is_none() {
            errors.add("gender", "Gender is required");
        }

        errors.require("emergencyContact", &self.emergency_contact, "Emergency contact is required");
        if !self.emergency_contact.trim().is_empty() && !validate::is_valid_phone(&self.emergency_contact) {
            errors.add("emergencyContact", PHONE_PATTERN_MESSAGE);
        }

        match (age, gender) {
            (Some(age), Some(gender)) if errors.is_empty() => Ok(JoinDetails {
                age,
                phone: self.phone.trim().to_owned(),
                gender,
                emergency_contact: self.emergency_contact.trim().to_owned(),
            }),
            _ => Err(errors),
        }
    }
}

/// New unpaid, pending registration of `user` for `camp`.
#[must_use]
pub fn registration_for(
    camp: &Camp,
    user: &SessionUser,
    participant_name: &str,
    details: JoinDetails,
    registered_at: String,
) -> Registration {
    Registration {
        id: String::new(),
        camp_id: camp.id.clone(),
        camp_name: camp.camp_name.clone(),
        user_id: user.uid.clone(),
        user_email: user.email.clone(),
        participant_name: participant_name.to_owned(),
        camp_fees: camp.camp_fees,
        location: camp.location.clone(),
        healthcare_professional: camp.healthcare_professional.clone(),
        date_time: camp.date_time.clone(),
        age: Some(details.age),
        phone: details.phone,
        gender: details.gender.as_str().to_owned(),
        emergency_contact: details.emergency_contact,
        payment_status: PaymentStatus::Unpaid,
        confirmation_status: ConfirmationStatus::Pending,
        registration_date: registered_at,
    }
}

#[component]
pub fn CampDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let camps = expect_context::<RwSignal<CampsState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    let camp_id = move || params.with(|p| p.get("id").unwrap_or_default());
    let camp = RwSignal::new(None::<Camp>);
    let loading = RwSignal::new(true);
    let modal_open = RwSignal::new(false);

    Effect::new(move || {
        let id = camp_id();
        if let Some(cached) = camps.with_untracked(|s| s.find(&id).cloned()) {
            camp.set(Some(cached));
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_camp(&id).await {
                Ok(fetched) if !fetched.id.is_empty() => {
                    camps.update(|s| s.upsert(fetched.clone()));
                    camp.set(Some(fetched));
                }
                Ok(_) => {}
                Err(e) => leptos::logging::warn!("camp {id} lookup failed: {e}"),
            }
            loading.set(false);
        });
    });

    let on_join = move |_| {
        if auth.with_untracked(|a| a.user.is_none()) {
            toast::error(toasts, "Please log in to join a camp.");
            navigate("/login", NavigateOptions::default());
            return;
        }
        modal_open.set(true);
    };

    let on_joined = Callback::new(move |camp_id: String| {
        camp.update(|c| {
            if let Some(c) = c.as_mut() {
                c.participant_count = c.participant_count.saturating_add(1);
            }
        });
        camps.update(|s| {
            s.increment_participants(&camp_id);
        });
        modal_open.set(false);
    });

    view! {
        <div class="camp-detail-page">
            {move || match camp.get() {
                None if loading.get() => view! { <Spinner label="Loading camp..." /> }.into_any(),
                None => view! { <p class="empty-state">"Camp not found."</p> }.into_any(),
                Some(c) => {
                    let image = if c.image.trim().is_empty() { PLACEHOLDER_IMAGE.to_owned() } else { c.image.clone() };
                    view! {
                        <article class="camp-detail">
                            <h1 class="page-title">{c.camp_name.clone()}</h1>
                            <img class="camp-detail__image" src=image alt=c.camp_name.clone() />
                            <dl class="camp-detail__facts">
                                <dt>"Camp Fees:"</dt>
                                <dd>{format_fees(c.camp_fees)}</dd>
                                <dt>"Date & Time:"</dt>
                                <dd>{format_datetime(&c.date_time)}</dd>
                                <dt>"Location:"</dt>
                                <dd>{or_na(&c.location).to_owned()}</dd>
                                <dt>"Healthcare Professional:"</dt>
                                <dd>{or_na(&c.healthcare_professional).to_owned()}</dd>
                                <dt>"Participant Count:"</dt>
                                <dd>{c.participant_count}</dd>
                                <dt>"Description:"</dt>
                                <dd>{or_na(&c.description).to_owned()}</dd>
                            </dl>
                            <button class="btn btn--primary" on:click=on_join.clone()>
                                "Join Camp"
                            </button>
                        </article>
                    }
                        .into_any()
                }
            }}
            <Show when=move || modal_open.get()>
                {move || {
                    camp.get()
                        .map(|c| {
                            view! {
                                <JoinCampDialog
                                    camp=c
                                    on_cancel=Callback::new(move |()| modal_open.set(false))
                                    on_joined=on_joined
                                />
                            }
                        })
                }}
            </Show>
        </div>
    }
}

/// Registration modal with read-only camp facts and participant inputs.
#[component]
fn JoinCampDialog(camp: Camp, on_cancel: Callback<()>, on_joined: Callback<String>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let draft = RwSignal::new(JoinDraft::default());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);

    let participant_name = auth.with_untracked(AuthState::display_name);
    let participant_email = auth.with_untracked(|a| a.email().unwrap_or_default().to_owned());
    let camp_for_submit = camp.clone();
    let name_for_submit = participant_name.clone();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let details = match draft.get_untracked().validate() {
            Ok(details) => {
                errors.set(FieldErrors::new());
                details
            }
            Err(found) => {
                errors.set(found);
                return;
            }
        };
        let Some(user) = auth.with_untracked(|a| a.user.clone()) else {
            toast::error(toasts, "Please log in to join a camp.");
            return;
        };
        let registration = registration_for(
            &camp_for_submit,
            &user,
            &name_for_submit,
            details,
            crate::util::format::now_iso(),
        );
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let camp_id = camp_for_submit.id.clone();
            let next_count = camp_for_submit.participant_count.saturating_add(1);
            leptos::task::spawn_local(async move {
                let result = async {
                    crate::net::api::create_registration(&registration).await?;
                    crate::net::api::set_participant_count(&camp_id, next_count).await
                }
                .await;
                busy.set(false);
                match result {
                    Ok(()) => {
                        toast::success(toasts, "Successfully registered for the camp!");
                        on_joined.run(camp_id);
                    }
                    Err(e) => toast::error(toasts, format!("Failed to register: {e}")),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (registration, on_joined);
        }
    };

    let readonly = move |label: &'static str, value: String| {
        view! {
            <label class="form__field">
                <span class="form__label">{label}</span>
                <input class="form__input" type="text" readonly=true prop:value=value />
            </label>
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>"Join Camp"</h2>
                <form class="form" on:submit=submit>
                    {readonly("Camp Name", camp.camp_name.clone())}
                    {readonly("Camp Fees", format_fees(camp.camp_fees))}
                    {readonly("Location", camp.location.clone())}
                    {readonly("Healthcare Professional", camp.healthcare_professional.clone())}
                    {readonly("Participant Name", participant_name)}
                    {readonly("Participant Email", participant_email)}
                    <label class="form__field">
                        <span class="form__label">"Age"</span>
                        <input
                            class="form__input"
                            type="number"
                            min="1"
                            prop:value=move || draft.with(|d| d.age.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.age = value);
                            }
                        />
                        <FieldError errors=errors field="age" />
                    </label>
                    <label class="form__field">
                        <span class="form__label">"Phone Number"</span>
                        <input
                            class="form__input"
                            type="text"
                            prop:value=move || draft.with(|d| d.phone.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.phone = value);
                            }
                        />
                        <FieldError errors=errors field="phone" />
                    </label>
                    <label class="form__field">
                        <span class="form__label">"Gender"</span>
                        <select
                            class="form__input"
                            prop:value=move || draft.with(|d| d.gender.clone())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.gender = value);
                            }
                        >
                            <option value="">"Select Gender"</option>
                            {Gender::ALL
                                .into_iter()
                                .map(|g| view! { <option value=g.as_str()>{g.as_str()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                        <FieldError errors=errors field="gender" />
                    </label>
                    <label class="form__field">
                        <span class="form__label">"Emergency Contact"</span>
                        <input
                            class="form__input"
                            type="text"
                            prop:value=move || draft.with(|d| d.emergency_contact.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.emergency_contact = value);
                            }
                        />
                        <FieldError errors=errors field="emergencyContact" />
                    </label>
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                            {move || if busy.get() { "Submitting..." } else { "Register" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

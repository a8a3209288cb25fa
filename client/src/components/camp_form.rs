//! Camp editor shared by "Add A Camp" and the manage-camps update dialog.
//!
//! The form edits a [`CampDraft`] of raw input strings; [`CampDraft::validate`]
//! turns it into a [`Camp`] or a set of per-field messages.

#[cfg(test)]
#[path = "camp_form_test.rs"]
mod camp_form_test;

use chrono::NaiveDateTime;
use leptos::prelude::*;

use crate::components::field_error::FieldError;
use crate::net::types::Camp;
use crate::util::format::to_datetime_local_input;
use crate::util::validate::{self, FieldErrors};

pub const DEFAULT_DESCRIPTION: &str = "Join us for an exciting camp experience!";

/// Raw form values as typed by the organizer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CampDraft {
    pub camp_name: String,
    pub image: String,
    pub camp_fees: String,
    pub date_time: String,
    pub location: String,
    pub healthcare_professional: String,
    pub description: String,
}

impl Default for CampDraft {
    fn default() -> Self {
        Self {
            camp_name: String::new(),
            image: String::new(),
            camp_fees: String::new(),
            date_time: String::new(),
            location: String::new(),
            healthcare_professional: String::new(),
            description: DEFAULT_DESCRIPTION.to_owned(),
        }
    }
}

impl CampDraft {
    /// Prefill from an existing camp; the date is reduced to `YYYY-MM-DDTHH:MM`.
    #[must_use]
    pub fn from_camp(camp: &Camp) -> Self {
        Self {
            camp_name: camp.camp_name.clone(),
            image: camp.image.clone(),
            camp_fees: camp.camp_fees.to_string(),
            date_time: to_datetime_local_input(&camp.date_time),
            location: camp.location.clone(),
            healthcare_professional: camp.healthcare_professional.clone(),
            description: camp.description.clone(),
        }
    }

    /// Check every field against `now`. The returned camp has no id and a
    /// zero participant count; callers fill those in.
    ///
    /// # Errors
    ///
    /// Returns the message for each failing field.
    pub fn validate(&self, now: NaiveDateTime) -> Result<Camp, FieldErrors> {
        let mut errors = FieldErrors::new();

        errors.require("campName", &self.camp_name, "Camp name is required");

        errors.require("image", &self.image, "Image URL is required");
        if !self.image.trim().is_empty() && !validate::is_valid_url(&self.image) {
            errors.add("image", "Please enter a valid URL (e.g., https://example.com/image.jpg)");
        }

        errors.require("campFees", &self.camp_fees, "Camp fees are required");
        let fees = validate::parse_fees(&self.camp_fees);
        if !self.camp_fees.trim().is_empty() && fees.is_none() {
            errors.add("campFees", "Fees cannot be negative");
        }

        errors.require("dateTime", &self.date_time, "Date and time are required");
        if !self.date_time.trim().is_empty() && !validate::is_future(&self.date_time, now) {
            errors.add("dateTime", "Date and time must be in the future");
        }

        errors.require("location", &self.location, "Location is required");
        errors.require(
            "healthcareProfessional",
            &self.healthcare_professional,
            "Healthcare professional name is required",
        );
        errors.require("description", &self.description, "Description is required");

        errors.into_result(Camp {
            id: String::new(),
            camp_name: self.camp_name.trim().to_owned(),
            image: self.image.trim().to_owned(),
            camp_fees: fees.unwrap_or_default(),
            date_time: self.date_time.trim().to_owned(),
            location: self.location.trim().to_owned(),
            healthcare_professional: self.healthcare_professional.trim().to_owned(),
            participant_count: 0,
            description: self.description.trim().to_owned(),
        })
    }
}

/// Text input bound to one draft field.
#[component]
fn DraftInput(
    draft: RwSignal<CampDraft>,
    errors: RwSignal<FieldErrors>,
    field: &'static str,
    #[prop(into)] label: String,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional, into)] placeholder: String,
    get: fn(&CampDraft) -> &String,
    set: fn(&mut CampDraft) -> &mut String,
) -> impl IntoView {
    view! {
        <label class="form__field">
            <span class="form__label">{label}</span>
            <input
                class="form__input"
                class:form__input--invalid=move || errors.get().has(field)
                type=input_type
                step=(input_type == "number").then_some("0.01")
                placeholder=placeholder
                prop:value=move || draft.with(|d| get(d).clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| *set(d) = value);
                }
            />
            <FieldError errors=errors field=field />
        </label>
    }
}

#[component]
pub fn CampForm(
    draft: RwSignal<CampDraft>,
    errors: RwSignal<FieldErrors>,
    #[prop(into)] submit_label: String,
    #[prop(into)] busy: Signal<bool>,
    on_submit: Callback<()>,
    #[prop(optional)] on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <form
            class="form camp-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                if !busy.get_untracked() {
                    on_submit.run(());
                }
            }
        >
            <DraftInput
                draft=draft
                errors=errors
                field="campName"
                label="Camp Name"
                placeholder="Enter camp name"
                get=|d| &d.camp_name
                set=|d| &mut d.camp_name
            />
            <DraftInput
                draft=draft
                errors=errors
                field="image"
                label="Image URL"
                placeholder="Enter image URL"
                get=|d| &d.image
                set=|d| &mut d.image
            />
            <DraftInput
                draft=draft
                errors=errors
                field="campFees"
                label="Camp Fees ($)"
                input_type="number"
                placeholder="Enter camp fees"
                get=|d| &d.camp_fees
                set=|d| &mut d.camp_fees
            />
            <DraftInput
                draft=draft
                errors=errors
                field="dateTime"
                label="Date & Time"
                input_type="datetime-local"
                get=|d| &d.date_time
                set=|d| &mut d.date_time
            />
            <DraftInput
                draft=draft
                errors=errors
                field="location"
                label="Location"
                placeholder="Enter location"
                get=|d| &d.location
                set=|d| &mut d.location
            />
            <DraftInput
                draft=draft
                errors=errors
                field="healthcareProfessional"
                label="Healthcare Professional Name"
                placeholder="Enter healthcare professional name"
                get=|d| &d.healthcare_professional
                set=|d| &mut d.healthcare_professional
            />
            <label class="form__field">
                <span class="form__label">"Description"</span>
                <textarea
                    class="form__input form__textarea"
                    class:form__input--invalid=move || errors.get().has("description")
                    rows="4"
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.description = value);
                    }
                ></textarea>
                <FieldError errors=errors field="description" />
            </label>
            <div class="form__actions">
                {on_cancel
                    .map(|cancel| {
                        view! {
                            <button type="button" class="btn" on:click=move |_| cancel.run(())>
                                "Cancel"
                            </button>
                        }
                    })}
                <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                    {move || if busy.get() { "Submitting...".to_owned() } else { submit_label.clone() }}
                </button>
            </div>
        </form>
    }
}

//! Profile card and editor shared by the organizer and participant
//! dashboards.
//!
//! SYSTEM CONTEXT
//! ==============
//! The record lives in the remote API under the account uid. Changing the
//! email goes through the identity bridge first so sign-in keeps working
//! with the new address; the record is only written once that succeeds.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::components::field_error::FieldError;
use crate::components::spinner::Spinner;
use crate::net::types::{ProfileUpdate, UserRecord};
use crate::state::auth::AuthState;
#[cfg(feature = "hydrate")]
use crate::state::toast;
use crate::state::toast::ToastState;
use crate::util::validate::{self, EMAIL_MESSAGE, FieldErrors, PHONE_MESSAGE, URL_MESSAGE};

pub const FALLBACK_NAME: &str = "Customer User";
pub const PLACEHOLDER_PHOTO: &str = "https://via.placeholder.com/150";
pub const NOT_PROVIDED: &str = "Not provided";

/// Raw editor values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub name: String,
    pub photo_url: String,
    pub email: String,
    pub phone: String,
}

impl ProfileDraft {
    #[must_use]
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            name: record.name.clone(),
            photo_url: record.photo_url.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
        }
    }

    /// # Errors
    ///
    /// Returns the message for each failing field.
    pub fn validate(&self) -> Result<ProfileUpdate, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name, "Name is required");
        errors.require("photoURL", &self.photo_url, "Photo URL is required");
        if !self.photo_url.trim().is_empty() && !validate::is_valid_url(&self.photo_url) {
            errors.add("photoURL", URL_MESSAGE);
        }
        errors.require("email", &self.email, "Email is required");
        if !self.email.trim().is_empty() && !validate::is_valid_email(&self.email) {
            errors.add("email", EMAIL_MESSAGE);
        }
        if !self.phone.trim().is_empty() && !validate::is_valid_phone(&self.phone) {
            errors.add("phone", PHONE_MESSAGE);
        }
        errors.into_result(ProfileUpdate {
            name: self.name.trim().to_owned(),
            photo_url: self.photo_url.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
        })
    }
}

/// Whether saving `update` must change the sign-in email first.
#[must_use]
pub fn email_changed(current: &str, update: &ProfileUpdate) -> bool {
    !current.trim().eq_ignore_ascii_case(update.email.trim())
}

/// Record shown when the profile lookup fails.
#[must_use]
pub fn fallback_record(auth: &AuthState) -> UserRecord {
    UserRecord {
        uid: auth.uid().unwrap_or_default().to_owned(),
        email: auth.email().unwrap_or_default().to_owned(),
        name: FALLBACK_NAME.to_owned(),
        photo_url: PLACEHOLDER_PHOTO.to_owned(),
        ..UserRecord::default()
    }
}

/// Record after a successful save.
#[must_use]
pub fn apply_update(record: &UserRecord, update: &ProfileUpdate) -> UserRecord {
    UserRecord {
        name: update.name.clone(),
        photo_url: update.photo_url.clone(),
        email: update.email.clone(),
        phone: update.phone.clone(),
        ..record.clone()
    }
}

/// The signed-in uid. Profile edits that rewrite `auth` leave it unchanged.
pub fn session_uid(auth: RwSignal<AuthState>) -> Memo<Option<String>> {
    Memo::new(move |_| auth.with(|a| a.uid().map(str::to_owned)))
}

#[component]
pub fn ProfilePage(#[prop(into)] heading: String) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let record = RwSignal::new(None::<UserRecord>);
    let editing = RwSignal::new(false);
    let draft = RwSignal::new(ProfileDraft::default());
    let errors = RwSignal::new(FieldErrors::new());
    let saving = RwSignal::new(false);

    let uid = session_uid(auth);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let Some(uid) = uid.get() else {
            return;
        };
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_user(&uid).await {
                Ok(found) => record.set(Some(found)),
                Err(e) => {
                    leptos::logging::warn!("profile load failed: {e}");
                    record.set(Some(auth.with_untracked(fallback_record)));
                    toast::error(toasts, "Failed to load profile. Please try again.");
                }
            }
        });
    });

    #[cfg(not(feature = "hydrate"))]
    let _ = (auth, toasts, uid);

    let start_edit = move |_| {
        if let Some(current) = record.get_untracked() {
            draft.set(ProfileDraft::from_record(&current));
            errors.set(FieldErrors::new());
            editing.set(true);
        }
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(current) = record.get_untracked() else {
            return;
        };
        let update = match draft.get_untracked().validate() {
            Ok(update) => update,
            Err(found) => {
                errors.set(found);
                return;
            }
        };
        errors.set(FieldErrors::new());
        saving.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if email_changed(&current.email, &update) {
                if let Err(e) = crate::net::identity::change_email(&update.email).await {
                    leptos::logging::warn!("email change failed: {e}");
                    toast::error(toasts, "Failed to update email in Firebase. You may need to re-authenticate.");
                    saving.set(false);
                    return;
                }
            }
            let uid = if current.uid.is_empty() {
                auth.with_untracked(|a| a.uid().unwrap_or_default().to_owned())
            } else {
                current.uid.clone()
            };
            match crate::net::api::update_user(&uid, &update).await {
                Ok(()) => {
                    let updated = apply_update(&current, &update);
                    auth.update(|a| {
                        if let Some(user) = a.user.as_mut() {
                            user.email.clone_from(&updated.email);
                        }
                        if a.profile.is_some() {
                            a.profile = Some(updated.clone());
                        }
                    });
                    record.set(Some(updated));
                    editing.set(false);
                    toast::success(toasts, "Profile updated successfully!");
                }
                Err(e) => toast::error(toasts, format!("Failed to update profile: {e}")),
            }
            saving.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (current, update);
    };

    view! {
        <section class="panel profile">
            <h2 class="panel__title">{heading}</h2>
            <Show when=move || record.with(Option::is_some) fallback=|| view! { <Spinner label="Loading profile..." /> }>
                <Show
                    when=move || editing.get()
                    fallback=move || {
                        let current = record.get().unwrap_or_default();
                        let photo = if current.photo_url.trim().is_empty() {
                            PLACEHOLDER_PHOTO.to_owned()
                        } else {
                            current.photo_url.clone()
                        };
                        let phone = if current.phone.trim().is_empty() {
                            NOT_PROVIDED.to_owned()
                        } else {
                            current.phone.clone()
                        };
                        view! {
                            <div class="profile__card">
                                <img class="profile__photo" src=photo alt="Profile" />
                                <h3>{current.name.clone()}</h3>
                                <p>{format!("Email: {}", current.email)}</p>
                                <p>{format!("Phone: {phone}")}</p>
                                <p>{format!("Role: {}", current.role.label())}</p>
                                <button class="btn btn--primary" on:click=start_edit>"Update Profile"</button>
                            </div>
                        }
                    }
                >
                    <form class="form" on:submit=on_save>
                        <label class="form__field">
                            <span>"Name"</span>
                            <input
                                prop:value=move || draft.with(|d| d.name.clone())
                                on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                            />
                            <FieldError errors=errors field="name" />
                        </label>
                        <label class="form__field">
                            <span>"Photo URL"</span>
                            <input
                                prop:value=move || draft.with(|d| d.photo_url.clone())
                                on:input=move |ev| draft.update(|d| d.photo_url = event_target_value(&ev))
                            />
                            <FieldError errors=errors field="photoURL" />
                        </label>
                        <label class="form__field">
                            <span>"Email"</span>
                            <input
                                type="email"
                                prop:value=move || draft.with(|d| d.email.clone())
                                on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                            />
                            <FieldError errors=errors field="email" />
                        </label>
                        <label class="form__field">
                            <span>"Phone"</span>
                            <input
                                type="tel"
                                placeholder="+1234567890"
                                prop:value=move || draft.with(|d| d.phone.clone())
                                on:input=move |ev| draft.update(|d| d.phone = event_target_value(&ev))
                            />
                            <FieldError errors=errors field="phone" />
                        </label>
                        <div class="form__actions">
                            <button type="submit" class="btn btn--primary" disabled=move || saving.get()>
                                {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                            </button>
                            <button type="button" class="btn" on:click=move |_| editing.set(false)>
                                "Cancel"
                            </button>
                        </div>
                    </form>
                </Show>
            </Show>
        </section>
    }
}

//! Account registration page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity bridge creates the account and opens a session; the page then
//! stores the profile record (name, photo, role) with the remote API so role
//! lookups work on the next sign-in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::spinner::BusyOverlay;
use crate::net::types::{Role, SessionUser, UserRecord};
use crate::state::auth::AuthState;
use crate::state::toast::{self, ToastState};
use crate::util::validate;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
struct RegisterInput {
    name: String,
    email: String,
    password: String,
    photo_url: String,
    role: Role,
}

fn validate_register_input(
    name: &str,
    email: &str,
    password: &str,
    photo_url: &str,
    role: Role,
) -> Result<RegisterInput, &'static str> {
    let (name, email, photo_url) = (name.trim(), email.trim(), photo_url.trim());
    if name.is_empty() || email.is_empty() {
        return Err("Enter your name and email.");
    }
    if !validate::is_valid_email(email) {
        return Err(validate::EMAIL_MESSAGE);
    }
    if !photo_url.is_empty() && !validate::is_valid_url(photo_url) {
        return Err(validate::URL_MESSAGE);
    }
    if !validate::is_strong_password(password) {
        return Err(validate::PASSWORD_RULE);
    }
    Ok(RegisterInput {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        photo_url: photo_url.to_owned(),
        role,
    })
}

/// Profile record stored for a new account.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn user_record_for(user: &SessionUser, input: &RegisterInput) -> UserRecord {
    UserRecord {
        id: String::new(),
        uid: user.uid.clone(),
        email: input.email.clone(),
        name: input.name.clone(),
        photo_url: input.photo_url.clone(),
        phone: String::new(),
        role: input.role,
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let photo_url = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Customer);
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = match validate_register_input(&name.get(), &email.get(), &password.get(), &photo_url.get(), role.get())
        {
            Ok(input) => input,
            Err(msg) => {
                error.set(msg.to_owned());
                if msg == validate::PASSWORD_RULE {
                    toast::error(toasts, "Invalid password!");
                }
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = async {
                    let user =
                        crate::net::identity::register(&input.name, &input.email, &input.password, &input.photo_url)
                            .await?;
                    let record = user_record_for(&user, &input);
                    crate::net::api::create_user(&record).await?;
                    Ok::<_, crate::net::error::ApiError>((user, record))
                }
                .await;
                match result {
                    Ok((user, record)) => {
                        auth.update(|a| {
                            a.user = Some(user);
                            a.profile = Some(record);
                            a.loading = false;
                        });
                        toast::success(toasts, "Registration successful!");
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(e) => {
                        error.set(e.to_string());
                        toast::error(toasts, "Registration failed!");
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (input, &navigate, auth);
        }
    };

    view! {
        <div class="auth-page">
            <BusyOverlay active=busy label="Creating account..." />
            <div class="auth-card" class:auth-card--busy=move || busy.get()>
                <h1>"Create Your Account"</h1>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-card__error">{move || error.get()}</p>
                </Show>
                <form class="form" on:submit=on_submit>
                    <label class="form__field">
                        <span class="form__label">"Full Name"</span>
                        <input
                            class="form__input"
                            type="text"
                            placeholder="Enter your full name"
                            required=true
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__field">
                        <span class="form__label">"Email"</span>
                        <input
                            class="form__input"
                            type="email"
                            placeholder="Enter your email"
                            required=true
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__field">
                        <span class="form__label">"Photo URL"</span>
                        <input
                            class="form__input"
                            type="url"
                            placeholder="Enter your photo URL (optional)"
                            prop:value=move || photo_url.get()
                            on:input=move |ev| photo_url.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__field">
                        <span class="form__label">"Role"</span>
                        <select
                            class="form__input"
                            prop:value=move || role.get().as_str()
                            on:change=move |ev| role.set(Role::from(Some(event_target_value(&ev))))
                        >
                            <option value=Role::Customer.as_str()>{Role::Customer.label()}</option>
                            <option value=Role::Admin.as_str()>{Role::Admin.label()}</option>
                        </select>
                    </label>
                    <label class="form__field">
                        <span class="form__label">"Password"</span>
                        <span class="form__password">
                            <input
                                class="form__input"
                                type=move || if show_password.get() { "text" } else { "password" }
                                placeholder="Create a password"
                                required=true
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="form__reveal"
                                aria-label="Toggle password visibility"
                                on:click=move |_| show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </span>
                    </label>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <div class="auth-card__divider"></div>
                <button
                    class="btn btn--block auth-card__google"
                    on:click=move |_| crate::net::identity::start_google_sign_in()
                >
                    "Sign up with Google"
                </button>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <a href="/login">"Log In"</a>
                </p>
            </div>
        </div>
    }
}

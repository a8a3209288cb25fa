//! Login page supporting email + password and Google sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::spinner::BusyOverlay;
use crate::state::auth::AuthState;
use crate::state::toast::{self, ToastState};
use crate::util::validate;

fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !validate::is_valid_email(email) {
        return Err(validate::EMAIL_MESSAGE);
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Message for the `?error=` code the federated callback redirects with.
fn oauth_error_message(code: &str) -> Option<&'static str> {
    match code {
        "" => None,
        "state" => Some("Google sign-in expired. Please try again."),
        "disabled" => Some("Google sign-in is not configured."),
        _ => Some("Google sign-in failed."),
    }
}

/// Show a federated callback failure inline and as a toast.
fn report_oauth_error(code: &str, error: RwSignal<String>, toasts: RwSignal<ToastState>) {
    if let Some(msg) = oauth_error_message(code) {
        error.set(msg.to_owned());
        toast::error(toasts, msg);
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    Effect::new(move || {
        let code = query.with(|q| q.get("error").unwrap_or_default());
        report_oauth_error(&code, error, toasts);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::identity::login(&email_value, &password_value).await {
                    Ok(user) => {
                        super::loaders::establish_session(auth, user).await;
                        toast::success(toasts, "Login successful!");
                        navigate("/", NavigateOptions::default());
                    }
                    Err(e) => {
                        error.set(e.to_string());
                        toast::error(toasts, "Login failed!");
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, &navigate, auth, toasts);
        }
    };

    view! {
        <div class="auth-page">
            <BusyOverlay active=busy label="Signing in..." />
            <div class="auth-card" class:auth-card--busy=move || busy.get()>
                <h1>"Welcome Back"</h1>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-card__error">{move || error.get()}</p>
                </Show>
                <form class="form" on:submit=on_submit>
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
                        <span class="form__label">"Password"</span>
                        <span class="form__password">
                            <input
                                class="form__input"
                                type=move || if show_password.get() { "text" } else { "password" }
                                placeholder="Enter your password"
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
                        "Log In"
                    </button>
                </form>
                <div class="auth-card__divider"></div>
                <button
                    class="btn btn--block auth-card__google"
                    on:click=move |_| crate::net::identity::start_google_sign_in()
                >
                    "Sign in with Google"
                </button>
                <p class="auth-card__switch">
                    "Don't have an account? "
                    <a href="/register">"Sign Up"</a>
                </p>
            </div>
        </div>
    }
}

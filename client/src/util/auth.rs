//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::state::toast::{self, ToastState};

pub const LOGIN_REQUIRED_MESSAGE: &str = "Please Login First to access this contents";

/// True once the session lookup finished without finding a user.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Toast and redirect to `/login` whenever auth has loaded and no user is
/// present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, toasts: RwSignal<ToastState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            toast::info(toasts, LOGIN_REQUIRED_MESSAGE);
            navigate("/login", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

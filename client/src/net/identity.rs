//! Calls into the server's identity bridge (`/auth/*`).
//!
//! The bridge keeps provider tokens in HttpOnly cookies, so the browser only
//! ever sees the [`SessionUser`] summary.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use super::error::ApiError;
use super::http::{self, BodyMethod};
use super::types::{EmailChangeRequest, LoginRequest, RegisterRequest, SessionUser};

pub const ME_PATH: &str = "/auth/me";
pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
pub const LOGOUT_PATH: &str = "/auth/logout";
pub const EMAIL_PATH: &str = "/auth/email";
/// Federated sign-in entry point; a full-page navigation, not a fetch.
pub const GOOGLE_PATH: &str = "/auth/google";

fn register_request(name: &str, email: &str, password: &str, photo_url: &str) -> RegisterRequest {
    let photo_url = photo_url.trim();
    RegisterRequest {
        name: name.trim().to_owned(),
        email: email.trim().to_owned(),
        password: password.to_owned(),
        photo_url: (!photo_url.is_empty()).then(|| photo_url.to_owned()),
    }
}

/// Fetch the signed-in account. `None` when signed out or on the server.
pub async fn fetch_session() -> Option<SessionUser> {
    match http::get_json::<SessionUser>(ME_PATH).await {
        Ok(user) => Some(user),
        Err(e) => {
            if !e.is_unauthorized() && e != ApiError::Unavailable {
                leptos::logging::warn!("session lookup failed: {e}");
            }
            None
        }
    }
}

/// Email + password sign-in.
///
/// # Errors
///
/// Returns an [`ApiError`] carrying the provider's user-facing reason.
pub async fn login(email: &str, password: &str) -> Result<SessionUser, ApiError> {
    let body = LoginRequest { email: email.trim().to_owned(), password: password.to_owned() };
    http::send_json(BodyMethod::Post, LOGIN_PATH, &body).await
}

/// Create an account and sign it in.
///
/// # Errors
///
/// Returns an [`ApiError`] carrying the provider's user-facing reason.
pub async fn register(name: &str, email: &str, password: &str, photo_url: &str) -> Result<SessionUser, ApiError> {
    let body = register_request(name, email, password, photo_url);
    http::send_json(BodyMethod::Post, REGISTER_PATH, &body).await
}

/// End the session and clear the bridge cookies.
///
/// # Errors
///
/// Returns an [`ApiError`] if the bridge could not be reached.
pub async fn logout() -> Result<(), ApiError> {
    http::post_empty(LOGOUT_PATH).await
}

/// Change the sign-in email of the current account.
///
/// # Errors
///
/// Returns an [`ApiError`], typically asking the user to sign in again.
pub async fn change_email(email: &str) -> Result<(), ApiError> {
    let body = EmailChangeRequest { email: email.trim().to_owned() };
    http::send_json_discard(BodyMethod::Put, EMAIL_PATH, &body).await
}

/// Leave the app for the federated provider's consent screen.
pub fn start_google_sign_in() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(GOOGLE_PATH);
        }
    }
}

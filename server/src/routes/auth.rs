//! Auth routes: password and Google sign-in, cookie sessions, email change.
//!
//! The browser never sees provider tokens. They live in HttpOnly cookies and
//! `/auth/me` answers with the account summary only.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use pulse_client::net::types::{EmailChangeRequest, LoginRequest, RegisterRequest, SessionUser};
use serde::Deserialize;
use time::Duration;

use crate::services::{google, users};
use crate::services::identity::{IdentityError, RefreshedTokens, identity_to_status};
use crate::state::AppState;

pub const ID_TOKEN_COOKIE: &str = "pulse_id_token";
pub const REFRESH_COOKIE: &str = "pulse_refresh_token";
pub const OAUTH_STATE_COOKIE: &str = "pulse_oauth_state";

const ID_TOKEN_MAX_AGE: Duration = Duration::hours(1);
const REFRESH_MAX_AGE: Duration = Duration::days(30);
const OAUTH_STATE_MAX_AGE: Duration = Duration::minutes(10);

fn cookie(name: &'static str, value: String, secure: bool, max_age: Duration) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(max_age)
        .build()
}

fn with_tokens(jar: CookieJar, tokens: RefreshedTokens, secure: bool) -> CookieJar {
    jar.add(cookie(ID_TOKEN_COOKIE, tokens.id_token, secure, ID_TOKEN_MAX_AGE))
        .add(cookie(REFRESH_COOKIE, tokens.refresh_token, secure, REFRESH_MAX_AGE))
}

fn without_tokens(jar: CookieJar, secure: bool) -> CookieJar {
    jar.add(cookie(ID_TOKEN_COOKIE, String::new(), secure, Duration::ZERO))
        .add(cookie(REFRESH_COOKIE, String::new(), secure, Duration::ZERO))
}

fn cookie_value(jar: &CookieJar, name: &str) -> Option<String> {
    jar.get(name)
        .map(Cookie::value)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

/// The id token presented by this request, if any.
pub(crate) fn id_token(jar: &CookieJar) -> Option<String> {
    cookie_value(jar, ID_TOKEN_COOKIE)
}

fn error_body(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(serde_json::json!({ "error": message.into() }))).into_response()
}

fn identity_error(err: &IdentityError) -> Response {
    error_body(identity_to_status(err), err.to_string())
}

fn login_error_redirect(reason: &str) -> Redirect {
    Redirect::temporary(&format!("/login?error={reason}"))
}

// =============================================================================
// PASSWORD SIGN-IN
// =============================================================================

/// `POST /auth/register`: create the account, set name/photo, sign in.
pub async fn register(State(state): State<AppState>, jar: CookieJar, Json(req): Json<RegisterRequest>) -> Response {
    let name = req.name.trim();
    let email = req.email.trim();
    if name.is_empty() || email.is_empty() || req.password.is_empty() {
        return error_body(StatusCode::BAD_REQUEST, "Name, email, and password are required.");
    }
    let photo_url = req.photo_url.as_deref().map(str::trim).filter(|p| !p.is_empty());

    let mut session = match state.identity.sign_up(email, &req.password).await {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!(error = %e, "sign-up failed");
            return identity_error(&e);
        }
    };

    match state
        .identity
        .update_profile(&session.id_token, Some(name), photo_url)
        .await
    {
        Ok(()) => {
            session.user.display_name = Some(name.to_owned());
            session.user.photo_url = photo_url.map(str::to_owned);
        }
        Err(e) => tracing::warn!(error = %e, uid = %session.user.uid, "profile update after sign-up failed"),
    }

    tracing::info!(uid = %session.user.uid, "account registered");
    let tokens = RefreshedTokens { id_token: session.id_token, refresh_token: session.refresh_token };
    let jar = with_tokens(jar, tokens, state.config.cookie_secure);
    (jar, Json(session.user)).into_response()
}

/// `POST /auth/login`: email + password sign-in.
pub async fn login(State(state): State<AppState>, jar: CookieJar, Json(req): Json<LoginRequest>) -> Response {
    let email = req.email.trim();
    if email.is_empty() || req.password.is_empty() {
        return error_body(StatusCode::BAD_REQUEST, "Email and password are required.");
    }

    match state.identity.sign_in_with_password(email, &req.password).await {
        Ok(session) => {
            tracing::info!(uid = %session.user.uid, "signed in");
            let tokens = RefreshedTokens { id_token: session.id_token, refresh_token: session.refresh_token };
            let jar = with_tokens(jar, tokens, state.config.cookie_secure);
            (jar, Json(session.user)).into_response()
        }
        Err(e) => {
            tracing::info!(error = %e, "sign-in rejected");
            identity_error(&e)
        }
    }
}

/// `POST /auth/logout`: clear the session cookies.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    (without_tokens(jar, state.config.cookie_secure), StatusCode::NO_CONTENT)
}

// =============================================================================
// SESSION LOOKUP
// =============================================================================

/// Resolve the cookie session, refreshing once when the id token expired.
/// The returned tokens are `Some` when cookies must be rewritten.
async fn resolve_session(
    state: &AppState,
    jar: &CookieJar,
) -> Result<(SessionUser, Option<RefreshedTokens>), IdentityError> {
    let expired = IdentityError::Provider { code: "TOKEN_EXPIRED".to_owned() };

    if let Some(token) = id_token(jar) {
        match state.identity.lookup(&token).await {
            Ok(user) => return Ok((user, None)),
            Err(e) if e.is_session_expired() => {}
            Err(e) => return Err(e),
        }
    }

    let refresh_token = cookie_value(jar, REFRESH_COOKIE).ok_or(expired)?;
    let tokens = state.identity.refresh(&refresh_token).await?;
    let user = state.identity.lookup(&tokens.id_token).await?;
    Ok((user, Some(tokens)))
}

/// `GET /auth/me`: current account or `401`.
pub async fn me(State(state): State<AppState>, jar: CookieJar) -> Response {
    let secure = state.config.cookie_secure;
    match resolve_session(&state, &jar).await {
        Ok((user, Some(tokens))) => (with_tokens(jar, tokens, secure), Json(user)).into_response(),
        Ok((user, None)) => Json(user).into_response(),
        Err(e) if e.is_session_expired() => {
            (without_tokens(jar, secure), StatusCode::UNAUTHORIZED).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "session lookup failed");
            identity_error(&e)
        }
    }
}

/// `PUT /auth/email`: change the sign-in email of the current account.
pub async fn change_email(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<EmailChangeRequest>,
) -> Response {
    let email = req.email.trim();
    if email.is_empty() {
        return error_body(StatusCode::BAD_REQUEST, "Email is required.");
    }
    let Some(token) = id_token(&jar) else {
        return error_body(StatusCode::UNAUTHORIZED, "Please sign in again.");
    };

    match state.identity.change_email(&token, email).await {
        Ok(tokens) => {
            let jar = with_tokens(jar, tokens, state.config.cookie_secure);
            (jar, StatusCode::NO_CONTENT).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "email change failed");
            identity_error(&e)
        }
    }
}

// =============================================================================
// GOOGLE
// =============================================================================

/// `GET /auth/google`: redirect to Google's consent screen.
pub async fn google_redirect(State(state): State<AppState>) -> Response {
    let Some(config) = &state.config.google else {
        return login_error_redirect("disabled").into_response();
    };

    let oauth_state = google::generate_state();
    let jar = CookieJar::new().add(cookie(
        OAUTH_STATE_COOKIE,
        oauth_state.clone(),
        state.config.cookie_secure,
        OAUTH_STATE_MAX_AGE,
    ));
    (jar, Redirect::temporary(&config.authorize_url(&oauth_state))).into_response()
}

#[derive(Deserialize)]
pub struct CallbackQuery {
    code: Option<String>,
    state: Option<String>,
}

/// `GET /auth/google/callback`: verify state, exchange code, sign in,
/// create the user record on first visit, set cookies, redirect to `/`.
/// Failures land on `/login?error=...`.
pub async fn google_callback(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<CallbackQuery>,
) -> Response {
    let Some(config) = &state.config.google else {
        return login_error_redirect("disabled").into_response();
    };
    let secure = state.config.cookie_secure;

    let expected = cookie_value(&jar, OAUTH_STATE_COOKIE);
    let jar = jar.add(cookie(OAUTH_STATE_COOKIE, String::new(), secure, Duration::ZERO));
    match (expected.as_deref(), params.state.as_deref()) {
        (Some(expected), Some(got)) if expected == got => {}
        _ => return (jar, login_error_redirect("state")).into_response(),
    }
    let Some(code) = params.code.as_deref().filter(|c| !c.is_empty()) else {
        return (jar, login_error_redirect("exchange")).into_response();
    };

    let google_id_token = match google::exchange_code(&state.http, config, code).await {
        Ok(token) => token,
        Err(e) => {
            tracing::error!(error = %e, "google code exchange failed");
            return (jar, login_error_redirect("exchange")).into_response();
        }
    };

    match state
        .identity
        .sign_in_with_google(&google_id_token, &config.redirect_uri)
        .await
    {
        Ok(session) => {
            tracing::info!(uid = %session.user.uid, "signed in with google");
            match users::ensure_user_record(&state.http, &state.config.api_url, &session.id_token, &session.user).await {
                Ok(true) => tracing::info!(uid = %session.user.uid, "created user record"),
                Ok(false) => {}
                Err(e) => tracing::warn!(uid = %session.user.uid, error = %e, "user record check failed"),
            }
            let tokens = RefreshedTokens { id_token: session.id_token, refresh_token: session.refresh_token };
            (with_tokens(jar, tokens, secure), Redirect::temporary("/")).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "identity idp sign-in failed");
            (jar, login_error_redirect("exchange")).into_response()
        }
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;

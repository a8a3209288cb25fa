//! Remote user records for accounts that first arrive through Google.
//!
//! Password sign-up posts its own `/users` record from the register page.
//! A Google account has no such step, so the callback creates the record
//! the first time the account signs in.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use pulse_client::net::types::SessionUser;
use reqwest::StatusCode;

/// Name stored when the Google profile carries none.
pub const FALLBACK_NAME: &str = "Google User";

#[derive(Debug, thiserror::Error)]
pub enum UserRecordError {
    #[error("user record request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("user record API returned {0}")]
    Status(StatusCode),
}

/// `POST /users` body for a federated account. Always a customer.
#[must_use]
pub fn federated_user_body(user: &SessionUser) -> serde_json::Value {
    let name = user
        .display_name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(FALLBACK_NAME);
    serde_json::json!({
        "uid": user.uid,
        "email": user.email,
        "name": name,
        "photoURL": user.photo_url.as_deref().unwrap_or_default(),
        "role": "customer",
    })
}

/// The records API answers an unknown uid with `404` or with an empty `200`.
#[must_use]
pub fn record_missing(status: StatusCode, body: &str) -> bool {
    status == StatusCode::NOT_FOUND || (status.is_success() && matches!(body.trim(), "" | "null" | "{}"))
}

/// Create the `/users` record for `user` unless one already exists.
/// Returns `true` when a record was created.
///
/// # Errors
///
/// Returns an error if either request fails or the API rejects it.
pub async fn ensure_user_record(
    http: &reqwest::Client,
    api_url: &str,
    id_token: &str,
    user: &SessionUser,
) -> Result<bool, UserRecordError> {
    let resp = http
        .get(format!("{api_url}/users/{}", user.uid))
        .bearer_auth(id_token)
        .send()
        .await?;
    let status = resp.status();
    let body = resp.text().await?;
    if !record_missing(status, &body) {
        return if status.is_success() { Ok(false) } else { Err(UserRecordError::Status(status)) };
    }

    let resp = http
        .post(format!("{api_url}/users"))
        .bearer_auth(id_token)
        .json(&federated_user_body(user))
        .send()
        .await?;
    if !resp.status().is_success() {
        return Err(UserRecordError::Status(resp.status()));
    }
    Ok(true)
}

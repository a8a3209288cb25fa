//! REST helpers for the remote camp API.
//!
//! Every path is reached through the server's `/api` forwarder, which adds
//! the session bearer token, so the browser never talks to the remote origin
//! directly.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` instead of panics; pages turn the error
//! text into a toast and keep whatever was already on screen.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::http::{self, BodyMethod};
use super::types::{Camp, CampUpdate, Feedback, InsertResult, ProfileUpdate, Registration, Transaction, UserRecord};

/// Prefix under which the server forwards to the remote API.
pub const API_PREFIX: &str = "/api";

fn camps_endpoint() -> String {
    format!("{API_PREFIX}/camps")
}

fn camp_endpoint(camp_id: &str) -> String {
    format!("{API_PREFIX}/camps/{camp_id}")
}

fn update_camp_endpoint(camp_id: &str) -> String {
    format!("{API_PREFIX}/update-camp/{camp_id}")
}

fn delete_camp_endpoint(camp_id: &str) -> String {
    format!("{API_PREFIX}/delete-camp/{camp_id}")
}

fn registrations_endpoint() -> String {
    format!("{API_PREFIX}/reg_camps")
}

fn registration_endpoint(registration_id: &str) -> String {
    format!("{API_PREFIX}/reg_camps/{registration_id}")
}

fn users_endpoint() -> String {
    format!("{API_PREFIX}/users")
}

fn user_endpoint(uid: &str) -> String {
    format!("{API_PREFIX}/users/{uid}")
}

fn feedbacks_endpoint() -> String {
    format!("{API_PREFIX}/feedbacks")
}

fn transactions_endpoint() -> String {
    format!("{API_PREFIX}/transactions")
}

fn participant_count_patch(count: u32) -> serde_json::Value {
    serde_json::json!({ "participantCount": count })
}

fn payment_patch() -> serde_json::Value {
    serde_json::json!({ "paymentStatus": "Paid" })
}

fn confirmation_patch() -> serde_json::Value {
    serde_json::json!({ "confirmationStatus": "Confirmed" })
}

// =============================================================================
// CAMPS
// =============================================================================

/// `GET /camps`: the full catalog in API order.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is not a camp list.
pub async fn fetch_camps() -> Result<Vec<Camp>, ApiError> {
    http::get_json(&camps_endpoint()).await
}

/// `GET /camps/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the camp does not exist.
pub async fn fetch_camp(camp_id: &str) -> Result<Camp, ApiError> {
    http::get_json(&camp_endpoint(camp_id)).await
}

/// `POST /camps`. Returns the new document id when the API reports it.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn create_camp(camp: &Camp) -> Result<Option<String>, ApiError> {
    let result: InsertResult = http::send_json(BodyMethod::Post, &camps_endpoint(), camp).await?;
    Ok(result.inserted_id)
}

/// `PUT /update-camp/{id}` with the full editable field set. The camp's own
/// `id` is never sent in the body.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn update_camp(camp_id: &str, camp: &Camp) -> Result<(), ApiError> {
    http::send_json_discard(BodyMethod::Put, &update_camp_endpoint(camp_id), &CampUpdate::from(camp)).await
}

/// `PUT /update-camp/{id}` touching only the participant counter.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn set_participant_count(camp_id: &str, count: u32) -> Result<(), ApiError> {
    http::send_json_discard(BodyMethod::Put, &update_camp_endpoint(camp_id), &participant_count_patch(count)).await
}

/// `DELETE /delete-camp/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn delete_camp(camp_id: &str) -> Result<(), ApiError> {
    http::delete(&delete_camp_endpoint(camp_id)).await
}

// =============================================================================
// REGISTRATIONS
// =============================================================================

/// `GET /reg_camps`: every registration; callers filter by user.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is malformed.
pub async fn fetch_registrations() -> Result<Vec<Registration>, ApiError> {
    http::get_json(&registrations_endpoint()).await
}

/// `POST /reg_camps`. Returns the new document id when the API reports it.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn create_registration(registration: &Registration) -> Result<Option<String>, ApiError> {
    let result: InsertResult = http::send_json(BodyMethod::Post, &registrations_endpoint(), registration).await?;
    Ok(result.inserted_id)
}

/// `PUT /reg_camps/{id}` marking the registration paid.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn mark_registration_paid(registration_id: &str) -> Result<(), ApiError> {
    http::send_json_discard(BodyMethod::Put, &registration_endpoint(registration_id), &payment_patch()).await
}

/// `PUT /reg_camps/{id}` marking the registration confirmed.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn confirm_registration(registration_id: &str) -> Result<(), ApiError> {
    http::send_json_discard(BodyMethod::Put, &registration_endpoint(registration_id), &confirmation_patch()).await
}

/// `DELETE /reg_camps/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn delete_registration(registration_id: &str) -> Result<(), ApiError> {
    http::delete(&registration_endpoint(registration_id)).await
}

// =============================================================================
// USERS
// =============================================================================

/// `GET /users/{uid}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or no record exists.
pub async fn fetch_user(uid: &str) -> Result<UserRecord, ApiError> {
    http::get_json(&user_endpoint(uid)).await
}

/// `POST /users` for a freshly registered account.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn create_user(user: &UserRecord) -> Result<(), ApiError> {
    http::send_json_discard(BodyMethod::Post, &users_endpoint(), user).await
}

/// `PUT /users/{uid}` from the profile editor.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn update_user(uid: &str, update: &ProfileUpdate) -> Result<(), ApiError> {
    http::send_json_discard(BodyMethod::Put, &user_endpoint(uid), update).await
}

// =============================================================================
// FEEDBACK + TRANSACTIONS
// =============================================================================

/// `GET /feedbacks`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is malformed.
pub async fn fetch_feedbacks() -> Result<Vec<Feedback>, ApiError> {
    http::get_json(&feedbacks_endpoint()).await
}

/// `POST /feedbacks`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn create_feedback(feedback: &Feedback) -> Result<(), ApiError> {
    http::send_json_discard(BodyMethod::Post, &feedbacks_endpoint(), feedback).await
}

/// `POST /transactions`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn create_transaction(transaction: &Transaction) -> Result<(), ApiError> {
    http::send_json_discard(BodyMethod::Post, &transactions_endpoint(), transaction).await
}

//! Shared DTOs for the remote camp API and the identity bridge.
//!
//! DESIGN
//! ======
//! Records mirror the remote API's camelCase JSON verbatim (including the
//! `_id` key) so list payloads can be decoded and re-posted without a mapping
//! layer. Numeric fields are decoded leniently because older records store
//! fees and counts as strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// CAMP
// =============================================================================

/// A medical camp as listed in the catalog.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Camp {
    /// Remote document id. Empty for camps not yet created.
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub camp_name: String,
    /// Banner image URL.
    #[serde(default)]
    pub image: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub camp_fees: f64,
    /// ISO-8601 timestamp or `datetime-local` value (`YYYY-MM-DDTHH:MM`).
    #[serde(default)]
    pub date_time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub healthcare_professional: String,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub participant_count: u32,
    #[serde(default)]
    pub description: String,
}

/// Body of `PUT /update-camp/{id}`. The id travels in the path only; the
/// remote store rejects writes that touch `_id`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampUpdate<'a> {
    pub camp_name: &'a str,
    pub image: &'a str,
    pub camp_fees: f64,
    pub date_time: &'a str,
    pub location: &'a str,
    pub healthcare_professional: &'a str,
    pub participant_count: u32,
    pub description: &'a str,
}

impl<'a> From<&'a Camp> for CampUpdate<'a> {
    fn from(camp: &'a Camp) -> Self {
        Self {
            camp_name: &camp.camp_name,
            image: &camp.image,
            camp_fees: camp.camp_fees,
            date_time: &camp.date_time,
            location: &camp.location,
            healthcare_professional: &camp.healthcare_professional,
            participant_count: camp.participant_count,
            description: &camp.description,
        }
    }
}

// =============================================================================
// REGISTRATION
// =============================================================================

/// Payment state of a registration. Anything other than `Paid` reads as unpaid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "&'static str")]
pub enum PaymentStatus {
    Paid,
    #[default]
    Unpaid,
}

impl From<Option<String>> for PaymentStatus {
    fn from(raw: Option<String>) -> Self {
        match raw.as_deref().map(str::trim) {
            Some(s) if s.eq_ignore_ascii_case("paid") => Self::Paid,
            _ => Self::Unpaid,
        }
    }
}

impl From<PaymentStatus> for &'static str {
    fn from(status: PaymentStatus) -> Self {
        status.as_str()
    }
}

impl PaymentStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Unpaid => "Unpaid",
        }
    }
}

/// Organizer confirmation state of a registration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "&'static str")]
pub enum ConfirmationStatus {
    #[default]
    Pending,
    Confirmed,
}

impl From<Option<String>> for ConfirmationStatus {
    fn from(raw: Option<String>) -> Self {
        match raw.as_deref().map(str::trim) {
            Some(s) if s.eq_ignore_ascii_case("confirmed") => Self::Confirmed,
            _ => Self::Pending,
        }
    }
}

impl From<ConfirmationStatus> for &'static str {
    fn from(status: ConfirmationStatus) -> Self {
        status.as_str()
    }
}

impl ConfirmationStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
        }
    }
}

/// Gender options offered on the join form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Self; 3] = [Self::Male, Self::Female, Self::Other];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == raw)
    }
}

/// A participant's registration for a camp.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub camp_id: String,
    #[serde(default)]
    pub camp_name: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub user_email: String,
    #[serde(default)]
    pub participant_name: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub camp_fees: f64,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub healthcare_professional: String,
    #[serde(default)]
    pub date_time: String,
    #[serde(default, deserialize_with = "lenient_opt_u32", skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default)]
    pub phone: String,
    /// One of [`Gender::as_str`]; kept as text so unknown values still decode.
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub emergency_contact: String,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub confirmation_status: ConfirmationStatus,
    #[serde(default)]
    pub registration_date: String,
}

// =============================================================================
// USER
// =============================================================================

/// Platform role stored on the user record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "&'static str")]
pub enum Role {
    Admin,
    #[default]
    Customer,
}

impl From<Option<String>> for Role {
    fn from(raw: Option<String>) -> Self {
        match raw.as_deref().map(str::trim) {
            Some(s) if s.eq_ignore_ascii_case("admin") => Self::Admin,
            _ => Self::Customer,
        }
    }
}

impl From<Role> for &'static str {
    fn from(role: Role) -> Self {
        role.as_str()
    }
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Customer => "customer",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Customer => "Customer",
        }
    }
}

/// User profile record kept by the remote API (`/users/{uid}`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "photoURL", default, alias = "image")]
    pub photo_url: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub role: Role,
}

/// Body of `PUT /users/{uid}` from the profile editor.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: String,
    #[serde(rename = "photoURL")]
    pub photo_url: String,
    pub email: String,
    pub phone: String,
}

// =============================================================================
// FEEDBACK + TRANSACTION
// =============================================================================

/// A participant's rating of a camp they attended.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub camp_id: String,
    #[serde(default)]
    pub camp_name: String,
    #[serde(default)]
    pub user_email: String,
    #[serde(default)]
    pub feedback: String,
    /// Star rating in `1..=5`.
    #[serde(default, deserialize_with = "lenient_u32")]
    pub rating: u32,
    #[serde(default)]
    pub date: String,
}

/// Receipt posted after a registration is paid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub camp_id: String,
    pub camp_name: String,
    pub user_email: String,
    pub transaction_id: String,
    pub amount: f64,
    pub date: String,
}

/// Insert acknowledgement returned by the remote API on `POST`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResult {
    #[serde(default)]
    pub inserted_id: Option<String>,
}

// =============================================================================
// IDENTITY BRIDGE
// =============================================================================

/// The signed-in account as reported by `/auth/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Identity-provider account id; also the key of the user record.
    pub uid: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// Body of `PUT /auth/email`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmailChangeRequest {
    pub email: String,
}

// =============================================================================
// LENIENT NUMBERS
// =============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

fn number_from_value(value: Option<NumberOrText>) -> Result<Option<f64>, String> {
    match value {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => Ok(Some(n)),
        Some(NumberOrText::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(NumberOrText::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| format!("expected number, got {s:?}")),
    }
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<NumberOrText>::deserialize(deserializer)?;
    number_from_value(raw)
        .map(Option::unwrap_or_default)
        .map_err(D::Error::custom)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u32(n: f64) -> u32 {
    if n.is_finite() && n > 0.0 {
        n.min(f64::from(u32::MAX)) as u32
    } else {
        0
    }
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<NumberOrText>::deserialize(deserializer)?;
    number_from_value(raw)
        .map(|n| n.map_or(0, to_u32))
        .map_err(D::Error::custom)
}

fn lenient_opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<NumberOrText>::deserialize(deserializer)?;
    number_from_value(raw)
        .map(|n| n.map(to_u32))
        .map_err(D::Error::custom)
}

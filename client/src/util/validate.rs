//! Form validation rules shared by every page that accepts input.
//!
//! Validators return a [`FieldErrors`] map keyed by input name so each form
//! can render the message under the matching field.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDateTime};
use regex::Regex;

pub const PASSWORD_RULE: &str =
    "Password must be at least 6 characters with one uppercase and one lowercase letter.";
pub const URL_MESSAGE: &str = "Please enter a valid URL";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const PHONE_MESSAGE: &str = "Please enter a valid phone number (e.g., +1234567890)";

static PHONE_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^\+?\d{10,15}$").ok());
static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Per-field validation messages, ordered by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field`; the first message per field wins.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    /// Record `message` when `field_value` is blank.
    pub fn require(&mut self, field: &'static str, field_value: &str, message: &str) {
        if field_value.trim().is_empty() {
            self.add(field, message);
        }
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `Ok(value)` when nothing was recorded.
    ///
    /// # Errors
    ///
    /// Returns `self` when any field failed.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

/// Absolute `http`/`https` URL with a host.
#[must_use]
pub fn is_valid_url(raw: &str) -> bool {
    url::Url::parse(raw.trim())
        .is_ok_and(|u| matches!(u.scheme(), "http" | "https") && u.host_str().is_some_and(|h| !h.is_empty()))
}

/// Optional `+` then 10 to 15 digits.
#[must_use]
pub fn is_valid_phone(raw: &str) -> bool {
    PHONE_RE.as_ref().is_some_and(|re| re.is_match(raw.trim()))
}

#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(raw.trim()))
}

/// At least six characters including one uppercase and one lowercase letter.
#[must_use]
pub fn is_strong_password(raw: &str) -> bool {
    raw.chars().count() >= 6 && raw.chars().any(char::is_uppercase) && raw.chars().any(char::is_lowercase)
}

/// Whole years, at least one.
#[must_use]
pub fn parse_age(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|age| *age >= 1)
}

/// Non-negative, finite fee amount.
#[must_use]
pub fn parse_fees(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|fees| fees.is_finite() && *fees >= 0.0)
}

/// Accepts `datetime-local` values (with or without seconds) and RFC 3339
/// timestamps. Timestamps keep their wall-clock time.
#[must_use]
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_local()))
}

/// True when `raw` parses and lies strictly after `now`.
#[must_use]
pub fn is_future(raw: &str, now: NaiveDateTime) -> bool {
    parse_datetime(raw).is_some_and(|dt| dt > now)
}

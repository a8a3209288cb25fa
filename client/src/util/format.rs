//! Display formatting for fees, timestamps, and missing values.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::NaiveDateTime;

use super::validate::parse_datetime;

/// Placeholder for blank optional fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// `$25.00`.
#[must_use]
pub fn format_fees(fees: f64) -> String {
    format!("${fees:.2}")
}

/// Human timestamp such as `May 1, 2030, 09:30 AM`. Unparseable input is
/// shown as-is.
#[must_use]
pub fn format_datetime(raw: &str) -> String {
    parse_datetime(raw).map_or_else(
        || or_na(raw).to_owned(),
        |dt| dt.format("%b %-d, %Y, %I:%M %p").to_string(),
    )
}

/// Date portion only, `May 1, 2030`.
#[must_use]
pub fn format_date(raw: &str) -> String {
    parse_datetime(raw).map_or_else(|| or_na(raw).to_owned(), |dt| dt.format("%b %-d, %Y").to_string())
}

#[must_use]
pub fn or_na(raw: &str) -> &str {
    let trimmed = raw.trim();
    if trimmed.is_empty() { NOT_AVAILABLE } else { trimmed }
}

/// Value for a `datetime-local` input (`YYYY-MM-DDTHH:MM`); empty when the
/// stored value does not parse.
#[must_use]
pub fn to_datetime_local_input(raw: &str) -> String {
    parse_datetime(raw)
        .map(|dt| dt.format("%Y-%m-%dT%H:%M").to_string())
        .unwrap_or_default()
}

/// Current UTC time as RFC 3339, used for record timestamps.
#[must_use]
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// Current wall-clock time, compared against `datetime-local` input.
#[must_use]
pub fn now_local() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

use super::*;

fn at(raw: &str) -> NaiveDateTime {
    parse_datetime(raw).unwrap_or_default()
}

// =============================================================
// FieldErrors
// =============================================================

#[test]
fn field_errors_keep_first_message() {
    let mut errors = FieldErrors::new();
    errors.add("email", "first");
    errors.add("email", "second");
    assert_eq!(errors.get("email"), Some("first"));
    assert_eq!(errors.len(), 1);
}

#[test]
fn require_flags_blank_values_only() {
    let mut errors = FieldErrors::new();
    errors.require("name", "   ", "Name is required");
    errors.require("location", "Dhaka", "Location is required");
    assert!(errors.has("name"));
    assert!(!errors.has("location"));
}

#[test]
fn into_result_passes_value_when_clean() {
    assert_eq!(FieldErrors::new().into_result(7), Ok(7));
    let mut errors = FieldErrors::new();
    errors.add("x", "bad");
    assert!(errors.into_result(7).is_err());
}

// =============================================================
// Field rules
// =============================================================

#[test]
fn url_requires_http_scheme_and_host() {
    assert!(is_valid_url("https://example.com/image.jpg"));
    assert!(is_valid_url(" http://localhost:3000 "));
    assert!(!is_valid_url("example.com/image.jpg"));
    assert!(!is_valid_url("ftp://example.com/file"));
    assert!(!is_valid_url(""));
}

#[test]
fn phone_accepts_ten_to_fifteen_digits_with_optional_plus() {
    assert!(is_valid_phone("+1234567890"));
    assert!(is_valid_phone("012345678901234"));
    assert!(!is_valid_phone("123456789"));
    assert!(!is_valid_phone("1234567890123456"));
    assert!(!is_valid_phone("123-456-7890"));
    assert!(!is_valid_phone("++1234567890"));
}

#[test]
fn email_needs_at_and_dot() {
    assert!(is_valid_email("ann@example.com"));
    assert!(!is_valid_email("ann@example"));
    assert!(!is_valid_email("ann example@x.com"));
    assert!(!is_valid_email("@example.com"));
}

#[test]
fn password_needs_length_and_both_cases() {
    assert!(is_strong_password("Abcdef"));
    assert!(!is_strong_password("Abcde"));
    assert!(!is_strong_password("abcdef"));
    assert!(!is_strong_password("ABCDEF"));
}

#[test]
fn age_must_be_positive_integer() {
    assert_eq!(parse_age("21"), Some(21));
    assert_eq!(parse_age("0"), None);
    assert_eq!(parse_age("-3"), None);
    assert_eq!(parse_age("2.5"), None);
    assert_eq!(parse_age(""), None);
}

#[test]
fn fees_must_be_non_negative() {
    assert_eq!(parse_fees("0"), Some(0.0));
    assert_eq!(parse_fees(" 12.50 "), Some(12.5));
    assert_eq!(parse_fees("-1"), None);
    assert_eq!(parse_fees("NaN"), None);
    assert_eq!(parse_fees("free"), None);
}

// =============================================================
// Date-time
// =============================================================

#[test]
fn parse_datetime_accepts_input_and_iso_forms() {
    assert!(parse_datetime("2030-05-01T09:30").is_some());
    assert!(parse_datetime("2030-05-01T09:30:15").is_some());
    assert!(parse_datetime("2030-05-01T09:30:15.250").is_some());
    assert!(parse_datetime("2030-05-01T09:30:00Z").is_some());
    assert!(parse_datetime("2030-05-01T09:30:00+06:00").is_some());
    assert!(parse_datetime("next tuesday").is_none());
}

#[test]
fn is_future_compares_strictly() {
    let now = at("2030-05-01T09:30");
    assert!(is_future("2030-05-01T09:31", now));
    assert!(!is_future("2030-05-01T09:30", now));
    assert!(!is_future("2029-12-31T23:59", now));
    assert!(!is_future("", now));
}

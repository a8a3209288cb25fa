use super::*;

#[test]
fn fees_have_two_decimals_and_dollar_sign() {
    assert_eq!(format_fees(25.0), "$25.00");
    assert_eq!(format_fees(0.5), "$0.50");
    assert_eq!(format_fees(0.0), "$0.00");
}

#[test]
fn datetime_formats_input_values() {
    assert_eq!(format_datetime("2030-05-01T09:30"), "May 1, 2030, 09:30 AM");
    assert_eq!(format_datetime("2030-12-24T18:05:00Z"), "Dec 24, 2030, 06:05 PM");
}

#[test]
fn datetime_passes_through_unparseable_text() {
    assert_eq!(format_datetime("sometime soon"), "sometime soon");
    assert_eq!(format_datetime(""), NOT_AVAILABLE);
}

#[test]
fn date_drops_time() {
    assert_eq!(format_date("2030-05-01T09:30"), "May 1, 2030");
}

#[test]
fn or_na_replaces_blank() {
    assert_eq!(or_na("  "), "N/A");
    assert_eq!(or_na(" Dhaka "), "Dhaka");
}

#[test]
fn datetime_local_input_truncates_seconds() {
    assert_eq!(to_datetime_local_input("2030-05-01T09:30:45.000Z"), "2030-05-01T09:30");
    assert_eq!(to_datetime_local_input("2030-05-01T09:30"), "2030-05-01T09:30");
    assert_eq!(to_datetime_local_input("garbage"), "");
}

#[test]
fn now_iso_is_rfc3339() {
    assert!(chrono::DateTime::parse_from_rfc3339(&now_iso()).is_ok());
}

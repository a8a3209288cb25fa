use super::*;

#[test]
fn from_status_prefers_error_field() {
    let err = ApiError::from_status(400, Some(r#"{"error":"Camp not found"}"#));
    assert_eq!(err.to_string(), "Camp not found");
}

#[test]
fn from_status_reads_message_field() {
    let err = ApiError::from_status(500, Some(r#"{"message":"db down"}"#));
    assert_eq!(err.to_string(), "db down");
}

#[test]
fn from_status_reads_nested_error_object() {
    let err = ApiError::from_status(400, Some(r#"{"error":{"code":400,"message":"EMAIL_EXISTS"}}"#));
    assert_eq!(err.to_string(), "EMAIL_EXISTS");
}

#[test]
fn from_status_falls_back_to_status_text() {
    assert_eq!(ApiError::from_status(404, None).to_string(), "request failed: 404");
    assert_eq!(ApiError::from_status(502, Some("<html>")).to_string(), "request failed: 502");
    assert_eq!(ApiError::from_status(400, Some(r#"{"error":"  "}"#)).to_string(), "request failed: 400");
}

#[test]
fn is_unauthorized_only_for_401() {
    assert!(ApiError::from_status(401, None).is_unauthorized());
    assert!(!ApiError::from_status(403, None).is_unauthorized());
    assert!(!ApiError::Network("offline".to_owned()).is_unauthorized());
}

#[test]
fn display_texts_are_toast_ready() {
    assert_eq!(ApiError::Network("offline".to_owned()).to_string(), "network error: offline");
    assert_eq!(ApiError::Decode("eof".to_owned()).to_string(), "unexpected response: eof");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

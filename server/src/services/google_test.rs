use super::*;

fn config() -> GoogleConfig {
    GoogleConfig {
        client_id: "client-1".to_owned(),
        client_secret: "secret".to_owned(),
        redirect_uri: "http://localhost:3000/auth/google/callback".to_owned(),
    }
}

#[test]
fn authorize_url_carries_client_and_state() {
    let raw = config().authorize_url("abc123");
    let url = url::Url::parse(&raw).expect("valid url");
    assert_eq!(url.host_str(), Some("accounts.google.com"));
    let pairs: std::collections::HashMap<_, _> = url.query_pairs().into_owned().collect();
    assert_eq!(pairs.get("client_id").map(String::as_str), Some("client-1"));
    assert_eq!(pairs.get("state").map(String::as_str), Some("abc123"));
    assert_eq!(pairs.get("response_type").map(String::as_str), Some("code"));
    assert_eq!(
        pairs.get("redirect_uri").map(String::as_str),
        Some("http://localhost:3000/auth/google/callback")
    );
}

#[test]
fn generate_state_is_64_hex_chars_and_unique() {
    let a = generate_state();
    let b = generate_state();
    assert_eq!(a.len(), 64);
    assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(a, b);
}

#[test]
fn bytes_to_hex_pads_each_byte() {
    assert_eq!(bytes_to_hex(&[0x00, 0x0f, 0xff]), "000fff");
}

#[test]
fn parse_token_response_extracts_id_token() {
    let body = r#"{"access_token":"at","id_token":"it","expires_in":3599}"#;
    assert_eq!(parse_token_response(body).expect("token"), "it");
}

#[test]
fn parse_token_response_without_id_token_fails() {
    let err = parse_token_response(r#"{"access_token":"at"}"#).expect_err("missing");
    assert!(matches!(err, GoogleError::MissingIdToken));
}

#[test]
fn parse_token_response_rejects_non_json() {
    let err = parse_token_response("<html>").expect_err("not json");
    assert!(matches!(err, GoogleError::TokenExchange(_)));
}

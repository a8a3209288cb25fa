use super::*;

#[test]
fn parse_error_reads_provider_code() {
    let body = r#"{"error":{"code":400,"message":"EMAIL_EXISTS","errors":[]}}"#;
    assert_eq!(parse_error(body), IdentityError::Provider { code: "EMAIL_EXISTS".to_owned() });
}

#[test]
fn parse_error_falls_back_to_decode() {
    assert!(matches!(parse_error("bad gateway"), IdentityError::Decode(_)));
}

#[test]
fn code_strips_provider_detail() {
    let err = IdentityError::Provider { code: "WEAK_PASSWORD : Password should be at least 6 characters".to_owned() };
    assert_eq!(err.code(), Some("WEAK_PASSWORD"));
    assert_eq!(err.to_string(), "Password should be at least 6 characters.");
}

#[test]
fn credential_errors_share_one_message() {
    for code in ["EMAIL_NOT_FOUND", "INVALID_PASSWORD", "INVALID_LOGIN_CREDENTIALS"] {
        assert_eq!(provider_message(code), "Invalid email or password.");
    }
    assert_eq!(provider_message("SOMETHING_NEW"), "Authentication failed.");
}

#[test]
fn session_expiry_codes_are_detected() {
    let expired = IdentityError::Provider { code: "TOKEN_EXPIRED".to_owned() };
    let wrong = IdentityError::Provider { code: "INVALID_PASSWORD".to_owned() };
    assert!(expired.is_session_expired());
    assert!(!wrong.is_session_expired());
    assert!(!IdentityError::Request("timeout".to_owned()).is_session_expired());
}

#[test]
fn statuses_follow_error_kind() {
    let provider = |code: &str| IdentityError::Provider { code: code.to_owned() };
    assert_eq!(identity_to_status(&provider("EMAIL_EXISTS")), StatusCode::CONFLICT);
    assert_eq!(identity_to_status(&provider("INVALID_PASSWORD")), StatusCode::UNAUTHORIZED);
    assert_eq!(identity_to_status(&provider("WEAK_PASSWORD : too short")), StatusCode::BAD_REQUEST);
    assert_eq!(identity_to_status(&provider("TOO_MANY_ATTEMPTS_TRY_LATER")), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(identity_to_status(&IdentityError::Request("x".to_owned())), StatusCode::BAD_GATEWAY);
}

#[test]
fn parse_sign_in_maps_account_fields() {
    let body = r#"{
        "idToken": "id-1",
        "refreshToken": "rt-1",
        "localId": "uid-1",
        "email": "ann@example.com",
        "displayName": "",
        "registered": true
    }"#;
    let session = parse_sign_in(body).expect("session");
    assert_eq!(session.id_token, "id-1");
    assert_eq!(session.refresh_token, "rt-1");
    assert_eq!(session.user.uid, "uid-1");
    assert_eq!(session.user.display_name, None);
}

#[test]
fn parse_sign_in_accepts_idp_photo_field() {
    let body = r#"{"idToken":"i","refreshToken":"r","localId":"u","email":"e@x.io","photoUrl":"https://p/x.png"}"#;
    let session = parse_sign_in(body).expect("session");
    assert_eq!(session.user.photo_url.as_deref(), Some("https://p/x.png"));
}

#[test]
fn parse_lookup_takes_first_user() {
    let body = r#"{"users":[{"localId":"u1","email":"ann@example.com","displayName":"Ann"}]}"#;
    let user = parse_lookup(body).expect("user");
    assert_eq!(user.uid, "u1");
    assert_eq!(user.display_name.as_deref(), Some("Ann"));
}

#[test]
fn parse_lookup_without_users_is_not_found() {
    let err = parse_lookup(r#"{"kind":"x"}"#).expect_err("no users");
    assert!(err.is_session_expired());
}

#[test]
fn parse_refresh_reads_snake_case_tokens() {
    let body = r#"{"id_token":"new-id","refresh_token":"new-rt","user_id":"u1","expires_in":"3600"}"#;
    let tokens = parse_refresh(body).expect("tokens");
    assert_eq!(tokens, RefreshedTokens { id_token: "new-id".to_owned(), refresh_token: "new-rt".to_owned() });
}

#[test]
fn parse_email_change_requires_tokens() {
    assert!(parse_email_change(r#"{"idToken":"i","refreshToken":"r"}"#).is_ok());
    assert!(matches!(parse_email_change(r#"{"email":"x@y.z"}"#), Err(IdentityError::Decode(_))));
}

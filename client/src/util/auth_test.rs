use super::*;
use crate::net::types::SessionUser;

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, profile: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { user: None, profile: None, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState {
        user: Some(SessionUser {
            uid: "u1".to_owned(),
            email: "ann@example.com".to_owned(),
            display_name: Some("Ann".to_owned()),
            photo_url: None,
        }),
        profile: None,
        loading: false,
    };
    assert!(!should_redirect_unauth(&state));
}

use super::*;

#[test]
fn register_request_trims_and_drops_blank_photo() {
    let req = register_request("  Ann Lee ", " ann@example.com ", "Secret1", "   ");
    assert_eq!(req.name, "Ann Lee");
    assert_eq!(req.email, "ann@example.com");
    assert_eq!(req.password, "Secret1");
    assert_eq!(req.photo_url, None);
}

#[test]
fn register_request_keeps_password_whitespace() {
    let req = register_request("Ann", "a@b.com", " Pass word ", "https://example.com/a.png");
    assert_eq!(req.password, " Pass word ");
    assert_eq!(req.photo_url.as_deref(), Some("https://example.com/a.png"));
}

#[test]
fn bridge_paths_are_stable() {
    assert_eq!(ME_PATH, "/auth/me");
    assert_eq!(LOGIN_PATH, "/auth/login");
    assert_eq!(REGISTER_PATH, "/auth/register");
    assert_eq!(LOGOUT_PATH, "/auth/logout");
    assert_eq!(EMAIL_PATH, "/auth/email");
    assert_eq!(GOOGLE_PATH, "/auth/google");
}

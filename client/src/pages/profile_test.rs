use super::*;
use crate::net::types::{Role, SessionUser};

fn valid_draft() -> ProfileDraft {
    ProfileDraft {
        name: "Ann Lee".to_owned(),
        photo_url: "https://example.com/ann.png".to_owned(),
        email: "ann@example.com".to_owned(),
        phone: String::new(),
    }
}

#[test]
fn validate_accepts_blank_phone() {
    let update = valid_draft().validate().expect("valid");
    assert_eq!(update.phone, "");
    assert_eq!(update.name, "Ann Lee");
}

#[test]
fn validate_trims_values() {
    let draft = ProfileDraft { name: "  Ann  ".to_owned(), ..valid_draft() };
    assert_eq!(draft.validate().expect("valid").name, "Ann");
}

#[test]
fn validate_reports_each_bad_field() {
    let draft = ProfileDraft {
        name: " ".to_owned(),
        photo_url: "not a url".to_owned(),
        email: "ann@".to_owned(),
        phone: "12".to_owned(),
    };
    let errors = draft.validate().expect_err("invalid");
    assert_eq!(errors.get("name"), Some("Name is required"));
    assert_eq!(errors.get("photoURL"), Some(URL_MESSAGE));
    assert_eq!(errors.get("email"), Some(EMAIL_MESSAGE));
    assert_eq!(errors.get("phone"), Some(PHONE_MESSAGE));
}

#[test]
fn validate_accepts_international_phone() {
    let draft = ProfileDraft { phone: "+1234567890".to_owned(), ..valid_draft() };
    assert!(draft.validate().is_ok());
}

#[test]
fn email_changed_ignores_case_and_whitespace() {
    let update = valid_draft().validate().expect("valid");
    assert!(!email_changed(" ANN@example.com ", &update));
    assert!(email_changed("bob@example.com", &update));
}

#[test]
fn fallback_record_uses_placeholder_identity() {
    let auth = AuthState {
        user: Some(SessionUser {
            uid: "u1".to_owned(),
            email: "ann@example.com".to_owned(),
            display_name: None,
            photo_url: None,
        }),
        profile: None,
        loading: false,
    };
    let record = fallback_record(&auth);
    assert_eq!(record.name, FALLBACK_NAME);
    assert_eq!(record.photo_url, PLACEHOLDER_PHOTO);
    assert_eq!(record.uid, "u1");
    assert_eq!(record.role, Role::Customer);
}

#[test]
fn apply_update_keeps_identity_fields() {
    let record = UserRecord {
        id: "r1".to_owned(),
        uid: "u1".to_owned(),
        role: Role::Admin,
        ..UserRecord::default()
    };
    let update = valid_draft().validate().expect("valid");
    let updated = apply_update(&record, &update);
    assert_eq!(updated.id, "r1");
    assert_eq!(updated.role, Role::Admin);
    assert_eq!(updated.email, "ann@example.com");
}

#[test]
fn session_uid_ignores_profile_rewrites() {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    let owner = leptos::reactive::owner::Owner::new();
    owner.set();
    let auth = RwSignal::new(AuthState {
        user: Some(SessionUser {
            uid: "uid-1".to_owned(),
            email: "ann@example.com".to_owned(),
            display_name: Some("Ann".to_owned()),
            photo_url: None,
        }),
        profile: None,
        loading: false,
    });
    let uid = session_uid(auth);
    let runs = Arc::new(AtomicUsize::new(0));
    let observed = {
        let runs = Arc::clone(&runs);
        Memo::new(move |_| {
            runs.fetch_add(1, Ordering::SeqCst);
            uid.get()
        })
    };

    assert_eq!(observed.get_untracked(), Some("uid-1".to_owned()));
    auth.update(|a| {
        a.profile = Some(UserRecord { uid: "uid-1".to_owned(), name: "Ann Lee".to_owned(), ..UserRecord::default() });
    });
    assert_eq!(observed.get_untracked(), Some("uid-1".to_owned()));
    assert_eq!(runs.load(Ordering::SeqCst), 1);

    auth.update(AuthState::clear);
    assert_eq!(observed.get_untracked(), None);
    assert_eq!(runs.load(Ordering::SeqCst), 2);
}

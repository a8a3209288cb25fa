use super::*;

fn input(password: &str) -> Result<RegisterInput, &'static str> {
    validate_register_input(" Ann ", " ann@example.com ", password, "", Role::Customer)
}

#[test]
fn valid_input_is_trimmed() {
    let parsed = input("Secret1");
    assert_eq!(
        parsed,
        Ok(RegisterInput {
            name: "Ann".to_owned(),
            email: "ann@example.com".to_owned(),
            password: "Secret1".to_owned(),
            photo_url: String::new(),
            role: Role::Customer,
        })
    );
}

#[test]
fn weak_passwords_report_the_rule() {
    assert_eq!(input("short"), Err(validate::PASSWORD_RULE));
    assert_eq!(input("alllowercase"), Err(validate::PASSWORD_RULE));
    assert_eq!(input("ALLUPPERCASE"), Err(validate::PASSWORD_RULE));
}

#[test]
fn photo_url_must_be_valid_when_given() {
    let result = validate_register_input("Ann", "ann@example.com", "Secret1", "not-a-url", Role::Customer);
    assert_eq!(result, Err(validate::URL_MESSAGE));
}

#[test]
fn name_and_email_are_required() {
    let result = validate_register_input("  ", "ann@example.com", "Secret1", "", Role::Customer);
    assert_eq!(result, Err("Enter your name and email."));
}

#[test]
fn user_record_carries_role_and_photo() {
    let parsed = validate_register_input(
        "Ann",
        "ann@example.com",
        "Secret1",
        "https://example.com/ann.png",
        Role::Admin,
    )
    .unwrap_or_else(|e| panic!("{e}"));
    let session = SessionUser {
        uid: "u9".to_owned(),
        email: "ann@example.com".to_owned(),
        display_name: None,
        photo_url: None,
    };
    let record = user_record_for(&session, &parsed);
    assert_eq!(record.uid, "u9");
    assert_eq!(record.role, Role::Admin);
    assert_eq!(record.photo_url, "https://example.com/ann.png");
    assert!(record.id.is_empty());
}

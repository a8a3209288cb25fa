use super::*;

fn draft() -> JoinDraft {
    JoinDraft {
        age: "34".to_owned(),
        phone: "+8801712345678".to_owned(),
        gender: "Female".to_owned(),
        emergency_contact: "01812345678".to_owned(),
    }
}

#[test]
fn valid_draft_produces_details() {
    let details = draft().validate();
    assert_eq!(
        details,
        Ok(JoinDetails {
            age: 34,
            phone: "+8801712345678".to_owned(),
            gender: Gender::Female,
            emergency_contact: "01812345678".to_owned(),
        })
    );
}

#[test]
fn empty_draft_requires_every_field() {
    let errors = JoinDraft::default().validate().err().unwrap_or_default();
    assert_eq!(errors.get("age"), Some("Age is required"));
    assert_eq!(errors.get("phone"), Some("Phone number is required"));
    assert_eq!(errors.get("gender"), Some("Gender is required"));
    assert_eq!(errors.get("emergencyContact"), Some("Emergency contact is required"));
}

#[test]
fn zero_age_and_short_numbers_are_rejected() {
    let bad = JoinDraft {
        age: "0".to_owned(),
        phone: "12345".to_owned(),
        emergency_contact: "call mom".to_owned(),
        ..draft()
    };
    let errors = bad.validate().err().unwrap_or_default();
    assert_eq!(errors.get("age"), Some("Age must be at least 1"));
    assert_eq!(errors.get("phone"), Some(PHONE_PATTERN_MESSAGE));
    assert_eq!(errors.get("emergencyContact"), Some(PHONE_PATTERN_MESSAGE));
    assert!(!errors.has("gender"));
}

#[test]
fn unknown_gender_is_rejected() {
    let bad = JoinDraft { gender: "unknown".to_owned(), ..draft() };
    assert!(bad.validate().err().unwrap_or_default().has("gender"));
}

#[test]
fn registration_copies_camp_and_user_and_starts_unpaid_pending() {
    let camp = Camp {
        id: "c1".to_owned(),
        camp_name: "Eye Care".to_owned(),
        camp_fees: 15.0,
        location: "Dhaka".to_owned(),
        healthcare_professional: "Dr. Rahman".to_owned(),
        date_time: "2030-02-01T10:00".to_owned(),
        participant_count: 3,
        ..Camp::default()
    };
    let user = SessionUser {
        uid: "u1".to_owned(),
        email: "ann@example.com".to_owned(),
        display_name: Some("Ann".to_owned()),
        photo_url: None,
    };
    let details = draft().validate().unwrap_or_else(|_| unreachable!());
    let reg = registration_for(&camp, &user, "Ann", details, "2030-01-01T00:00:00.000Z".to_owned());

    assert!(reg.id.is_empty());
    assert_eq!(reg.camp_id, "c1");
    assert_eq!(reg.user_id, "u1");
    assert_eq!(reg.user_email, "ann@example.com");
    assert_eq!(reg.participant_name, "Ann");
    assert_eq!(reg.age, Some(34));
    assert_eq!(reg.gender, "Female");
    assert_eq!(reg.payment_status, PaymentStatus::Unpaid);
    assert_eq!(reg.confirmation_status, ConfirmationStatus::Pending);
    assert_eq!(reg.registration_date, "2030-01-01T00:00:00.000Z");
}

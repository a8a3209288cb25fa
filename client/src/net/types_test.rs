use super::*;

// =============================================================
// Camp
// =============================================================

#[test]
fn camp_decodes_remote_document() {
    let json = serde_json::json!({
        "_id": "c1",
        "campName": "Heart Health",
        "image": "https://example.com/h.jpg",
        "campFees": 25.5,
        "dateTime": "2030-01-02T09:30",
        "location": "Dhaka",
        "healthcareProfessional": "Dr. Rahman",
        "participantCount": 12,
        "description": "Free screenings"
    });
    let camp: Camp = serde_json::from_value(json).unwrap();
    assert_eq!(camp.id, "c1");
    assert_eq!(camp.camp_name, "Heart Health");
    assert!((camp.camp_fees - 25.5).abs() < f64::EPSILON);
    assert_eq!(camp.participant_count, 12);
    assert_eq!(camp.healthcare_professional, "Dr. Rahman");
}

#[test]
fn camp_accepts_string_fees_and_missing_count() {
    let json = serde_json::json!({ "_id": "c2", "campName": "Eye Care", "campFees": "40" });
    let camp: Camp = serde_json::from_value(json).unwrap();
    assert!((camp.camp_fees - 40.0).abs() < f64::EPSILON);
    assert_eq!(camp.participant_count, 0);
    assert_eq!(camp.location, "");
}

#[test]
fn camp_null_fees_default_to_zero() {
    let json = serde_json::json!({ "_id": "c3", "campFees": null, "participantCount": null });
    let camp: Camp = serde_json::from_value(json).unwrap();
    assert!(camp.camp_fees.abs() < f64::EPSILON);
    assert_eq!(camp.participant_count, 0);
}

#[test]
fn camp_rejects_garbage_fees() {
    let json = serde_json::json!({ "campFees": "free" });
    assert!(serde_json::from_value::<Camp>(json).is_err());
}

#[test]
fn new_camp_omits_empty_id() {
    let camp = Camp { camp_name: "New".to_owned(), ..Camp::default() };
    let value = serde_json::to_value(&camp).unwrap();
    assert!(value.get("_id").is_none());
    assert_eq!(value["campName"], "New");
    assert_eq!(value["participantCount"], 0);
}

// =============================================================
// Registration statuses
// =============================================================

#[test]
fn registration_statuses_default_when_missing() {
    let json = serde_json::json!({ "_id": "r1", "campId": "c1", "campName": "Heart Health" });
    let reg: Registration = serde_json::from_value(json).unwrap();
    assert_eq!(reg.payment_status, PaymentStatus::Unpaid);
    assert_eq!(reg.confirmation_status, ConfirmationStatus::Pending);
    assert_eq!(reg.age, None);
}

#[test]
fn registration_statuses_parse_case_insensitively() {
    let json = serde_json::json!({
        "paymentStatus": "paid",
        "confirmationStatus": "CONFIRMED",
        "age": "34"
    });
    let reg: Registration = serde_json::from_value(json).unwrap();
    assert_eq!(reg.payment_status, PaymentStatus::Paid);
    assert_eq!(reg.confirmation_status, ConfirmationStatus::Confirmed);
    assert_eq!(reg.age, Some(34));
}

#[test]
fn registration_null_status_reads_as_default() {
    let json = serde_json::json!({ "paymentStatus": null, "confirmationStatus": null });
    let reg: Registration = serde_json::from_value(json).unwrap();
    assert_eq!(reg.payment_status, PaymentStatus::Unpaid);
    assert_eq!(reg.confirmation_status, ConfirmationStatus::Pending);
}

#[test]
fn registration_serializes_status_labels() {
    let reg = Registration {
        payment_status: PaymentStatus::Paid,
        confirmation_status: ConfirmationStatus::Confirmed,
        ..Registration::default()
    };
    let value = serde_json::to_value(&reg).unwrap();
    assert_eq!(value["paymentStatus"], "Paid");
    assert_eq!(value["confirmationStatus"], "Confirmed");
    assert!(value.get("age").is_none());
}

#[test]
fn gender_parse_matches_labels_only() {
    assert_eq!(Gender::parse("Female"), Some(Gender::Female));
    assert_eq!(Gender::parse("female"), None);
    assert_eq!(Gender::parse(""), None);
}

// =============================================================
// User + role
// =============================================================

#[test]
fn user_record_reads_photo_url_and_role() {
    let json = serde_json::json!({
        "uid": "u1",
        "email": "a@b.com",
        "name": "Ann",
        "photoURL": "https://example.com/a.png",
        "role": "admin"
    });
    let user: UserRecord = serde_json::from_value(json).unwrap();
    assert_eq!(user.photo_url, "https://example.com/a.png");
    assert_eq!(user.role, Role::Admin);
}

#[test]
fn user_record_accepts_image_alias_and_defaults_role() {
    let json = serde_json::json!({ "uid": "u2", "image": "https://example.com/b.png" });
    let user: UserRecord = serde_json::from_value(json).unwrap();
    assert_eq!(user.photo_url, "https://example.com/b.png");
    assert_eq!(user.role, Role::Customer);
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_value(Role::Admin).unwrap(), "admin");
    assert_eq!(serde_json::to_value(Role::Customer).unwrap(), "customer");
}

#[test]
fn profile_update_uses_photo_url_key() {
    let update = ProfileUpdate {
        name: "Ann".to_owned(),
        photo_url: "https://example.com/a.png".to_owned(),
        email: "a@b.com".to_owned(),
        phone: String::new(),
    };
    let value = serde_json::to_value(&update).unwrap();
    assert_eq!(value["photoURL"], "https://example.com/a.png");
    assert!(value.get("photo_url").is_none());
}

// =============================================================
// Feedback, transaction, identity DTOs
// =============================================================

#[test]
fn feedback_rating_accepts_text() {
    let json = serde_json::json!({ "feedback": "Great", "rating": "4" });
    let fb: Feedback = serde_json::from_value(json).unwrap();
    assert_eq!(fb.rating, 4);
}

#[test]
fn transaction_serializes_camel_case() {
    let txn = Transaction {
        camp_id: "c1".to_owned(),
        camp_name: "Heart Health".to_owned(),
        user_email: "a@b.com".to_owned(),
        transaction_id: "TXN_abc123xyz".to_owned(),
        amount: 25.0,
        date: "2030-01-01T00:00:00.000Z".to_owned(),
    };
    let value = serde_json::to_value(&txn).unwrap();
    assert_eq!(value["transactionId"], "TXN_abc123xyz");
    assert_eq!(value["userEmail"], "a@b.com");
}

#[test]
fn insert_result_reads_inserted_id() {
    let result: InsertResult =
        serde_json::from_value(serde_json::json!({ "acknowledged": true, "insertedId": "abc" })).unwrap();
    assert_eq!(result.inserted_id.as_deref(), Some("abc"));
}

#[test]
fn session_user_optional_fields_default() {
    let user: SessionUser = serde_json::from_value(serde_json::json!({ "uid": "u1", "email": "a@b.com" })).unwrap();
    assert_eq!(user.display_name, None);
    assert_eq!(user.photo_url, None);
}

#[test]
fn status_enums_can_key_table_rows() {
    use std::collections::HashSet;

    let rows: HashSet<(String, PaymentStatus, ConfirmationStatus)> = [
        ("r1".to_owned(), PaymentStatus::Paid, ConfirmationStatus::Pending),
        ("r1".to_owned(), PaymentStatus::Paid, ConfirmationStatus::Confirmed),
        ("r1".to_owned(), PaymentStatus::Paid, ConfirmationStatus::Pending),
    ]
    .into_iter()
    .collect();
    assert_eq!(rows.len(), 2);
}

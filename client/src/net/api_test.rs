use super::*;

#[test]
fn camp_endpoints_use_api_prefix() {
    assert_eq!(camps_endpoint(), "/api/camps");
    assert_eq!(camp_endpoint("c1"), "/api/camps/c1");
    assert_eq!(update_camp_endpoint("c1"), "/api/update-camp/c1");
    assert_eq!(delete_camp_endpoint("c1"), "/api/delete-camp/c1");
}

#[test]
fn registration_endpoints_use_reg_camps_collection() {
    assert_eq!(registrations_endpoint(), "/api/reg_camps");
    assert_eq!(registration_endpoint("r9"), "/api/reg_camps/r9");
}

#[test]
fn user_feedback_transaction_endpoints() {
    assert_eq!(users_endpoint(), "/api/users");
    assert_eq!(user_endpoint("uid-1"), "/api/users/uid-1");
    assert_eq!(feedbacks_endpoint(), "/api/feedbacks");
    assert_eq!(transactions_endpoint(), "/api/transactions");
}

#[test]
fn participant_count_patch_only_touches_counter() {
    assert_eq!(participant_count_patch(8), serde_json::json!({ "participantCount": 8 }));
}

#[test]
fn status_patches_use_canonical_field_names() {
    assert_eq!(payment_patch(), serde_json::json!({ "paymentStatus": "Paid" }));
    assert_eq!(confirmation_patch(), serde_json::json!({ "confirmationStatus": "Confirmed" }));
}

fn stored_camp() -> Camp {
    Camp {
        id: "65f0c0ffee".to_owned(),
        camp_name: "Eye Camp".to_owned(),
        image: "https://img.example.com/eye.png".to_owned(),
        camp_fees: 25.0,
        date_time: "2030-05-01T09:30".to_owned(),
        location: "Dhaka".to_owned(),
        healthcare_professional: "Dr. Rahman".to_owned(),
        participant_count: 12,
        description: "Free eye checkups.".to_owned(),
    }
}

#[test]
fn update_camp_body_omits_document_id() {
    let camp = stored_camp();
    let body = serde_json::to_value(CampUpdate::from(&camp)).unwrap();
    assert!(body.get("_id").is_none());
    assert!(body.get("id").is_none());
}

#[test]
fn update_camp_body_carries_editable_fields_and_counter() {
    let camp = stored_camp();
    let body = serde_json::to_value(CampUpdate::from(&camp)).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "campName": "Eye Camp",
            "image": "https://img.example.com/eye.png",
            "campFees": 25.0,
            "dateTime": "2030-05-01T09:30",
            "location": "Dhaka",
            "healthcareProfessional": "Dr. Rahman",
            "participantCount": 12,
            "description": "Free eye checkups.",
        })
    );
}

#[test]
fn new_registration_body_has_no_id_and_default_statuses() {
    let registration = Registration {
        camp_id: "c1".to_owned(),
        user_email: "ann@example.com".to_owned(),
        ..Registration::default()
    };
    let body = serde_json::to_value(&registration).unwrap();
    assert!(body.get("_id").is_none());
    assert_eq!(body["campId"], "c1");
    assert_eq!(body["paymentStatus"], "Unpaid");
    assert_eq!(body["confirmationStatus"], "Pending");
}

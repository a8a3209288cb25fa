use super::*;
use crate::net::types::{ConfirmationStatus, PaymentStatus};

fn attended() -> Registration {
    Registration {
        id: "r1".to_owned(),
        camp_id: "c1".to_owned(),
        camp_name: "Eye Care".to_owned(),
        user_email: "ann@example.com".to_owned(),
        payment_status: PaymentStatus::Paid,
        confirmation_status: ConfirmationStatus::Confirmed,
        ..Registration::default()
    }
}

#[test]
fn payment_message_includes_transaction_id() {
    assert_eq!(payment_message("TXN_abc123def"), "Payment successful! Transaction ID: TXN_abc123def");
}

#[test]
fn validate_feedback_builds_record_from_registration() {
    let feedback = validate_feedback(&attended(), "  Great camp  ", 5, "2026-01-01T00:00:00.000Z".to_owned())
        .expect("valid");
    assert_eq!(feedback.camp_id, "c1");
    assert_eq!(feedback.camp_name, "Eye Care");
    assert_eq!(feedback.user_email, "ann@example.com");
    assert_eq!(feedback.feedback, "Great camp");
    assert_eq!(feedback.rating, 5);
}

#[test]
fn validate_feedback_requires_text_and_rating() {
    let errors = validate_feedback(&attended(), "   ", 0, String::new()).expect_err("invalid");
    assert!(errors.has("feedback"));
    assert!(errors.has("rating"));
}

#[test]
fn validate_feedback_rejects_rating_above_five() {
    let errors = validate_feedback(&attended(), "ok", 6, String::new()).expect_err("invalid");
    assert_eq!(errors.len(), 1);
    assert!(errors.has("rating"));
}

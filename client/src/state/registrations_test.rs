use super::*;

fn reg(id: &str, payment: PaymentStatus, confirmation: ConfirmationStatus) -> Registration {
    Registration {
        id: id.to_owned(),
        camp_id: format!("camp-{id}"),
        camp_name: "Eye Care".to_owned(),
        user_id: "u1".to_owned(),
        user_email: "ann@example.com".to_owned(),
        camp_fees: 25.0,
        payment_status: payment,
        confirmation_status: confirmation,
        ..Registration::default()
    }
}

// =============================================================
// Action gating
// =============================================================

#[test]
fn unpaid_pending_allows_pay_and_cancel_only() {
    let r = reg("1", PaymentStatus::Unpaid, ConfirmationStatus::Pending);
    assert!(can_pay(&r));
    assert!(can_cancel_as_participant(&r));
    assert!(can_cancel_as_admin(&r));
    assert!(!can_confirm(&r));
    assert!(!can_leave_feedback(&r));
}

#[test]
fn paid_pending_can_be_confirmed_but_not_withdrawn() {
    let r = reg("1", PaymentStatus::Paid, ConfirmationStatus::Pending);
    assert!(!can_pay(&r));
    assert!(!can_cancel_as_participant(&r));
    assert!(can_cancel_as_admin(&r));
    assert!(can_confirm(&r));
    assert!(!can_leave_feedback(&r));
}

#[test]
fn paid_confirmed_allows_feedback_and_locks_cancel() {
    let r = reg("1", PaymentStatus::Paid, ConfirmationStatus::Confirmed);
    assert!(!can_cancel_as_admin(&r));
    assert!(!can_cancel_as_participant(&r));
    assert!(!can_confirm(&r));
    assert!(can_leave_feedback(&r));
}

#[test]
fn defaults_read_as_unpaid_pending() {
    let r = Registration::default();
    assert!(!is_paid(&r));
    assert!(!is_confirmed(&r));
}

// =============================================================
// List patching
// =============================================================

#[test]
fn mark_paid_and_confirmed_patch_matching_row() {
    let mut state = RegistrationsState {
        items: vec![
            reg("1", PaymentStatus::Unpaid, ConfirmationStatus::Pending),
            reg("2", PaymentStatus::Unpaid, ConfirmationStatus::Pending),
        ],
        loading: false,
    };
    assert!(state.mark_paid("2"));
    assert!(state.mark_confirmed("2"));
    assert!(!state.mark_paid("missing"));

    let first = state.find("1").map(Clone::clone).unwrap_or_default();
    let second = state.find("2").map(Clone::clone).unwrap_or_default();
    assert_eq!(first.payment_status, PaymentStatus::Unpaid);
    assert_eq!(second.payment_status, PaymentStatus::Paid);
    assert_eq!(second.confirmation_status, ConfirmationStatus::Confirmed);
}

#[test]
fn remove_drops_row() {
    let mut state = RegistrationsState {
        items: vec![reg("1", PaymentStatus::Unpaid, ConfirmationStatus::Pending)],
        loading: false,
    };
    state.remove("1");
    assert!(state.items.is_empty());
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn for_email_matches_case_insensitively() {
    let mut other = reg("2", PaymentStatus::Unpaid, ConfirmationStatus::Pending);
    other.user_email = "bob@example.com".to_owned();
    let rows = vec![reg("1", PaymentStatus::Unpaid, ConfirmationStatus::Pending), other];

    let mine = for_email(&rows, "ANN@example.com");
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, "1");
    assert!(for_email(&rows, "").is_empty());
}

#[test]
fn for_user_id_matches_exactly() {
    let mut other = reg("2", PaymentStatus::Paid, ConfirmationStatus::Pending);
    other.user_id = "u2".to_owned();
    let rows = vec![reg("1", PaymentStatus::Unpaid, ConfirmationStatus::Pending), other];

    let mine = for_user_id(&rows, "u2");
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, "2");
    assert!(for_user_id(&rows, "").is_empty());
}

// =============================================================
// Transactions
// =============================================================

#[test]
fn transaction_id_has_prefix_and_lowercase_suffix() {
    let id = generate_transaction_id();
    assert!(id.starts_with(TRANSACTION_PREFIX));
    let suffix = &id[TRANSACTION_PREFIX.len()..];
    assert_eq!(suffix.len(), 9);
    assert!(suffix.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
}

#[test]
fn transaction_ids_differ() {
    assert_ne!(generate_transaction_id(), generate_transaction_id());
}

#[test]
fn transaction_copies_registration_fields() {
    let r = reg("1", PaymentStatus::Unpaid, ConfirmationStatus::Pending);
    let tx = transaction_for(&r, "TXN_abc123def".to_owned(), "2026-01-01T00:00:00Z".to_owned());
    assert_eq!(tx.camp_id, "camp-1");
    assert_eq!(tx.camp_name, "Eye Care");
    assert_eq!(tx.user_email, "ann@example.com");
    assert_eq!(tx.transaction_id, "TXN_abc123def");
    assert!((tx.amount - 25.0).abs() < f64::EPSILON);
}

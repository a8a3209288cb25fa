//! Registration list state and the status rules that gate row actions.
//!
//! DESIGN
//! ======
//! Action availability is derived from `paymentStatus` and
//! `confirmationStatus` only, so the participant and organizer tables agree
//! on what a row allows. Mutations patch the local list after the remote call
//! succeeds.

#[cfg(test)]
#[path = "registrations_test.rs"]
mod registrations_test;

use crate::net::types::{ConfirmationStatus, PaymentStatus, Registration, Transaction};

/// Prefix of generated payment receipts.
pub const TRANSACTION_PREFIX: &str = "TXN_";
const TRANSACTION_SUFFIX_LEN: usize = 9;

/// Shared registration list state.
#[derive(Clone, Debug, Default)]
pub struct RegistrationsState {
    pub items: Vec<Registration>,
    pub loading: bool,
}

impl RegistrationsState {
    #[must_use]
    pub fn find(&self, registration_id: &str) -> Option<&Registration> {
        self.items.iter().find(|r| r.id == registration_id)
    }

    /// Returns `false` when the row is not listed.
    pub fn mark_paid(&mut self, registration_id: &str) -> bool {
        self.update(registration_id, |r| r.payment_status = PaymentStatus::Paid)
    }

    pub fn mark_confirmed(&mut self, registration_id: &str) -> bool {
        self.update(registration_id, |r| r.confirmation_status = ConfirmationStatus::Confirmed)
    }

    pub fn remove(&mut self, registration_id: &str) {
        self.items.retain(|r| r.id != registration_id);
    }

    fn update(&mut self, registration_id: &str, apply: impl FnOnce(&mut Registration)) -> bool {
        match self.items.iter_mut().find(|r| r.id == registration_id) {
            Some(row) => {
                apply(row);
                true
            }
            None => false,
        }
    }
}

#[must_use]
pub fn is_paid(registration: &Registration) -> bool {
    registration.payment_status == PaymentStatus::Paid
}

#[must_use]
pub fn is_confirmed(registration: &Registration) -> bool {
    registration.confirmation_status == ConfirmationStatus::Confirmed
}

#[must_use]
pub fn can_pay(registration: &Registration) -> bool {
    !is_paid(registration)
}

/// Participants may withdraw only before paying.
#[must_use]
pub fn can_cancel_as_participant(registration: &Registration) -> bool {
    !is_paid(registration)
}

/// Organizers may cancel anything except a paid and confirmed booking.
#[must_use]
pub fn can_cancel_as_admin(registration: &Registration) -> bool {
    !(is_paid(registration) && is_confirmed(registration))
}

/// Confirmation requires payment and is a one-way transition.
#[must_use]
pub fn can_confirm(registration: &Registration) -> bool {
    is_paid(registration) && !is_confirmed(registration)
}

#[must_use]
pub fn can_leave_feedback(registration: &Registration) -> bool {
    is_paid(registration) && is_confirmed(registration)
}

/// Registered-camps view: rows booked under `email` (case-insensitive).
#[must_use]
pub fn for_email(registrations: &[Registration], email: &str) -> Vec<Registration> {
    let email = email.trim();
    registrations
        .iter()
        .filter(|r| !email.is_empty() && r.user_email.trim().eq_ignore_ascii_case(email))
        .cloned()
        .collect()
}

/// Payment-history view: rows booked by account `uid`.
#[must_use]
pub fn for_user_id(registrations: &[Registration], uid: &str) -> Vec<Registration> {
    registrations
        .iter()
        .filter(|r| !uid.is_empty() && r.user_id == uid)
        .cloned()
        .collect()
}

/// `TXN_` followed by nine lowercase alphanumerics.
#[must_use]
pub fn generate_transaction_id() -> String {
    let suffix: String = uuid::Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(TRANSACTION_SUFFIX_LEN)
        .collect();
    format!("{TRANSACTION_PREFIX}{suffix}")
}

/// Receipt for paying `registration`.
#[must_use]
pub fn transaction_for(registration: &Registration, transaction_id: String, date: String) -> Transaction {
    Transaction {
        camp_id: registration.camp_id.clone(),
        camp_name: registration.camp_name.clone(),
        user_email: registration.user_email.clone(),
        transaction_id,
        amount: registration.camp_fees,
        date,
    }
}

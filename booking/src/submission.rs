//! Booking confirmation and appointment cancellation.
//!
//! ERROR HANDLING
//! ==============
//! The network layer reports every failure as "no result". Here that `None`,
//! a response without an `id`, and `success: false` all become one user-facing
//! failure; a server-supplied `error` text wins over the generic message.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use crate::draft::{BookingDraft, DraftStorage, DraftStore};
use crate::error::BookingError;
use crate::types::{CancelResponse, CreateAppointmentRequest, CreateAppointmentResponse, Id};
use crate::wizard::WizardStep;

/// Branch booked when the draft has none.
pub const FALLBACK_BRANCH_ID: Id = 1;
/// Generic create failure.
pub const CREATE_FAILED_MESSAGE: &str = "Ошибка при создании записи";
/// Cancellation confirmation prompt.
pub const CANCEL_CONFIRM_MESSAGE: &str = "Вы уверены, что хотите отменить запись?";
/// Generic cancel failure.
pub const CANCEL_FAILED_MESSAGE: &str = "Ошибка при отмене записи";

/// Assemble the create request for `telegram_id`.
///
/// # Errors
///
/// Returns [`BookingError::IncompleteDraft`] naming every missing field among
/// service, doctor, date and time. Empty strings count as missing.
pub fn build_request(draft: &BookingDraft, telegram_id: i64) -> Result<CreateAppointmentRequest, BookingError> {
    let date = draft.date.as_deref().filter(|d| !d.is_empty());
    let time = draft.time.as_deref().filter(|t| !t.is_empty());

    let mut missing = Vec::new();
    if draft.service.is_none() {
        missing.push("service");
    }
    if draft.doctor.is_none() {
        missing.push("doctor");
    }
    if date.is_none() {
        missing.push("date");
    }
    if time.is_none() {
        missing.push("time");
    }

    match (&draft.service, &draft.doctor, date, time) {
        (Some(service), Some(doctor), Some(date), Some(time)) => Ok(CreateAppointmentRequest {
            telegram_id,
            service_id: service.id,
            doctor_id: doctor.id,
            branch_id: draft.branch.as_ref().map_or(FALLBACK_BRANCH_ID, |b| b.id),
            date: date.to_owned(),
            time: time.to_owned(),
        }),
        _ => Err(BookingError::IncompleteDraft(missing)),
    }
}

/// Result of a create call as the user sees it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(Id),
    Rejected(String),
}

/// Interpret the create response.
#[must_use]
pub fn interpret_create(response: Option<CreateAppointmentResponse>) -> SubmitOutcome {
    match response {
        Some(CreateAppointmentResponse { id: Some(id), .. }) => SubmitOutcome::Created(id),
        Some(CreateAppointmentResponse {
            error: Some(message), ..
        }) if !message.trim().is_empty() => SubmitOutcome::Rejected(message),
        _ => SubmitOutcome::Rejected(CREATE_FAILED_MESSAGE.to_owned()),
    }
}

/// Apply a submit outcome to the draft.
///
/// On success the draft is cleared and the confirmed step is returned; on
/// failure the draft is kept for a retry and `None` is returned.
pub fn finish_submission<S: DraftStorage>(store: &mut DraftStore<S>, outcome: &SubmitOutcome) -> Option<WizardStep> {
    match outcome {
        SubmitOutcome::Created(id) => {
            log::info!("booking: appointment {id} created");
            store.clear();
            Some(WizardStep::Confirmed)
        }
        SubmitOutcome::Rejected(message) => {
            log::warn!("booking: create rejected: {message}");
            None
        }
    }
}

/// Interpret the cancel response.
///
/// # Errors
///
/// Returns [`CANCEL_FAILED_MESSAGE`] unless the server reported success.
pub fn interpret_cancel(response: Option<CancelResponse>) -> Result<(), &'static str> {
    match response {
        Some(CancelResponse { success: true }) => Ok(()),
        _ => Err(CANCEL_FAILED_MESSAGE),
    }
}

use super::*;

use booking::draft::{DraftField, SelectedDoctor, SelectedService};
use booking::error::INCOMPLETE_MESSAGE;
use booking::{DraftStore, MemoryStorage};

fn complete_draft() -> BookingDraft {
    let mut store = DraftStore::new(MemoryStorage::default());
    store.set_field(DraftField::Service(SelectedService {
        id: 4,
        name: "Имплантация".to_owned(),
        price: Some(35000.0),
    }));
    store.set_field(DraftField::Doctor(SelectedDoctor {
        id: 8,
        name: "Кузнецов".to_owned(),
    }));
    store.set_field(DraftField::Date("2026-10-21".to_owned()));
    store.set_field(DraftField::Time("11:00".to_owned()));
    store.draft().clone()
}

#[test]
fn confirm_label_reflects_busy_state() {
    assert_eq!(confirm_label(false), "Записаться");
    assert_eq!(confirm_label(true), CONFIRM_BUSY_LABEL);
}

#[test]
fn complete_draft_prepares_request_for_visitor() {
    let request = prepare_submission(&complete_draft(), 42).unwrap();
    assert_eq!(request.telegram_id, 42);
    assert_eq!(request.service_id, 4);
    assert_eq!(request.doctor_id, 8);
    assert_eq!(request.branch_id, 1);
    assert_eq!(request.date, "2026-10-21");
    assert_eq!(request.time, "11:00");
}

#[test]
fn incomplete_draft_yields_fill_all_fields_message() {
    let mut draft = complete_draft();
    draft.doctor = None;
    assert_eq!(prepare_submission(&draft, 42), Err(INCOMPLETE_MESSAGE));
    assert_eq!(prepare_submission(&BookingDraft::default(), 42), Err(INCOMPLETE_MESSAGE));
}

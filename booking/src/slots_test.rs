use super::*;
use crate::draft::{MemoryStorage, SelectedDoctor};

fn store_with(doctor: bool, date: Option<&str>) -> DraftStore<MemoryStorage> {
    let mut store = DraftStore::new(MemoryStorage::default());
    if doctor {
        store.set_field(DraftField::Doctor(SelectedDoctor {
            id: 5,
            name: "Сидорова".to_owned(),
        }));
    }
    if let Some(date) = date {
        store.set_field(DraftField::Date(date.to_owned()));
    }
    store
}

// =============================================================
// SlotQuery
// =============================================================

#[test]
fn query_requires_doctor_and_date() {
    assert_eq!(SlotQuery::from_draft(store_with(false, None).draft()), None);
    assert_eq!(SlotQuery::from_draft(store_with(true, None).draft()), None);
    assert_eq!(SlotQuery::from_draft(store_with(false, Some("2026-10-20")).draft()), None);
    assert_eq!(SlotQuery::from_draft(store_with(true, Some("")).draft()), None);
    assert_eq!(
        SlotQuery::from_draft(store_with(true, Some("2026-10-20")).draft()),
        Some(SlotQuery {
            doctor_id: 5,
            date: "2026-10-20".to_owned()
        })
    );
}

// =============================================================
// apply_slots
// =============================================================

#[test]
fn slots_with_branch_render_cells_and_persist_branch() {
    let mut store = store_with(true, Some("2026-10-20"));
    let response: SlotsResponse = serde_json::from_str(r#"{"slots":["10:00","10:30"],"branch_id":2}"#).unwrap();

    let view = apply_slots(&mut store, Some(response));
    let SlotsView::Available(times) = &view else {
        panic!("expected available slots, got {view:?}");
    };
    let cells = slot_cells(times, store.draft().time.as_deref());
    assert_eq!(cells.len(), 2);
    assert_eq!(cells[0].time, "10:00");
    assert_eq!(cells[1].time, "10:30");
    assert!(cells.iter().all(|c| !c.selected));

    assert_eq!(store.draft().branch.as_ref().map(|b| b.id), Some(2));
    let reloaded = DraftStore::open(store.storage().clone());
    assert_eq!(reloaded.draft().branch.as_ref().map(|b| b.id), Some(2));
}

#[test]
fn missing_or_empty_response_is_empty_and_keeps_branch() {
    let mut store = store_with(true, Some("2026-10-20"));
    assert_eq!(apply_slots(&mut store, None), SlotsView::Empty);

    let empty = SlotsResponse {
        slots: Vec::new(),
        branch_id: Some(9),
    };
    assert_eq!(apply_slots(&mut store, Some(empty)), SlotsView::Empty);
    assert_eq!(store.draft().branch, None);
}

#[test]
fn response_without_branch_leaves_draft_branch() {
    let mut store = store_with(true, Some("2026-10-20"));
    store.set_field(DraftField::Branch(SelectedBranch {
        id: 3,
        name: Some("Центр".to_owned()),
    }));
    let response = SlotsResponse {
        slots: vec!["12:00".to_owned()],
        branch_id: None,
    };
    assert_eq!(
        apply_slots(&mut store, Some(response)),
        SlotsView::Available(vec!["12:00".to_owned()])
    );
    assert_eq!(store.draft().branch.as_ref().map(|b| b.id), Some(3));
}

#[test]
fn slot_cells_mark_selected_time() {
    let times = vec!["09:00".to_owned(), "09:30".to_owned()];
    let cells = slot_cells(&times, Some("09:30"));
    assert!(!cells[0].selected);
    assert!(cells[1].selected);
}

#[test]
fn messages_cover_placeholder_states() {
    assert_eq!(SlotsView::Prompt.message(), Some(PROMPT_TEXT));
    assert_eq!(SlotsView::Empty.message(), Some(EMPTY_TEXT));
    assert_eq!(SlotsView::Available(Vec::new()).message(), None);
}

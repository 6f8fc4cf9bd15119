use super::*;
use crate::draft::MemoryStorage;

fn service() -> SelectedService {
    SelectedService {
        id: 11,
        name: "Имплантация".to_owned(),
        price: None,
    }
}

fn doctor() -> SelectedDoctor {
    SelectedDoctor {
        id: 12,
        name: "Кузнецов".to_owned(),
    }
}

// =============================================================
// Steps and routes
// =============================================================

#[test]
fn paths_round_trip_through_from_path() {
    for step in WizardStep::ALL {
        assert_eq!(WizardStep::from_path(step.path()), Some(step));
    }
    assert_eq!(WizardStep::from_path("/book/doctor/"), Some(WizardStep::SelectingDoctor));
    assert_eq!(WizardStep::from_path("/appointments"), None);
}

#[test]
fn back_targets_walk_the_steps_in_reverse() {
    assert_eq!(WizardStep::ALL[0], WizardStep::default());
    for pair in WizardStep::ALL[..3].windows(2) {
        assert_eq!(pair[1].previous(), Some(pair[0]));
    }
}

#[test]
fn first_and_terminal_steps_have_no_back_target() {
    assert_eq!(WizardStep::SelectingService.previous(), None);
    assert_eq!(WizardStep::Confirmed.previous(), None);
}

#[test]
fn resume_tracks_furthest_reachable_step() {
    let mut store = DraftStore::new(MemoryStorage::default());
    assert_eq!(WizardStep::resume(store.draft()), WizardStep::SelectingService);
    store.set_field(DraftField::Service(service()));
    assert_eq!(WizardStep::resume(store.draft()), WizardStep::SelectingDoctor);
    store.set_field(DraftField::Doctor(doctor()));
    assert_eq!(WizardStep::resume(store.draft()), WizardStep::SelectingBranchOrSlot);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn choosing_service_and_doctor_advances() {
    let storage = MemoryStorage::default();
    let mut store = DraftStore::new(storage.clone());

    assert_eq!(choose_service(&mut store, service()), WizardStep::SelectingDoctor);
    assert_eq!(choose_doctor(&mut store, doctor()), WizardStep::SelectingBranchOrSlot);

    let reloaded = DraftStore::open(storage);
    assert_eq!(reloaded.draft().service, Some(service()));
    assert_eq!(reloaded.draft().doctor, Some(doctor()));
}

#[test]
fn choosing_date_returns_refresh_query_only_with_doctor() {
    let mut store = DraftStore::new(MemoryStorage::default());
    assert_eq!(choose_date(&mut store, "2026-10-21".to_owned()), None);

    choose_doctor(&mut store, doctor());
    assert_eq!(
        choose_date(&mut store, "2026-10-22".to_owned()),
        Some(SlotQuery {
            doctor_id: 12,
            date: "2026-10-22".to_owned()
        })
    );
}

#[test]
fn changing_date_clears_time() {
    let mut store = DraftStore::new(MemoryStorage::default());
    choose_doctor(&mut store, doctor());
    choose_date(&mut store, "2026-10-21".to_owned());
    choose_time(&mut store, "09:00".to_owned());

    choose_date(&mut store, "2026-10-21".to_owned());
    assert_eq!(store.draft().time.as_deref(), Some("09:00"));
    choose_date(&mut store, "2026-10-23".to_owned());
    assert_eq!(store.draft().time, None);
}

#[test]
fn in_place_choices_write_fields() {
    let mut store = DraftStore::new(MemoryStorage::default());
    choose_branch(
        &mut store,
        SelectedBranch {
            id: 1,
            name: Some("Бурнаковская".to_owned()),
        },
    );
    choose_time(&mut store, "15:30".to_owned());
    assert_eq!(store.draft().branch.as_ref().map(|b| b.id), Some(1));
    assert_eq!(store.draft().time.as_deref(), Some("15:30"));
}

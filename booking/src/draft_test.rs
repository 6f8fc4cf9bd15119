use super::*;

// =============================================================
// Helpers
// =============================================================

fn service() -> SelectedService {
    SelectedService {
        id: 1,
        name: "Лечение кариеса".to_owned(),
        price: Some(3500.0),
    }
}

fn doctor() -> SelectedDoctor {
    SelectedDoctor {
        id: 4,
        name: "Петров П.П.".to_owned(),
    }
}

fn filled_store(storage: &MemoryStorage) -> DraftStore<MemoryStorage> {
    let mut store = DraftStore::new(storage.clone());
    store.set_field(DraftField::Service(service()));
    store.set_field(DraftField::Doctor(doctor()));
    store.set_field(DraftField::Branch(SelectedBranch { id: 2, name: None }));
    store.set_field(DraftField::Date("2026-10-20".to_owned()));
    store.set_field(DraftField::Time("10:30".to_owned()));
    store
}

// =============================================================
// set_field / load round trip
// =============================================================

#[test]
fn new_store_starts_empty() {
    let storage = MemoryStorage::default();
    let store = DraftStore::new(storage.clone());
    assert!(store.draft().is_empty());
    assert_eq!(storage.read(DRAFT_KEY), None);
}

#[test]
fn set_field_persists_whole_draft() {
    let storage = MemoryStorage::default();
    let mut store = DraftStore::new(storage.clone());
    store.set_field(DraftField::Service(service()));

    let raw = storage.read(DRAFT_KEY).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["service"]["id"], 1);
    assert_eq!(value["doctor"], serde_json::Value::Null);
    assert_eq!(value["time"], serde_json::Value::Null);
}

#[test]
fn reload_restores_equal_draft() {
    let storage = MemoryStorage::default();
    let before = filled_store(&storage).draft().clone();

    let reloaded = DraftStore::open(storage);
    assert_eq!(reloaded.draft(), &before);
}

#[test]
fn every_mutation_overwrites_stored_value() {
    let storage = MemoryStorage::default();
    let mut store = filled_store(&storage);
    store.set_field(DraftField::Time("11:00".to_owned()));

    let reloaded = DraftStore::open(storage);
    assert_eq!(reloaded.draft().time.as_deref(), Some("11:00"));
}

#[test]
fn new_date_drops_time_chosen_for_old_date() {
    let storage = MemoryStorage::default();
    let mut store = filled_store(&storage);
    store.set_field(DraftField::Date("2026-10-20".to_owned()));
    assert_eq!(store.draft().time.as_deref(), Some("10:30"));

    store.set_field(DraftField::Date("2026-10-21".to_owned()));
    assert_eq!(store.draft().time, None);
    assert_eq!(DraftStore::open(storage).draft().time, None);
}

// =============================================================
// Field-by-field merge
// =============================================================

#[test]
fn load_leaves_absent_keys_untouched() {
    let storage = MemoryStorage::default();
    storage.write(DRAFT_KEY, r#"{"date":"2026-11-02"}"#).unwrap();

    let mut store = DraftStore::new(storage);
    store.draft.apply(DraftField::Doctor(doctor()));
    store.load();

    assert_eq!(store.draft().doctor, Some(doctor()));
    assert_eq!(store.draft().date.as_deref(), Some("2026-11-02"));
}

#[test]
fn load_resets_keys_stored_as_null() {
    let storage = MemoryStorage::default();
    storage.write(DRAFT_KEY, r#"{"doctor":null}"#).unwrap();

    let mut store = DraftStore::new(storage);
    store.draft.apply(DraftField::Doctor(doctor()));
    store.load();

    assert_eq!(store.draft().doctor, None);
}

#[test]
fn load_accepts_branch_without_name() {
    let storage = MemoryStorage::default();
    storage.write(DRAFT_KEY, r#"{"branch":{"id":2}}"#).unwrap();

    let store = DraftStore::open(storage);
    assert_eq!(store.draft().branch, Some(SelectedBranch { id: 2, name: None }));
}

#[test]
fn load_ignores_malformed_value() {
    let storage = MemoryStorage::default();
    storage.write(DRAFT_KEY, "{not json").unwrap();
    let store = DraftStore::open(storage.clone());
    assert!(store.draft().is_empty());

    storage.write(DRAFT_KEY, "null").unwrap();
    let store = DraftStore::open(storage);
    assert!(store.draft().is_empty());
}

// =============================================================
// clear
// =============================================================

#[test]
fn clear_leaves_no_residual_fields_after_reload() {
    let storage = MemoryStorage::default();
    let mut store = filled_store(&storage);
    store.clear();

    assert!(store.draft().is_empty());
    assert_eq!(storage.read(DRAFT_KEY), None);
    assert!(DraftStore::open(storage).draft().is_empty());
}

#[test]
fn memory_storage_clones_share_entries() {
    let a = MemoryStorage::default();
    let b = a.clone();
    a.write("k", "v").unwrap();
    assert_eq!(b.read("k").as_deref(), Some("v"));
    b.remove("k");
    assert_eq!(a.read("k"), None);
}

#[test]
fn field_names_match_persisted_keys() {
    assert_eq!(DraftField::Service(service()).name(), "service");
    assert_eq!(DraftField::Doctor(doctor()).name(), "doctor");
    assert_eq!(DraftField::Date(String::new()).name(), "date");
    assert_eq!(DraftField::Time(String::new()).name(), "time");
}

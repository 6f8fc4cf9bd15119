use super::*;

use booking::draft::{DraftField, SelectedDoctor, SelectedService};
use booking::{DraftStore, MemoryStorage};

#[test]
fn nav_tiles_cover_every_section() {
    let targets: Vec<&str> = NAV_TILES.iter().map(|(_, _, href)| *href).collect();
    assert_eq!(targets, ["/book", "/services", "/doctors", "/appointments"]);
}

#[test]
fn empty_draft_offers_no_resume_link() {
    assert_eq!(resume_target(&BookingDraft::default()), None);
}

#[test]
fn resume_link_points_at_furthest_step() {
    let mut store = DraftStore::new(MemoryStorage::default());
    store.set_field(DraftField::Service(SelectedService {
        id: 1,
        name: "Чистка".to_owned(),
        price: None,
    }));
    assert_eq!(resume_target(store.draft()), Some("/book/doctor"));

    store.set_field(DraftField::Doctor(SelectedDoctor {
        id: 2,
        name: "Орлова".to_owned(),
    }));
    assert_eq!(resume_target(store.draft()), Some("/book/datetime"));
}

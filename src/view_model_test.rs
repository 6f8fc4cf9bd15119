use super::*;

use booking::types::{BranchRef, NamedRef};

fn parse<T: serde::de::DeserializeOwned>(raw: &str) -> T {
    serde_json::from_str(raw).unwrap()
}

// =============================================================
// Categories
// =============================================================

#[test]
fn single_category_renders_one_linked_row() {
    let categories: Vec<Category> = parse(r#"[{"id":1,"icon":"🦷","name":"Лечение","services_count":5}]"#);
    let rows = category_rows(&categories);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].href, "/services?category=1");
    assert_eq!(rows[0].icon, "🦷");
    assert_eq!(rows[0].name, "Лечение");
    assert!(rows[0].subtitle.contains("5 услуг"));
}

// =============================================================
// Services and doctors
// =============================================================

#[test]
fn service_card_carries_badges_price_and_selection() {
    let service: Service = parse(
        r#"{"id":7,"name":"Отбеливание","price":0,"price_from":12000,"price_type":"from",
            "duration_min":90,"is_popular":true,"is_promo":true}"#,
    );
    let card = ServiceCard::from(&service);
    assert_eq!(card.duration.as_deref(), Some("90 мин"));
    assert_eq!(card.price, "от 12\u{a0}000 ₽");
    assert!(card.popular && card.promo);
    assert_eq!(card.selection.id, 7);
    assert_eq!(card.selection.price, Some(12000.0));
}

#[test]
fn doctor_card_falls_back_to_placeholder_photo() {
    let doctor: Doctor = parse(r#"{"id":3,"name":"Иванова Мария","rating":4.8,"experience_years":11}"#);
    let card = DoctorCard::from(&doctor);
    assert_eq!(card.photo_url, DOCTOR_PHOTO_PLACEHOLDER);
    assert_eq!(card.rating.as_deref(), Some("⭐ 4.8"));
    assert_eq!(card.experience.as_deref(), Some("Стаж 11 лет"));
    assert_eq!(card.specialty, "");
    assert!(!card.promo);

    let with_photo: Doctor = parse(r#"{"id":4,"name":"Петров","photo_url":"https://x/p.jpg"}"#);
    assert_eq!(DoctorCard::from(&with_photo).photo_url, "https://x/p.jpg");
}

// =============================================================
// Branch chips
// =============================================================

#[test]
fn branch_chip_for_draft_branch_is_active() {
    let branches: Vec<Branch> = parse(
        r#"[{"id":1,"short_name":"Бурнаковская"},{"id":2,"short_name":"Ковалихинская","address":"ул. Ковалихинская, 8"}]"#,
    );
    let chips = branch_chips(&branches, Some(2));
    assert_eq!(chips.len(), 2);
    assert!(!chips[0].active);
    assert!(chips[1].active);
    assert_eq!(chips[1].label, "Ковалихинская");
    assert_eq!(chips[1].selection.name.as_deref(), Some("Ковалихинская"));
    assert!(branch_chips(&branches, None).iter().all(|c| !c.active));
}

// =============================================================
// Appointments
// =============================================================

#[test]
fn appointment_row_formats_date_and_fills_placeholders() {
    let appointment = Appointment {
        id: 9,
        appointment_date: "2026-10-05".to_owned(),
        appointment_time: "14:30".to_owned(),
        service: Some(NamedRef {
            id: Some(1),
            name: Some("Консультация".to_owned()),
        }),
        doctor: None,
        branch: Some(BranchRef::default()),
    };
    let row = AppointmentRow::from(&appointment);
    assert_eq!(row.date, "пн, 5 октября");
    assert_eq!(row.time, "14:30");
    assert_eq!(row.service, "Консультация");
    assert_eq!(row.doctor, "Врач");
    assert_eq!(row.address, "Адрес");
}

#[test]
fn draft_summary_joins_known_parts() {
    let service = SelectedService {
        id: 1,
        name: "Чистка".to_owned(),
        price: None,
    };
    let doctor = SelectedDoctor {
        id: 2,
        name: "Орлова".to_owned(),
    };
    assert_eq!(draft_summary(Some(&service), Some(&doctor)).as_deref(), Some("Чистка · Орлова"));
    assert_eq!(draft_summary(None, Some(&doctor)).as_deref(), Some("Орлова"));
    assert_eq!(draft_summary(None, None), None);
}

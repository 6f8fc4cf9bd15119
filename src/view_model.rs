//! Typed view models for the catalog, wizard and appointment views.
//!
//! DESIGN
//! ======
//! Components render these rows verbatim. All placeholder, plural and price
//! decisions are made here so they are testable without a DOM.

#[cfg(test)]
#[path = "view_model_test.rs"]
mod view_model_test;

use booking::draft::{SelectedBranch, SelectedDoctor, SelectedService};
use booking::format::{
    duration_label, experience_label, format_appointment_date, format_price, rating_label, services_count_label,
};
use booking::{Appointment, Branch, Category, Doctor, Id, Service};

use crate::config::DOCTOR_PHOTO_PLACEHOLDER;

pub const CATEGORIES_EMPTY: &str = "Категории не найдены";
pub const SERVICES_EMPTY: &str = "Услуги не найдены";
pub const DOCTORS_EMPTY: &str = "Врачи не найдены";
pub const APPOINTMENTS_EMPTY: &str = "У вас пока нет записей";
pub const BOOK_CALL_TO_ACTION: &str = "Записаться на приём";

/// Row in the category list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryRow {
    pub id: Id,
    pub href: String,
    pub icon: String,
    pub name: String,
    pub subtitle: String,
}

impl From<&Category> for CategoryRow {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            href: format!("/services?category={}", category.id),
            icon: category.icon.clone(),
            name: category.name.clone(),
            subtitle: services_count_label(category.services_count),
        }
    }
}

pub fn category_rows(categories: &[Category]) -> Vec<CategoryRow> {
    categories.iter().map(CategoryRow::from).collect()
}

/// Service card.
#[derive(Clone, Debug, PartialEq)]
pub struct ServiceCard {
    pub id: Id,
    pub name: String,
    pub duration: Option<String>,
    pub price: String,
    pub popular: bool,
    pub promo: bool,
    /// Draft value written when the card is chosen.
    pub selection: SelectedService,
}

impl From<&Service> for ServiceCard {
    fn from(service: &Service) -> Self {
        Self {
            id: service.id,
            name: service.name.clone(),
            duration: service.duration_min.map(duration_label),
            price: format_price(service),
            popular: service.is_popular,
            promo: service.is_promo,
            selection: service.selection(),
        }
    }
}

/// Doctor card.
#[derive(Clone, Debug, PartialEq)]
pub struct DoctorCard {
    pub id: Id,
    pub name: String,
    pub photo_url: String,
    pub specialty: String,
    pub rating: Option<String>,
    pub experience: Option<String>,
    pub promo: bool,
    pub selection: SelectedDoctor,
}

impl From<&Doctor> for DoctorCard {
    fn from(doctor: &Doctor) -> Self {
        Self {
            id: doctor.id,
            name: doctor.name.clone(),
            photo_url: doctor
                .photo_url
                .clone()
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DOCTOR_PHOTO_PLACEHOLDER.to_owned()),
            specialty: doctor.specialty.clone().unwrap_or_default(),
            rating: doctor.rating.map(rating_label),
            experience: doctor.experience_years.map(experience_label),
            promo: doctor.is_promo,
            selection: doctor.selection(),
        }
    }
}

/// Branch chip on the date/time step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BranchChip {
    pub id: Id,
    pub label: String,
    pub active: bool,
    pub selection: SelectedBranch,
}

/// Chips for `branches`, marking the draft's branch active.
pub fn branch_chips(branches: &[Branch], selected: Option<Id>) -> Vec<BranchChip> {
    branches
        .iter()
        .map(|branch| BranchChip {
            id: branch.id,
            label: branch.short_name.clone(),
            active: selected == Some(branch.id),
            selection: branch.selection(),
        })
        .collect()
}

/// Appointment card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppointmentRow {
    pub id: Id,
    pub date: String,
    pub time: String,
    pub service: String,
    pub doctor: String,
    pub address: String,
}

fn or_placeholder(value: Option<&String>, placeholder: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .map_or_else(|| placeholder.to_owned(), Clone::clone)
}

impl From<&Appointment> for AppointmentRow {
    fn from(appointment: &Appointment) -> Self {
        Self {
            id: appointment.id,
            date: format_appointment_date(&appointment.appointment_date),
            time: appointment.appointment_time.clone(),
            service: or_placeholder(appointment.service.as_ref().and_then(|s| s.name.as_ref()), "Услуга"),
            doctor: or_placeholder(appointment.doctor.as_ref().and_then(|d| d.name.as_ref()), "Врач"),
            address: or_placeholder(appointment.branch.as_ref().and_then(|b| b.address.as_ref()), "Адрес"),
        }
    }
}

/// Summary line of the draft on the date/time step: "Услуга · Врач".
pub fn draft_summary(service: Option<&SelectedService>, doctor: Option<&SelectedDoctor>) -> Option<String> {
    match (service, doctor) {
        (Some(s), Some(d)) => Some(format!("{} · {}", s.name, d.name)),
        (Some(s), None) => Some(s.name.clone()),
        (None, Some(d)) => Some(d.name.clone()),
        (None, None) => None,
    }
}

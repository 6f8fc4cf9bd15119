//! Wire DTOs for the clinic booking API.
//!
//! DESIGN
//! ======
//! The API is owned by the clinic backend and its payloads are loosely shaped:
//! optional prices, missing photos, nested objects that may be absent. Every
//! non-essential field is therefore `Option` or defaulted so one odd record
//! never fails a whole list. Defaulted fields go through `null_default`,
//! which treats an explicit `null` like a missing key. Unknown fields are
//! ignored.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

use crate::draft::{SelectedBranch, SelectedDoctor, SelectedService};

/// Numeric identifier used by every API resource.
pub type Id = i64;

/// Deserialize `T`, mapping `null` to `T::default()`.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Service category from `GET /services/categories`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: Id,
    #[serde(default, deserialize_with = "null_default")]
    pub icon: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub services_count: u32,
}

/// How a service price is quoted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceType {
    /// Single price in `price`.
    Fixed,
    /// Lower bound in `price_from`.
    From,
    /// `price_from` to `price_to`.
    Range,
    /// Price given on consultation.
    #[default]
    #[serde(other)]
    OnRequest,
}

/// Service from `GET /services`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub price_from: Option<f64>,
    #[serde(default)]
    pub price_to: Option<f64>,
    #[serde(default)]
    pub price_type: Option<PriceType>,
    /// Server-formatted price text; preferred over local formatting.
    #[serde(default)]
    pub price_display: Option<String>,
    #[serde(default)]
    pub duration_min: Option<u32>,
    #[serde(default, deserialize_with = "null_default")]
    pub is_popular: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub is_promo: bool,
}

impl Service {
    /// Price carried into the draft: `price`, else `price_from`.
    ///
    /// A zero `price` falls through to `price_from`.
    #[must_use]
    pub fn booking_price(&self) -> Option<f64> {
        self.price.filter(|p| *p > 0.0).or(self.price_from)
    }

    /// Draft selection for this service.
    #[must_use]
    pub fn selection(&self) -> SelectedService {
        SelectedService {
            id: self.id,
            name: self.name.clone(),
            price: self.booking_price(),
        }
    }
}

/// Doctor from `GET /doctors`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub experience_years: Option<u32>,
    #[serde(default, deserialize_with = "null_default")]
    pub is_promo: bool,
}

impl Doctor {
    /// Draft selection for this doctor.
    #[must_use]
    pub fn selection(&self) -> SelectedDoctor {
        SelectedDoctor {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

/// Clinic branch from `GET /branches`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub id: Id,
    pub short_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl Branch {
    /// Draft selection for this branch, labelled with its short name.
    #[must_use]
    pub fn selection(&self) -> SelectedBranch {
        SelectedBranch {
            id: self.id,
            name: Some(self.short_name.clone()),
        }
    }
}

/// Named reference embedded in an appointment (`service`, `doctor`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedRef {
    #[serde(default)]
    pub id: Option<Id>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Branch reference embedded in an appointment.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BranchRef {
    #[serde(default)]
    pub id: Option<Id>,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Appointment from `GET /appointments?telegram_id=ID`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Id,
    /// `YYYY-MM-DD`.
    #[serde(default, deserialize_with = "null_default")]
    pub appointment_date: String,
    #[serde(default, deserialize_with = "null_default")]
    pub appointment_time: String,
    #[serde(default)]
    pub service: Option<NamedRef>,
    #[serde(default)]
    pub doctor: Option<NamedRef>,
    #[serde(default)]
    pub branch: Option<BranchRef>,
}

/// Response of `GET /slots?doctor=ID&date=YYYY-MM-DD`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SlotsResponse {
    #[serde(default)]
    pub slots: Vec<String>,
    /// Branch the doctor works at on that date.
    #[serde(default)]
    pub branch_id: Option<Id>,
}

/// Body of `POST /appointments`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub telegram_id: i64,
    pub service_id: Id,
    pub doctor_id: Id,
    pub branch_id: Id,
    pub date: String,
    pub time: String,
}

/// Response of `POST /appointments`: `{id}` on success, `{error}` otherwise.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateAppointmentResponse {
    #[serde(default)]
    pub id: Option<Id>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response of `DELETE /appointments/{id}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelResponse {
    #[serde(default, deserialize_with = "null_default")]
    pub success: bool,
}

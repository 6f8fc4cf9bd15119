//! Browser-independent core of the clinic booking client.
//!
//! This crate owns everything the Mini App needs that does not touch the DOM:
//! the wire schema of the clinic API, the persisted booking draft, the month
//! calendar grid, and the linear wizard that walks a visitor from a service to
//! a confirmed appointment. The Leptos client renders these types and wires
//! them to the network and the host; nothing here depends on either.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Clinic API DTOs (catalog, appointments, slots, create/cancel) |
//! | [`draft`] | [`draft::BookingDraft`] and its persisted [`draft::DraftStore`] |
//! | [`calendar`] | Monday-first month grid with past/today/selected flags |
//! | [`wizard`] | Wizard steps, routes, and selection transitions |
//! | [`slots`] | Slot query derivation and slot response handling |
//! | [`submission`] | Create-request assembly and create/cancel result interpretation |
//! | [`format`] | Russian-locale labels: prices, plurals, dates |
//! | [`error`] | [`BookingError`] |

pub mod calendar;
pub mod draft;
pub mod error;
pub mod format;
pub mod slots;
pub mod submission;
pub mod types;
pub mod wizard;

pub use draft::{BookingDraft, DraftField, DraftStorage, DraftStore, MemoryStorage};
pub use error::BookingError;
pub use slots::{SlotCell, SlotQuery, SlotsView};
pub use types::{
    Appointment, Branch, CancelResponse, Category, CreateAppointmentRequest, CreateAppointmentResponse, Doctor,
    Id, Service, SlotsResponse,
};
pub use wizard::WizardStep;

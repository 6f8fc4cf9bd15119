//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render view models from `crate::view_model` and report user
//! choices through callbacks; pages own fetching, draft writes and navigation.

pub mod appointment_card;
pub mod branch_chips;
pub mod calendar;
pub mod category_list;
pub mod confetti;
pub mod contact_fab;
pub mod doctor_card;
pub mod empty_state;
pub mod loader;
pub mod service_card;
pub mod time_slots;

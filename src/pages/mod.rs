//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, draft writes, host
//! buttons, navigation) and delegates rendering details to `components`.

pub mod appointments;
pub mod book_datetime;
pub mod book_doctor;
pub mod book_success;
pub mod doctors;
pub mod home;
pub(crate) mod query;
pub mod services;

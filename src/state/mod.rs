//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern so components depend on small focused models:
//! the persisted booking draft, per-page remote listings, and UI chrome.

pub mod draft;
pub mod listing;
pub mod ui;

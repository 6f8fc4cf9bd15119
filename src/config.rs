//! Build-time configuration.
//!
//! The Mini App is a static bundle, so everything here is fixed at compile
//! time. `DRDENT_API_BASE` overrides the API origin for deployed builds.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub use booking::draft::DRAFT_KEY as DRAFT_STORAGE_KEY;
pub use booking::submission::FALLBACK_BRANCH_ID;

/// Base URL of the clinic REST API, without a trailing slash.
pub const API_BASE: &str = match option_env!("DRDENT_API_BASE") {
    Some(base) => base,
    None => "http://localhost:5000/api",
};

/// Shown when a doctor has no photo or it fails to load.
pub const DOCTOR_PHOTO_PLACEHOLDER: &str = "https://via.placeholder.com/80x80?text=👨‍⚕️";

/// Static clinic contact card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClinicInfo {
    pub name: &'static str,
    pub phone: &'static str,
    pub website: &'static str,
    pub logo_url: &'static str,
}

impl ClinicInfo {
    /// `tel:` link with everything but digits and the leading `+` removed.
    pub fn phone_href(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{digits}")
    }
}

pub const CLINIC: ClinicInfo = ClinicInfo {
    name: "Доктор Дент",
    phone: "+7 (831) 266-00-03",
    website: "https://drdentnn.ru",
    logo_url: "https://static.tildacdn.com/tild3363-3137-4861-b163-386131626365/DrDent_1.png",
};

/// Join `path` onto [`API_BASE`].
pub fn api_url(path: &str) -> String {
    join_url(API_BASE, path)
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

//! Error type for the booking core.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Message shown when a booking is confirmed with required fields missing.
pub const INCOMPLETE_MESSAGE: &str = "Пожалуйста, заполните все поля";

/// Failures raised by the booking core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    /// A create request was assembled from a draft lacking required fields.
    #[error("booking draft is missing: {}", .0.join(", "))]
    IncompleteDraft(Vec<&'static str>),
    /// Year/month pair outside the supported calendar range.
    #[error("invalid calendar month: {year}-{month:02}")]
    InvalidMonth { year: i32, month: u8 },
    /// A `YYYY-MM-DD` string that does not name a real date.
    #[error("invalid calendar date: {0:?}")]
    InvalidDate(String),
    /// The draft storage backend rejected a write.
    #[error("draft storage failed: {0}")]
    Storage(String),
}

impl BookingError {
    /// Text suitable for a user-facing alert.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::IncompleteDraft(_) => INCOMPLETE_MESSAGE,
            Self::InvalidMonth { .. } | Self::InvalidDate(_) => "Некорректная дата",
            Self::Storage(_) => "Не удалось сохранить выбор",
        }
    }
}

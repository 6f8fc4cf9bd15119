//! Haptic feedback kinds and their host calls.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

/// Tactile feedback requested by the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Haptic {
    Light,
    Medium,
    Heavy,
    Success,
    Warning,
    Error,
}

/// Host-side haptic method and its style argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HapticCall {
    pub method: &'static str,
    pub style: &'static str,
}

impl Haptic {
    /// Impacts for taps, notifications for outcomes.
    pub const fn call(self) -> HapticCall {
        let (method, style) = match self {
            Self::Light => ("impactOccurred", "light"),
            Self::Medium => ("impactOccurred", "medium"),
            Self::Heavy => ("impactOccurred", "heavy"),
            Self::Success => ("notificationOccurred", "success"),
            Self::Warning => ("notificationOccurred", "warning"),
            Self::Error => ("notificationOccurred", "error"),
        };
        HapticCall { method, style }
    }
}

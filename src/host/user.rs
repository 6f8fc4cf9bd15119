//! Visitor identity and appearance reported by the host.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use serde::Deserialize;

/// Identity used outside Telegram.
pub const TEST_USER_ID: i64 = 123_456_789;

/// The visitor as the host reports them.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HostUser {
    pub id: i64,
}

impl HostUser {
    /// Fixed identity for development in a plain browser.
    pub fn test_user() -> Self {
        Self { id: TEST_USER_ID }
    }

    /// Parse the host's user JSON, falling back to [`Self::test_user`].
    pub fn from_json_or_test(raw: Option<&str>) -> Self {
        match raw.map(serde_json::from_str::<Self>) {
            Some(Ok(user)) => user,
            Some(Err(err)) => {
                log::warn!("host: unreadable user payload: {err}");
                Self::test_user()
            }
            None => Self::test_user(),
        }
    }
}

/// Light or dark host theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// Parse the host's scheme name; anything but `"dark"` is light.
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("dark") { Self::Dark } else { Self::Light }
    }

    /// Class added to `<body>` for this scheme.
    pub const fn body_class(self) -> Option<&'static str> {
        match self {
            Self::Dark => Some("tg-theme-dark"),
            Self::Light => None,
        }
    }
}

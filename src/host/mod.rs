//! Host capabilities: identity, haptics, dialogs, and native buttons.
//!
//! ARCHITECTURE
//! ============
//! Pages talk to a [`Host`] trait object stored in context as [`HostHandle`].
//! [`detect`] picks the implementation once at startup:
//!
//! - `TelegramHost` inside a Telegram client (`csr` only),
//! - `BrowserHost` in a plain browser, using `window.alert`/`confirm`,
//! - [`NoopHost`] in native builds and tests.

#[cfg(feature = "csr")]
mod browser;
pub mod feedback;
#[cfg(feature = "csr")]
mod telegram;
pub mod user;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::ops::Deref;
use std::sync::Arc;

pub use feedback::{Haptic, HapticCall};
pub use user::{ColorScheme, HostUser};

/// Receives the user's answer to a confirmation dialog.
pub type ConfirmHandler = Box<dyn FnOnce(bool) + 'static>;
/// Runs on every press of a native button.
pub type ClickHandler = Box<dyn Fn() + 'static>;

/// Capabilities the embedding application offers the Mini App.
pub trait Host: Send + Sync {
    /// Short implementation name for logs.
    fn name(&self) -> &'static str;

    /// Startup hook: expand the viewport, guard against accidental close.
    fn ready(&self) {}

    /// The current visitor.
    fn user(&self) -> HostUser;

    fn color_scheme(&self) -> ColorScheme {
        ColorScheme::Light
    }

    fn notify(&self, _haptic: Haptic) {}

    fn alert(&self, message: &str);

    /// Ask a yes/no question; `on_result` runs once with the answer.
    fn confirm(&self, message: &str, on_result: ConfirmHandler);

    /// Show the bottom main button. A later call replaces the handler.
    fn show_main_button(&self, _text: &str, _on_click: ClickHandler) {}

    fn hide_main_button(&self) {}

    /// Show the header back button. A later call replaces the handler.
    fn show_back_button(&self, _on_click: ClickHandler) {}

    fn hide_back_button(&self) {}

    /// Close the Mini App.
    fn close(&self) {}
}

/// Shared handle to the detected host, provided through context.
#[derive(Clone)]
pub struct HostHandle(Arc<dyn Host>);

impl HostHandle {
    pub fn new(host: impl Host + 'static) -> Self {
        Self(Arc::new(host))
    }
}

impl Deref for HostHandle {
    type Target = dyn Host;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl std::fmt::Debug for HostHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("HostHandle").field(&self.0.name()).finish()
    }
}

/// Host for native builds: fixed test identity, dialogs only logged.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHost;

impl Host for NoopHost {
    fn name(&self) -> &'static str {
        "noop"
    }

    fn user(&self) -> HostUser {
        HostUser::test_user()
    }

    fn alert(&self, message: &str) {
        log::info!("host alert: {message}");
    }

    /// Always answers no.
    fn confirm(&self, message: &str, on_result: ConfirmHandler) {
        log::info!("host confirm declined: {message}");
        on_result(false);
    }
}

/// Pick the host for this environment.
pub fn detect() -> HostHandle {
    #[cfg(feature = "csr")]
    {
        if let Some(host) = telegram::TelegramHost::detect() {
            log::info!("host: running inside Telegram");
            return HostHandle::new(host);
        }
        log::info!("host: Telegram WebApp not found, using browser dialogs");
        HostHandle::new(browser::BrowserHost)
    }
    #[cfg(not(feature = "csr"))]
    {
        HostHandle::new(NoopHost)
    }
}

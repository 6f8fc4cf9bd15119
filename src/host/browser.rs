//! Plain-browser host: native dialogs, no buttons or haptics.

use super::{ColorScheme, ConfirmHandler, Host, HostUser};

#[derive(Clone, Copy, Debug)]
pub(super) struct BrowserHost;

impl Host for BrowserHost {
    fn name(&self) -> &'static str {
        "browser"
    }

    fn user(&self) -> HostUser {
        HostUser::test_user()
    }

    fn color_scheme(&self) -> ColorScheme {
        let dark = web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches());
        if dark { ColorScheme::Dark } else { ColorScheme::Light }
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn confirm(&self, message: &str, on_result: ConfirmHandler) {
        let answer = web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false);
        on_result(answer);
    }

    fn close(&self) {
        if let Some(window) = web_sys::window() {
            let _ = window.close();
        }
    }
}

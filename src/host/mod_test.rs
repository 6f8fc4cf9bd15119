use super::*;

use std::sync::Mutex;

#[derive(Default)]
struct Recorder {
    alerts: Mutex<Vec<String>>,
}

impl Host for Recorder {
    fn name(&self) -> &'static str {
        "recorder"
    }

    fn user(&self) -> HostUser {
        HostUser::test_user()
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_owned());
    }

    fn confirm(&self, _message: &str, on_result: ConfirmHandler) {
        on_result(true);
    }
}

#[test]
fn native_detection_yields_noop_host() {
    let host = detect();
    assert_eq!(host.name(), "noop");
    assert_eq!(host.user().id, user::TEST_USER_ID);
    assert_eq!(host.color_scheme(), ColorScheme::Light);
}

#[test]
fn noop_confirm_declines() {
    let answer = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&answer);
    NoopHost.confirm("?", Box::new(move |yes| *sink.lock().unwrap() = Some(yes)));
    assert_eq!(*answer.lock().unwrap(), Some(false));
}

#[test]
fn handle_dispatches_to_wrapped_host() {
    let handle = HostHandle::new(Recorder::default());
    handle.alert("Ошибка при отмене записи");
    handle.notify(Haptic::Error);
    handle.hide_main_button();
    assert_eq!(handle.name(), "recorder");
    assert_eq!(format!("{handle:?}"), "HostHandle(\"recorder\")");
}

//! Telegram WebApp bridge over `window.Telegram.WebApp`.
//!
//! The WebApp object is looked up on every call with `js_sys::Reflect`, so the
//! host itself holds no JS values and stays `Send + Sync`. Button handlers are
//! kept per thread so a new handler can unregister the previous one.

use std::cell::RefCell;

use js_sys::{Array, Function, JSON, Reflect};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;

use super::{ClickHandler, ColorScheme, ConfirmHandler, Haptic, Host, HostUser};

thread_local! {
    static MAIN_BUTTON_HANDLER: RefCell<Option<JsValue>> = const { RefCell::new(None) };
    static BACK_BUTTON_HANDLER: RefCell<Option<JsValue>> = const { RefCell::new(None) };
}

/// Host backed by the Telegram client.
#[derive(Clone, Copy, Debug)]
pub(super) struct TelegramHost;

impl TelegramHost {
    /// Present only when the page was opened by a Telegram client.
    ///
    /// `telegram-web-app.js` defines `WebApp` in any browser; an empty
    /// `initData` means no client launched us.
    pub(super) fn detect() -> Option<Self> {
        let app = web_app()?;
        let init_data = get(&app, "initData")?.as_string().unwrap_or_default();
        (!init_data.is_empty()).then_some(Self)
    }
}

fn web_app() -> Option<JsValue> {
    let window = web_sys::window()?;
    let telegram = get(window.as_ref(), "Telegram")?;
    get(&telegram, "WebApp")
}

fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    let value = Reflect::get(target, &JsValue::from_str(key)).ok()?;
    (!value.is_undefined() && !value.is_null()).then_some(value)
}

fn call(target: &JsValue, method: &str, args: &[JsValue]) -> Option<JsValue> {
    let function = get(target, method)?.dyn_into::<Function>().ok()?;
    let argv: Array = args.iter().collect();
    match function.apply(target, &argv) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("telegram: {method} failed: {err:?}");
            None
        }
    }
}

fn call_on(path: &[&str], method: &str, args: &[JsValue]) -> Option<JsValue> {
    let mut target = web_app()?;
    for key in path {
        target = get(&target, key)?;
    }
    call(&target, method, args)
}

/// Swap the stored handler for `button`, unregistering the previous one.
fn replace_handler(slot: &'static std::thread::LocalKey<RefCell<Option<JsValue>>>, button: &str, next: Option<JsValue>) {
    let Some(target) = web_app().and_then(|app| get(&app, button)) else {
        return;
    };
    slot.with(|cell| {
        let mut stored = cell.borrow_mut();
        if let Some(previous) = stored.take() {
            call(&target, "offClick", &[previous]);
        }
        if let Some(handler) = next {
            call(&target, "onClick", &[handler.clone()]);
            *stored = Some(handler);
        }
    });
}

impl Host for TelegramHost {
    fn name(&self) -> &'static str {
        "telegram"
    }

    fn ready(&self) {
        call_on(&[], "ready", &[]);
        call_on(&[], "expand", &[]);
        call_on(&[], "enableClosingConfirmation", &[]);
    }

    fn user(&self) -> HostUser {
        let raw = web_app()
            .and_then(|app| get(&app, "initDataUnsafe"))
            .and_then(|unsafe_data| get(&unsafe_data, "user"))
            .and_then(|user| JSON::stringify(&user).ok())
            .and_then(|json| json.as_string());
        HostUser::from_json_or_test(raw.as_deref())
    }

    fn color_scheme(&self) -> ColorScheme {
        web_app()
            .and_then(|app| get(&app, "colorScheme"))
            .and_then(|scheme| scheme.as_string())
            .map_or(ColorScheme::Light, |name| ColorScheme::from_name(&name))
    }

    fn notify(&self, haptic: Haptic) {
        let haptic_call = haptic.call();
        call_on(&["HapticFeedback"], haptic_call.method, &[JsValue::from_str(haptic_call.style)]);
    }

    fn alert(&self, message: &str) {
        call_on(&[], "showAlert", &[JsValue::from_str(message)]);
    }

    fn confirm(&self, message: &str, on_result: ConfirmHandler) {
        let callback = Closure::once_into_js(move |answer: JsValue| on_result(answer.is_truthy()));
        if call_on(&[], "showConfirm", &[JsValue::from_str(message), callback]).is_none() {
            log::warn!("telegram: showConfirm unavailable");
        }
    }

    fn show_main_button(&self, text: &str, on_click: ClickHandler) {
        let Some(button) = web_app().and_then(|app| get(&app, "MainButton")) else {
            return;
        };
        call(&button, "setText", &[JsValue::from_str(text)]);
        let handler = Closure::<dyn Fn()>::new(move || on_click()).into_js_value();
        replace_handler(&MAIN_BUTTON_HANDLER, "MainButton", Some(handler));
        call(&button, "show", &[]);
    }

    fn hide_main_button(&self) {
        replace_handler(&MAIN_BUTTON_HANDLER, "MainButton", None);
        call_on(&["MainButton"], "hide", &[]);
    }

    fn show_back_button(&self, on_click: ClickHandler) {
        let handler = Closure::<dyn Fn()>::new(move || on_click()).into_js_value();
        replace_handler(&BACK_BUTTON_HANDLER, "BackButton", Some(handler));
        call_on(&["BackButton"], "show", &[]);
    }

    fn hide_back_button(&self) {
        replace_handler(&BACK_BUTTON_HANDLER, "BackButton", None);
        call_on(&["BackButton"], "hide", &[]);
    }

    fn close(&self) {
        call_on(&[], "close", &[]);
    }
}

//! Router navigation from event handlers and host buttons.
//!
//! Event handlers and host button callbacks cannot hold the router's
//! `navigate` function, so they request a path through [`PendingNavigation`]
//! and an effect owned by the page performs it.
//!
//! Host buttons are shared by every page. Each page takes a lease when it
//! shows a button and only hides it on cleanup if no later page has taken the
//! button over in the meantime.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use std::sync::atomic::{AtomicU64, Ordering};

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::host::HostHandle;

/// Path requested by a handler, applied by the page's navigation effect.
#[derive(Clone, Copy, Debug)]
pub struct PendingNavigation(RwSignal<Option<String>>);

impl PendingNavigation {
    pub fn go(self, path: impl Into<String>) {
        self.0.set(Some(path.into()));
    }
}

/// Create a [`PendingNavigation`] and the effect that follows it.
pub fn use_pending_navigation() -> PendingNavigation {
    let pending = RwSignal::new(None::<String>);
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(path) = pending.get() {
            pending.set(None);
            log::debug!("navigate: {path}");
            navigate(&path, NavigateOptions::default());
        }
    });
    PendingNavigation(pending)
}

/// Ownership counter for one host button.
#[derive(Debug)]
pub struct ButtonLease(AtomicU64);

impl ButtonLease {
    pub const fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    /// Take the button; returns the lease id.
    pub fn claim(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Whether `id` is still the latest lease.
    pub fn holds(&self, id: u64) -> bool {
        self.0.load(Ordering::Relaxed) == id
    }
}

impl Default for ButtonLease {
    fn default() -> Self {
        Self::new()
    }
}

static BACK_BUTTON: ButtonLease = ButtonLease::new();
static MAIN_BUTTON: ButtonLease = ButtonLease::new();

/// Show the host back button for this page, navigating to `target`.
pub fn use_back_button(host: &HostHandle, target: &'static str, nav: PendingNavigation) {
    let lease = BACK_BUTTON.claim();
    host.show_back_button(Box::new(move || nav.go(target)));
    let host = host.clone();
    on_cleanup(move || {
        if BACK_BUTTON.holds(lease) {
            host.hide_back_button();
        }
    });
}

/// Show the host main button for this page.
pub fn use_main_button(host: &HostHandle, text: &str, on_click: impl Fn() + 'static) {
    let lease = MAIN_BUTTON.claim();
    host.show_main_button(text, Box::new(on_click));
    let host = host.clone();
    on_cleanup(move || {
        if MAIN_BUTTON.holds(lease) {
            host.hide_main_button();
        }
    });
}

/// Hide the host back button; for pages that must not offer one.
pub fn hide_back_button(host: &HostHandle) {
    BACK_BUTTON.claim();
    host.hide_back_button();
}

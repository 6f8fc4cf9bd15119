//! Floating contact button with the clinic phone and website.

use leptos::prelude::*;

use crate::config::CLINIC;
use crate::host::{Haptic, HostHandle};
use crate::state::ui::UiState;

#[component]
pub fn ContactFab() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let host = expect_context::<HostHandle>();
    let open = move || ui.get().contact_menu_open;

    view! {
        <Show when=open>
            <div class="contact-backdrop" on:click=move |_| ui.update(UiState::close_contact_menu)></div>
            <div class="contact-menu">
                <a class="contact-menu-item" href={CLINIC.phone_href()}>
                    "📞 "
                    {CLINIC.phone}
                </a>
                <a class="contact-menu-item" href=CLINIC.website target="_blank" rel="noopener">
                    "🌐 Сайт клиники"
                </a>
            </div>
        </Show>
        <button
            class="contact-fab"
            class:open=open
            aria-label="Связаться с клиникой"
            on:click=move |_| {
                host.notify(Haptic::Light);
                ui.update(UiState::toggle_contact_menu);
            }
        >
            {move || if open() { "✕" } else { "💬" }}
        </button>
    }
}

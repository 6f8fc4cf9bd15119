//! `/book/success`: terminal wizard step.

use leptos::prelude::*;

use booking::WizardStep;

use crate::components::confetti::Confetti;
use crate::host::HostHandle;
use crate::util::navigation::hide_back_button;

#[component]
pub fn BookSuccessPage() -> impl IntoView {
    let host = expect_context::<HostHandle>();
    hide_back_button(&host);

    view! {
        <Confetti/>
        <div class="page success-page">
            <div class="success-icon">"✅"</div>
            <h1 class="page-title">{WizardStep::Confirmed.title()}</h1>
            <p class="success-text">"Мы ждём вас в клинике. Напомним о визите заранее."</p>
            <a class="btn btn-primary btn-block" href="/appointments">
                "Мои записи"
            </a>
            <a class="btn btn-secondary btn-block" href="/">
                "На главную"
            </a>
            <button class="btn btn-link btn-block" on:click=move |_| host.close()>
                "Закрыть"
            </button>
        </div>
    }
}

//! Home page: clinic header, booking entry points and the category list.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use booking::{BookingDraft, WizardStep};

use crate::components::category_list::CategoryList;
use crate::components::empty_state::EmptyState;
use crate::components::loader::Loader;
use crate::config::CLINIC;
use crate::host::HostHandle;
use crate::net::api;
use crate::state::draft::SessionDraft;
use crate::state::listing::Listing;
use crate::util::navigation::hide_back_button;
use crate::view_model::{CATEGORIES_EMPTY, CategoryRow, category_rows};

/// Navigation tiles: label, icon, target.
pub(crate) const NAV_TILES: [(&str, &str, &str); 4] = [
    ("Записаться", "📝", "/book"),
    ("Услуги", "🦷", "/services"),
    ("Врачи", "👨‍⚕️", "/doctors"),
    ("Мои записи", "📅", "/appointments"),
];

/// Link back into an unfinished booking, if the draft has one.
pub(crate) fn resume_target(draft: &BookingDraft) -> Option<&'static str> {
    (!draft.is_empty()).then(|| WizardStep::resume(draft).path())
}

#[component]
pub fn HomePage() -> impl IntoView {
    let host = expect_context::<HostHandle>();
    let draft = expect_context::<RwSignal<SessionDraft>>();
    hide_back_button(&host);

    let categories = RwSignal::new(Listing::<CategoryRow>::Loading);
    leptos::task::spawn_local(async move {
        let rows = api::fetch_categories().await.map(|c| category_rows(&c));
        categories.set(Listing::from_response(rows));
    });

    let resume = move || draft.with(|store| resume_target(store.draft()));

    view! {
        <div class="page home-page">
            <header class="clinic-header">
                <img class="clinic-logo" src=CLINIC.logo_url alt=CLINIC.name/>
                <h1 class="clinic-name">{CLINIC.name}</h1>
            </header>

            {move || {
                resume()
                    .map(|href| {
                        view! {
                            <a class="resume-banner" href=href>
                                "Продолжить запись ›"
                            </a>
                        }
                    })
            }}

            <nav class="nav-tiles">
                {NAV_TILES
                    .into_iter()
                    .map(|(label, icon, href)| {
                        view! {
                            <a class="nav-tile" href=href>
                                <span class="nav-tile-icon">{icon}</span>
                                <span class="nav-tile-label">{label}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>

            <h2 class="section-title">"Направления"</h2>
            {move || match categories.get() {
                Listing::Loading => view! { <Loader/> }.into_any(),
                Listing::Empty => view! { <EmptyState icon="📋" message=CATEGORIES_EMPTY/> }.into_any(),
                Listing::Ready(rows) => view! { <CategoryList rows/> }.into_any(),
            }}
        </div>
    }
}

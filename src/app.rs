//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::contact_fab::ContactFab;
use crate::components::empty_state::EmptyState;
use crate::config::CLINIC;
use crate::host;
use crate::pages::{
    appointments::AppointmentsPage,
    book_datetime::BookDateTimePage,
    book_doctor::BookDoctorPage,
    book_success::BookSuccessPage,
    doctors::DoctorsPage,
    home::HomePage,
    services::{BookServicePage, ServicesPage},
};
use crate::state::draft::open_session_draft;
use crate::state::ui::UiState;
use crate::util::theme;

/// Root application component.
///
/// Detects the host, applies its theme, restores the booking draft, and
/// provides all three through context before routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let host = host::detect();
    host.ready();
    theme::apply(host.color_scheme());
    log::info!("app: host={} user={}", host.name(), host.user().id);

    let draft = RwSignal::new(open_session_draft());
    let ui = RwSignal::new(UiState::default());

    provide_context(host);
    provide_context(draft);
    provide_context(ui);

    view! {
        <Title text=CLINIC.name/>

        <Router>
            <main class="app">
                <Routes fallback=|| view! { <EmptyState icon="🔍" message="Страница не найдена"/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("services") view=ServicesPage/>
                    <Route path=StaticSegment("doctors") view=DoctorsPage/>
                    <Route path=StaticSegment("appointments") view=AppointmentsPage/>
                    <Route path=StaticSegment("book") view=BookServicePage/>
                    <Route path=(StaticSegment("book"), StaticSegment("doctor")) view=BookDoctorPage/>
                    <Route path=(StaticSegment("book"), StaticSegment("datetime")) view=BookDateTimePage/>
                    <Route path=(StaticSegment("book"), StaticSegment("success")) view=BookSuccessPage/>
                </Routes>
            </main>
            <ContactFab/>
        </Router>
    }
}

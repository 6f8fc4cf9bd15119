//! Service catalog and the first booking step.
//!
//! Both routes render the same catalog. Choosing a service writes it into the
//! draft and moves to doctor selection, so `/services` doubles as an entry
//! into the wizard.

use leptos::prelude::*;

use booking::draft::SelectedService;
use booking::wizard::choose_service;
use booking::{Id, WizardStep};

use super::query::use_id_param;
use crate::components::empty_state::EmptyState;
use crate::components::loader::Loader;
use crate::components::service_card::ServiceCard;
use crate::host::{Haptic, HostHandle};
use crate::net::api;
use crate::state::draft::SessionDraft;
use crate::state::listing::Listing;
use crate::util::navigation::{PendingNavigation, use_back_button, use_pending_navigation};
use crate::view_model::{SERVICES_EMPTY, ServiceCard as ServiceCardModel};

/// `/services[?category=ID]`.
#[component]
pub fn ServicesPage() -> impl IntoView {
    let host = expect_context::<HostHandle>();
    let nav = use_pending_navigation();
    use_back_button(&host, "/", nav);
    let category = use_id_param("category");

    view! {
        <div class="page services-page">
            <h1 class="page-title">"Услуги"</h1>
            <ServiceCatalog category=category nav=nav/>
        </div>
    }
}

/// `/book`: wizard step one.
#[component]
pub fn BookServicePage() -> impl IntoView {
    let host = expect_context::<HostHandle>();
    let nav = use_pending_navigation();
    use_back_button(&host, "/", nav);
    let category = use_id_param("category");

    view! {
        <div class="page book-page">
            <div class="wizard-step">"Шаг 1 из 3"</div>
            <h1 class="page-title">{WizardStep::SelectingService.title()}</h1>
            <ServiceCatalog category=category nav=nav/>
        </div>
    }
}

#[component]
fn ServiceCatalog(#[prop(into)] category: Signal<Option<Id>>, nav: PendingNavigation) -> impl IntoView {
    let host = expect_context::<HostHandle>();
    let draft = expect_context::<RwSignal<SessionDraft>>();
    let services = RwSignal::new(Listing::<ServiceCardModel>::Loading);

    Effect::new(move || {
        let requested = category.get();
        services.set(Listing::Loading);
        leptos::task::spawn_local(async move {
            let cards = api::fetch_services(requested)
                .await
                .map(|list| list.iter().map(ServiceCardModel::from).collect());
            // A newer category may have been requested meanwhile.
            if category.get_untracked() == requested {
                services.set(Listing::from_response(cards));
            }
        });
    });

    let on_select = Callback::new(move |service: SelectedService| {
        host.notify(Haptic::Medium);
        let next = draft
            .try_update(|store| choose_service(store, service))
            .unwrap_or(WizardStep::SelectingDoctor);
        nav.go(next.path());
    });

    move || match services.get() {
        Listing::Loading => view! { <Loader/> }.into_any(),
        Listing::Empty => view! { <EmptyState icon="🦷" message=SERVICES_EMPTY/> }.into_any(),
        Listing::Ready(cards) => cards
            .into_iter()
            .map(|card| view! { <ServiceCard card on_select/> })
            .collect_view()
            .into_any(),
    }
}

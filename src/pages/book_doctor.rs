//! `/book/doctor`: wizard step two.

use leptos::prelude::*;

use booking::WizardStep;
use booking::draft::SelectedDoctor;
use booking::wizard::choose_doctor;

use crate::components::doctor_card::DoctorCard;
use crate::components::empty_state::EmptyState;
use crate::components::loader::Loader;
use crate::host::{Haptic, HostHandle};
use crate::net::api;
use crate::state::draft::SessionDraft;
use crate::state::listing::Listing;
use crate::util::navigation::{use_back_button, use_pending_navigation};
use crate::view_model::{DOCTORS_EMPTY, DoctorCard as DoctorCardModel};

#[component]
pub fn BookDoctorPage() -> impl IntoView {
    let host = expect_context::<HostHandle>();
    let draft = expect_context::<RwSignal<SessionDraft>>();
    let nav = use_pending_navigation();
    let step = WizardStep::SelectingDoctor;
    if let Some(previous) = step.previous() {
        use_back_button(&host, previous.path(), nav);
    }

    let doctors = RwSignal::new(Listing::<DoctorCardModel>::Loading);
    leptos::task::spawn_local(async move {
        let cards = api::fetch_doctors(None)
            .await
            .map(|list| list.iter().map(DoctorCardModel::from).collect());
        doctors.set(Listing::from_response(cards));
    });

    let on_select = Callback::new(move |doctor: SelectedDoctor| {
        host.notify(Haptic::Medium);
        let next = draft
            .try_update(|store| choose_doctor(store, doctor))
            .unwrap_or(WizardStep::SelectingBranchOrSlot);
        nav.go(next.path());
    });

    let service_name = move || draft.with(|store| store.draft().service.as_ref().map(|s| s.name.clone()));

    view! {
        <div class="page book-page">
            <div class="wizard-step">"Шаг 2 из 3"</div>
            <h1 class="page-title">{step.title()}</h1>
            {move || service_name().map(|name| view! { <p class="wizard-summary">{name}</p> })}
            {move || match doctors.get() {
                Listing::Loading => view! { <Loader/> }.into_any(),
                Listing::Empty => view! { <EmptyState icon="👨‍⚕️" message=DOCTORS_EMPTY/> }.into_any(),
                Listing::Ready(cards) => cards
                    .into_iter()
                    .map(|card| view! { <DoctorCard card on_select/> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}

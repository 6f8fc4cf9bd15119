//! Doctor directory with an optional branch filter (`/doctors?branch=ID`).

use leptos::prelude::*;

use booking::Branch;

use super::query::use_id_param;
use crate::components::doctor_card::DoctorCard;
use crate::components::empty_state::EmptyState;
use crate::components::loader::Loader;
use crate::host::HostHandle;
use crate::net::api;
use crate::state::listing::Listing;
use crate::util::navigation::{use_back_button, use_pending_navigation};
use crate::view_model::{DOCTORS_EMPTY, DoctorCard as DoctorCardModel};

#[component]
pub fn DoctorsPage() -> impl IntoView {
    let host = expect_context::<HostHandle>();
    let nav = use_pending_navigation();
    use_back_button(&host, "/", nav);
    let branch = use_id_param("branch");

    let branches = RwSignal::new(Vec::<Branch>::new());
    leptos::task::spawn_local(async move {
        branches.set(api::fetch_branches().await.unwrap_or_default());
    });

    let doctors = RwSignal::new(Listing::<DoctorCardModel>::Loading);
    Effect::new(move || {
        let requested = branch.get();
        doctors.set(Listing::Loading);
        leptos::task::spawn_local(async move {
            let cards = api::fetch_doctors(requested)
                .await
                .map(|list| list.iter().map(DoctorCardModel::from).collect());
            if branch.get_untracked() == requested {
                doctors.set(Listing::from_response(cards));
            }
        });
    });

    let filters = move || {
        let active = branch.get();
        let all = view! {
            <a class="branch-chip" class:active={active.is_none()} href="/doctors">
                "Все"
            </a>
        };
        let each = branches
            .get()
            .into_iter()
            .map(|b| {
                view! {
                    <a
                        class="branch-chip"
                        class:active={active == Some(b.id)}
                        href={format!("/doctors?branch={}", b.id)}
                    >
                        {b.short_name}
                    </a>
                }
            })
            .collect_view();
        (all, each)
    };

    view! {
        <div class="page doctors-page">
            <h1 class="page-title">"Врачи"</h1>
            <div class="branch-chips">{filters}</div>
            {move || match doctors.get() {
                Listing::Loading => view! { <Loader/> }.into_any(),
                Listing::Empty => view! { <EmptyState icon="👨‍⚕️" message=DOCTORS_EMPTY/> }.into_any(),
                Listing::Ready(cards) => cards
                    .into_iter()
                    .map(|card| view! { <DoctorCard card/> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}

//! `/book/datetime`: branch, date and time, then confirmation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The slot list follows the draft: whenever the (doctor, date) pair changes a
//! lookup is issued, and a response naming a branch writes that branch back
//! into the draft. Confirmation is single-flight: while a create request is
//! outstanding the button is disabled and further clicks are ignored.

#[cfg(test)]
#[path = "book_datetime_test.rs"]
mod book_datetime_test;

use leptos::prelude::*;

use booking::draft::{BookingDraft, SelectedBranch};
use booking::slots::apply_slots;
use booking::submission::{SubmitOutcome, build_request, finish_submission, interpret_create};
use booking::wizard::{choose_branch, choose_date, choose_time};
use booking::{Branch, CreateAppointmentRequest, SlotQuery, SlotsView, WizardStep};

use crate::components::branch_chips::BranchChips;
use crate::components::calendar::Calendar;
use crate::components::loader::Loader;
use crate::components::time_slots::TimeSlots;
use crate::host::{Haptic, HostHandle};
use crate::net::api;
use crate::state::draft::SessionDraft;
use crate::util::clock;
use crate::util::navigation::{use_back_button, use_main_button, use_pending_navigation};
use crate::view_model::{branch_chips, draft_summary};

pub(crate) const CONFIRM_LABEL: &str = "Записаться";
pub(crate) const CONFIRM_BUSY_LABEL: &str = "Записываем…";

pub(crate) fn confirm_label(busy: bool) -> &'static str {
    if busy { CONFIRM_BUSY_LABEL } else { CONFIRM_LABEL }
}

/// Create request for the draft, or the message to alert.
pub(crate) fn prepare_submission(draft: &BookingDraft, telegram_id: i64) -> Result<CreateAppointmentRequest, &'static str> {
    build_request(draft, telegram_id).map_err(|err| {
        log::debug!("booking: not submitting: {err}");
        err.user_message()
    })
}

#[component]
pub fn BookDateTimePage() -> impl IntoView {
    let host = expect_context::<HostHandle>();
    let draft = expect_context::<RwSignal<SessionDraft>>();
    let nav = use_pending_navigation();
    let step = WizardStep::SelectingBranchOrSlot;
    if let Some(previous) = step.previous() {
        use_back_button(&host, previous.path(), nav);
    }
    let today = clock::today();

    // Branches
    let branches = RwSignal::new(Vec::<Branch>::new());
    leptos::task::spawn_local(async move {
        branches.set(api::fetch_branches().await.unwrap_or_default());
    });
    let selected_branch = Memo::new(move |_| draft.with(|s| s.draft().branch.as_ref().map(|b| b.id)));
    let chips = Signal::derive(move || branches.with(|list| branch_chips(list, selected_branch.get())));
    let host_branch = host.clone();
    let on_branch = Callback::new(move |branch: SelectedBranch| {
        host_branch.notify(Haptic::Light);
        draft.update(|store| choose_branch(store, branch));
    });

    // Date
    let selected_date = Signal::derive(move || draft.with(|s| s.draft().date.clone()));
    let host_date = host.clone();
    let on_date = Callback::new(move |iso: String| {
        host_date.notify(Haptic::Light);
        draft.update(|store| {
            choose_date(store, iso);
        });
    });

    // Slots
    let query = Memo::new(move |_| draft.with(|s| SlotQuery::from_draft(s.draft())));
    let slots = RwSignal::new(SlotsView::Prompt);
    let slots_loading = RwSignal::new(false);
    Effect::new(move || {
        let Some(requested) = query.get() else {
            slots.set(SlotsView::Prompt);
            slots_loading.set(false);
            return;
        };
        slots_loading.set(true);
        leptos::task::spawn_local(async move {
            let response = api::fetch_slots(&requested).await;
            if query.get_untracked().as_ref() != Some(&requested) {
                return;
            }
            if let Some(view) = draft.try_update(|store| apply_slots(store, response)) {
                slots.set(view);
            }
            slots_loading.set(false);
        });
    });
    let selected_time = Signal::derive(move || draft.with(|s| s.draft().time.clone()));
    let host_time = host.clone();
    let on_time = Callback::new(move |time: String| {
        host_time.notify(Haptic::Light);
        draft.update(|store| choose_time(store, time));
    });

    // Confirmation
    let busy = RwSignal::new(false);
    let host_confirm = host.clone();
    let on_confirm = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let telegram_id = host_confirm.user().id;
        let request = match draft.with_untracked(|s| prepare_submission(s.draft(), telegram_id)) {
            Ok(request) => request,
            Err(message) => {
                host_confirm.notify(Haptic::Warning);
                host_confirm.alert(message);
                return;
            }
        };
        busy.set(true);
        let host = host_confirm.clone();
        leptos::task::spawn_local(async move {
            let outcome = interpret_create(api::create_appointment(&request).await);
            let next = draft.try_update(|store| finish_submission(store, &outcome)).flatten();
            busy.set(false);
            match (next, outcome) {
                (Some(next), _) => {
                    host.notify(Haptic::Success);
                    nav.go(next.path());
                }
                (None, SubmitOutcome::Rejected(message)) => {
                    host.notify(Haptic::Error);
                    host.alert(&message);
                }
                (None, SubmitOutcome::Created(_)) => {}
            }
        });
    });
    use_main_button(&host, CONFIRM_LABEL, move || on_confirm.run(()));

    let summary = move || draft.with(|s| draft_summary(s.draft().service.as_ref(), s.draft().doctor.as_ref()));

    view! {
        <div class="page book-page">
            <div class="wizard-step">"Шаг 3 из 3"</div>
            <h1 class="page-title">{step.title()}</h1>
            {move || summary().map(|text| view! { <p class="wizard-summary">{text}</p> })}

            <h2 class="section-title">"Филиал"</h2>
            <BranchChips chips=chips on_select=on_branch/>

            <h2 class="section-title">"Дата"</h2>
            <Calendar today=today selected=selected_date on_select=on_date/>

            <h2 class="section-title">"Время"</h2>
            <Show when=move || !slots_loading.get() fallback=|| view! { <Loader/> }>
                <TimeSlots slots=slots selected=selected_time on_select=on_time/>
            </Show>

            <button
                class="btn btn-primary btn-block"
                disabled=move || busy.get()
                on:click=move |_| on_confirm.run(())
            >
                {move || confirm_label(busy.get())}
            </button>
        </div>
    }
}

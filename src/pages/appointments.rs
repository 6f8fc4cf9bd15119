//! `/appointments`: the visitor's bookings with cancellation.
//!
//! Cancelling asks for confirmation through the host, then deletes and
//! reloads the list; nothing is removed optimistically. Each appointment has
//! its own in-flight guard.

#[cfg(test)]
#[path = "appointments_test.rs"]
mod appointments_test;

use leptos::prelude::*;

use booking::Id;
use booking::submission::{CANCEL_CONFIRM_MESSAGE, interpret_cancel};

use crate::components::appointment_card::AppointmentCard;
use crate::components::empty_state::EmptyState;
use crate::components::loader::Loader;
use crate::host::{Haptic, HostHandle};
use crate::net::api;
use crate::state::listing::Listing;
use crate::util::navigation::{use_back_button, use_pending_navigation};
use crate::view_model::{APPOINTMENTS_EMPTY, AppointmentRow, BOOK_CALL_TO_ACTION};

/// Mark `id` as cancelling; `false` if it already is.
pub(crate) fn begin_cancel(in_flight: &mut Vec<Id>, id: Id) -> bool {
    if in_flight.contains(&id) {
        return false;
    }
    in_flight.push(id);
    true
}

pub(crate) fn end_cancel(in_flight: &mut Vec<Id>, id: Id) {
    in_flight.retain(|other| *other != id);
}

fn load(appointments: RwSignal<Listing<AppointmentRow>>, telegram_id: i64) {
    leptos::task::spawn_local(async move {
        let rows = api::fetch_appointments(telegram_id)
            .await
            .map(|list| list.iter().map(AppointmentRow::from).collect());
        appointments.set(Listing::from_response(rows));
    });
}

#[component]
pub fn AppointmentsPage() -> impl IntoView {
    let host = expect_context::<HostHandle>();
    let nav = use_pending_navigation();
    use_back_button(&host, "/", nav);
    let telegram_id = host.user().id;

    let appointments = RwSignal::new(Listing::<AppointmentRow>::Loading);
    load(appointments, telegram_id);

    let in_flight = RwSignal::new(Vec::<Id>::new());
    let on_cancel = Callback::new(move |id: Id| {
        if in_flight.with_untracked(|ids| ids.contains(&id)) {
            return;
        }
        let answer_host = host.clone();
        host.confirm(
            CANCEL_CONFIRM_MESSAGE,
            Box::new(move |confirmed| {
                if !confirmed || !in_flight.try_update(|ids| begin_cancel(ids, id)).unwrap_or(false) {
                    return;
                }
                leptos::task::spawn_local(async move {
                    let result = interpret_cancel(api::cancel_appointment(id).await);
                    in_flight.update(|ids| end_cancel(ids, id));
                    match result {
                        Ok(()) => {
                            log::info!("appointments: {id} cancelled");
                            answer_host.notify(Haptic::Success);
                            load(appointments, telegram_id);
                        }
                        Err(message) => {
                            answer_host.notify(Haptic::Error);
                            answer_host.alert(message);
                        }
                    }
                });
            }),
        );
    });

    view! {
        <div class="page appointments-page">
            <h1 class="page-title">"Мои записи"</h1>
            {move || match appointments.get() {
                Listing::Loading => view! { <Loader/> }.into_any(),
                Listing::Empty => {
                    view! {
                        <EmptyState icon="📅" message=APPOINTMENTS_EMPTY>
                            <a href="/book" class="btn btn-primary">
                                {BOOK_CALL_TO_ACTION}
                            </a>
                        </EmptyState>
                    }
                        .into_any()
                }
                Listing::Ready(rows) => rows
                    .into_iter()
                    .map(|row| {
                        let id = row.id;
                        let busy = Signal::derive(move || in_flight.with(|ids| ids.contains(&id)));
                        view! { <AppointmentCard row busy on_cancel/> }
                    })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}

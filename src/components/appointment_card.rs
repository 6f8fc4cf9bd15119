use leptos::prelude::*;

use booking::Id;

use crate::view_model::AppointmentRow;

/// Upcoming appointment with a cancel action.
#[component]
pub fn AppointmentCard(row: AppointmentRow, #[prop(into)] busy: Signal<bool>, on_cancel: Callback<Id>) -> impl IntoView {
    let id = row.id;
    view! {
        <div class="appointment-card">
            <div class="appointment-header">
                <div class="appointment-date">{row.date}</div>
                <div class="appointment-time">{row.time}</div>
            </div>
            <div class="appointment-body">
                <div class="appointment-service">{row.service}</div>
                <div class="appointment-doctor">"👨‍⚕️ " {row.doctor}</div>
                <div class="appointment-branch">"📍 " {row.address}</div>
            </div>
            <div class="appointment-actions">
                <button
                    class="btn btn-secondary"
                    disabled=move || busy.get()
                    on:click=move |_| on_cancel.run(id)
                >
                    "Отменить"
                </button>
            </div>
        </div>
    }
}

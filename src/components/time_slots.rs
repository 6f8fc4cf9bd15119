use leptos::prelude::*;

use booking::SlotsView;
use booking::slots::slot_cells;

/// Time cells for the chosen doctor and date, or the placeholder text.
#[component]
pub fn TimeSlots(
    #[prop(into)] slots: Signal<SlotsView>,
    #[prop(into)] selected: Signal<Option<String>>,
    on_select: Callback<String>,
) -> impl IntoView {
    move || {
        let current = slots.get();
        if let Some(message) = current.message() {
            return view! { <p class="time-slots-empty">{message}</p> }.into_any();
        }
        let SlotsView::Available(times) = current else {
            return ().into_any();
        };
        let cells = slot_cells(&times, selected.get().as_deref());
        view! {
            <div class="time-slots">
                {cells
                    .into_iter()
                    .map(|cell| {
                        let time = cell.time.clone();
                        view! {
                            <div
                                class="time-slot"
                                class:selected=cell.selected
                                on:click=move |_| on_select.run(time.clone())
                            >
                                {cell.time}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    }
}

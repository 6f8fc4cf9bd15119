//! Month calendar for the date/time step.
//!
//! Renders a [`MonthGrid`] and pages between months. Past days and leading
//! blanks are inert; paging back stops at the current month.

use leptos::prelude::*;
use time::Date;

use booking::calendar::{CalendarCell, MonthGrid, WEEKDAY_LABELS, YearMonth, initial_month};

#[component]
pub fn Calendar(
    today: Date,
    #[prop(into)] selected: Signal<Option<String>>,
    on_select: Callback<String>,
) -> impl IntoView {
    let month = RwSignal::new(initial_month(today, selected.get_untracked().as_deref()));
    let grid = Memo::new(move |_| MonthGrid::build(month.get(), today, selected.get().as_deref()));
    let can_go_back = move || grid.with(|g| g.as_ref().is_ok_and(|g| g.can_go_back));
    let title = move || month.get().title();

    let cells = move || match grid.get() {
        Ok(grid) => grid.cells.into_iter().map(|cell| render_cell(cell, on_select)).collect_view().into_any(),
        Err(err) => {
            log::error!("calendar: {err}");
            ().into_any()
        }
    };

    view! {
        <div class="calendar">
            <div class="calendar-header">
                <button
                    class="calendar-nav"
                    aria-label="Предыдущий месяц"
                    disabled=move || !can_go_back()
                    on:click=move |_| month.update(|m| *m = YearMonth::prev(*m))
                >
                    "‹"
                </button>
                <div class="calendar-title">{title}</div>
                <button
                    class="calendar-nav"
                    aria-label="Следующий месяц"
                    on:click=move |_| month.update(|m| *m = YearMonth::next(*m))
                >
                    "›"
                </button>
            </div>
            <div class="calendar-grid">
                {WEEKDAY_LABELS.into_iter().map(|label| view! { <div class="calendar-weekday">{label}</div> }).collect_view()}
                {cells}
            </div>
        </div>
    }
}

fn render_cell(cell: CalendarCell, on_select: Callback<String>) -> AnyView {
    let selectable = !cell.is_disabled();
    match cell {
        CalendarCell::Blank => view! { <div class="calendar-day empty disabled"></div> }.into_any(),
        CalendarCell::Day(day) => {
            let iso = day.iso;
            view! {
                <div
                    class="calendar-day"
                    class:disabled={!selectable}
                    class:today=day.today
                    class:selected=day.selected
                    on:click=move |_| {
                        if selectable {
                            on_select.run(iso.clone());
                        }
                    }
                >
                    {day.day}
                </div>
            }
            .into_any()
        }
    }
}

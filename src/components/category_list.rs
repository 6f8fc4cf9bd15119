//! Category list linking to the filtered service catalog.

use leptos::prelude::*;

use crate::host::{Haptic, HostHandle};
use crate::view_model::CategoryRow;

#[component]
pub fn CategoryList(rows: Vec<CategoryRow>) -> impl IntoView {
    let host = expect_context::<HostHandle>();
    rows.into_iter()
        .map(|row| {
            let host = host.clone();
            view! {
                <a href=row.href class="list-item" on:click=move |_| host.notify(Haptic::Light)>
                    <div class="list-item-icon">{row.icon}</div>
                    <div class="list-item-content">
                        <div class="list-item-title">{row.name}</div>
                        <div class="list-item-subtitle">{row.subtitle}</div>
                    </div>
                    <div class="list-item-arrow">"›"</div>
                </a>
            }
        })
        .collect_view()
}

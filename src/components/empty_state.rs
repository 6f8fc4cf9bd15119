//! Placeholder for lists with nothing to show.

use leptos::prelude::*;

#[component]
pub fn EmptyState(
    icon: &'static str,
    message: &'static str,
    /// Optional action rendered under the message.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state-icon">{icon}</div>
            <p>{message}</p>
            {children.map(|c| c())}
        </div>
    }
}

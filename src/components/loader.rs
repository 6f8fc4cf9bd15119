use leptos::prelude::*;

/// Spinner shown while a fetch is outstanding.
#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="loader">
            <div class="spinner"></div>
        </div>
    }
}

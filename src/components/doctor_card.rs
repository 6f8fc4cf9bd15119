//! Doctor card with a photo that falls back to a placeholder.

use leptos::prelude::*;

use booking::draft::SelectedDoctor;

use crate::config::DOCTOR_PHOTO_PLACEHOLDER;
use crate::host::{Haptic, HostHandle};
use crate::view_model::DoctorCard as DoctorCardModel;

/// Doctor card. Without `on_select` it is informational only.
#[component]
pub fn DoctorCard(card: DoctorCardModel, #[prop(optional)] on_select: Option<Callback<SelectedDoctor>>) -> impl IntoView {
    let host = expect_context::<HostHandle>();
    let DoctorCardModel {
        name,
        photo_url,
        specialty,
        rating,
        experience,
        promo,
        selection,
        ..
    } = card;
    let photo = RwSignal::new(photo_url);
    let alt = name.clone();

    let on_click = move |_: leptos::ev::MouseEvent| match on_select {
        Some(on_select) => on_select.run(selection.clone()),
        None => host.notify(Haptic::Light),
    };

    view! {
        <div class="doctor-card" class:selectable={on_select.is_some()} on:click=on_click>
            <img
                class="doctor-photo"
                src=move || photo.get()
                alt=alt
                on:error=move |_| {
                    if photo.get_untracked() != DOCTOR_PHOTO_PLACEHOLDER {
                        photo.set(DOCTOR_PHOTO_PLACEHOLDER.to_owned());
                    }
                }
            />
            <div class="doctor-info">
                <div class="doctor-name">
                    {name}
                    <Show when=move || promo>
                        <span class="badge badge-promo">"Акция"</span>
                    </Show>
                </div>
                <div class="doctor-specialty">{specialty}</div>
                <div class="doctor-meta">
                    {rating.map(|r| view! { <span class="doctor-rating">{r}</span> })}
                    {experience.map(|e| view! { <span>{e}</span> })}
                </div>
            </div>
        </div>
    }
}

use leptos::prelude::*;

use booking::draft::SelectedService;

use crate::view_model::ServiceCard as ServiceCardModel;

/// Service card; a click reports the service as chosen.
#[component]
pub fn ServiceCard(card: ServiceCardModel, on_select: Callback<SelectedService>) -> impl IntoView {
    let ServiceCardModel {
        name,
        duration,
        price,
        popular,
        promo,
        selection,
        ..
    } = card;
    view! {
        <div class="service-card" on:click=move |_| on_select.run(selection.clone())>
            <div>
                <div class="service-name">
                    {name}
                    <Show when=move || popular>
                        <span class="badge badge-popular">"Популярное"</span>
                    </Show>
                    <Show when=move || promo>
                        <span class="badge badge-promo">"Акция"</span>
                    </Show>
                </div>
                {duration.map(|d| view! { <div class="service-duration">{d}</div> })}
            </div>
            <div class="service-price" class:promo=promo>
                {price}
            </div>
        </div>
    }
}

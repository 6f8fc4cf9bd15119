use leptos::prelude::*;

use booking::draft::SelectedBranch;

use crate::view_model::BranchChip;

/// Horizontal branch selector; the active chip follows the draft.
#[component]
pub fn BranchChips(#[prop(into)] chips: Signal<Vec<BranchChip>>, on_select: Callback<SelectedBranch>) -> impl IntoView {
    view! {
        <div class="branch-chips">
            {move || {
                chips
                    .get()
                    .into_iter()
                    .map(|chip| {
                        let selection = chip.selection;
                        view! {
                            <div
                                class="branch-chip"
                                class:active=chip.active
                                on:click=move |_| on_select.run(selection.clone())
                            >
                                {chip.label}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

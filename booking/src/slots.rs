//! Time-slot lookup for the date/time step.
//!
//! Slots depend on two draft fields, the doctor and the date. Until both are
//! chosen the step shows a prompt and no request is made. A slot response may
//! name the branch the doctor works at that day; that branch is written into
//! the draft so the booking goes to the right location.

#[cfg(test)]
#[path = "slots_test.rs"]
mod slots_test;

use crate::draft::{BookingDraft, DraftField, DraftStorage, DraftStore, SelectedBranch};
use crate::types::{Id, SlotsResponse};

/// Text shown before a doctor and date are chosen.
pub const PROMPT_TEXT: &str = "Выберите дату";
/// Text shown when the lookup fails or returns nothing.
pub const EMPTY_TEXT: &str = "Нет свободных слотов на эту дату";

/// Parameters of `GET /slots`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotQuery {
    pub doctor_id: Id,
    /// `YYYY-MM-DD`.
    pub date: String,
}

impl SlotQuery {
    /// Query for the draft's doctor and date, if both are set.
    #[must_use]
    pub fn from_draft(draft: &BookingDraft) -> Option<Self> {
        let doctor_id = draft.doctor.as_ref()?.id;
        let date = draft.date.as_deref().filter(|d| !d.is_empty())?;
        Some(Self {
            doctor_id,
            date: date.to_owned(),
        })
    }
}

/// What the slot area shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SlotsView {
    /// Doctor or date missing.
    Prompt,
    /// Lookup failed or no free slots.
    Empty,
    /// Bookable times in server order.
    Available(Vec<String>),
}

impl SlotsView {
    /// Placeholder text for the non-list states.
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Prompt => Some(PROMPT_TEXT),
            Self::Empty => Some(EMPTY_TEXT),
            Self::Available(_) => None,
        }
    }
}

/// A clickable time cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotCell {
    pub time: String,
    pub selected: bool,
}

/// Interpret a slot response, persisting its branch into the draft.
///
/// `None` and an empty list both yield [`SlotsView::Empty`]; the branch is
/// only taken from a response that has slots.
pub fn apply_slots<S: DraftStorage>(store: &mut DraftStore<S>, response: Option<SlotsResponse>) -> SlotsView {
    let Some(response) = response.filter(|r| !r.slots.is_empty()) else {
        return SlotsView::Empty;
    };
    if let Some(branch_id) = response.branch_id {
        store.set_field(DraftField::Branch(SelectedBranch {
            id: branch_id,
            name: None,
        }));
    }
    SlotsView::Available(response.slots)
}

/// Cells for `times`, marking the one equal to `selected`.
#[must_use]
pub fn slot_cells(times: &[String], selected: Option<&str>) -> Vec<SlotCell> {
    times
        .iter()
        .map(|time| SlotCell {
            time: time.clone(),
            selected: selected == Some(time.as_str()),
        })
        .collect()
}

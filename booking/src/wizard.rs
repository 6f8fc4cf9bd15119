//! Linear booking wizard.
//!
//! ```text
//! SelectingService -> SelectingDoctor -> SelectingBranchOrSlot -> Confirmed
//!      /book            /book/doctor        /book/datetime        /book/success
//! ```
//!
//! Each `choose_*` function writes one draft field and returns where the
//! client should go next. Branch, date and time are chosen in place on the
//! date/time step, so those transitions stay on the same step.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

use crate::draft::{BookingDraft, DraftField, DraftStorage, DraftStore, SelectedBranch, SelectedDoctor, SelectedService};
use crate::slots::SlotQuery;

/// Wizard state, one per route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WizardStep {
    #[default]
    SelectingService,
    SelectingDoctor,
    SelectingBranchOrSlot,
    Confirmed,
}

impl WizardStep {
    pub const ALL: [Self; 4] = [
        Self::SelectingService,
        Self::SelectingDoctor,
        Self::SelectingBranchOrSlot,
        Self::Confirmed,
    ];

    /// Route of the step.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::SelectingService => "/book",
            Self::SelectingDoctor => "/book/doctor",
            Self::SelectingBranchOrSlot => "/book/datetime",
            Self::Confirmed => "/book/success",
        }
    }

    /// Step for a route; a trailing slash is ignored.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        Self::ALL.into_iter().find(|step| step.path() == trimmed)
    }

    /// Page heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::SelectingService => "Выберите услугу",
            Self::SelectingDoctor => "Выберите врача",
            Self::SelectingBranchOrSlot => "Дата и время",
            Self::Confirmed => "Вы записаны!",
        }
    }

    /// Step the host back button returns to. The terminal step has none.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::SelectingService | Self::Confirmed => None,
            Self::SelectingDoctor => Some(Self::SelectingService),
            Self::SelectingBranchOrSlot => Some(Self::SelectingDoctor),
        }
    }

    /// Furthest step the draft can resume at.
    #[must_use]
    pub fn resume(draft: &BookingDraft) -> Self {
        match (&draft.service, &draft.doctor) {
            (None, _) => Self::SelectingService,
            (Some(_), None) => Self::SelectingDoctor,
            (Some(_), Some(_)) => Self::SelectingBranchOrSlot,
        }
    }
}

/// Record the service and advance to the doctor step.
pub fn choose_service<S: DraftStorage>(store: &mut DraftStore<S>, service: SelectedService) -> WizardStep {
    store.set_field(DraftField::Service(service));
    WizardStep::SelectingDoctor
}

/// Record the doctor and advance to the date/time step.
pub fn choose_doctor<S: DraftStorage>(store: &mut DraftStore<S>, doctor: SelectedDoctor) -> WizardStep {
    store.set_field(DraftField::Doctor(doctor));
    WizardStep::SelectingBranchOrSlot
}

/// Record the branch; stays on the date/time step.
pub fn choose_branch<S: DraftStorage>(store: &mut DraftStore<S>, branch: SelectedBranch) {
    store.set_field(DraftField::Branch(branch));
}

/// Record the date and return the slot query to refresh, if one can be made.
///
/// A time picked for another date is dropped.
pub fn choose_date<S: DraftStorage>(store: &mut DraftStore<S>, date: String) -> Option<SlotQuery> {
    store.set_field(DraftField::Date(date));
    SlotQuery::from_draft(store.draft())
}

/// Record the time; stays on the date/time step.
pub fn choose_time<S: DraftStorage>(store: &mut DraftStore<S>, time: String) {
    store.set_field(DraftField::Time(time));
}

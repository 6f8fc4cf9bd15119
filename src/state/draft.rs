//! The session's booking draft, backed by `localStorage`.

use booking::DraftStore;

use crate::util::storage::BrowserStorage;

/// Draft store the app keeps in context as `RwSignal<SessionDraft>`.
pub type SessionDraft = DraftStore<BrowserStorage>;

/// Open the draft persisted by an earlier page load, if any.
pub fn open_session_draft() -> SessionDraft {
    let store = DraftStore::open(BrowserStorage);
    log::debug!("draft: restored, empty={}", store.draft().is_empty());
    store
}

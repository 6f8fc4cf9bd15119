//! Persisted booking draft.
//!
//! SYSTEM CONTEXT
//! ==============
//! The wizard spans several routes and the Mini App webview may reload between
//! them, so every selection is written through to storage as one JSON object
//! under [`DRAFT_KEY`]. A [`DraftStore`] owns both the in-memory draft and its
//! storage backend; the client keeps exactly one of them in context.
//!
//! Restoring is a field-by-field overwrite: keys missing from the stored object
//! leave the in-memory value alone, keys stored as `null` reset the field.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::BookingError;
use crate::types::Id;

/// Storage key of the serialized draft.
pub const DRAFT_KEY: &str = "booking";

/// Service chosen in the first wizard step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelectedService {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub price: Option<f64>,
}

/// Doctor chosen in the second wizard step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedDoctor {
    pub id: Id,
    pub name: String,
}

/// Branch chosen from the chips or learned from a slot response.
///
/// A branch learned from slots only carries its id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedBranch {
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The visitor's in-progress, not yet submitted booking.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub service: Option<SelectedService>,
    pub doctor: Option<SelectedDoctor>,
    pub branch: Option<SelectedBranch>,
    /// `YYYY-MM-DD`.
    pub date: Option<String>,
    pub time: Option<String>,
}

/// One draft field with its new value.
#[derive(Clone, Debug, PartialEq)]
pub enum DraftField {
    Service(SelectedService),
    Doctor(SelectedDoctor),
    Branch(SelectedBranch),
    Date(String),
    Time(String),
}

impl DraftField {
    /// Field name as stored in the persisted object.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Service(_) => "service",
            Self::Doctor(_) => "doctor",
            Self::Branch(_) => "branch",
            Self::Date(_) => "date",
            Self::Time(_) => "time",
        }
    }
}

impl BookingDraft {
    /// Overwrite a single field.
    ///
    /// A time belongs to its date: setting a different date drops the time.
    pub fn apply(&mut self, field: DraftField) {
        match field {
            DraftField::Service(service) => self.service = Some(service),
            DraftField::Doctor(doctor) => self.doctor = Some(doctor),
            DraftField::Branch(branch) => self.branch = Some(branch),
            DraftField::Date(date) => {
                if self.date.as_deref() != Some(date.as_str()) {
                    self.time = None;
                }
                self.date = Some(date);
            }
            DraftField::Time(time) => self.time = Some(time),
        }
    }

    /// `true` when no field has been chosen yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn merge(&mut self, stored: StoredDraft) {
        if let Some(service) = stored.service {
            self.service = service;
        }
        if let Some(doctor) = stored.doctor {
            self.doctor = doctor;
        }
        if let Some(branch) = stored.branch {
            self.branch = branch;
        }
        if let Some(date) = stored.date {
            self.date = date;
        }
        if let Some(time) = stored.time {
            self.time = time;
        }
    }
}

/// Persisted shape where the outer `Option` records key presence.
#[derive(Debug, Default, Deserialize)]
struct StoredDraft {
    #[serde(default, deserialize_with = "present")]
    service: Option<Option<SelectedService>>,
    #[serde(default, deserialize_with = "present")]
    doctor: Option<Option<SelectedDoctor>>,
    #[serde(default, deserialize_with = "present")]
    branch: Option<Option<SelectedBranch>>,
    #[serde(default, deserialize_with = "present")]
    date: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    time: Option<Option<String>>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Key/value backend for the serialized draft.
pub trait DraftStorage {
    /// Raw value under `key`, if any.
    fn read(&self, key: &str) -> Option<String>;

    /// Replace the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Storage`] when the backend rejects the write.
    fn write(&self, key: &str, value: &str) -> Result<(), BookingError>;

    /// Delete `key`; a missing key is not an error.
    fn remove(&self, key: &str);
}

/// In-process storage; clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl DraftStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), BookingError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
    }
}

/// Owned draft plus the storage it is mirrored to.
#[derive(Clone, Debug)]
pub struct DraftStore<S> {
    storage: S,
    draft: BookingDraft,
}

impl<S: DraftStorage> DraftStore<S> {
    /// Empty draft over `storage`; nothing is read yet.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            draft: BookingDraft::default(),
        }
    }

    /// Empty draft over `storage`, then [`load`](Self::load).
    pub fn open(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.load();
        store
    }

    /// Current in-memory draft.
    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    /// Backing storage (test-only accessor).
    #[cfg(test)]
    pub(crate) fn storage(&self) -> &S {
        &self.storage
    }

    /// Merge one field and write the whole draft back to storage.
    pub fn set_field(&mut self, field: DraftField) {
        log::debug!("draft: set {}", field.name());
        self.draft.apply(field);
        self.persist();
    }

    /// Restore the persisted draft over the in-memory one.
    ///
    /// Malformed stored data is logged and ignored.
    pub fn load(&mut self) {
        let Some(raw) = self.storage.read(DRAFT_KEY) else {
            return;
        };
        match serde_json::from_str::<StoredDraft>(&raw) {
            Ok(stored) => self.draft.merge(stored),
            Err(err) => log::warn!("draft: ignoring malformed stored draft: {err}"),
        }
    }

    /// Drop the persisted draft and reset the in-memory one.
    pub fn clear(&mut self) {
        self.storage.remove(DRAFT_KEY);
        self.draft = BookingDraft::default();
    }

    fn persist(&self) {
        let raw = match serde_json::to_string(&self.draft) {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("draft: serialization failed: {err}");
                return;
            }
        };
        if let Err(err) = self.storage.write(DRAFT_KEY, &raw) {
            log::warn!("draft: {err}");
        }
    }
}

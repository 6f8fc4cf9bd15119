//! `localStorage` backend for the booking draft.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes csr-only web-sys glue so the draft store stays browser-free.
//! Native builds read nothing and drop writes.

use booking::{BookingError, DraftStorage};

/// Draft storage over `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl DraftStorage for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), BookingError> {
        #[cfg(feature = "csr")]
        {
            let storage =
                local_storage().ok_or_else(|| BookingError::Storage("localStorage unavailable".to_owned()))?;
            storage
                .set_item(key, value)
                .map_err(|e| BookingError::Storage(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

//! # Browser `localStorage` backend
//!
//! [`LocalStorage`] is the [`Storage`] implementation used on the **web platform**.
//! It is a zero-size handle: every call looks up `window.localStorage` afresh, so
//! it is `Clone`/`Copy` friendly and never holds a JS reference across awaits.
//!
//! Reads and removals swallow JS exceptions (private browsing modes may deny
//! access); writes surface them as [`StoreError::Write`] so the login flow can
//! report a failed persist.

use crate::storage::Storage;
use crate::StoreError;

/// `window.localStorage`-backed Storage for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn handle() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::handle()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = Self::handle().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StoreError::Write(key.to_string()))
    }

    fn clear(&self) {
        if let Some(storage) = Self::handle() {
            let _ = storage.clear();
        }
    }
}

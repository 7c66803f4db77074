//! # Key/value storage abstraction
//!
//! The dashboard persists exactly two things on the client: the bearer token
//! and the logged-in user's profile. Both live in a flat string-keyed store
//! that maps onto the browser's `localStorage` on the web platform and onto
//! [`crate::MemoryStorage`] everywhere else (tests, native builds).
//!
//! All methods are synchronous because `localStorage` itself is.

use crate::StoreError;

/// A flat, string-keyed, string-valued persistent store.
pub trait Storage {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove every key held by this store.
    fn clear(&self);
}

//! # Storage Traits
//!
//! The persistence port the record store is written against.

use anyhow::Result;

/// String key/value storage scoped to the deployed origin.
///
/// Accessed only from the UI thread, so implementations need not be `Send`.
pub trait KeyValueStore {
    /// Read the raw text stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace whatever is stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`; deleting a missing key is not an error
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

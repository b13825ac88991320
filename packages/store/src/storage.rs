//! # Durable client storage
//!
//! [`KeyValueStore`] is the seam between the stores and whatever durable
//! storage the platform offers. Values are JSON strings:
//!
//! | Key (default) | Value |
//! |---------------|-------|
//! | `storyswap-favorites` | JSON array of item ids, e.g. `[3,1]` |
//! | `storyswap-user` | JSON object of the signed-in [`crate::User`], absent when signed out |
//!
//! Implementations:
//!
//! - [`crate::MemoryStorage`]: tests and fallback
//! - [`crate::FileStorage`]: desktop, one file per key
//! - `LocalStorage`: browser `localStorage` (wasm + `web` feature)
//!
//! Access is synchronous and treated as always succeeding. Backends log and
//! swallow I/O failures instead of returning them.

use std::rc::Rc;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::PersistError;

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// Read and decode a JSON value. `Ok(None)` when the key is absent.
pub fn load_json<T, S>(storage: &S, key: &str) -> Result<Option<T>, PersistError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = storage.get(key) else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| PersistError::Malformed {
            key: key.to_string(),
            source,
        })
}

/// Encode a value as JSON and write it.
pub fn save_json<T, S>(storage: &S, key: &str, value: &T) -> Result<(), PersistError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|source| PersistError::Encode {
        key: key.to_string(),
        source,
    })?;
    storage.set(key, &raw);
    Ok(())
}

//! Local key-value storage.
//!
//! All state lives under a handful of keys, each holding one JSON document
//! that is read and written whole. `KeyValueStore` is the storage port;
//! `EventStore` and `UserStore` layer typed records on top of it.

mod events;
mod file;
mod memory;
mod user;

pub use events::EventStore;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use user::UserStore;

use std::future::Future;

use crate::error::EventlyResult;

/// Key holding the registered user object.
pub const USER_KEY: &str = "user";

/// Key holding the array of events.
pub const EVENTS_KEY: &str = "events";

/// Whole-value string storage addressed by key.
pub trait KeyValueStore {
    /// Read a value. A key that was never written yields `None`.
    fn get(&self, key: &str) -> impl Future<Output = EventlyResult<Option<String>>> + Send;

    /// Replace the value under `key`.
    fn set(&self, key: &str, value: &str) -> impl Future<Output = EventlyResult<()>> + Send;
}

impl<S: KeyValueStore + Sync> KeyValueStore for &S {
    fn get(&self, key: &str) -> impl Future<Output = EventlyResult<Option<String>>> + Send {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> impl Future<Output = EventlyResult<()>> + Send {
        (**self).set(key, value)
    }
}

//! Host key-value storage used for cross-page parameter handoff
//!
//! Reads and writes are synchronous: they block the calling tick but never
//! yield to the event loop.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StorageError;
use serde_json::Value;

/// Persistent key-value store provided by the host
pub trait KeyValueStore {
    /// Write `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &Value) -> Result<(), StorageError>;

    /// Read the value last written under `key`
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn set(&mut self, key: &str, value: &Value) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        (**self).get(key)
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Local key-value storage port.
//!
//! Mirrors browser-style local storage: string keys, string values, and a
//! write that may be refused when the quota is exhausted.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The write would exceed the storage quota. Nothing was written.
    #[error("storage quota exceeded: {required} bytes required, {quota} allowed")]
    QuotaExceeded { required: usize, quota: usize },

    /// The key cannot be stored by this backend.
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    /// The backend failed to read or write.
    #[error("storage I/O failed: {0}")]
    Io(String),
}

/// Port for the persistent key-value store.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Missing keys are not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_error_mentions_sizes() {
        let err = StorageError::QuotaExceeded {
            required: 6000,
            quota: 5000,
        };
        let message = err.to_string();
        assert!(message.contains("6000"));
        assert!(message.contains("5000"));
    }
}

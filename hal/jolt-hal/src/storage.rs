//! Persistent storage abstractions
//!
//! The platform keeps a small key-value store that survives app restarts.
//! The application only stores integers in it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Storage keys for persisted values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u32)]
pub enum StorageKey {
    /// Best magnitude recorded across all sessions
    HighScore = 1,
}

impl StorageKey {
    /// Get the key as the platform's numeric key
    pub fn as_u32(self) -> u32 {
        self as u32
    }

    /// Create a key from the platform's numeric key
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            1 => Some(StorageKey::HighScore),
            _ => None,
        }
    }
}

/// Errors from persistent storage operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// Key not found
    NotFound,
    /// Storage operation failed
    Storage,
    /// Storage is full
    Full,
}

/// Persistent integer storage
///
/// Writes are expected to be durable once they return `Ok`.
pub trait PersistentStorage {
    /// Read an integer by key
    ///
    /// Returns [`StorageError::NotFound`] if nothing was ever written under
    /// `key`.
    fn read_int(&mut self, key: StorageKey) -> Result<i32, StorageError>;

    /// Write an integer by key, replacing any previous value
    fn write_int(&mut self, key: StorageKey, value: i32) -> Result<(), StorageError>;

    /// Check if a key exists in storage
    fn exists(&mut self, key: StorageKey) -> bool;

    /// Remove a key
    fn delete(&mut self, key: StorageKey) -> Result<(), StorageError>;

    /// Read an integer, treating a missing key as zero
    fn read_int_or_zero(&mut self, key: StorageKey) -> Result<i32, StorageError> {
        match self.read_int(key) {
            Err(StorageError::NotFound) => Ok(0),
            other => other,
        }
    }
}

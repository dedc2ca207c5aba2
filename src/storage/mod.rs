//! Durable storage of the raw currency collection.
//!
//! The collection is kept as a JSON array under a single fixed key. There is
//! no schema versioning: a payload that fails to decode is reported as
//! [`StorageError::Malformed`] and callers fall back to the seed set.

mod json_file;
mod memory;

use std::path::PathBuf;

use thiserror::Error;

use crate::currency::CurrencyInfo;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;

/// Key under which the collection is stored.
pub const CURRENCIES_KEY: &str = "@currency_list/currencies";

/// Errors raised by storage adapters.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read storage file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write storage file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed payload under key '{key}': {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode collection: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Key/value persistence of the raw collection.
///
/// Implementations are called from a background writer thread and from a
/// blocking task during initialization, so they may block on I/O.
pub trait CurrencyStorage: Send + Sync + 'static {
    /// Read the stored collection. `Ok(None)` means nothing has been stored.
    fn load(&self) -> Result<Option<Vec<CurrencyInfo>>, StorageError>;

    /// Replace the stored collection.
    fn save(&self, records: &[CurrencyInfo]) -> Result<(), StorageError>;

    /// Remove everything this adapter has stored.
    fn clear_all(&self) -> Result<(), StorageError>;
}

fn decode(payload: serde_json::Value) -> Result<Option<Vec<CurrencyInfo>>, StorageError> {
    if payload.is_null() {
        return Ok(None);
    }
    serde_json::from_value(payload)
        .map(Some)
        .map_err(|source| StorageError::Malformed {
            key: CURRENCIES_KEY.to_string(),
            source,
        })
}

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use parking_lot::Mutex;

use super::{decode, CurrencyStorage, StorageError, CURRENCIES_KEY};
use crate::currency::CurrencyInfo;

/// In-process key/value storage holding serialized JSON strings.
///
/// Reads and writes can be made to fail on demand, which is how the store's
/// degradation paths are exercised.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    saves: AtomicUsize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with `records`.
    pub fn with_records(records: &[CurrencyInfo]) -> Self {
        let storage = Self::new();
        if let Ok(payload) = serde_json::to_string(records) {
            storage.set_raw(payload);
        }
        storage
    }

    /// Overwrite the stored payload with an arbitrary string.
    pub fn set_raw(&self, payload: impl Into<String>) {
        self.entries
            .lock()
            .insert(CURRENCIES_KEY.to_string(), payload.into());
    }

    pub fn raw(&self) -> Option<String> {
        self.entries.lock().get(CURRENCIES_KEY).cloned()
    }

    /// Decoded view of the stored collection, `None` if absent or undecodable.
    pub fn stored(&self) -> Option<Vec<CurrencyInfo>> {
        self.raw().and_then(|payload| serde_json::from_str(&payload).ok())
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl CurrencyStorage for MemoryStorage {
    fn load(&self) -> Result<Option<Vec<CurrencyInfo>>, StorageError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("read rejected".to_string()));
        }
        let Some(payload) = self.raw() else {
            return Ok(None);
        };
        let value: serde_json::Value =
            serde_json::from_str(&payload).map_err(|source| StorageError::Malformed {
                key: CURRENCIES_KEY.to_string(),
                source,
            })?;
        decode(value)
    }

    fn save(&self, records: &[CurrencyInfo]) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("write rejected".to_string()));
        }
        let payload = serde_json::to_string(records).map_err(StorageError::Encode)?;
        self.set_raw(payload);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn clear_all(&self) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("write rejected".to_string()));
        }
        self.entries.lock().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::seed_currencies;

    #[test]
    fn test_round_trip_through_json() {
        let storage = MemoryStorage::new();
        assert!(storage.load().unwrap().is_none());

        storage.save(&seed_currencies()).unwrap();
        assert_eq!(storage.load().unwrap(), Some(seed_currencies()));
        assert_eq!(storage.save_count(), 1);
    }

    #[test]
    fn test_malformed_payload() {
        let storage = MemoryStorage::new();
        storage.set_raw("{broken");
        assert!(matches!(storage.load(), Err(StorageError::Malformed { .. })));
    }

    #[test]
    fn test_null_payload_is_absent() {
        let storage = MemoryStorage::new();
        storage.set_raw("null");
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_failure_injection() {
        let storage = MemoryStorage::with_records(&seed_currencies());
        storage.set_fail_reads(true);
        assert!(storage.load().is_err());

        storage.set_fail_writes(true);
        assert!(storage.save(&[]).is_err());
        assert_eq!(storage.stored(), Some(seed_currencies()));
        assert_eq!(storage.save_count(), 0);
    }
}

//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use currency_view::generator::RecordGenerator;
use currency_view::storage::{CurrencyStorage, MemoryStorage};
use currency_view::{CurrencyInfo, CurrencyStore};

/// Generator returning the same crypto record every time.
pub fn mock_generator() -> Arc<dyn RecordGenerator> {
    Arc::new(|| CurrencyInfo::crypto("MOCK", "Mock Currency", "MOCK"))
}

/// Generator yielding fiat records with sequential ids.
pub fn fiat_generator() -> Arc<dyn RecordGenerator> {
    let next = AtomicUsize::new(0);
    Arc::new(move || {
        let n = next.fetch_add(1, Ordering::SeqCst);
        CurrencyInfo::fiat(format!("FIAT-{}", n), "Test Currency", "¤", "TST")
    })
}

/// Generator yielding crypto records with sequential ids.
pub fn crypto_generator() -> Arc<dyn RecordGenerator> {
    let next = AtomicUsize::new(0);
    Arc::new(move || {
        let n = next.fetch_add(1, Ordering::SeqCst);
        CurrencyInfo::crypto(format!("CRYPTO-{}", n), "Test Coin", "TCN")
    })
}

pub fn store_with(storage: Arc<MemoryStorage>, generator: Arc<dyn RecordGenerator>) -> CurrencyStore {
    CurrencyStore::new(storage, generator)
}

/// Store over fresh in-memory storage, already initialized.
pub async fn seeded_store() -> (CurrencyStore, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    let store = store_with(storage.clone(), mock_generator());
    store.initialize().await;
    (store, storage)
}

pub fn ids(records: &[CurrencyInfo]) -> Vec<String> {
    records.iter().map(|c| c.id.clone()).collect()
}

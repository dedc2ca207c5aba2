mod common;

use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use common::{crypto_generator, fiat_generator, ids, mock_generator, seeded_store, store_with};
use currency_view::currency::{is_crypto, seed_currencies};
use currency_view::search::search_hint;
use currency_view::storage::MemoryStorage;
use currency_view::{Category, CurrencyInfo, CurrencyStore};

#[tokio::test]
async fn crypto_then_search_b_yields_matching_crypto() {
    let (store, _) = seeded_store().await;
    store.set_category(Category::Crypto);
    store.set_query("b");

    assert_eq!(ids(&store.visible()), vec!["BTC", "BCH", "BNB", "CUC"]);
    assert!(store.visible().iter().all(is_crypto));
}

#[tokio::test]
async fn search_is_case_insensitive_through_store() {
    let (store, _) = seeded_store().await;
    store.set_query("BITCOIN");
    assert_eq!(ids(&store.visible()), vec!["BTC", "BCH"]);
}

#[tokio::test]
async fn insert_random_under_fiat_adds_fiat_record() {
    let storage = Arc::new(MemoryStorage::new());
    let store = store_with(storage, fiat_generator());
    store.initialize().await;
    store.set_category(Category::Fiat);

    let before_raw = store.raw().len();
    let before_visible = store.visible().len();
    store.insert_random();

    assert_eq!(store.raw().len(), before_raw + 1);
    assert_eq!(store.visible().len(), before_visible + 1);
    assert_eq!(store.visible().last().map(|c| c.id.as_str()), Some("FIAT-0"));
}

#[tokio::test]
async fn insert_random_under_fiat_hides_crypto_record() {
    let storage = Arc::new(MemoryStorage::new());
    let store = store_with(storage, crypto_generator());
    store.initialize().await;
    store.set_category(Category::Fiat);

    let before_visible = store.visible();
    store.insert_random();

    assert_eq!(store.raw().len(), 18);
    assert_eq!(store.visible(), before_visible);
}

#[tokio::test]
async fn insert_random_preserves_existing_order() {
    let (store, _) = seeded_store().await;
    store.insert_random();

    let raw = store.raw();
    assert_eq!(&raw[..17], seed_currencies().as_slice());
    assert_eq!(raw[17].id, "MOCK");
}

#[tokio::test]
async fn clear_then_initialize_with_absent_data_restores_seed() {
    let storage = Arc::new(MemoryStorage::new());
    let store = store_with(storage.clone(), mock_generator());
    store.initialize().await;
    store.clear();
    assert!(store.raw().is_empty());
    assert!(store.visible().is_empty());

    // A fresh process whose storage has nothing for the key.
    let fresh = Arc::new(MemoryStorage::new());
    let restarted = store_with(fresh, mock_generator());
    restarted.initialize().await;
    assert_eq!(restarted.raw(), seed_currencies());
}

#[tokio::test]
async fn empty_persisted_collection_falls_back_to_seed() {
    let storage = Arc::new(MemoryStorage::new());
    let store = store_with(storage.clone(), mock_generator());
    store.initialize().await;
    store.clear();
    assert!(store.flush());
    assert_eq!(storage.stored(), Some(vec![]));

    let restarted = store_with(storage, mock_generator());
    restarted.initialize().await;
    assert_eq!(restarted.raw(), seed_currencies());
}

#[tokio::test]
async fn reset_crypto_no_match_is_empty() {
    let (store, _) = seeded_store().await;
    store.clear();
    store.reset();
    store.set_category(Category::Crypto);
    store.set_query("xyz");

    assert!(store.visible().is_empty());
    assert_eq!(search_hint(&store.visible()), "");
    // The empty state still suggests something from the category.
    assert_eq!(store.hint(), "Try \"BTC\"");
}

#[tokio::test]
async fn hint_is_empty_when_results_exist() {
    let (store, _) = seeded_store().await;
    store.set_query("euro");
    assert_eq!(ids(&store.visible()), vec!["EUR"]);
    assert_eq!(store.hint(), "");
}

#[tokio::test]
async fn fiat_hint_uses_code() {
    let (store, _) = seeded_store().await;
    store.set_category(Category::Fiat);
    store.set_query("nothing-matches");
    assert_eq!(store.hint(), "Try \"SGD\"");
}

#[tokio::test]
async fn category_switch_recomputes_from_unchanged_raw() {
    let (store, storage) = seeded_store().await;
    store.set_category(Category::Fiat);
    assert_eq!(ids(&store.visible()), vec!["SGD", "EUR", "GBP"]);
    store.set_category(Category::All);
    assert_eq!(store.visible(), seed_currencies());
    assert_eq!(store.raw(), seed_currencies());

    assert!(store.flush());
    assert_eq!(storage.save_count(), 0);
}

#[tokio::test]
async fn read_failure_degrades_to_seed() {
    let storage = Arc::new(MemoryStorage::with_records(&[CurrencyInfo::crypto(
        "1", "Kept", "KPT",
    )]));
    storage.set_fail_reads(true);
    let store = store_with(storage, mock_generator());
    store.initialize().await;

    assert!(!store.is_loading());
    assert_eq!(store.raw(), seed_currencies());
}

#[tokio::test]
async fn malformed_payload_degrades_to_seed() {
    let storage = Arc::new(MemoryStorage::new());
    storage.set_raw(r#"[{"id": "BTC", "name": 7}]"#);
    let store = store_with(storage, mock_generator());
    store.initialize().await;

    assert!(!store.is_loading());
    assert_eq!(store.visible(), seed_currencies());
}

#[tokio::test]
async fn write_failure_keeps_memory_state() {
    let (store, storage) = seeded_store().await;
    storage.set_fail_writes(true);

    store.clear();
    store.insert_random();
    assert!(store.flush());

    assert_eq!(ids(&store.raw()), vec!["MOCK"]);
    assert_eq!(ids(&store.visible()), vec!["MOCK"]);
    assert_eq!(storage.stored(), None);
}

#[tokio::test]
async fn mutations_are_persisted_in_order() {
    let (store, storage) = seeded_store().await;
    store.clear();
    store.insert_random();
    store.reset();
    store.insert_random();
    assert!(store.flush());

    let mut expected = seed_currencies();
    expected.push(CurrencyInfo::crypto("MOCK", "Mock Currency", "MOCK"));
    assert_eq!(storage.stored(), Some(expected));
}

#[tokio::test]
async fn persisted_collection_survives_restart() {
    let (store, storage) = seeded_store().await;
    store.insert_random();
    assert!(store.flush());

    let restarted = store_with(storage, mock_generator());
    assert!(restarted.is_loading());
    restarted.initialize().await;
    assert_eq!(restarted.raw().len(), 18);
}

#[test]
fn concurrent_inserts_are_not_lost() {
    let storage = Arc::new(MemoryStorage::new());
    let store: CurrencyStore = store_with(storage.clone(), crypto_generator());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = store.clone();
            thread::spawn(move || {
                for _ in 0..50 {
                    store.insert_random();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let raw = store.raw();
    assert_eq!(raw.len(), 400);
    let mut unique = ids(&raw);
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 400);

    assert!(store.flush());
    assert_eq!(storage.stored().map(|s| s.len()), Some(400));
}

#[tokio::test]
async fn subscriber_observes_loading_transition() {
    let storage = Arc::new(MemoryStorage::new());
    let store = store_with(storage, mock_generator());
    let mut updates = store.subscribe();
    assert!(updates.borrow().is_loading());

    store.initialize().await;
    updates.changed().await.unwrap();
    let state = updates.borrow_and_update().clone();
    assert!(!state.is_loading());
    assert_eq!(state.visible().len(), 17);
}

#[test]
fn observer_holding_borrow_can_read_while_another_thread_mutates() {
    let store = store_with(Arc::new(MemoryStorage::new()), mock_generator());
    let rx = store.subscribe();
    let (done_tx, done_rx) = mpsc::channel();

    let observer = {
        let store = store.clone();
        let done = done_tx.clone();
        thread::spawn(move || {
            let state = rx.borrow();
            thread::sleep(Duration::from_millis(50));
            let visible = store.visible().len();
            drop(state);
            let _ = done.send(("observer", visible));
        })
    };
    let mutator = {
        let store = store.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(10));
            store.reset();
            let _ = done_tx.send(("mutator", 0));
        })
    };

    let mut finished = Vec::new();
    for _ in 0..2 {
        let message = done_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("store deadlocked between observer and mutator");
        finished.push(message);
    }
    observer.join().unwrap();
    mutator.join().unwrap();

    assert!(finished.contains(&("observer", 17)));
    assert_eq!(store.subscribe().borrow().raw().len(), 17);
}

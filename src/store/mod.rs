//! The derived-view store.
//!
//! [`CurrencyStore`] owns the raw collection, the category selector and the
//! settled search query, and keeps the visible list derived from them. All
//! transitions go through [`CurrencyReducer`] under one lock, so a
//! read-modify-write such as `insert_random` is atomic even when the handle is
//! shared across threads.
//!
//! Persistence is best-effort: every collection mutation queues a save on the
//! background writer and returns without waiting for it.

mod intent;
mod persist;
mod reducer;
mod search_input;
mod state;

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::currency::{seed_currencies, Category, CurrencyInfo};
use crate::generator::RecordGenerator;
use crate::mvi::{Intent, Reducer};
use crate::storage::CurrencyStorage;

pub use intent::CurrencyIntent;
pub use persist::PersistenceWriter;
pub use reducer::CurrencyReducer;
pub use search_input::SearchInput;
pub use state::{derive_visible, CurrencyViewState};

/// Cloneable handle to a shared currency store.
#[derive(Clone)]
pub struct CurrencyStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    state: Mutex<CurrencyViewState>,
    updates: watch::Sender<CurrencyViewState>,
    storage: Arc<dyn CurrencyStorage>,
    generator: Arc<dyn RecordGenerator>,
    writer: PersistenceWriter,
}

impl CurrencyStore {
    /// Create an empty store in the loading state. Call [`initialize`](Self::initialize) next.
    pub fn new(storage: Arc<dyn CurrencyStorage>, generator: Arc<dyn RecordGenerator>) -> Self {
        let writer = PersistenceWriter::spawn(Arc::clone(&storage));
        let (updates, _) = watch::channel(CurrencyViewState::default());
        Self {
            inner: Arc::new(StoreInner {
                state: Mutex::new(CurrencyViewState::default()),
                updates,
                storage,
                generator,
                writer,
            }),
        }
    }

    /// Load the persisted collection, falling back to the seed set.
    ///
    /// Absent, empty, unreadable and malformed data all degrade to the seed
    /// set; nothing is reported to the caller. The loading flag is cleared in
    /// every case.
    pub async fn initialize(&self) {
        if !self.is_loading() {
            tracing::warn!("Store initialized more than once");
        }

        let storage = Arc::clone(&self.inner.storage);
        let records = match tokio::task::spawn_blocking(move || storage.load()).await {
            Ok(Ok(Some(records))) if !records.is_empty() => {
                tracing::info!(count = records.len(), "Loaded persisted currencies");
                records
            }
            Ok(Ok(_)) => {
                tracing::info!("No persisted currencies, using seed set");
                seed_currencies()
            }
            Ok(Err(err)) => {
                tracing::warn!(error = %err, "Failed to load currencies, using seed set");
                seed_currencies()
            }
            Err(err) => {
                tracing::warn!(error = %err, "Storage read task failed, using seed set");
                seed_currencies()
            }
        };

        self.dispatch(CurrencyIntent::Loaded(records));
    }

    /// Empty the collection.
    pub fn clear(&self) {
        self.dispatch(CurrencyIntent::Clear);
    }

    /// Append one generated record.
    pub fn insert_random(&self) {
        let record = self.inner.generator.generate();
        tracing::debug!(id = %record.id, name = %record.name, "Generated currency");
        self.dispatch(CurrencyIntent::Append(record));
    }

    /// Replace the collection with the seed set.
    pub fn reset(&self) {
        self.dispatch(CurrencyIntent::Reset);
    }

    pub fn set_category(&self, category: Category) {
        self.dispatch(CurrencyIntent::SetCategory(category));
    }

    /// Set the settled search query. Not persisted.
    pub fn set_query(&self, query: impl Into<String>) {
        self.dispatch(CurrencyIntent::SetQuery(query.into()));
    }

    pub fn visible(&self) -> Vec<CurrencyInfo> {
        self.inner.state.lock().visible().to_vec()
    }

    pub fn raw(&self) -> Vec<CurrencyInfo> {
        self.inner.state.lock().raw().to_vec()
    }

    pub fn category(&self) -> Category {
        self.inner.state.lock().category()
    }

    pub fn query(&self) -> String {
        self.inner.state.lock().query().to_string()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.state.lock().is_loading()
    }

    pub fn hint(&self) -> String {
        self.inner.state.lock().hint()
    }

    /// Consistent copy of the whole state.
    pub fn snapshot(&self) -> CurrencyViewState {
        self.inner.state.lock().clone()
    }

    /// Receiver that observes every state change.
    pub fn subscribe(&self) -> watch::Receiver<CurrencyViewState> {
        self.inner.updates.subscribe()
    }

    /// Block until queued saves have been attempted. Returns `false` if the
    /// writer is not running.
    pub fn flush(&self) -> bool {
        self.inner.writer.flush()
    }

    /// Remove persisted data. The in-memory collection is untouched.
    pub fn purge_storage(&self) -> Result<(), crate::storage::StorageError> {
        self.flush();
        self.inner.storage.clear_all()
    }

    fn dispatch(&self, intent: CurrencyIntent) {
        let name = intent.name();
        let persist = intent.is_persistent();

        {
            let mut state = self.inner.state.lock();
            let next = CurrencyReducer::reduce(std::mem::take(&mut *state), intent);

            tracing::debug!(
                intent = name,
                category = %next.category(),
                raw = next.raw().len(),
                visible = next.visible().len(),
                "View recomputed"
            );

            // Queued under the lock so storage sees mutations in order.
            if persist {
                self.inner.writer.save(next.raw().to_vec());
            }
            *state = next;
        }

        self.publish();
    }

    /// Push the latest state to subscribers.
    ///
    /// Lock order is watch value, then state; the state lock is never held
    /// while waiting on the watch channel. Concurrent callers all publish the
    /// newest state, never their own possibly stale result.
    fn publish(&self) {
        self.inner.updates.send_if_modified(|current| {
            let latest = self.inner.state.lock();
            if *current == *latest {
                false
            } else {
                *current = latest.clone();
                true
            }
        });
    }
}

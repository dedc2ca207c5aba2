use std::time::Duration;

use tokio::task::JoinHandle;

use crate::debounce::Debouncer;
use crate::store::CurrencyStore;
use crate::strings;

/// Text box model feeding the store's search query through a debouncer.
///
/// Typed text is visible immediately via [`text`](Self::text); the store only
/// sees it once typing has paused for the configured delay.
pub struct SearchInput {
    text: String,
    store: CurrencyStore,
    debouncer: Debouncer<String>,
    forwarder: JoinHandle<()>,
}

impl SearchInput {
    /// Must be called inside a tokio runtime.
    pub fn new(store: CurrencyStore, delay: Duration) -> Self {
        let text = store.query();
        let debouncer = Debouncer::new(text.clone(), delay);

        let mut settled = debouncer.subscribe();
        let target = store.clone();
        let forwarder = tokio::spawn(async move {
            while settled.changed().await.is_ok() {
                let query = settled.borrow_and_update().clone();
                target.set_query(query);
            }
        });

        Self {
            text,
            store,
            debouncer,
            forwarder,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn placeholder(&self) -> &'static str {
        strings::SEARCH_PLACEHOLDER
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.debouncer.push(self.text.clone());
    }

    /// Empty the box and the store's query at once, skipping the delay.
    pub fn clear(&mut self) {
        self.text.clear();
        self.debouncer.settle_now(String::new());
        self.store.set_query("");
    }

    /// Wait until the store's query matches the typed text.
    pub async fn settled(&self) {
        let mut updates = self.store.subscribe();
        while updates.borrow_and_update().query() != self.text {
            if updates.changed().await.is_err() {
                return;
            }
        }
    }

    /// True while typed text has not reached the store yet.
    pub fn is_settling(&self) -> bool {
        self.debouncer.is_pending()
    }
}

impl Drop for SearchInput {
    fn drop(&mut self) {
        self.forwarder.abort();
    }
}

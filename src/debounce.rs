//! Input debouncing.
//!
//! A [`Debouncer`] holds a "settled" value that only follows its input once
//! the input has stayed unchanged for the configured delay. Each new input
//! aborts the pending timer task and schedules a fresh one, so at most one
//! update is ever outstanding per instance.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

struct Pending {
    /// Bumped on every input; a timer only publishes if it still owns the latest generation.
    generation: u64,
    task: Option<JoinHandle<()>>,
}

pub struct Debouncer<T> {
    delay: Duration,
    runtime: Handle,
    settled: Arc<watch::Sender<T>>,
    pending: Arc<Mutex<Pending>>,
}

impl<T> Debouncer<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    /// Create a debouncer on the current tokio runtime.
    ///
    /// # Panics
    /// Panics when called outside a tokio runtime.
    pub fn new(initial: T, delay: Duration) -> Self {
        Self::with_handle(initial, delay, Handle::current())
    }

    /// Create a debouncer whose timers run on `runtime`.
    pub fn with_handle(initial: T, delay: Duration, runtime: Handle) -> Self {
        let (settled, _) = watch::channel(initial);
        Self {
            delay,
            runtime,
            settled: Arc::new(settled),
            pending: Arc::new(Mutex::new(Pending {
                generation: 0,
                task: None,
            })),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Feed a new input value, restarting the delay.
    ///
    /// A zero delay still publishes from a spawned task, never synchronously.
    pub fn push(&self, value: T) {
        let mut pending = self.pending.lock();
        pending.generation = pending.generation.wrapping_add(1);
        let generation = pending.generation;

        if let Some(task) = pending.task.take() {
            task.abort();
        }

        let delay = self.delay;
        let settled = Arc::clone(&self.settled);
        let slot = Arc::clone(&self.pending);
        pending.task = Some(self.runtime.spawn(async move {
            if delay.is_zero() {
                tokio::task::yield_now().await;
            } else {
                tokio::time::sleep(delay).await;
            }

            let mut pending = slot.lock();
            if pending.generation != generation {
                return;
            }
            pending.task = None;
            publish(&settled, value);
        }));
    }

    /// Publish `value` right away, discarding any pending update.
    pub fn settle_now(&self, value: T) {
        let mut pending = self.pending.lock();
        pending.generation = pending.generation.wrapping_add(1);
        if let Some(task) = pending.task.take() {
            task.abort();
        }
        publish(&self.settled, value);
    }

    /// Drop the pending update, keeping the current settled value.
    pub fn cancel(&self) {
        let mut pending = self.pending.lock();
        pending.generation = pending.generation.wrapping_add(1);
        if let Some(task) = pending.task.take() {
            task.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.lock().task.is_some()
    }

    /// Current settled value.
    pub fn settled(&self) -> T {
        self.settled.borrow().clone()
    }

    /// Receiver notified whenever the settled value changes.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.settled.subscribe()
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(task) = self.pending.lock().task.take() {
            task.abort();
        }
    }
}

fn publish<T: PartialEq>(settled: &watch::Sender<T>, value: T) {
    settled.send_if_modified(|current| {
        if *current == value {
            false
        } else {
            *current = value;
            true
        }
    });
}

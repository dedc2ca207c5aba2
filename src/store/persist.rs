//! Background writer mirroring the raw collection to storage.
//!
//! Mutations hand a snapshot to a dedicated thread over a channel and return
//! immediately. The thread applies saves in the order they were queued and
//! collapses a backlog into a single write of the newest snapshot. Failures
//! are logged and otherwise ignored: memory stays the source of truth.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

use crate::currency::CurrencyInfo;
use crate::storage::CurrencyStorage;

enum PersistCommand {
    Save(Vec<CurrencyInfo>),
    Flush(Sender<()>),
}

pub struct PersistenceWriter {
    sender: Sender<PersistCommand>,
}

impl PersistenceWriter {
    pub fn spawn(storage: Arc<dyn CurrencyStorage>) -> Self {
        let (sender, receiver) = channel();
        let spawned = std::thread::Builder::new()
            .name("currency-persist".to_string())
            .spawn(move || writer_loop(receiver, storage));
        if let Err(err) = spawned {
            tracing::warn!(
                error = %err,
                "Failed to start persistence writer, changes will not be saved"
            );
        }
        Self { sender }
    }

    /// Queue a snapshot for saving. Never blocks.
    pub fn save(&self, records: Vec<CurrencyInfo>) {
        if self.sender.send(PersistCommand::Save(records)).is_err() {
            tracing::warn!("Persistence writer is gone, dropping save");
        }
    }

    /// Block until every save queued so far has been attempted.
    ///
    /// Returns `false` if the writer thread is not running.
    pub fn flush(&self) -> bool {
        let (ack_tx, ack_rx) = channel();
        if self.sender.send(PersistCommand::Flush(ack_tx)).is_err() {
            return false;
        }
        ack_rx.recv().is_ok()
    }
}

fn writer_loop(receiver: Receiver<PersistCommand>, storage: Arc<dyn CurrencyStorage>) {
    while let Ok(command) = receiver.recv() {
        let mut latest = None;
        let mut acks = Vec::new();

        for command in std::iter::once(command).chain(receiver.try_iter()) {
            match command {
                PersistCommand::Save(records) => latest = Some(records),
                PersistCommand::Flush(ack) => acks.push(ack),
            }
        }

        if let Some(records) = latest {
            match storage.save(&records) {
                Ok(()) => tracing::debug!(count = records.len(), "Saved currencies"),
                Err(err) => tracing::warn!(error = %err, "Failed to save currencies"),
            }
        }

        for ack in acks {
            let _ = ack.send(());
        }
    }
}

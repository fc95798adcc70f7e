//! Serialized background persistence, one writer task per identity key.

use crate::error::{Result, StoreError};
use crate::state_file::StateFile;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use cascade_core::{IdentityKey, UserState};
use log::{debug, warn};
use tokio::sync::{mpsc, oneshot};

enum WriteCommand {
    Persist(UserState),
    Flush(oneshot::Sender<()>),
}

type WorkerMap = HashMap<IdentityKey, mpsc::UnboundedSender<WriteCommand>>;

/// Queues state snapshots for durable writes without blocking the caller.
///
/// Each key gets a dedicated writer task, so writes for one key are
/// applied in submission order. When several snapshots are pending the
/// newest wins and the intermediates are skipped. Failures are logged
/// and dropped, never surfaced to the submitting caller.
pub struct StateWriter {
    file: Arc<StateFile>,
    write_timeout: Duration,
    // std mutex: guards only map lookup/insert, never held across await
    workers: Mutex<WorkerMap>,
}

impl StateWriter {
    pub fn new(file: Arc<StateFile>, write_timeout: Duration) -> Self {
        Self {
            file,
            write_timeout,
            workers: Mutex::new(HashMap::new()),
        }
    }

    /// Queues `state` to be written for `key` and returns immediately.
    pub fn submit(&self, key: &IdentityKey, state: UserState) {
        let tx = self.worker_for(key);
        if tx.send(WriteCommand::Persist(state)).is_err() {
            warn!(
                "Discarding state snapshot: {}",
                StoreError::writer_closed(key.clone())
            );
        }
    }

    /// Resolves once every snapshot submitted for `key` before this call
    /// has been written or abandoned (superseded by a newer snapshot, or
    /// failed and logged). A key with no writer resolves immediately.
    pub async fn flush(&self, key: &IdentityKey) -> Result<()> {
        let tx = {
            let workers = self.lock_workers();
            workers.get(key).cloned()
        };
        let Some(tx) = tx else {
            return Ok(());
        };

        let (ack_tx, ack_rx) = oneshot::channel();
        tx.send(WriteCommand::Flush(ack_tx))
            .map_err(|_| StoreError::writer_closed(key.clone()))?;
        ack_rx
            .await
            .map_err(|_| StoreError::writer_closed(key.clone()))
    }

    fn worker_for(&self, key: &IdentityKey) -> mpsc::UnboundedSender<WriteCommand> {
        let mut workers = self.lock_workers();

        // Fast path: reuse the live worker for this key
        if let Some(tx) = workers.get(key) {
            if !tx.is_closed() {
                return tx.clone();
            }
        }

        // Slow path: spawn a fresh worker (also replaces one whose task died)
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run_worker(
            self.file.clone(),
            key.clone(),
            self.write_timeout,
            rx,
        ));
        workers.insert(key.clone(), tx.clone());
        tx
    }

    fn lock_workers(&self) -> MutexGuard<'_, WorkerMap> {
        self.workers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

async fn run_worker(
    file: Arc<StateFile>,
    key: IdentityKey,
    write_timeout: Duration,
    mut rx: mpsc::UnboundedReceiver<WriteCommand>,
) {
    while let Some(cmd) = rx.recv().await {
        let mut pending = None;
        let mut acks = Vec::new();
        accept(cmd, &mut pending, &mut acks);

        // Drain the backlog that queued up while the last write ran:
        // only the newest snapshot goes to disk.
        while let Ok(cmd) = rx.try_recv() {
            accept(cmd, &mut pending, &mut acks);
        }

        if let Some(state) = pending {
            let result = match tokio::time::timeout(write_timeout, file.write(&key, &state)).await {
                Ok(result) => result,
                Err(_) => Err(StoreError::write_timeout(
                    key.clone(),
                    write_timeout.as_secs(),
                )),
            };

            match result {
                Ok(()) => debug!("Persisted state for {key}"),
                Err(e) => warn!("Background persistence failed: {e}"),
            }
        }

        for ack in acks {
            let _ = ack.send(());
        }
    }
}

fn accept(cmd: WriteCommand, pending: &mut Option<UserState>, acks: &mut Vec<oneshot::Sender<()>>) {
    match cmd {
        WriteCommand::Persist(state) => *pending = Some(state),
        WriteCommand::Flush(ack) => acks.push(ack),
    }
}

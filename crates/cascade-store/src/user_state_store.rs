//! Per-user cascading state shared across a UI session.
//!
//! One store instance backs one user's session. Mutations are
//! write-through: the in-memory value changes first, subscribers are
//! woken, and a durable write is queued in the background without
//! blocking the caller.

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::state_file::StateFile;
use crate::state_writer::StateWriter;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use cascade_core::{AuthSession, StateField, UserState};
use log::{debug, info, warn};
use tokio::sync::{OnceCell, watch};

/// In-memory state container with write-through persistence.
///
/// Persistence is best-effort: `save` and `load` never fail visibly.
/// A failed write costs durability, not correctness; the session keeps
/// its in-memory values and the failure goes to the log.
pub struct UserStateStore {
    session: Arc<dyn AuthSession>,
    file: Arc<StateFile>,
    writer: StateWriter,
    state_tx: watch::Sender<UserState>,
    hydrated: OnceCell<()>,
    read_timeout: Duration,
}

impl UserStateStore {
    pub fn new(session: Arc<dyn AuthSession>, data_dir: &Path, config: &StoreConfig) -> Self {
        let file = Arc::new(StateFile::new(config.state_root(data_dir)));
        let writer = StateWriter::new(file.clone(), config.write_timeout());
        let (state_tx, _) = watch::channel(UserState::default());

        Self {
            session,
            file,
            writer,
            state_tx,
            hydrated: OnceCell::new(),
            read_timeout: config.read_timeout(),
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> UserState {
        *self.state_tx.borrow()
    }

    /// Current value of one field.
    pub fn get(&self, field: StateField) -> bool {
        self.state_tx.borrow().get(field)
    }

    /// Subscribes to re-render notifications.
    ///
    /// Receivers are woken on every observed change and after a
    /// successful hydration, never for a no-op set.
    pub fn subscribe(&self) -> watch::Receiver<UserState> {
        self.state_tx.subscribe()
    }

    /// Whether the first-visibility hydration has run.
    pub fn is_loaded(&self) -> bool {
        self.hydrated.initialized()
    }

    /// Sets one field, write-through.
    ///
    /// When the value actually changes, subscribers are woken and a
    /// durable write of the full state is queued in the background.
    /// Setting a field to its current value does neither.
    pub fn set_flag(&self, field: StateField, value: bool) {
        let changed = self
            .state_tx
            .send_if_modified(|state| state.set(field, value));

        if changed {
            debug!("State field {field} set to {value}");
            self.save();
        }
    }

    /// Queues a durable write of the full current state under the
    /// caller's identity key.
    ///
    /// Returns immediately; the write happens in the background and its
    /// outcome is logged, never reported back. Unauthenticated callers
    /// are a silent no-op.
    pub fn save(&self) {
        let Some(key) = self.session.identity_key() else {
            debug!("Skipping state save: caller not authenticated");
            return;
        };

        self.writer.submit(&key, *self.state_tx.borrow());
    }

    /// Hydrates in-memory state from the caller's durable record.
    ///
    /// Fields present in the record replace current values, fields the
    /// record omits keep their defaults, and subscribers are woken once
    /// the copy is done. A missing record, an unauthenticated caller,
    /// or any read failure leaves the defaults in place.
    pub async fn load(&self) {
        let Some(key) = self.session.identity_key() else {
            debug!("Skipping state load: caller not authenticated");
            return;
        };

        let read = tokio::time::timeout(self.read_timeout, self.file.read(&key)).await;
        let result = match read {
            Ok(result) => result,
            Err(_) => Err(StoreError::read_timeout(
                key.clone(),
                self.read_timeout.as_secs(),
            )),
        };

        match result {
            Ok(Some(record)) => {
                self.state_tx.send_modify(|state| state.apply(&record));
                info!("Hydrated state for {key}");
            }
            Ok(None) => debug!("No saved state for {key}; keeping defaults"),
            Err(e) => warn!("State load failed, keeping defaults: {e}"),
        }
    }

    /// First-visibility hook: runs [`Self::load`] exactly once, no
    /// matter how many times the surrounding view re-renders.
    pub async fn ensure_loaded(&self) {
        self.hydrated
            .get_or_init(|| async {
                self.load().await;
            })
            .await;
    }

    /// Waits until every background write queued so far for the caller
    /// has been written or abandoned. Useful on shutdown and in tests;
    /// the write-through path never awaits this.
    pub async fn flush(&self) -> Result<()> {
        match self.session.identity_key() {
            Some(key) => self.writer.flush(&key).await,
            None => Ok(()),
        }
    }

    /// Path of the caller's durable record, if one can be named.
    pub fn record_path(&self) -> Option<PathBuf> {
        self.session
            .identity_key()
            .map(|key| self.file.path_for(&key))
    }
}

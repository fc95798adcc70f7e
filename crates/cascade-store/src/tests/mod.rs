mod properties;
mod state_file;

use crate::StoreConfig;
use crate::user_state_store::UserStateStore;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use cascade_core::{AuthSession, StaticSession};

/// Store rooted at `dir` for an authenticated caller.
pub(crate) fn authenticated_store(dir: &Path, identity: &str) -> UserStateStore {
    let session: Arc<dyn AuthSession> = Arc::new(StaticSession::authenticated(identity));
    UserStateStore::new(session, dir, &StoreConfig::default())
}

/// Store rooted at `dir` for an anonymous caller.
pub(crate) fn anonymous_store(dir: &Path) -> UserStateStore {
    let session: Arc<dyn AuthSession> = Arc::new(StaticSession::anonymous());
    UserStateStore::new(session, dir, &StoreConfig::default())
}

/// Where the record for a normalized key lands under `dir`.
pub(crate) fn record_path(dir: &Path, key: &str) -> PathBuf {
    dir.join("Data").join("TempAppState").join(format!("{key}.json"))
}

/// Plants a durable record directly on disk.
pub(crate) fn write_record(dir: &Path, key: &str, json: &str) {
    let namespace = dir.join("Data").join("TempAppState");
    std::fs::create_dir_all(&namespace).unwrap();
    std::fs::write(namespace.join(format!("{key}.json")), json).unwrap();
}

//! Durable per-user state records as pretty-printed JSON files.

use crate::error::{Result, StoreError};

use std::path::PathBuf;

use cascade_core::{IdentityKey, UserState};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Namespace directories created under the storage root.
pub const DATA_DIR: &str = "Data";
pub const STATE_DIR: &str = "TempAppState";

/// Reads and writes one JSON record per identity key under
/// `<root>/Data/TempAppState/`.
#[derive(Debug, Clone)]
pub struct StateFile {
    root: PathBuf,
}

impl StateFile {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory all records live in.
    pub fn namespace_dir(&self) -> PathBuf {
        self.root.join(DATA_DIR).join(STATE_DIR)
    }

    /// Full path of the record for `key`.
    pub fn path_for(&self, key: &IdentityKey) -> PathBuf {
        self.namespace_dir().join(key.file_name())
    }

    /// Loads the record for `key`.
    ///
    /// A missing file is not an error: it means this user has never
    /// saved state, and `Ok(None)` is returned.
    pub async fn read(&self, key: &IdentityKey) -> Result<Option<UserState>> {
        let path = self.path_for(key);

        let contents = match fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::file_read(path, e)),
        };

        let record = serde_json::from_str(&contents).map_err(|e| StoreError::decode(path, e))?;
        Ok(Some(record))
    }

    /// Writes the record for `key` using the atomic write pattern.
    ///
    /// 1. Writes to temp file
    /// 2. Syncs to disk (fsync)
    /// 3. Atomic rename to final location
    ///
    /// This prevents corruption if the process crashes mid-write.
    pub async fn write(&self, key: &IdentityKey, state: &UserState) -> Result<()> {
        let dir = self.namespace_dir();

        // Ensure directory exists
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| StoreError::dir_creation(dir.clone(), e))?;

        let final_path = dir.join(key.file_name());
        let temp_path = dir.join(format!("{}.tmp.{}", key.file_name(), std::process::id()));

        // Serialize with pretty printing for debuggability
        let json = serde_json::to_string_pretty(state)?;

        // Write to temp file with explicit sync
        {
            let mut file = fs::File::create(&temp_path)
                .await
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .await
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .await
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;
        }

        // Atomic rename
        fs::rename(&temp_path, &final_path).await.map_err(|e| {
            // Clean up temp file on failure
            let _ = std::fs::remove_file(&temp_path);
            StoreError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        Ok(())
    }
}

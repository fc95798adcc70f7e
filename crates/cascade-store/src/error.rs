use std::panic::Location;
use std::path::PathBuf;

use cascade_core::IdentityKey;
use error_location::ErrorLocation;
use thiserror::Error;

/// Errors raised by the durable state layer.
///
/// The store itself swallows these at its public surface and logs them;
/// they surface directly only from [`crate::StateFile`], configuration
/// loading, and explicit flushes.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to create state directory at {path}: {source} {location}")]
    DirCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to read state file at {path}: {source} {location}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to write state file at {path}: {source} {location}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Atomic rename failed from {from} to {to}: {source} {location}")]
    AtomicRename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to serialize state: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("State file corrupted at {path}: {source} {location}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Failed to parse configuration at {path}: {source} {location}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
        location: ErrorLocation,
    },

    #[error("Configuration invalid: {message} {location}")]
    ConfigInvalid {
        message: String,
        location: ErrorLocation,
    },

    #[error("Durable write for {key} timed out after {timeout_secs}s {location}")]
    WriteTimeout {
        key: IdentityKey,
        timeout_secs: u64,
        location: ErrorLocation,
    },

    #[error("State load for {key} timed out after {timeout_secs}s {location}")]
    ReadTimeout {
        key: IdentityKey,
        timeout_secs: u64,
        location: ErrorLocation,
    },

    #[error("Background writer for {key} is no longer running {location}")]
    WriterClosed {
        key: IdentityKey,
        location: ErrorLocation,
    },
}

impl StoreError {
    /// Creates DirCreation error at caller location.
    #[track_caller]
    pub fn dir_creation(path: PathBuf, source: std::io::Error) -> Self {
        Self::DirCreation {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates FileRead error at caller location.
    #[track_caller]
    pub fn file_read(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileRead {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates FileWrite error at caller location.
    #[track_caller]
    pub fn file_write(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileWrite {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates AtomicRename error at caller location.
    #[track_caller]
    pub fn atomic_rename(from: PathBuf, to: PathBuf, source: std::io::Error) -> Self {
        Self::AtomicRename {
            from,
            to,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Decode error at caller location.
    #[track_caller]
    pub fn decode(path: PathBuf, source: serde_json::Error) -> Self {
        Self::Decode {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates ConfigParse error at caller location.
    #[track_caller]
    pub fn config_parse(path: PathBuf, source: toml::de::Error) -> Self {
        Self::ConfigParse {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates ConfigInvalid error at caller location.
    #[track_caller]
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates WriteTimeout error at caller location.
    #[track_caller]
    pub fn write_timeout(key: IdentityKey, timeout_secs: u64) -> Self {
        Self::WriteTimeout {
            key,
            timeout_secs,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates ReadTimeout error at caller location.
    #[track_caller]
    pub fn read_timeout(key: IdentityKey, timeout_secs: u64) -> Self {
        Self::ReadTimeout {
            key,
            timeout_secs,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates WriterClosed error at caller location.
    #[track_caller]
    pub fn writer_closed(key: IdentityKey) -> Self {
        Self::WriterClosed {
            key,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

pub mod config;
pub mod error;
pub mod log_level;
pub mod state_file;
pub mod state_writer;
pub mod user_state_store;

pub use config::{
    DatabaseSettings, LoggingSettings, PersistenceSettings, StorageSettings, StoreConfig,
};
pub use error::{Result, StoreError};
pub use log_level::LogLevel;
pub use state_file::StateFile;
pub use state_writer::StateWriter;
pub use user_state_store::UserStateStore;

#[cfg(test)]
mod tests;

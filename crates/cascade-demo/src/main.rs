//! Scripted walkthrough of the cascading state store.
//!
//! Plays one user journey end to end: sign in, hydrate on first
//! render, toggle the config-page flag, then bring the store back up
//! the way a fresh session would and show the state surviving.

mod error;
mod logger;

use crate::error::Result;

use std::path::PathBuf;
use std::sync::Arc;

use cascade_core::{AuthSession, StateField};
use cascade_db::{AccountContext, AccountSession};
use cascade_store::{StoreConfig, UserStateStore};
use log::info;

const DEFAULT_DATA_DIR: &str = "data";
const DEMO_EMAIL: &str = "a.b@example.com";
const FLAG: StateField = StateField::CanAccessConfigPage;

#[tokio::main]
async fn main() -> Result<()> {
    // Optional positional argument: the data root (default "data")
    let data_dir = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);
    let data_dir = data_dir.as_path();
    std::fs::create_dir_all(data_dir)?;

    // Load and validate configuration
    let config = StoreConfig::load_or_create(data_dir)?;

    // Construct log file path if configured
    let log_file = config.logging.file.as_ref().map(|name| data_dir.join(name));

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;

    info!("Starting cascade-demo v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Account database backing the auth collaborator
    let db = AccountContext::connect(&config.database_path(data_dir)).await?;
    let account = match db.find_by_email(DEMO_EMAIL).await? {
        Some(account) => account,
        None => db.register(DEMO_EMAIL).await?,
    };

    // First session: sign in, hydrate, toggle
    let session = Arc::new(AccountSession::new());
    session.sign_in(account);

    let auth: Arc<dyn AuthSession> = session.clone();
    let store = UserStateStore::new(auth.clone(), data_dir, &config);
    watch_renders(&store);

    store.ensure_loaded().await;
    info!("First render: canAccessConfigPage = {}", store.get(FLAG));

    store.set_flag(FLAG, !store.get(FLAG));
    store.flush().await?;

    if let Some(path) = store.record_path() {
        info!("Durable record: {}", path.display());
    }

    // Second session: fresh store, same identity, the toggle survives
    let restarted = UserStateStore::new(auth, data_dir, &config);
    restarted.ensure_loaded().await;
    info!("After restart: canAccessConfigPage = {}", restarted.get(FLAG));

    // Signed-out callers keep their in-session toggles, nothing persists
    session.sign_out();
    restarted.set_flag(FLAG, !restarted.get(FLAG));
    restarted.flush().await?;
    info!(
        "Signed out, in-memory only: canAccessConfigPage = {}",
        restarted.get(FLAG)
    );

    db.close().await;
    info!("Done");
    Ok(())
}

/// Simulated UI: log a line every time the store wakes subscribers.
fn watch_renders(store: &UserStateStore) {
    let mut rx = store.subscribe();
    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let state = *rx.borrow_and_update();
            info!(
                "Re-render: canAccessConfigPage = {}",
                state.can_access_config_page
            );
        }
    });
}

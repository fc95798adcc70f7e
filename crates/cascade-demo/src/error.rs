use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Store error: {0}")]
    Store(#[from] cascade_store::StoreError),

    #[error("Database error: {0}")]
    Db(#[from] cascade_db::DbError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logger initialization failed: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, DemoError>;

//! Identity-backed account storage.

use crate::account::Account;
use crate::error::{DbError, Result};

use std::path::Path;

use chrono::DateTime;
use log::{debug, info};
use sqlx::Row;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use uuid::Uuid;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS accounts (
    id TEXT PRIMARY KEY NOT NULL,
    email TEXT NOT NULL UNIQUE,
    created_at INTEGER NOT NULL
)
"#;

/// Connection handle for the account database.
pub struct AccountContext {
    pool: SqlitePool,
}

impl AccountContext {
    /// Opens the database at `path`, creating the file and its parent
    /// directories if missing, and ensures the schema exists.
    pub async fn connect(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                DbError::initialization(format!("Failed to create database directory: {e}"))
            })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Self::prepare(&pool).await?;

        info!("Account database ready at {}", path.display());
        Ok(Self { pool })
    }

    /// In-memory database for tests and ephemeral runs.
    pub async fn connect_in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(":memory:")
            .create_if_missing(true);

        // In-memory needs single connection
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        Self::prepare(&pool).await?;

        Ok(Self { pool })
    }

    async fn prepare(pool: &SqlitePool) -> Result<()> {
        // Enable foreign keys
        sqlx::query("PRAGMA foreign_keys = ON").execute(pool).await?;

        sqlx::query(SCHEMA).execute(pool).await?;

        Ok(())
    }

    /// Registers a new account. Emails are unique.
    pub async fn register(&self, email: &str) -> Result<Account> {
        let account = Account::new(email);
        let id = account.id.to_string();
        let created_at = account.created_at.timestamp();

        let inserted =
            sqlx::query("INSERT INTO accounts (id, email, created_at) VALUES (?, ?, ?)")
                .bind(&id)
                .bind(&account.email)
                .bind(created_at)
                .execute(&self.pool)
                .await;

        match inserted {
            Ok(_) => {
                debug!("Registered account {id}");
                Ok(account)
            }
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(DbError::duplicate_email(email))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Finds an account by email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Account>> {
        let row = sqlx::query("SELECT id, email, created_at FROM accounts WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.map(account_from_row).transpose()
    }

    /// Finds an account by id.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>> {
        let id_str = id.to_string();

        let row = sqlx::query("SELECT id, email, created_at FROM accounts WHERE id = ?")
            .bind(&id_str)
            .fetch_optional(&self.pool)
            .await?;

        row.map(account_from_row).transpose()
    }

    /// All accounts, oldest first.
    pub async fn list(&self) -> Result<Vec<Account>> {
        let rows =
            sqlx::query("SELECT id, email, created_at FROM accounts ORDER BY created_at ASC")
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter().map(account_from_row).collect()
    }

    /// Closes the pool, waiting for in-flight queries to finish.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn account_from_row(row: SqliteRow) -> Result<Account> {
    let id: String = row.try_get("id")?;
    let email: String = row.try_get("email")?;
    let created_at: i64 = row.try_get("created_at")?;

    let id = Uuid::parse_str(&id)
        .map_err(|e| DbError::invalid_row(format!("Bad account id {id}: {e}")))?;
    let created_at = DateTime::from_timestamp(created_at, 0)
        .ok_or_else(|| DbError::invalid_row(format!("Bad created_at timestamp {created_at}")))?;

    Ok(Account {
        id,
        email,
        created_at,
    })
}

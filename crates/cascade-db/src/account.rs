use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered user of the application.
///
/// The email doubles as the stable identity string the state store
/// derives its storage key from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// New account with a fresh id, created now.
    ///
    /// The creation time is truncated to whole seconds, matching the
    /// precision the database stores.
    pub fn new(email: impl Into<String>) -> Self {
        let created_at = DateTime::from_timestamp(Utc::now().timestamp(), 0).unwrap_or_default();

        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            created_at,
        }
    }
}

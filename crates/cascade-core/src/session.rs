//! The seam between the state store and whatever owns authentication.

use crate::IdentityKey;

/// What the store needs to know about the current caller.
///
/// Absence of authentication is a normal condition, not an error: a
/// session that answers `false` / `None` degrades every persistence
/// operation to a no-op.
pub trait AuthSession: Send + Sync {
    /// Whether the current caller is signed in.
    fn is_authenticated(&self) -> bool;

    /// The caller's stable identity string (e.g. email), if signed in.
    fn identity_name(&self) -> Option<String>;

    /// The storage key for the caller's durable record.
    ///
    /// `Some` only for an authenticated caller with an identity name.
    fn identity_key(&self) -> Option<IdentityKey> {
        if !self.is_authenticated() {
            return None;
        }
        self.identity_name()
            .map(|name| IdentityKey::from_identity(&name))
    }
}

/// Fixed session for single-user hosts and tests: either permanently
/// signed in as one identity, or permanently anonymous.
#[derive(Debug, Clone)]
pub struct StaticSession {
    identity: Option<String>,
}

impl StaticSession {
    /// Session that is signed in as `identity`.
    pub fn authenticated(identity: impl Into<String>) -> Self {
        Self {
            identity: Some(identity.into()),
        }
    }

    /// Session that is not signed in.
    pub fn anonymous() -> Self {
        Self { identity: None }
    }
}

impl AuthSession for StaticSession {
    fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    fn identity_name(&self) -> Option<String> {
        self.identity.clone()
    }
}

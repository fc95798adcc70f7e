//! Auth collaborator backed by a signed-in account.

use crate::account::Account;

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use cascade_core::AuthSession;
use log::info;

/// Mutable sign-in state shared with the state store.
///
/// The store only ever asks two questions (is someone signed in, and
/// under what name), so this stays a thin wrapper around the current
/// account while sign-in and sign-out happen from the UI side.
#[derive(Default)]
pub struct AccountSession {
    current: RwLock<Option<Account>>,
}

impl AccountSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `account` as the signed-in caller.
    pub fn sign_in(&self, account: Account) {
        info!("Signed in as {}", account.email);
        *self.write_lock() = Some(account);
    }

    /// Clears the signed-in caller.
    pub fn sign_out(&self) {
        if let Some(account) = self.write_lock().take() {
            info!("Signed out {}", account.email);
        }
    }

    /// Currently signed-in account, if any.
    pub fn current(&self) -> Option<Account> {
        self.read_lock().clone()
    }

    fn read_lock(&self) -> RwLockReadGuard<'_, Option<Account>> {
        self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_lock(&self) -> RwLockWriteGuard<'_, Option<Account>> {
        self.current.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl AuthSession for AccountSession {
    fn is_authenticated(&self) -> bool {
        self.read_lock().is_some()
    }

    fn identity_name(&self) -> Option<String> {
        self.read_lock()
            .as_ref()
            .map(|account| account.email.clone())
    }
}

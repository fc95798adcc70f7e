//! The flat per-user state record.

use crate::StateField;

use serde::{Deserialize, Serialize};

/// Per-user UI state, persisted as one JSON document per identity key.
///
/// The wire shape matches the in-memory shape exactly: one JSON member
/// per field, camelCase names, no version envelope.
///
/// ```json
/// {"canAccessConfigPage": true}
/// ```
///
/// A document containing only a subset of the known fields is valid;
/// fields it does not mention decode to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UserState {
    pub can_access_config_page: bool,
}

impl UserState {
    /// Read one field by name.
    pub fn get(&self, field: StateField) -> bool {
        match field {
            StateField::CanAccessConfigPage => self.can_access_config_page,
        }
    }

    /// Write one field by name. Returns whether the value actually changed.
    pub fn set(&mut self, field: StateField, value: bool) -> bool {
        let slot = match field {
            StateField::CanAccessConfigPage => &mut self.can_access_config_page,
        };
        if *slot == value {
            return false;
        }
        *slot = value;
        true
    }

    /// Copy every known field from `record` into `self`, one field at a
    /// time via [`StateField::ALL`]. Not a bulk replacement: only fields
    /// the field list names are touched.
    pub fn apply(&mut self, record: &UserState) {
        for field in StateField::ALL {
            self.set(field, record.get(field));
        }
    }
}

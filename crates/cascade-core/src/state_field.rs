//! The fixed set of fields a [`UserState`](crate::UserState) record holds.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;

/// Names one field of the per-user state record.
///
/// This enum is the explicit field list: hydration copies fields by
/// iterating [`StateField::ALL`], so a field missing here is a field
/// that never round-trips. Add a variant (and its `as_str` arm) when
/// the record grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateField {
    /// Whether the user may open the configuration page.
    CanAccessConfigPage,
}

impl StateField {
    /// Every known field, in declaration order.
    pub const ALL: [StateField; 1] = [StateField::CanAccessConfigPage];

    /// The field name as it appears in the persisted JSON record.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CanAccessConfigPage => "canAccessConfigPage",
        }
    }
}

impl FromStr for StateField {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "canAccessConfigPage" => Ok(Self::CanAccessConfigPage),
            _ => Err(CoreError::UnknownField {
                name: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for StateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

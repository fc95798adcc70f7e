pub mod error;
pub mod identity_key;
pub mod session;
pub mod state_field;
pub mod user_state;

pub use error::{CoreError, Result};
pub use identity_key::IdentityKey;
pub use session::{AuthSession, StaticSession};
pub use state_field::StateField;
pub use user_state::UserState;

#[cfg(test)]
mod tests;

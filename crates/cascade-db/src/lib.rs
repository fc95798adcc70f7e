pub mod account;
pub mod context;
pub mod error;
pub mod session;

pub use account::Account;
pub use context::AccountContext;
pub use error::{DbError, Result};
pub use session::AccountSession;

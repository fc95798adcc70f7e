mod identity_key;
mod session;
mod user_state;

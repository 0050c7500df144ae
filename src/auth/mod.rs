//! Password hashing and session identity helpers.

pub mod password;
pub mod session;

pub use password::{hash_password, verify_password};
pub use session::{SESSION_USER_ID_KEY, clear_session, session_user_id, set_session_user};

//! Session identity: the only thing kept in a session is the user id.

use crate::error::HubError;
use tower_sessions::Session;

/// Key for storing the authenticated user's id in the session record.
pub const SESSION_USER_ID_KEY: &str = "userId";

/// The user id stored in this session, if any.
pub async fn session_user_id(session: &Session) -> Result<Option<i64>, HubError> {
    Ok(session.get::<i64>(SESSION_USER_ID_KEY).await?)
}

/// Bind `user_id` to the session under a fresh session id.
pub async fn set_session_user(session: &Session, user_id: i64) -> Result<(), HubError> {
    session.cycle_id().await?;
    session.insert(SESSION_USER_ID_KEY, user_id).await?;
    Ok(())
}

/// Delete the session record and expire the cookie.
pub async fn clear_session(session: &Session) -> Result<(), HubError> {
    session.flush().await?;
    Ok(())
}

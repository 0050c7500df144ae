use crate::auth::session_user_id;
use crate::config::Config;
use crate::db::UserStorage;
use crate::error::HubError;
use async_graphql::{Context, Guard, ResultExt};
use tower_sessions::Session;

/// Whether mutating post operations need a logged-in session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WritePolicy {
    pub require_session: bool,
}

impl Default for WritePolicy {
    fn default() -> Self {
        Self {
            require_session: true,
        }
    }
}

impl From<&Config> for WritePolicy {
    fn from(cfg: &Config) -> Self {
        Self {
            require_session: cfg.posts.require_auth,
        }
    }
}

/// Rejects the field with `UNAUTHENTICATED` unless the request's session
/// carries the id of a user that still exists. A no-op when the schema's [`WritePolicy`] disables it.
pub struct RequireSession;

impl Guard for RequireSession {
    async fn check(&self, ctx: &Context<'_>) -> async_graphql::Result<()> {
        let policy = ctx.data_opt::<WritePolicy>().copied().unwrap_or_default();
        if !policy.require_session {
            return Ok(());
        }
        let session = ctx.data::<Session>()?;
        let Some(user_id) = session_user_id(session).await.extend()? else {
            return Err(HubError::Unauthenticated).extend();
        };
        let users = ctx.data::<UserStorage>()?;
        match users.find_by_id(user_id).await.extend()? {
            Some(_) => Ok(()),
            None => Err(HubError::Unauthenticated).extend(),
        }
    }
}

use crate::auth::{clear_session, hash_password, session_user_id, set_session_user, verify_password};
use crate::db::UserStorage;
use crate::types::{FieldError, User, UserResponse, UsernamePasswordInput};
use async_graphql::{Context, Object, Result, ResultExt};
use tower_sessions::Session;
use tracing::{debug, info};

/// Usernames and passwords must be longer than this many characters.
const MIN_CREDENTIAL_LEN: usize = 2;

/// First failing check on a registration form, username before password.
pub fn validate_registration(options: &UsernamePasswordInput) -> Option<FieldError> {
    if options.username.chars().count() <= MIN_CREDENTIAL_LEN {
        return Some(FieldError::new("username", "Length must be greater than 2"));
    }
    if options.password.chars().count() <= MIN_CREDENTIAL_LEN {
        return Some(FieldError::new("password", "Length must be greater than 2"));
    }
    None
}

#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    /// The user bound to the caller's session, if any.
    async fn me(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let session = ctx.data::<Session>()?;
        let users = ctx.data::<UserStorage>()?;

        let Some(user_id) = session_user_id(session).await.extend()? else {
            return Ok(None);
        };
        let user = users.find_by_id(user_id).await.extend()?;
        if user.is_none() {
            debug!(user_id, "session refers to a missing user");
        }
        Ok(user.map(User::from))
    }
}

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    async fn register(
        &self,
        ctx: &Context<'_>,
        options: UsernamePasswordInput,
    ) -> Result<UserResponse> {
        let session = ctx.data::<Session>()?;
        let users = ctx.data::<UserStorage>()?;

        if let Some(err) = validate_registration(&options) {
            return Ok(UserResponse::error(err.field, err.message));
        }

        let hashed = hash_password(&options.password).await.extend()?;
        let user = match users.create(&options.username, &hashed).await {
            Ok(user) => user,
            Err(e) if e.is_unique_violation() => {
                return Ok(UserResponse::error("username", "Username already taken"));
            }
            Err(e) => return Err(e).extend(),
        };

        // An account that never reached the session is removed again.
        if let Err(e) = set_session_user(session, user.id).await {
            users.delete(user.id).await.extend()?;
            return Err(e).extend();
        }
        info!(user_id = user.id, username = %user.username, "user registered");
        Ok(UserResponse::with_user(user))
    }

    async fn login(
        &self,
        ctx: &Context<'_>,
        options: UsernamePasswordInput,
    ) -> Result<UserResponse> {
        let session = ctx.data::<Session>()?;
        let users = ctx.data::<UserStorage>()?;

        let Some(user) = users.find_by_username(&options.username).await.extend()? else {
            return Ok(UserResponse::error("username", "That username doesn't exist"));
        };
        if !verify_password(&options.password, &user.password).await.extend()? {
            return Ok(UserResponse::error("password", "Incorrect password"));
        }

        set_session_user(session, user.id).await.extend()?;
        info!(user_id = user.id, "user logged in");
        Ok(UserResponse::with_user(user))
    }

    /// Drop the caller's session. Always true for anonymous callers too.
    async fn logout(&self, ctx: &Context<'_>) -> Result<bool> {
        let session = ctx.data::<Session>()?;
        let user_id = session_user_id(session).await.extend()?;
        clear_session(session).await.extend()?;
        info!(user_id = ?user_id, "session cleared");
        Ok(true)
    }
}

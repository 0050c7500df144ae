use crate::db::models::DbUser;
use async_graphql::{InputObject, SimpleObject};
use chrono::{DateTime, Utc};

/// Public view of a user; the password hash never leaves the server.
#[derive(Debug, Clone, PartialEq, SimpleObject)]
pub struct User {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub username: String,
}

impl From<DbUser> for User {
    fn from(u: DbUser) -> Self {
        Self {
            id: u.id,
            created_at: u.created_at,
            updated_at: u.updated_at,
            username: u.username,
        }
    }
}

#[derive(Debug, Clone, InputObject)]
pub struct UsernamePasswordInput {
    pub username: String,
    pub password: String,
}

/// A user-correctable validation failure on one input field.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Either `errors` or `user` is set, never both.
#[derive(Debug, Clone, Default, SimpleObject)]
pub struct UserResponse {
    pub errors: Option<Vec<FieldError>>,
    pub user: Option<User>,
}

impl UserResponse {
    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: Some(vec![FieldError::new(field, message)]),
            user: None,
        }
    }

    pub fn with_user(user: impl Into<User>) -> Self {
        Self {
            errors: None,
            user: Some(user.into()),
        }
    }
}

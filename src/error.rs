use async_graphql::ErrorExtensions;
use axum::http::header::InvalidHeaderValue;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum HubError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("Session store error: {0}")]
    SessionError(#[from] tower_sessions::session::Error),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Blocking task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),

    #[error("Invalid header value in configuration: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),

    #[error("Not authenticated")]
    Unauthenticated,
}

impl HubError {
    /// True when the store rejected a write because of a UNIQUE constraint
    /// (SQLite `SQLITE_CONSTRAINT_UNIQUE`, Postgres `23505`).
    pub fn is_unique_violation(&self) -> bool {
        match self {
            HubError::DatabaseError(SqlxError::Database(db_err)) => db_err.is_unique_violation(),
            _ => false,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            HubError::Unauthenticated => "UNAUTHENTICATED",
            HubError::DatabaseError(_)
            | HubError::SessionError(_)
            | HubError::PasswordHash(_)
            | HubError::TaskJoin(_)
            | HubError::InvalidHeader(_) => "INTERNAL_ERROR",
        }
    }
}

impl ErrorExtensions for HubError {
    fn extend(&self) -> async_graphql::Error {
        let message = match self {
            HubError::Unauthenticated => "You must be logged in to do that.".to_string(),
            _ => {
                error!(error = %self, "request failed");
                "An internal server error occurred.".to_string()
            }
        };
        let code = self.code();
        async_graphql::Error::new(message).extend_with(|_, e| e.set("code", code))
    }
}

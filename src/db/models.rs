use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Row of the `user` table. `password` holds the argon2 PHC string.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DbUser {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DbPost {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub title: String,
}

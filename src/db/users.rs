use crate::db::models::DbUser;
use crate::db::sqlite::SqlitePool;
use crate::error::HubError;
use chrono::Utc;

#[derive(Clone)]
pub struct UserStorage {
    pool: SqlitePool,
}

impl UserStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a user with fresh timestamps. A duplicate username surfaces as
    /// a `DatabaseError` for which [`HubError::is_unique_violation`] is true.
    pub async fn create(&self, username: &str, password_hash: &str) -> Result<DbUser, HubError> {
        let now = Utc::now();
        let user = sqlx::query_as::<_, DbUser>(
            r#"INSERT INTO "user" (created_at, updated_at, username, password)
               VALUES (?, ?, ?, ?)
               RETURNING id, created_at, updated_at, username, password"#,
        )
        .bind(now)
        .bind(now)
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<DbUser>, HubError> {
        let user = sqlx::query_as::<_, DbUser>(
            r#"SELECT id, created_at, updated_at, username, password
               FROM "user" WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<DbUser>, HubError> {
        let user = sqlx::query_as::<_, DbUser>(
            r#"SELECT id, created_at, updated_at, username, password
               FROM "user" WHERE username = ?"#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    pub async fn delete(&self, id: i64) -> Result<(), HubError> {
        sqlx::query(r#"DELETE FROM "user" WHERE id = ?"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn count(&self) -> Result<i64, HubError> {
        let rec: (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM "user""#)
            .fetch_one(&self.pool)
            .await?;
        Ok(rec.0)
    }
}

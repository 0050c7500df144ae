use crate::db::models::DbPost;
use crate::db::sqlite::SqlitePool;
use crate::error::HubError;
use chrono::Utc;

/// Result of a delete that reached the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

#[derive(Clone)]
pub struct PostStorage {
    pool: SqlitePool,
}

impl PostStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<DbPost>, HubError> {
        let posts = sqlx::query_as::<_, DbPost>(
            "SELECT id, created_at, updated_at, title FROM post ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(posts)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<DbPost>, HubError> {
        let post = sqlx::query_as::<_, DbPost>(
            "SELECT id, created_at, updated_at, title FROM post WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(post)
    }

    pub async fn create(&self, title: &str) -> Result<DbPost, HubError> {
        let now = Utc::now();
        let post = sqlx::query_as::<_, DbPost>(
            r#"INSERT INTO post (created_at, updated_at, title)
               VALUES (?, ?, ?)
               RETURNING id, created_at, updated_at, title"#,
        )
        .bind(now)
        .bind(now)
        .bind(title)
        .fetch_one(&self.pool)
        .await?;
        Ok(post)
    }

    /// Set a new title and refresh `updated_at`. Returns `None` when no row
    /// has this id.
    pub async fn update_title(&self, id: i64, title: &str) -> Result<Option<DbPost>, HubError> {
        let post = sqlx::query_as::<_, DbPost>(
            r#"UPDATE post SET title = ?, updated_at = ?
               WHERE id = ?
               RETURNING id, created_at, updated_at, title"#,
        )
        .bind(title)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(post)
    }

    pub async fn delete(&self, id: i64) -> Result<DeleteOutcome, HubError> {
        let result = sqlx::query("DELETE FROM post WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            Ok(DeleteOutcome::NotFound)
        } else {
            Ok(DeleteOutcome::Deleted)
        }
    }
}

use crate::db::models::DbPost;
use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, SimpleObject)]
pub struct Post {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub title: String,
}

impl From<DbPost> for Post {
    fn from(p: DbPost) -> Self {
        Self {
            id: p.id,
            created_at: p.created_at,
            updated_at: p.updated_at,
            title: p.title,
        }
    }
}

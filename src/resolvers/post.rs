use crate::db::{DeleteOutcome, PostStorage};
use crate::resolvers::guard::RequireSession;
use crate::types::Post;
use async_graphql::{Context, Object, Result, ResultExt};
use tracing::{debug, info, warn};

#[derive(Default)]
pub struct PostQuery;

#[Object]
impl PostQuery {
    /// All posts, oldest id first.
    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>> {
        let posts = ctx.data::<PostStorage>()?;
        let rows = posts.list().await.extend()?;
        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn post(&self, ctx: &Context<'_>, id: i64) -> Result<Option<Post>> {
        let posts = ctx.data::<PostStorage>()?;
        Ok(posts.find_by_id(id).await.extend()?.map(Post::from))
    }
}

#[derive(Default)]
pub struct PostMutation;

#[Object]
impl PostMutation {
    #[graphql(guard = "RequireSession")]
    async fn create_post(&self, ctx: &Context<'_>, title: String) -> Result<Post> {
        let posts = ctx.data::<PostStorage>()?;
        let post = posts.create(&title).await.extend()?;
        info!(post_id = post.id, "post created");
        Ok(post.into())
    }

    /// `null` when no post has this id. Without a `title` the post is
    /// returned untouched.
    #[graphql(guard = "RequireSession")]
    async fn update_post(
        &self,
        ctx: &Context<'_>,
        id: i64,
        title: Option<String>,
    ) -> Result<Option<Post>> {
        let posts = ctx.data::<PostStorage>()?;
        let post = match title {
            Some(title) => posts.update_title(id, &title).await.extend()?,
            None => posts.find_by_id(id).await.extend()?,
        };
        Ok(post.map(Post::from))
    }

    /// False only when the store itself failed; deleting a missing id is
    /// a successful no-op.
    #[graphql(guard = "RequireSession")]
    async fn delete_post(&self, ctx: &Context<'_>, id: i64) -> Result<bool> {
        let posts = ctx.data::<PostStorage>()?;
        match posts.delete(id).await {
            Ok(DeleteOutcome::Deleted) => {
                info!(post_id = id, "post deleted");
                Ok(true)
            }
            Ok(DeleteOutcome::NotFound) => {
                debug!(post_id = id, "delete requested for missing post");
                Ok(true)
            }
            Err(e) => {
                warn!(post_id = id, error = %e, "failed to delete post");
                Ok(false)
            }
        }
    }
}

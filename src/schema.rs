//! Schema assembly: resolver objects are merged explicitly and their
//! collaborators registered as context data.

use crate::db::{PostStorage, SqlitePool, UserStorage};
use crate::resolvers::{
    HelloQuery, PostMutation, PostQuery, UserMutation, UserQuery, WritePolicy,
};
use async_graphql::{EmptySubscription, MergedObject, Schema};

#[derive(MergedObject, Default)]
pub struct QueryRoot(HelloQuery, UserQuery, PostQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(UserMutation, PostMutation);

pub type HubSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema over `pool`. The per-request [`tower_sessions::Session`]
/// is attached by the HTTP handler, not here.
pub fn build_schema(pool: SqlitePool, policy: WritePolicy) -> HubSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(UserStorage::new(pool.clone()))
    .data(PostStorage::new(pool))
    .data(policy)
    .finish()
}

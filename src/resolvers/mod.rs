//! GraphQL resolvers. Each resolver pulls its collaborators (storage
//! handles, the request's session, the write policy) from the context.

pub mod guard;
pub mod hello;
pub mod post;
pub mod user;

pub use guard::{RequireSession, WritePolicy};
pub use hello::HelloQuery;
pub use post::{PostMutation, PostQuery};
pub use user::{UserMutation, UserQuery};

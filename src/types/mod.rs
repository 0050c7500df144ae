//! GraphQL object and input types exposed by the API.

pub mod post;
pub mod user;

pub use post::Post;
pub use user::{FieldError, User, UserResponse, UsernamePasswordInput};

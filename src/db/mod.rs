//! Database module: row models, schema, and storage handles.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: pool construction and schema bootstrap
//! - `users.rs` / `posts.rs`: storage handles injected into the GraphQL context

pub mod models;
pub mod posts;
pub mod schema;
pub mod sqlite;
pub mod users;

pub use models::{DbPost, DbUser};
pub use posts::{DeleteOutcome, PostStorage};
pub use schema::SQLITE_INIT;
pub use sqlite::{SqlitePool, connect, init_schema};
pub use users::UserStorage;

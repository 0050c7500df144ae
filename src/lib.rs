pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod resolvers;
pub mod router;
pub mod schema;
pub mod types;

pub use error::HubError;
pub use schema::{HubSchema, build_schema};

#![allow(dead_code)]

use async_graphql::{Request, Response, Variables};
use linkhub::HubSchema;
use linkhub::db::SqlitePool;
use linkhub::resolvers::WritePolicy;
use serde_json::{Value, json};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use tower_sessions::{MemoryStore, Session};

/// Single-connection in-memory database with the schema applied. The
/// connection is never recycled, so the database lives as long as the pool.
pub async fn memory_pool() -> SqlitePool {
    let opts = SqliteConnectOptions::from_str("sqlite::memory:").expect("valid sqlite url");
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(opts)
        .await
        .expect("failed to open in-memory sqlite");
    linkhub::db::init_schema(&pool)
        .await
        .expect("failed to initialize schema");
    pool
}

pub async fn test_schema() -> (HubSchema, SqlitePool) {
    test_schema_with(WritePolicy::default()).await
}

pub async fn test_schema_with(policy: WritePolicy) -> (HubSchema, SqlitePool) {
    let pool = memory_pool().await;
    (linkhub::build_schema(pool.clone(), policy), pool)
}

/// A fresh anonymous session, standing in for one browser's cookie jar.
pub fn new_session() -> Session {
    Session::new(None, Arc::new(MemoryStore::default()), None)
}

pub async fn execute(schema: &HubSchema, session: &Session, query: &str, vars: Value) -> Response {
    schema
        .execute(
            Request::new(query)
                .variables(Variables::from_json(vars))
                .data(session.clone()),
        )
        .await
}

/// Execute and return `data` as JSON, failing the test on any GraphQL error.
pub async fn execute_ok(schema: &HubSchema, session: &Session, query: &str, vars: Value) -> Value {
    let resp = execute(schema, session, query, vars).await;
    assert!(resp.errors.is_empty(), "unexpected errors: {:?}", resp.errors);
    resp.data.into_json().expect("data is valid json")
}

pub const REGISTER: &str = r#"
    mutation Register($username: String!, $password: String!) {
        register(options: { username: $username, password: $password }) {
            errors { field message }
            user { id username createdAt updatedAt }
        }
    }
"#;

pub const LOGIN: &str = r#"
    mutation Login($username: String!, $password: String!) {
        login(options: { username: $username, password: $password }) {
            errors { field message }
            user { id username }
        }
    }
"#;

pub async fn register(schema: &HubSchema, session: &Session, username: &str, password: &str) -> Value {
    let data = execute_ok(
        schema,
        session,
        REGISTER,
        json!({ "username": username, "password": password }),
    )
    .await;
    data["register"].clone()
}

pub async fn login(schema: &HubSchema, session: &Session, username: &str, password: &str) -> Value {
    let data = execute_ok(
        schema,
        session,
        LOGIN,
        json!({ "username": username, "password": password }),
    )
    .await;
    data["login"].clone()
}

/// A session already bound to a newly registered user.
pub async fn logged_in_session(schema: &HubSchema) -> Session {
    let session = new_session();
    let resp = register(schema, &session, "poster", "secret").await;
    assert!(resp["errors"].is_null(), "registration failed: {resp}");
    session
}

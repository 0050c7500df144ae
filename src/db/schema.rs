//! DDL for the `post` and `user` tables, applied on every startup.

/// SQLite schema with:
/// - `post`: generated `id`, RFC3339 timestamps bound by the caller, required `title`
/// - `user`: generated `id`, RFC3339 timestamps, `username` UNIQUE, argon2 `password` hash
///
/// Statements are separated by `;` and must not contain `;` themselves.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS post (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    title TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS "user" (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    username TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL
)
"#;

//! SQL DDL for the items and users tables.
//! SQLite-first design; the statements are idempotent so they can run on
//! every startup against an existing database.

/// SQLite schema with:
/// - `users.email` UNIQUE, backing the registration duplicate check
/// - `items.user_id` carried as a plain integer (no FK constraint)
/// - `items.is_public` BOOLEAN (stored as INTEGER 0/1)
/// - index on `items.user_id` for the per-user listing
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    email TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL,
    keyword TEXT NOT NULL,
    category TEXT NOT NULL,
    rating INTEGER NOT NULL,
    cost INTEGER NOT NULL,
    currency TEXT NOT NULL,
    language TEXT NOT NULL,
    type TEXT NOT NULL,
    notes TEXT NOT NULL,
    is_public INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS idx_items_user_id ON items(user_id);
"#;

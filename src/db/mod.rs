//! Database module: pool setup, schema and storages for persistent state.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows plus the insert/update inputs
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: pool construction and schema bootstrap
//! - `items.rs` / `users.rs`: one storage per table

pub mod items;
pub mod models;
pub mod schema;
pub mod sqlite;
pub mod users;

pub use items::ItemsStorage;
pub use models::{DbItem, DbUser, ItemPatch, NewItem};
pub use schema::SQLITE_INIT;
pub use sqlite::{SqlitePool, connect, init_schema};
pub use users::UsersStorage;

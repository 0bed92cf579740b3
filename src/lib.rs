pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod sanitize;
pub mod service;
pub mod types;

pub use error::ApiError;
pub use router::{AppState, app_router};

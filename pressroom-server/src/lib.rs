//! pressroom-server: HTTP surface and PostgreSQL store for pressroom
//!
//! Maps requests onto the core post and user services and provides the
//! sqlx-backed `Store` implementation.

pub mod db;
pub mod http;
pub mod state;

pub use db::PgStore;
pub use http::{build_router, run_server, ApiError, ServerConfig, ServerError};
pub use state::AppState;

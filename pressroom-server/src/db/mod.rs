//! Database layer - connection pool, schema bootstrap and the PostgreSQL store
//!
//! # Design Principles
//!
//! - Connection pool, no shared connection behind a mutex
//! - Rely on DB constraints and classify their violations, no check-then-insert
//! - Single-statement mutations (`UPDATE ... RETURNING`) so each is atomic

pub mod error;
pub mod repos;
pub mod schema;
pub mod store;

pub use error::DbError;
pub use repos::{PostRepo, UserRepo};
pub use store::{PgStore, DEFAULT_MAX_CONNECTIONS};

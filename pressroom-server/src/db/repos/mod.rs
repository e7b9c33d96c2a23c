//! Repository implementations for database access
//!
//! Each repository borrows the pool and follows these patterns:
//! - Constraint violations are classified, never pre-checked
//! - Mutations are single statements with `RETURNING`
//! - Listings order by identity so pagination windows are stable

pub mod posts;
pub mod users;

pub use posts::{PostRepo, PostRow};
pub use users::{UserRepo, UserRow};

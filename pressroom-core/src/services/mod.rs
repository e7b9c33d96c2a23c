//! Service layer - the operations callers invoke
//!
//! Services are cheap to clone and hold nothing but the shared store handle.

pub mod posts;
pub mod users;

pub use posts::PostService;
pub use users::UserService;

//! Store abstraction - the only shared mutable resource
//!
//! Services receive an `Arc<dyn Store>` at construction. Implementations:
//! - [`MemoryStore`]: in-process tables behind one async mutex
//! - `PgStore` (pressroom-server): PostgreSQL via sqlx
//!
//! Every mutating method must be atomic on its own. In particular
//! [`Store::increment_views`] adds one inside the store, never as a
//! read-then-write from the caller.

pub mod memory;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{NewPost, NewUser, Post, PostId, User, UserId};
use crate::query::PostFilter;

pub use memory::MemoryStore;

#[async_trait]
pub trait Store: Send + Sync + 'static {
    /// Insert a user. Fails with `Conflict` when the email is taken.
    async fn insert_user(&self, user: NewUser) -> Result<User>;

    /// All users, identity ascending.
    async fn list_users(&self) -> Result<Vec<User>>;

    async fn find_user(&self, id: UserId) -> Result<Option<User>>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Insert a post with `published = false` and a zero view count.
    /// Fails with `NotFound` when the author does not exist.
    async fn insert_post(&self, post: NewPost) -> Result<Post>;

    async fn find_post(&self, id: PostId) -> Result<Option<Post>>;

    /// Posts matching `filter`, identity ascending, windowed.
    async fn find_posts(&self, filter: &PostFilter) -> Result<Vec<Post>>;

    /// Atomically add one to the view count. `NotFound` when missing.
    async fn increment_views(&self, id: PostId) -> Result<Post>;

    /// Set `published = true`. Idempotent. `NotFound` when missing.
    async fn publish_post(&self, id: PostId) -> Result<Post>;

    /// Cheap round trip proving the store can serve requests.
    async fn ping(&self) -> Result<()>;
}

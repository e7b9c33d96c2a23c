//! pressroom-core: data access and query construction for the pressroom blog
//!
//! Layers, leaves first:
//! - [`store`]: persistence trait plus the in-memory implementation
//! - [`query`]: pure filter/pagination builders
//! - [`services`]: post and user operations over an `Arc<dyn Store>`

pub mod error;
pub mod models;
pub mod query;
pub mod services;
pub mod store;

pub use error::{BoxError, Error, Result};
pub use models::{NewPost, NewUser, Post, PostId, PostWithAuthor, User, UserId, Window};
pub use query::{drafts_filter, feed_filter, parse_bound, PostFilter};
pub use services::{PostService, UserService};
pub use store::{MemoryStore, Store};

//! Domain entities shared by the store, the services and the HTTP layer
//!
//! Field names serialize as camelCase (`viewCount`, `authorId`).

pub mod pagination;
pub mod post;
pub mod user;

pub use pagination::Window;
pub use post::{NewPost, Post, PostId, PostWithAuthor};
pub use user::{NewUser, User, UserId};

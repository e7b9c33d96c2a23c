//! Route handlers organized by resource

pub mod feed;
pub mod health;
pub mod posts;
pub mod users;

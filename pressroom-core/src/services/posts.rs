//! Post service - creation, view counting, publishing and listings

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::models::{NewPost, Post, PostId, PostWithAuthor, UserId};
use crate::query;
use crate::store::Store;

#[derive(Clone)]
pub struct PostService {
    store: Arc<dyn Store>,
}

impl PostService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Create a draft authored by the user registered under `author_email`.
    ///
    /// Fails with `NotFound` when no such user exists; nothing is persisted.
    pub async fn create_post(
        &self,
        title: &str,
        content: Option<&str>,
        author_email: &str,
    ) -> Result<PostWithAuthor> {
        let author = self
            .store
            .find_user_by_email(author_email)
            .await?
            .ok_or_else(|| Error::not_found("user", author_email))?;

        let post = self
            .store
            .insert_post(NewPost {
                title: title.to_owned(),
                content: content.map(str::to_owned),
                author_id: author.id,
            })
            .await?;

        info!(post_id = %post.id, user_id = %author.id, "post created");
        Ok(PostWithAuthor { post, author })
    }

    /// Add one view. Atomic in the store, so concurrent calls never lose updates.
    pub async fn increment_views(&self, id: PostId) -> Result<Post> {
        let post = self.store.increment_views(id).await?;
        debug!(post_id = %id, views = post.view_count, "view counted");
        Ok(post)
    }

    /// Mark a post published. Publishing twice is not an error.
    pub async fn publish(&self, id: PostId) -> Result<Post> {
        let post = self.store.publish_post(id).await?;
        info!(post_id = %id, "post published");
        Ok(post)
    }

    /// Fetch any post by id, draft or not.
    pub async fn get_post(&self, id: PostId) -> Result<Post> {
        self.store
            .find_post(id)
            .await?
            .ok_or_else(|| Error::not_found("post", id))
    }

    /// Published posts, optionally searched and windowed, identity ascending.
    pub async fn list_feed(
        &self,
        search: Option<&str>,
        skip: Option<u64>,
        take: Option<u64>,
    ) -> Result<Vec<Post>> {
        let filter = query::feed_filter(search, skip, take);
        let posts = self.store.find_posts(&filter).await?;
        debug!(?search, ?skip, ?take, count = posts.len(), "feed listed");
        Ok(posts)
    }

    /// Drafts of one user. Empty when the user has none; `NotFound` only
    /// when the user does not exist.
    pub async fn list_drafts_for_user(&self, user_id: UserId) -> Result<Vec<Post>> {
        if self.store.find_user(user_id).await?.is_none() {
            return Err(Error::not_found("user", user_id));
        }

        self.store.find_posts(&query::drafts_filter(user_id)).await
    }
}

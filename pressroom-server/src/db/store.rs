//! PostgreSQL implementation of the core `Store` trait

use async_trait::async_trait;
use pressroom_core::{
    NewPost, NewUser, Post, PostFilter, PostId, Result, Store, User, UserId,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::repos::{PostRepo, UserRepo};
use super::DbError;

/// Pool size used when the caller does not pick one.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Store backed by a PostgreSQL pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool of at most `max_connections` against `database_url`.
    ///
    /// Fails when the first connection cannot be established, so a bad URL
    /// surfaces at startup rather than on the first request.
    ///
    /// ```ignore
    /// let store = PgStore::connect("postgres://localhost/pressroom", 5).await?;
    /// ```
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, DbError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn users(&self) -> UserRepo<'_> {
        UserRepo::new(&self.pool)
    }

    fn posts(&self) -> PostRepo<'_> {
        PostRepo::new(&self.pool)
    }
}

#[async_trait]
impl Store for PgStore {
    async fn insert_user(&self, user: NewUser) -> Result<User> {
        Ok(self.users().insert(user).await?)
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.users().list().await?)
    }

    async fn find_user(&self, id: UserId) -> Result<Option<User>> {
        Ok(self.users().get(id).await?)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.users().get_by_email(email).await?)
    }

    async fn insert_post(&self, post: NewPost) -> Result<Post> {
        Ok(self.posts().insert(post).await?)
    }

    async fn find_post(&self, id: PostId) -> Result<Option<Post>> {
        Ok(self.posts().get(id).await?)
    }

    async fn find_posts(&self, filter: &PostFilter) -> Result<Vec<Post>> {
        Ok(self.posts().find_matching(filter).await?)
    }

    async fn increment_views(&self, id: PostId) -> Result<Post> {
        Ok(self.posts().increment_views(id).await?)
    }

    async fn publish_post(&self, id: PostId) -> Result<Post> {
        Ok(self.posts().publish(id).await?)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(DbError::from)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::db::schema::ensure_schema;
    use pressroom_core::{Error, PostService, UserService};

    // Integration tests - run with DATABASE_URL set
    // cargo test -p pressroom-server -- --ignored

    async fn store() -> PgStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let store = PgStore::connect(&url, DEFAULT_MAX_CONNECTIONS)
            .await
            .expect("pool creation failed");
        ensure_schema(store.pool()).await.expect("schema bootstrap failed");
        store
    }

    fn unique_email(tag: &str) -> String {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        format!("{tag}-{nanos}@example.com")
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn ping_round_trips() {
        store().await.ping().await.expect("ping failed");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn duplicate_email_conflicts() {
        let store = store().await;
        let email = unique_email("dup");
        store
            .insert_user(NewUser::new(None, &email))
            .await
            .expect("first insert");

        let err = store
            .insert_user(NewUser::new(None, &email))
            .await
            .unwrap_err();
        assert!(err.is_conflict());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn unknown_author_is_not_found() {
        let store = store().await;
        let err = store
            .insert_post(NewPost {
                title: "orphan".into(),
                content: None,
                author_id: UserId(i32::MAX),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound { resource: "user", .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn concurrent_increments_are_atomic() {
        let store: Arc<dyn Store> = Arc::new(store().await);
        let users = UserService::new(store.clone());
        let posts = PostService::new(store);

        let email = unique_email("views");
        users.create_user(None, &email).await.expect("user");
        let post = posts.create_post("busy", None, &email).await.expect("post").post;

        let handles: Vec<_> = (0..20)
            .map(|_| {
                let posts = posts.clone();
                tokio::spawn(async move { posts.increment_views(post.id).await })
            })
            .collect();
        for handle in handles {
            handle.await.expect("task panicked").expect("increment failed");
        }

        let stored = posts.get_post(post.id).await.expect("get");
        assert_eq!(stored.view_count, 20);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn search_is_literal_substring() {
        let store: Arc<dyn Store> = Arc::new(store().await);
        let users = UserService::new(store.clone());
        let posts = PostService::new(store);

        let email = unique_email("search");
        users.create_user(None, &email).await.expect("user");
        let marker = unique_email("100%_literal");
        let post = posts
            .create_post(&marker, None, &email)
            .await
            .expect("post")
            .post;
        posts.publish(post.id).await.expect("publish");

        let hits = posts.list_feed(Some(marker.as_str()), None, None).await.expect("feed");
        assert_eq!(hits.len(), 1);

        let upper = marker.to_uppercase();
        let misses = posts.list_feed(Some(upper.as_str()), None, None).await.expect("feed");
        assert!(misses.iter().all(|p| p.id != post.id));
    }
}

//! In-memory store
//!
//! All tables sit behind a single `tokio::sync::Mutex`, so every operation
//! is atomic with respect to every other one. Used by tests and by
//! `pressroom serve --memory`.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::Store;
use crate::error::{Error, Result};
use crate::models::{NewPost, NewUser, Post, PostId, User, UserId};
use crate::query::PostFilter;

#[derive(Default)]
struct Tables {
    users: BTreeMap<UserId, User>,
    emails: HashMap<String, UserId>,
    posts: BTreeMap<PostId, Post>,
    last_user_id: i32,
    last_post_id: i32,
}

impl Tables {
    fn next_user_id(&mut self) -> Result<UserId> {
        self.last_user_id = next_id(self.last_user_id, "user")?;
        Ok(UserId(self.last_user_id))
    }

    fn next_post_id(&mut self) -> Result<PostId> {
        self.last_post_id = next_id(self.last_post_id, "post")?;
        Ok(PostId(self.last_post_id))
    }

    fn post_mut(&mut self, id: PostId) -> Result<&mut Post> {
        self.posts
            .get_mut(&id)
            .ok_or_else(|| Error::not_found("post", id))
    }
}

fn next_id(last: i32, resource: &'static str) -> Result<i32> {
    last.checked_add(1)
        .ok_or_else(|| Error::store(format!("{resource} id space exhausted")))
}

/// Store backed by process memory
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_user(&self, user: NewUser) -> Result<User> {
        let mut tables = self.tables.lock().await;

        if tables.emails.contains_key(&user.email) {
            return Err(Error::Conflict {
                resource: "user",
                field: "email",
                value: user.email,
            });
        }

        let id = tables.next_user_id()?;
        let user = User {
            id,
            name: user.name,
            email: user.email,
        };

        tables.emails.insert(user.email.clone(), id);
        tables.users.insert(id, user.clone());
        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        let tables = self.tables.lock().await;
        Ok(tables.users.values().cloned().collect())
    }

    async fn find_user(&self, id: UserId) -> Result<Option<User>> {
        let tables = self.tables.lock().await;
        Ok(tables.users.get(&id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .emails
            .get(email)
            .and_then(|id| tables.users.get(id))
            .cloned())
    }

    async fn insert_post(&self, post: NewPost) -> Result<Post> {
        let mut tables = self.tables.lock().await;

        if !tables.users.contains_key(&post.author_id) {
            return Err(Error::not_found("user", post.author_id));
        }

        let post = Post {
            id: tables.next_post_id()?,
            title: post.title,
            content: post.content,
            published: false,
            view_count: 0,
            author_id: post.author_id,
        };

        tables.posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn find_post(&self, id: PostId) -> Result<Option<Post>> {
        let tables = self.tables.lock().await;
        Ok(tables.posts.get(&id).cloned())
    }

    async fn find_posts(&self, filter: &PostFilter) -> Result<Vec<Post>> {
        let tables = self.tables.lock().await;
        // BTreeMap iteration is identity ascending
        let matching = tables.posts.values().filter(|post| filter.matches(post));
        Ok(filter.window().apply(matching.cloned()))
    }

    async fn increment_views(&self, id: PostId) -> Result<Post> {
        let mut tables = self.tables.lock().await;
        let post = tables.post_mut(id)?;
        post.view_count += 1;
        Ok(post.clone())
    }

    async fn publish_post(&self, id: PostId) -> Result<Post> {
        let mut tables = self.tables.lock().await;
        let post = tables.post_mut(id)?;
        post.published = true;
        Ok(post.clone())
    }

    async fn ping(&self) -> Result<()> {
        drop(self.tables.lock().await);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{drafts_filter, feed_filter};

    async fn seeded() -> (MemoryStore, User) {
        let store = MemoryStore::new();
        let user = store
            .insert_user(NewUser::new(Some("Alice"), "alice@example.com"))
            .await
            .unwrap();
        (store, user)
    }

    fn new_post(title: &str, author: UserId) -> NewPost {
        NewPost {
            title: title.into(),
            content: None,
            author_id: author,
        }
    }

    #[tokio::test]
    async fn assigns_sequential_ids() {
        let (store, alice) = seeded().await;
        assert_eq!(alice.id, UserId(1));

        let bob = store
            .insert_user(NewUser::new(None, "bob@example.com"))
            .await
            .unwrap();
        assert_eq!(bob.id, UserId(2));

        let first = store.insert_post(new_post("one", alice.id)).await.unwrap();
        let second = store.insert_post(new_post("two", bob.id)).await.unwrap();
        assert_eq!(first.id, PostId(1));
        assert_eq!(second.id, PostId(2));
    }

    #[tokio::test]
    async fn duplicate_email_conflicts() {
        let (store, _) = seeded().await;
        let err = store
            .insert_user(NewUser::new(Some("Other"), "alice@example.com"))
            .await
            .unwrap_err();
        assert!(err.is_conflict());
        assert_eq!(store.list_users().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn insert_post_requires_author() {
        let store = MemoryStore::new();
        let err = store
            .insert_post(new_post("orphan", UserId(99)))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(store.find_post(PostId(1)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn new_posts_are_drafts() {
        let (store, alice) = seeded().await;
        let post = store.insert_post(new_post("draft", alice.id)).await.unwrap();
        assert!(post.is_draft());
        assert_eq!(post.view_count, 0);
    }

    #[tokio::test]
    async fn increment_and_publish_missing_post() {
        let store = MemoryStore::new();
        assert!(store.increment_views(PostId(1)).await.unwrap_err().is_not_found());
        assert!(store.publish_post(PostId(1)).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn find_posts_orders_and_windows() {
        let (store, alice) = seeded().await;
        for title in ["a", "b", "c", "d"] {
            let post = store.insert_post(new_post(title, alice.id)).await.unwrap();
            store.publish_post(post.id).await.unwrap();
        }
        store.insert_post(new_post("draft", alice.id)).await.unwrap();

        let page = store
            .find_posts(&feed_filter(None, Some(1), Some(2)))
            .await
            .unwrap();
        let titles: Vec<_> = page.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["b", "c"]);

        let drafts = store.find_posts(&drafts_filter(alice.id)).await.unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].title, "draft");
    }

    #[tokio::test]
    async fn exhausted_id_space_is_a_store_error() {
        let (store, alice) = seeded().await;
        {
            let mut tables = store.tables.lock().await;
            tables.last_user_id = i32::MAX;
            tables.last_post_id = i32::MAX;
        }

        let err = store
            .insert_user(NewUser::new(None, "late@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::StoreUnavailable(_)));
        assert!(store.find_user_by_email("late@example.com").await.unwrap().is_none());

        let err = store.insert_post(new_post("late", alice.id)).await.unwrap_err();
        assert!(matches!(err, Error::StoreUnavailable(_)));
        assert!(store.find_posts(&drafts_filter(alice.id)).await.unwrap().is_empty());
    }
}

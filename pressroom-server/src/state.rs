//! Application state shared across handlers

use std::sync::Arc;

use pressroom_core::{MemoryStore, PostService, Store, UserService};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Arc<dyn Store>,
    users: UserService,
    posts: PostService,
}

impl AppState {
    /// Build both services over one store.
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                users: UserService::new(store.clone()),
                posts: PostService::new(store.clone()),
                store,
            }),
        }
    }

    /// State over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub fn store(&self) -> &Arc<dyn Store> {
        &self.inner.store
    }

    pub fn users(&self) -> &UserService {
        &self.inner.users
    }

    pub fn posts(&self) -> &PostService {
        &self.inner.posts
    }
}

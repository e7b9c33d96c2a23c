//! Liveness and store reachability

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub store: &'static str,
    pub version: &'static str,
}

/// GET /health - 200 when the store answers a ping, 503 otherwise
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status, health, store) = match state.store().ping().await {
        Ok(()) => (StatusCode::OK, "ok", "reachable"),
        Err(e) => {
            tracing::warn!(error = %e, "health check: store unreachable");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unreachable")
        }
    };

    (
        status,
        Json(HealthResponse {
            status: health,
            store,
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use pressroom_core::{
        Error, NewPost, NewUser, Post, PostFilter, PostId, Result, Store, User, UserId,
    };

    use super::*;

    /// Store whose every call fails as if the database were down
    struct DownStore;

    fn down() -> Error {
        Error::store("connection refused")
    }

    #[async_trait]
    impl Store for DownStore {
        async fn insert_user(&self, _: NewUser) -> Result<User> {
            Err(down())
        }
        async fn list_users(&self) -> Result<Vec<User>> {
            Err(down())
        }
        async fn find_user(&self, _: UserId) -> Result<Option<User>> {
            Err(down())
        }
        async fn find_user_by_email(&self, _: &str) -> Result<Option<User>> {
            Err(down())
        }
        async fn insert_post(&self, _: NewPost) -> Result<Post> {
            Err(down())
        }
        async fn find_post(&self, _: PostId) -> Result<Option<Post>> {
            Err(down())
        }
        async fn find_posts(&self, _: &PostFilter) -> Result<Vec<Post>> {
            Err(down())
        }
        async fn increment_views(&self, _: PostId) -> Result<Post> {
            Err(down())
        }
        async fn publish_post(&self, _: PostId) -> Result<Post> {
            Err(down())
        }
        async fn ping(&self) -> Result<()> {
            Err(down())
        }
    }

    #[tokio::test]
    async fn reachable_store_is_ok() {
        let (status, Json(body)) = health(State(AppState::in_memory())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.status, "ok");
        assert_eq!(body.store, "reachable");
    }

    #[tokio::test]
    async fn unreachable_store_is_503() {
        let state = AppState::new(Arc::new(DownStore));
        let (status, Json(body)) = health(State(state)).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.status, "degraded");
        assert_eq!(body.store, "unreachable");
    }
}

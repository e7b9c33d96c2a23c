//! Post endpoints - create, read, count views, publish, drafts

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use pressroom_core::{Post, PostId, PostWithAuthor, UserId};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::extractors::{IdParam, JsonBody};
use crate::state::AppState;

/// Create post request
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub content: Option<String>,
    pub author_email: String,
}

/// POST /post - create a draft for the author with the given email
async fn create_post(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostWithAuthor>), ApiError> {
    let created = state
        .posts()
        .create_post(&req.title, req.content.as_deref(), &req.author_email)
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /post/{id} - any post, draft or published
async fn get_post(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<Json<Post>, ApiError> {
    Ok(Json(state.posts().get_post(PostId(id)).await?))
}

/// PUT /post/{id}/views - count one view
async fn increment_views(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<Json<Post>, ApiError> {
    Ok(Json(state.posts().increment_views(PostId(id)).await?))
}

/// PUT /publish/{id} - publish a post
async fn publish(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<Json<Post>, ApiError> {
    Ok(Json(state.posts().publish(PostId(id)).await?))
}

/// GET /user/{id}/drafts - unpublished posts of a user
async fn list_drafts(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<Json<Vec<Post>>, ApiError> {
    Ok(Json(state.posts().list_drafts_for_user(UserId(id)).await?))
}

/// Post routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/post", post(create_post))
        .route("/post/{id}", get(get_post))
        .route("/post/{id}/views", put(increment_views))
        .route("/publish/{id}", put(publish))
        .route("/user/{id}/drafts", get(list_drafts))
}

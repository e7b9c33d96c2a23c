//! User endpoints - signup and listing

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use pressroom_core::User;
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::state::AppState;

/// Signup request
#[derive(Deserialize)]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: String,
}

/// POST /signup - create a user
async fn signup(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<SignupRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = state
        .users()
        .create_user(req.name.as_deref(), &req.email)
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users - list every user
async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(state.users().list_users().await?))
}

/// User routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/users", get(list_users))
}

//! Public feed endpoint

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use pressroom_core::{parse_bound, Post};

use crate::http::error::ApiError;
use crate::state::AppState;

/// Feed query parameters, collected from raw pairs.
///
/// Nothing here rejects a request: a malformed or repeated `skip`/`take`
/// means "no bound", and a repeated `searchString` uses its first value.
#[derive(Debug, Default)]
pub struct FeedParams {
    pub search_string: Vec<String>,
    pub skip: Vec<String>,
    pub take: Vec<String>,
}

impl FeedParams {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "searchString" => params.search_string.push(value),
                "skip" => params.skip.push(value),
                "take" => params.take.push(value),
                _ => {}
            }
        }
        params
    }

    pub fn search(&self) -> Option<&str> {
        self.search_string.first().map(String::as_str)
    }

    pub fn skip(&self) -> Option<u64> {
        parse_bound(single(&self.skip))
    }

    pub fn take(&self) -> Option<u64> {
        parse_bound(single(&self.take))
    }
}

fn single(values: &[String]) -> Option<&str> {
    match values {
        [value] => Some(value.as_str()),
        _ => None,
    }
}

/// GET /feed - published posts, searchable and paginated
async fn feed(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Post>>, ApiError> {
    let params = FeedParams::from_pairs(pairs);
    let posts = state
        .posts()
        .list_feed(params.search(), params.skip(), params.take())
        .await?;

    Ok(Json(posts))
}

/// Feed routes
pub fn router() -> Router<AppState> {
    Router::new().route("/feed", get(feed))
}

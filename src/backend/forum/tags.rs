//! Popular tag summary (GET /api/tags/popular?limit=N)

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::backend::error::BackendError;
use crate::backend::store::ForumStore;
use crate::shared::tags::DEFAULT_POPULAR_TAG_LIMIT;
use crate::shared::TagCount;

/// The most used tags with their counts
///
/// A missing, non-numeric or zero `limit` falls back to the default of 10.
pub async fn popular_tags(
    State(store): State<Arc<dyn ForumStore>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<TagCount>>, BackendError> {
    let limit = requested_limit(params.get("limit").map(String::as_str));
    let tags = store.popular_tags(limit).await?;
    Ok(Json(tags))
}

fn requested_limit(raw: Option<&str>) -> usize {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|limit| *limit > 0)
        .unwrap_or(DEFAULT_POPULAR_TAG_LIMIT)
}

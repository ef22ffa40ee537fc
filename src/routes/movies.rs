use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    app::{Intent, Outcome},
    error::AppResult,
    middleware::request_id::RequestId,
    routes::AppState,
};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    q: String,
}

/// Handler for movie search endpoint
pub async fn search(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<Outcome>> {
    tracing::info!(request_id = %request_id, query = %params.q, "Processing search request");

    let outcome = state
        .controller
        .dispatch(Intent::Search { query: params.q })
        .await?;
    Ok(Json(outcome))
}

/// Handler for movie detail endpoint
pub async fn detail(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<String>,
) -> AppResult<Json<Outcome>> {
    tracing::info!(request_id = %request_id, movie_id = %id, "Processing detail request");

    let outcome = state.controller.dispatch(Intent::OpenDetail { id }).await?;
    Ok(Json(outcome))
}

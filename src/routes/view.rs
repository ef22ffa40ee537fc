use axum::{
    extract::{Query, State},
    response::Redirect,
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    app::{Intent, Outcome, ViewSnapshot},
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    routes::AppState,
};

#[derive(Debug, Deserialize)]
pub struct TrailerQuery {
    title: String,
}

/// Current view state
pub async fn snapshot(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
) -> Json<ViewSnapshot> {
    tracing::info!(request_id = %request_id, "Processing view request");

    Json(state.controller.snapshot().await)
}

/// Re-selects the featured movie
pub async fn featured(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
) -> AppResult<Json<Outcome>> {
    tracing::info!(request_id = %request_id, "Processing featured request");

    let outcome = state.controller.dispatch(Intent::Feature).await?;
    Ok(Json(outcome))
}

/// Closes the open detail panel
pub async fn close_detail(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
) -> AppResult<Json<Outcome>> {
    tracing::info!(request_id = %request_id, "Closing detail panel");

    let outcome = state.controller.dispatch(Intent::CloseDetail).await?;
    Ok(Json(outcome))
}

/// Redirects to a trailer search for `title`
pub async fn trailer(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<TrailerQuery>,
) -> AppResult<Redirect> {
    tracing::info!(request_id = %request_id, title = %params.title, "Processing trailer request");

    if params.title.trim().is_empty() {
        return Err(AppError::InvalidInput("Title cannot be empty".to_string()));
    }

    let url = state.controller.trailer_url(&params.title);
    Ok(Redirect::temporary(&url))
}

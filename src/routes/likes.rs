use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::{
    app::{Intent, Outcome, ToggleLikeRequest},
    error::AppResult,
    middleware::request_id::RequestId,
    models::LikedMovie,
    routes::AppState,
};

#[derive(Debug, Serialize)]
pub struct LikeStatus {
    pub id: String,
    pub liked: bool,
}

/// Lists liked movies, oldest first
pub async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<LikedMovie>> {
    Json(state.controller.likes().await)
}

/// Reports whether one movie is liked
pub async fn status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<LikeStatus> {
    let liked = state.controller.is_liked(&id).await;
    Json(LikeStatus { id, liked })
}

/// Likes or unlikes a movie
pub async fn toggle(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<ToggleLikeRequest>,
) -> AppResult<Json<Outcome>> {
    tracing::info!(request_id = %request_id, movie_id = %request.id, "Processing like toggle");

    let outcome = state.controller.dispatch(request.into()).await?;
    Ok(Json(outcome))
}

/// Removes every like
pub async fn clear(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
) -> AppResult<Json<Outcome>> {
    tracing::info!(request_id = %request_id, "Clearing likes");

    let outcome = state.controller.dispatch(Intent::ClearLikes).await?;
    Ok(Json(outcome))
}

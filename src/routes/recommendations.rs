use axum::{extract::State, Extension, Json};
use std::sync::Arc;

use crate::{
    app::{Intent, Outcome},
    error::AppResult,
    middleware::request_id::RequestId,
    routes::AppState,
};

/// Handler for recommendations endpoint
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
) -> AppResult<Json<Outcome>> {
    tracing::info!(request_id = %request_id, "Processing recommendation request");

    let outcome = state.controller.dispatch(Intent::Recommend).await?;
    Ok(Json(outcome))
}

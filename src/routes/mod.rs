use axum::{
    http::StatusCode,
    middleware,
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    app::Controller,
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
};

pub mod likes;
pub mod movies;
pub mod recommendations;
pub mod view;

/// Shared state handed to every handler
pub struct AppState {
    pub controller: Controller,
}

impl AppState {
    pub fn new(controller: Controller) -> Self {
        Self { controller }
    }
}

/// Creates the application router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
}

/// API routes under /api/v1
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/movies/search", get(movies::search))
        .route("/movies/:id", get(movies::detail))
        .route("/likes", get(likes::list).delete(likes::clear))
        .route("/likes/toggle", post(likes::toggle))
        .route("/likes/:id", get(likes::status))
        .route("/recommendations", get(recommendations::recommend))
        .route("/featured", get(view::featured))
        .route("/view", get(view::snapshot))
        .route("/view/detail", delete(view::close_detail))
        .route("/trailer", get(view::trailer))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

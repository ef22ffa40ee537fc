//! Movie discovery service
//!
//! Searches an external movie metadata API, keeps a persisted list of liked
//! movies, and derives genre-based recommendations from it.

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use anyhow::Context;

use crate::{
    app::Controller,
    config::Config,
    routes::AppState,
    services::{gateway::OmdbGateway, likes::LikeStore},
};

/// Wires configuration into a ready controller: gateway, key-value store, loaded likes
pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let gateway = Arc::new(OmdbGateway::new(
        config.omdb_api_key.clone(),
        config.omdb_api_url.clone(),
    ));
    let trailer_search_base = config.trailer_search_base()?;
    let store = db::create_store(config)?;
    let likes = LikeStore::load(store, config.likes_key.clone())
        .await
        .context("Failed to load liked movies")?;

    let controller = Controller::new(
        gateway,
        likes,
        trailer_search_base,
        config.trending_query.clone(),
    );

    Ok(Arc::new(AppState::new(controller)))
}

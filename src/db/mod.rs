/// Key-value storage for persisted application state
///
/// The liked-movie list lives under a single key as a JSON string. Backends are
/// interchangeable behind [`KeyValueStore`]; which one is used is a deployment
/// choice (see `LIKES_BACKEND`).
use std::sync::Arc;

use crate::{
    config::{Config, LikesBackend},
    error::AppResult,
};

pub mod file;
pub mod memory;
pub mod redis;

pub use self::file::FileStore;
pub use self::memory::MemoryStore;
pub use self::redis::RedisStore;

/// String-keyed, string-valued persistent store
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if absent
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Replaces the value stored under `key`
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Backend name for logging
    fn name(&self) -> &'static str;
}

/// Builds the store selected by configuration
pub fn create_store(config: &Config) -> anyhow::Result<Arc<dyn KeyValueStore>> {
    let store: Arc<dyn KeyValueStore> = match config.likes_backend {
        LikesBackend::File => Arc::new(FileStore::new(config.likes_dir.clone())),
        LikesBackend::Redis => Arc::new(RedisStore::open(&config.redis_url)?),
        LikesBackend::Memory => Arc::new(MemoryStore::new()),
    };

    tracing::info!(backend = store.name(), "Key-value store ready");

    Ok(store)
}

use ::redis::{AsyncCommands, Client};

use crate::{db::KeyValueStore, error::AppResult};

/// Prefix applied to every key written by this service
const KEY_PREFIX: &str = "marquee";

/// Redis-backed store; values are plain strings without expiry
#[derive(Clone)]
pub struct RedisStore {
    redis_client: Client,
}

impl RedisStore {
    /// Opens a client for `redis_url`
    ///
    /// No connection is made until the first command.
    pub fn open(redis_url: &str) -> anyhow::Result<Self> {
        let redis_client = Client::open(redis_url)?;
        Ok(Self { redis_client })
    }

    fn namespaced(key: &str) -> String {
        format!("{}:{}", KEY_PREFIX, key)
    }
}

#[async_trait::async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let mut conn = self.redis_client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(Self::namespaced(key)).await.map_err(|e| {
            tracing::warn!(error = %e, key = %key, "Redis get failed");
            e
        })?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut conn = self.redis_client.get_multiplexed_async_connection().await?;
        let _: () = conn.set(Self::namespaced(key), value).await.map_err(|e| {
            tracing::warn!(error = %e, key = %key, "Redis set failed");
            e
        })?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "redis"
    }
}

// Live round-trip tests need a Redis server; only key handling is covered here.

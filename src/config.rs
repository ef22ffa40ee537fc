use anyhow::Context;
use reqwest::Url;
use serde::Deserialize;
use std::path::PathBuf;

/// Which key-value backend holds the liked-movie list
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LikesBackend {
    File,
    Redis,
    Memory,
}

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// OMDb API key
    pub omdb_api_key: String,

    /// OMDb API base URL
    #[serde(default = "default_omdb_api_url")]
    pub omdb_api_url: String,

    /// Storage backend for likes
    #[serde(default = "default_likes_backend")]
    pub likes_backend: LikesBackend,

    /// Directory used by the file backend
    #[serde(default = "default_likes_dir")]
    pub likes_dir: PathBuf,

    /// Key under which the liked-movie list is stored
    #[serde(default = "default_likes_key")]
    pub likes_key: String,

    /// Redis connection URL (redis backend only)
    #[serde(default = "default_redis_url")]
    pub redis_url: String,

    /// Query used to fill the search panel at startup
    #[serde(default = "default_trending_query")]
    pub trending_query: String,

    /// Base URL of the video search used for trailers
    #[serde(default = "default_trailer_search_url")]
    pub trailer_search_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_omdb_api_url() -> String {
    "https://www.omdbapi.com".to_string()
}

fn default_likes_backend() -> LikesBackend {
    LikesBackend::File
}

fn default_likes_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_likes_key() -> String {
    "likedMovies".to_string()
}

fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}

fn default_trending_query() -> String {
    "Avengers".to_string()
}

fn default_trailer_search_url() -> String {
    "https://www.youtube.com/results".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.trailer_search_base()?;
        Ok(config)
    }

    /// Parsed trailer search page
    pub fn trailer_search_base(&self) -> anyhow::Result<Url> {
        Url::parse(&self.trailer_search_url)
            .with_context(|| format!("Invalid TRAILER_SEARCH_URL {}", self.trailer_search_url))
    }

    /// Socket address string the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

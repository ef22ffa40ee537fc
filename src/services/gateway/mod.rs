/// Movie metadata gateway abstraction
///
/// Wraps the two read-only queries the rest of the service needs from an external
/// metadata source. Implementations issue one request per call: no retries, no
/// caching, no rate limiting.
use crate::{
    error::AppResult,
    models::{MovieDetail, MovieSummary},
};

pub mod omdb;

pub use omdb::OmdbGateway;

/// Trait for movie metadata sources
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieGateway: Send + Sync {
    /// Search movies by keyword
    ///
    /// An upstream "no results" answer is an empty list, not an error. Transport
    /// and decoding failures are errors.
    async fn search(&self, query: &str) -> AppResult<Vec<MovieSummary>>;

    /// Fetch full metadata for one movie
    ///
    /// Returns `AppError::NotFound` when the source does not know the identifier.
    async fn detail(&self, id: &str) -> AppResult<MovieDetail>;

    /// Gateway name for logging and debugging
    fn name(&self) -> &'static str;
}

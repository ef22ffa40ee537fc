/// OMDb (omdbapi.com) gateway
///
/// API Flow:
/// 1. Search: `?s=<query>&type=movie` → `Search` array of summaries
/// 2. Detail: `?i=<imdb_id>&plot=full` → flat detail object
///
/// Both responses carry a `"Response": "True" | "False"` discriminator.
use crate::{
    error::{AppError, AppResult},
    models::{
        MovieDetail, MovieSummary, OmdbDetail, OmdbEnvelope, OmdbSearchResponse,
    },
    services::gateway::MovieGateway,
};
use reqwest::Client as HttpClient;

#[derive(Clone)]
pub struct OmdbGateway {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl OmdbGateway {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }

    /// Issues a GET with the API key plus `params` and returns the raw body
    async fn get(&self, params: &[(&str, &str)]) -> AppResult<String> {
        let url = format!("{}/", self.api_url.trim_end_matches('/'));

        let response = self
            .http_client
            .get(&url)
            .query(&[("apikey", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "OMDb request failed");
            return Err(AppError::ExternalApi(format!(
                "OMDb returned status {}: {}",
                status, body
            )));
        }

        Ok(response.text().await?)
    }
}

/// Decodes a search body; a `"False"` discriminator means no matches
pub(crate) fn parse_search_body(body: &str) -> AppResult<Vec<MovieSummary>> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        AppError::ExternalApi(format!("Failed to parse OMDb search response: {}", e))
    })?;
    let envelope: OmdbEnvelope = serde_json::from_value(value.clone())
        .map_err(|e| AppError::ExternalApi(format!("Malformed OMDb envelope: {}", e)))?;

    if !envelope.is_success() {
        tracing::debug!(reason = ?envelope.error, "OMDb search returned no results");
        return Ok(Vec::new());
    }

    let search: OmdbSearchResponse = serde_json::from_value(value)
        .map_err(|e| AppError::ExternalApi(format!("Malformed OMDb search results: {}", e)))?;

    tracing::debug!(total = ?search.total_results, "OMDb search totals");

    Ok(search.search.into_iter().map(MovieSummary::from).collect())
}

/// Decodes a detail body; a `"False"` discriminator means the id is unknown
pub(crate) fn parse_detail_body(id: &str, body: &str) -> AppResult<MovieDetail> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        AppError::ExternalApi(format!("Failed to parse OMDb detail response: {}", e))
    })?;
    let envelope: OmdbEnvelope = serde_json::from_value(value.clone())
        .map_err(|e| AppError::ExternalApi(format!("Malformed OMDb envelope: {}", e)))?;

    if !envelope.is_success() {
        return Err(AppError::NotFound(format!(
            "Movie {}: {}",
            id,
            envelope.error.as_deref().unwrap_or("not found")
        )));
    }

    let detail: OmdbDetail = serde_json::from_value(value)
        .map_err(|e| AppError::ExternalApi(format!("Malformed OMDb detail: {}", e)))?;

    Ok(detail.into())
}

#[async_trait::async_trait]
impl MovieGateway for OmdbGateway {
    async fn search(&self, query: &str) -> AppResult<Vec<MovieSummary>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let body = self.get(&[("s", query), ("type", "movie")]).await?;
        let movies = parse_search_body(&body)?;

        tracing::info!(
            query = %query,
            results = movies.len(),
            gateway = "omdb",
            "Movie search completed"
        );

        Ok(movies)
    }

    async fn detail(&self, id: &str) -> AppResult<MovieDetail> {
        let id = id.trim();
        if id.is_empty() {
            return Err(AppError::NotFound("Movie id is empty".to_string()));
        }

        let body = self.get(&[("i", id), ("plot", "full")]).await?;
        let detail = parse_detail_body(id, &body)?;

        tracing::info!(
            movie_id = %id,
            title = %detail.title(),
            gateway = "omdb",
            "Movie detail fetched"
        );

        Ok(detail)
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}

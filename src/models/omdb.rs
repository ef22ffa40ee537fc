use serde::Deserialize;

use super::{MovieDetail, MovieSummary};

// ============================================================================
// OMDb API Types
// ============================================================================

/// Value of the `Response` discriminator on a successful call
pub const RESPONSE_TRUE: &str = "True";

/// Envelope shared by every OMDb response
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbEnvelope {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

impl OmdbEnvelope {
    pub fn is_success(&self) -> bool {
        self.response == RESPONSE_TRUE
    }
}

/// Body of `?s=<query>` responses
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbSearchResponse {
    #[serde(rename = "Search", default)]
    pub search: Vec<OmdbSearchItem>,
    #[serde(rename = "totalResults", default)]
    pub total_results: Option<String>,
}

/// One entry of the `Search` array
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbSearchItem {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
}

impl From<OmdbSearchItem> for MovieSummary {
    fn from(item: OmdbSearchItem) -> Self {
        Self {
            id: item.imdb_id,
            title: item.title,
            year: item.year,
            poster: item.poster,
        }
    }
}

/// Body of `?i=<id>` responses
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbDetail {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
    #[serde(rename = "Genre", default)]
    pub genre: String,
    #[serde(rename = "Plot", default)]
    pub plot: String,
    #[serde(rename = "Runtime", default)]
    pub runtime: String,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: String,
}

impl From<OmdbDetail> for MovieDetail {
    fn from(detail: OmdbDetail) -> Self {
        Self {
            summary: MovieSummary {
                id: detail.imdb_id,
                title: detail.title,
                year: detail.year,
                poster: detail.poster,
            },
            genre: detail.genre,
            plot: detail.plot,
            runtime: detail.runtime,
            rating: detail.imdb_rating,
        }
    }
}

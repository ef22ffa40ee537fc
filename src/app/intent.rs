use serde::{Deserialize, Serialize};

use crate::{
    models::{LikedMovie, MovieDetail, MovieSummary},
    services::{featured::Featured, likes::Toggled, recommendations::Recommendations},
};

/// A user action, independent of how it was triggered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Search { query: String },
    OpenDetail { id: String },
    CloseDetail,
    /// Like or unlike `id`; `fallback` is stored if the detail lookup fails
    ToggleLike {
        id: String,
        fallback: Option<MovieSummary>,
    },
    ClearLikes,
    Recommend,
    Feature,
}

impl Intent {
    /// Short name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Intent::Search { .. } => "search",
            Intent::OpenDetail { .. } => "open_detail",
            Intent::CloseDetail => "close_detail",
            Intent::ToggleLike { .. } => "toggle_like",
            Intent::ClearLikes => "clear_likes",
            Intent::Recommend => "recommend",
            Intent::Feature => "feature",
        }
    }
}

/// Body of a toggle request
#[derive(Debug, Clone, Deserialize)]
pub struct ToggleLikeRequest {
    pub id: String,
    #[serde(default)]
    pub fallback: Option<MovieSummary>,
}

impl From<ToggleLikeRequest> for Intent {
    fn from(request: ToggleLikeRequest) -> Self {
        Intent::ToggleLike {
            id: request.id,
            fallback: request.fallback,
        }
    }
}

/// What an intent produced
///
/// `applied` is false when a newer action on the same view region started before
/// this one finished; the result is still returned to its caller but was not
/// written to the shared view.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Outcome {
    Search {
        query: String,
        movies: Vec<MovieSummary>,
        applied: bool,
    },
    Detail {
        movie: MovieDetail,
        trailer_url: String,
        applied: bool,
    },
    DetailClosed,
    LikesChanged {
        toggled: Option<Toggled>,
        likes: Vec<LikedMovie>,
        recommendations: Recommendations,
    },
    Recommendations {
        recommendations: Recommendations,
        message: Option<String>,
        applied: bool,
    },
    Featured {
        featured: Featured,
        trailer_url: Option<String>,
        applied: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_request_without_fallback() {
        let request: ToggleLikeRequest = serde_json::from_str(r#"{"id":"tt1375666"}"#).unwrap();
        assert_eq!(
            Intent::from(request),
            Intent::ToggleLike {
                id: "tt1375666".to_string(),
                fallback: None
            }
        );
    }

    #[test]
    fn test_outcome_is_adjacently_tagged() {
        let outcome = Outcome::DetailClosed;
        let json = serde_json::to_value(outcome).unwrap();
        assert_eq!(json["kind"], "detail_closed");
    }
}

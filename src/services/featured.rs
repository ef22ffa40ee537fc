use rand::seq::IndexedRandom;
use serde::Serialize;

use crate::{
    models::{LikedMovie, MovieDetail},
    services::gateway::MovieGateway,
};

/// Titles searched for a featured movie when nothing is liked yet
pub const DEFAULT_FEATURED_KEYWORDS: [&str; 5] = [
    "Inception",
    "The Grand Budapest Hotel",
    "Coco",
    "La La Land",
    "Interstellar",
];

/// The hero item
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Featured {
    Movie { movie: MovieDetail },
    Placeholder { title: String, message: String },
}

impl Featured {
    pub fn placeholder() -> Self {
        Featured::Placeholder {
            title: "Featured".to_string(),
            message: "Like movies to make this section personalized. Search to discover movies."
                .to_string(),
        }
    }

    pub fn movie(&self) -> Option<&MovieDetail> {
        match self {
            Featured::Movie { movie } => Some(movie),
            Featured::Placeholder { .. } => None,
        }
    }
}

/// Picks one of [`DEFAULT_FEATURED_KEYWORDS`] at random
pub fn random_keyword() -> &'static str {
    DEFAULT_FEATURED_KEYWORDS
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(DEFAULT_FEATURED_KEYWORDS[0])
}

/// Chooses the featured movie
///
/// The most recently liked movie wins when there is one; otherwise the first
/// result of a search for `fallback_keyword`. Failed lookups degrade to the
/// data already at hand, and finally to [`Featured::placeholder`].
pub async fn select_featured(
    gateway: &dyn MovieGateway,
    most_recent: Option<&LikedMovie>,
    fallback_keyword: &str,
) -> Featured {
    if let Some(liked) = most_recent {
        let movie = match gateway.detail(&liked.id).await {
            Ok(detail) => detail,
            Err(e) => {
                tracing::warn!(error = %e, movie_id = %liked.id, "Featured detail lookup failed, using stored record");
                MovieDetail::from(liked.clone())
            }
        };
        return Featured::Movie { movie };
    }

    let first = match gateway.search(fallback_keyword).await {
        Ok(results) => results.into_iter().next(),
        Err(e) => {
            tracing::warn!(error = %e, keyword = %fallback_keyword, "Featured search failed");
            None
        }
    };

    let Some(summary) = first else {
        return Featured::placeholder();
    };

    let movie = match gateway.detail(&summary.id).await {
        Ok(detail) => detail,
        Err(e) => {
            tracing::warn!(error = %e, movie_id = %summary.id, "Featured detail lookup failed, using search result");
            MovieDetail::from(summary)
        }
    };

    Featured::Movie { movie }
}

use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    models::{LikedMovie, MovieSummary},
    services::gateway::MovieGateway,
};

/// Maximum number of recommendations returned
pub const MAX_RECOMMENDATIONS: usize = 12;

/// Genre substrings and the search keyword each maps to, checked in order
const GENRE_KEYWORDS: &[(&str, &str)] = &[
    ("action", "action"),
    ("comedy", "comedy"),
    ("romance", "romance"),
    ("drama", "drama"),
    ("sci", "science fiction"),
    ("fantasy", "fantasy"),
    ("thriller", "thriller"),
    ("horror", "horror"),
];

/// Outcome of a recommendation derivation
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Recommendations {
    /// Nothing liked yet
    NeedLikes,
    /// The keyword search failed or found nothing
    Unavailable,
    /// Every result is already liked
    NothingNew,
    Movies { keyword: String, movies: Vec<MovieSummary> },
}

impl Recommendations {
    /// Empty-state text for the non-list outcomes
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Recommendations::NeedLikes => {
                Some("Like some movies to receive tailored recommendations.")
            }
            Recommendations::Unavailable => Some("No recommendations available right now."),
            Recommendations::NothingNew => {
                Some("No new recommendations, try liking other genres.")
            }
            Recommendations::Movies { .. } => None,
        }
    }
}

/// Counts each genre across `liked`, in first-encountered order
pub fn genre_frequencies(liked: &[LikedMovie]) -> IndexMap<String, usize> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for movie in liked {
        for genre in movie.genres() {
            *counts.entry(genre.to_string()).or_insert(0) += 1;
        }
    }
    counts
}

/// The most frequent genre; ties go to the genre seen first
pub fn primary_genre(liked: &[LikedMovie]) -> Option<String> {
    let mut ranked: Vec<(String, usize)> = genre_frequencies(liked).into_iter().collect();
    // sort_by is stable, so equal counts keep insertion order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.into_iter().next().map(|(genre, _)| genre)
}

/// Maps a genre to the keyword used to search for similar movies
///
/// Falls back to the first word of the genre when no table entry matches.
pub fn genre_to_keyword(genre: &str) -> String {
    let lowered = genre.to_lowercase();
    if let Some((_, keyword)) = GENRE_KEYWORDS
        .iter()
        .find(|(needle, _)| lowered.contains(needle))
    {
        return keyword.to_string();
    }

    genre
        .split(',')
        .next()
        .and_then(|first| first.split_whitespace().next())
        .unwrap_or_default()
        .to_string()
}

/// Picks the search keyword for `liked`
///
/// Uses the primary genre when any liked movie has one, otherwise the first word
/// of the most recently liked title. Returns `None` if neither yields a word.
pub fn recommendation_keyword(liked: &[LikedMovie]) -> Option<String> {
    let keyword = match primary_genre(liked) {
        Some(genre) => genre_to_keyword(&genre),
        None => String::new(),
    };

    if !keyword.is_empty() {
        return Some(keyword);
    }

    liked
        .last()
        .and_then(|m| m.title.split_whitespace().next())
        .map(str::to_string)
}

/// Derives recommendations for `liked`
///
/// Issues at most one search. Gateway failures collapse into
/// [`Recommendations::Unavailable`].
pub async fn recommend(gateway: &dyn MovieGateway, liked: &[LikedMovie]) -> Recommendations {
    if liked.is_empty() {
        return Recommendations::NeedLikes;
    }

    let Some(keyword) = recommendation_keyword(liked) else {
        tracing::debug!("No genre or title to derive a keyword from");
        return Recommendations::Unavailable;
    };

    let results = match gateway.search(&keyword).await {
        Ok(results) => results,
        Err(e) => {
            tracing::warn!(
                error = %e,
                keyword = %keyword,
                gateway = gateway.name(),
                "Recommendation search failed"
            );
            return Recommendations::Unavailable;
        }
    };

    if results.is_empty() {
        return Recommendations::Unavailable;
    }

    let movies: Vec<MovieSummary> = results
        .into_iter()
        .filter(|m| !liked.iter().any(|l| l.id == m.id))
        .take(MAX_RECOMMENDATIONS)
        .collect();

    tracing::info!(keyword = %keyword, count = movies.len(), "Recommendations derived");

    if movies.is_empty() {
        Recommendations::NothingNew
    } else {
        Recommendations::Movies { keyword, movies }
    }
}

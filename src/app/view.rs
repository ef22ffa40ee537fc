use serde::Serialize;

use crate::{
    models::{LikedMovie, MovieDetail, MovieSummary},
    services::{featured::Featured, recommendations::Recommendations},
};

/// Results of the latest search
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchPanel {
    pub query: String,
    pub movies: Vec<MovieSummary>,
}

/// Everything a client needs to draw the page
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub search: Option<SearchPanel>,
    pub detail: Option<MovieDetail>,
    pub recommendations: Option<Recommendations>,
    pub featured: Option<Featured>,
}

/// A movie as drawn on a card
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MovieCard {
    #[serde(flatten)]
    pub movie: MovieSummary,
    pub poster_url: String,
    pub liked: bool,
}

impl MovieCard {
    pub fn new(movie: MovieSummary, likes: &[LikedMovie]) -> Self {
        let liked = likes.iter().any(|l| l.id == movie.id);
        let poster_url = movie.display_poster().to_string();
        Self {
            movie,
            poster_url,
            liked,
        }
    }
}

/// Point-in-time copy of the view, with liked state resolved
#[derive(Debug, Clone, Serialize)]
pub struct ViewSnapshot {
    pub search: Option<SearchSnapshot>,
    pub detail: Option<MovieDetail>,
    pub recommendations: Option<Recommendations>,
    pub featured: Option<Featured>,
    pub featured_liked: bool,
    pub likes: Vec<MovieCard>,
    pub likes_message: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchSnapshot {
    pub query: String,
    pub movies: Vec<MovieCard>,
    pub message: Option<&'static str>,
}

impl ViewSnapshot {
    pub fn build(view: &ViewState, likes: &[LikedMovie]) -> Self {
        let search = view.search.as_ref().map(|panel| SearchSnapshot {
            query: panel.query.clone(),
            movies: panel
                .movies
                .iter()
                .cloned()
                .map(|m| MovieCard::new(m, likes))
                .collect(),
            message: panel.movies.is_empty().then_some("No movies found."),
        });

        let featured_liked = view
            .featured
            .as_ref()
            .and_then(Featured::movie)
            .map(|m| likes.iter().any(|l| l.id == m.id()))
            .unwrap_or(false);

        let liked_cards = likes
            .iter()
            .cloned()
            .map(|l| MovieCard::new(MovieDetail::from(l).summary, likes))
            .collect();

        Self {
            search,
            detail: view.detail.clone(),
            recommendations: view.recommendations.clone(),
            featured: view.featured.clone(),
            featured_liked,
            likes: liked_cards,
            likes_message: likes
                .is_empty()
                .then_some("You haven't liked any movies yet."),
        }
    }
}

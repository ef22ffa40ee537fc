use std::sync::Arc;

use reqwest::Url;
use tokio::sync::{Mutex, RwLock};

use crate::{
    app::{
        generation::{Channel, Generations, Ticket},
        intent::{Intent, Outcome},
        view::{SearchPanel, ViewSnapshot, ViewState},
    },
    error::{AppError, AppResult},
    models::{LikedMovie, MovieDetail, MovieSummary},
    services::{
        featured,
        gateway::MovieGateway,
        likes::{LikeStore, Toggled},
        recommendations::{self, Recommendations},
        trailer,
    },
};

/// Owns application state and handles every intent
///
/// Network calls for one intent run sequentially and never while a lock is held,
/// except that a like mutation and its write to storage happen under the like
/// store's lock.
pub struct Controller {
    gateway: Arc<dyn MovieGateway>,
    likes: Mutex<LikeStore>,
    view: RwLock<ViewState>,
    generations: Generations,
    trailer_search_base: Url,
    trending_query: String,
}

impl Controller {
    pub fn new(
        gateway: Arc<dyn MovieGateway>,
        likes: LikeStore,
        trailer_search_base: Url,
        trending_query: String,
    ) -> Self {
        Self {
            gateway,
            likes: Mutex::new(likes),
            view: RwLock::new(ViewState::default()),
            generations: Generations::new(),
            trailer_search_base,
            trending_query,
        }
    }

    /// Handles one intent
    pub async fn dispatch(&self, intent: Intent) -> AppResult<Outcome> {
        tracing::debug!(intent = intent.kind(), "Dispatching intent");

        match intent {
            Intent::Search { query } => self.search(query).await,
            Intent::OpenDetail { id } => self.open_detail(id).await,
            Intent::CloseDetail => {
                // Supersede any detail lookup still in flight
                self.generations.issue(Channel::Detail);
                self.view.write().await.detail = None;
                Ok(Outcome::DetailClosed)
            }
            Intent::ToggleLike { id, fallback } => self.toggle_like(id, fallback).await,
            Intent::ClearLikes => self.clear_likes().await,
            Intent::Recommend => {
                let (recommendations, applied) = self.refresh_recommendations().await;
                Ok(Outcome::Recommendations {
                    message: recommendations.message().map(str::to_string),
                    recommendations,
                    applied,
                })
            }
            Intent::Feature => self.feature(featured::random_keyword()).await,
        }
    }

    /// Fills the view at startup: featured movie, recommendations, trending search
    pub async fn bootstrap(&self) {
        if let Err(e) = self.dispatch(Intent::Feature).await {
            tracing::warn!(error = %e, "Featured selection failed during bootstrap");
        }

        self.refresh_recommendations().await;

        let query = self.trending_query.clone();
        if let Err(e) = self.dispatch(Intent::Search { query }).await {
            tracing::warn!(error = %e, "Trending search failed during bootstrap");
        }

        tracing::info!("Bootstrap complete");
    }

    /// Current view with liked state resolved
    pub async fn snapshot(&self) -> ViewSnapshot {
        let likes = self.likes.lock().await.records().to_vec();
        let view = self.view.read().await;
        ViewSnapshot::build(&view, &likes)
    }

    /// All liked movies, oldest first
    pub async fn likes(&self) -> Vec<LikedMovie> {
        self.likes.lock().await.records().to_vec()
    }

    pub async fn is_liked(&self, id: &str) -> bool {
        self.likes.lock().await.is_liked(id)
    }

    pub fn trailer_url(&self, title: &str) -> String {
        trailer::trailer_url(&self.trailer_search_base, title).into()
    }

    /// Writes to the view only if `ticket` is still the latest on its channel
    async fn commit(&self, ticket: Ticket, apply: impl FnOnce(&mut ViewState)) -> bool {
        let mut view = self.view.write().await;
        if !self.generations.is_current(ticket) {
            tracing::debug!(
                channel = ?ticket.channel(),
                generation = ticket.generation(),
                "Discarding stale result"
            );
            return false;
        }
        apply(&mut *view);
        true
    }

    async fn search(&self, query: String) -> AppResult<Outcome> {
        let query = query.trim().to_string();
        if query.is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }

        let ticket = self.generations.issue(Channel::Search);
        let movies = self.gateway.search(&query).await?;

        let panel = SearchPanel {
            query: query.clone(),
            movies: movies.clone(),
        };
        let applied = self
            .commit(ticket, |view| view.search = Some(panel))
            .await;

        Ok(Outcome::Search {
            query,
            movies,
            applied,
        })
    }

    async fn open_detail(&self, id: String) -> AppResult<Outcome> {
        let ticket = self.generations.issue(Channel::Detail);
        let movie = self.gateway.detail(&id).await?;
        let trailer_url = self.trailer_url(movie.title());

        let shown = movie.clone();
        let applied = self
            .commit(ticket, |view| view.detail = Some(shown))
            .await;

        Ok(Outcome::Detail {
            movie,
            trailer_url,
            applied,
        })
    }

    async fn toggle_like(
        &self,
        id: String,
        fallback: Option<MovieSummary>,
    ) -> AppResult<Outcome> {
        let id = id.trim().to_string();
        if id.is_empty() {
            return Err(AppError::InvalidInput("Movie id cannot be empty".to_string()));
        }

        // Unliking needs no metadata
        let record = if self.is_liked(&id).await {
            None
        } else {
            Some(self.liked_record(&id, fallback).await?)
        };

        let toggled = {
            let mut likes = self.likes.lock().await;
            let record = match record {
                Some(record) => record,
                // Removed by a concurrent toggle since the check: nothing to do
                None if !likes.is_liked(&id) => {
                    drop(likes);
                    return self.likes_changed(None).await;
                }
                None => likes
                    .records()
                    .iter()
                    .find(|m| m.id == id)
                    .cloned()
                    .ok_or_else(|| AppError::Internal(format!("Like {} vanished", id)))?,
            };
            likes.toggle(record).await
        };

        tracing::info!(movie_id = %id, toggled = ?toggled, "Like toggled");

        self.likes_changed(Some(toggled)).await
    }

    /// Metadata to store for a new like: the full detail, else the caller's summary
    async fn liked_record(
        &self,
        id: &str,
        fallback: Option<MovieSummary>,
    ) -> AppResult<LikedMovie> {
        match self.gateway.detail(id).await {
            Ok(detail) => Ok(detail.into()),
            Err(e) => {
                tracing::warn!(error = %e, movie_id = %id, "Detail lookup for like failed");
                fallback
                    .filter(|summary| summary.id == id)
                    .map(|summary| LikedMovie::from(MovieDetail::from(summary)))
                    .ok_or_else(|| AppError::NotFound(format!("Movie {} not found", id)))
            }
        }
    }

    async fn clear_likes(&self) -> AppResult<Outcome> {
        self.likes.lock().await.clear().await;
        tracing::info!("Likes cleared");
        self.likes_changed(None).await
    }

    async fn likes_changed(&self, toggled: Option<Toggled>) -> AppResult<Outcome> {
        let (recommendations, _) = self.refresh_recommendations().await;
        Ok(Outcome::LikesChanged {
            toggled,
            likes: self.likes().await,
            recommendations,
        })
    }

    /// Derives recommendations from the current likes and offers them to the view
    async fn refresh_recommendations(&self) -> (Recommendations, bool) {
        let ticket = self.generations.issue(Channel::Recommendations);
        let liked = self.likes().await;

        let recommendations = recommendations::recommend(self.gateway.as_ref(), &liked).await;

        let shown = recommendations.clone();
        let applied = self
            .commit(ticket, |view| view.recommendations = Some(shown))
            .await;

        (recommendations, applied)
    }

    async fn feature(&self, fallback_keyword: &str) -> AppResult<Outcome> {
        let ticket = self.generations.issue(Channel::Featured);
        let most_recent = self.likes.lock().await.most_recent().cloned();

        let featured =
            featured::select_featured(self.gateway.as_ref(), most_recent.as_ref(), fallback_keyword)
                .await;

        let trailer_url = featured.movie().map(|movie| self.trailer_url(movie.title()));

        let shown = featured.clone();
        let applied = self
            .commit(ticket, |view| view.featured = Some(shown))
            .await;

        Ok(Outcome::Featured {
            featured,
            trailer_url,
            applied,
        })
    }
}

impl std::fmt::Debug for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("gateway", &self.gateway.name())
            .finish_non_exhaustive()
    }
}

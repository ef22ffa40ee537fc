use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;

use crate::{db::KeyValueStore, error::AppResult, models::LikedMovie};

/// Result of a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Toggled {
    Added,
    Removed,
    /// Record had no identifier; nothing changed
    Ignored,
}

/// The user's liked movies, unique by identifier, in the order they were liked
///
/// Every mutation rewrites the whole list to the backing store. Write failures are
/// logged and otherwise ignored: the in-memory list stays authoritative and the
/// next successful write brings storage back in line.
pub struct LikeStore {
    store: Arc<dyn KeyValueStore>,
    key: String,
    records: Vec<LikedMovie>,
}

impl LikeStore {
    /// Loads the list stored under `key`
    ///
    /// A missing or malformed value yields an empty store. A failed read is an
    /// error: starting empty would overwrite the stored list on the next mutation.
    pub async fn load(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> AppResult<Self> {
        let key = key.into();

        let records = match store.get(&key).await? {
            Some(json) => match serde_json::from_str::<Vec<LikedMovie>>(&json) {
                Ok(records) => records,
                Err(e) => {
                    tracing::warn!(error = %e, key = %key, "Stored likes are malformed, starting empty");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        let records = dedupe(records);
        tracing::info!(count = records.len(), key = %key, backend = store.name(), "Loaded likes");

        Ok(Self {
            store,
            key,
            records,
        })
    }

    /// Adds `movie` if its identifier is not yet liked, removes it otherwise
    pub async fn toggle(&mut self, movie: LikedMovie) -> Toggled {
        if movie.id.is_empty() {
            return Toggled::Ignored;
        }

        let outcome = if let Some(pos) = self.records.iter().position(|m| m.id == movie.id) {
            self.records.remove(pos);
            Toggled::Removed
        } else {
            self.records.push(movie);
            Toggled::Added
        };

        self.save().await;
        outcome
    }

    /// Removes every record
    pub async fn clear(&mut self) {
        self.records.clear();
        self.save().await;
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.records.iter().any(|m| m.id == id)
    }

    pub fn records(&self) -> &[LikedMovie] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// The last record liked
    pub fn most_recent(&self) -> Option<&LikedMovie> {
        self.records.last()
    }

    /// Writes the full list to the backing store
    async fn save(&self) {
        let json = match serde_json::to_string(&self.records) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize likes");
                return;
            }
        };

        if let Err(e) = self.store.set(&self.key, &json).await {
            tracing::error!(
                error = %e,
                key = %self.key,
                backend = self.store.name(),
                "Failed to persist likes"
            );
        } else {
            tracing::debug!(count = self.records.len(), key = %self.key, "Persisted likes");
        }
    }
}

/// Keeps the first record for each identifier
fn dedupe(records: Vec<LikedMovie>) -> Vec<LikedMovie> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|m| !m.id.is_empty() && seen.insert(m.id.clone()))
        .collect()
}

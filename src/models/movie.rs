use serde::{Deserialize, Serialize};

/// Poster value the metadata service uses when it has no image
pub const NO_POSTER: &str = "N/A";

/// Image shown in place of a missing poster
pub const PLACEHOLDER_POSTER: &str = "https://via.placeholder.com/300x450?text=No+Image";

/// A movie as returned by a keyword search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MovieSummary {
    /// Stable, externally assigned identifier (IMDb id)
    pub id: String,
    pub title: String,
    pub year: String,
    /// Poster URL, or [`NO_POSTER`]
    pub poster: String,
}

impl MovieSummary {
    /// Poster URL suitable for display, substituting the placeholder for a missing image
    pub fn display_poster(&self) -> &str {
        if self.poster.is_empty() || self.poster == NO_POSTER {
            PLACEHOLDER_POSTER
        } else {
            &self.poster
        }
    }
}

/// Full metadata for a single movie
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub summary: MovieSummary,
    /// Comma-separated genre list, e.g. "Action, Sci-Fi"
    pub genre: String,
    pub plot: String,
    pub runtime: String,
    pub rating: String,
}

impl MovieDetail {
    pub fn id(&self) -> &str {
        &self.summary.id
    }

    pub fn title(&self) -> &str {
        &self.summary.title
    }
}

impl From<MovieSummary> for MovieDetail {
    fn from(summary: MovieSummary) -> Self {
        Self {
            summary,
            genre: String::new(),
            plot: String::new(),
            runtime: String::new(),
            rating: String::new(),
        }
    }
}

/// A movie the user has liked, as persisted in the key-value store
///
/// Field names match the metadata service's own naming so that lists written by
/// earlier clients of the same store load unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LikedMovie {
    #[serde(rename = "imdbID")]
    pub id: String,
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
    pub rating: String,
}

impl LikedMovie {
    /// Individual genres, trimmed, with empty entries dropped
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        self.genre
            .split(',')
            .map(str::trim)
            .filter(|g| !g.is_empty())
    }
}

impl From<MovieDetail> for LikedMovie {
    fn from(detail: MovieDetail) -> Self {
        Self {
            id: detail.summary.id,
            title: detail.summary.title,
            year: detail.summary.year,
            poster: detail.summary.poster,
            genre: detail.genre,
            plot: detail.plot,
            runtime: detail.runtime,
            rating: detail.rating,
        }
    }
}

impl From<LikedMovie> for MovieDetail {
    fn from(liked: LikedMovie) -> Self {
        Self {
            summary: MovieSummary {
                id: liked.id,
                title: liked.title,
                year: liked.year,
                poster: liked.poster,
            },
            genre: liked.genre,
            plot: liked.plot,
            runtime: liked.runtime,
            rating: liked.rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inception() -> MovieDetail {
        MovieDetail {
            summary: MovieSummary {
                id: "tt1375666".to_string(),
                title: "Inception".to_string(),
                year: "2010".to_string(),
                poster: "https://img.example/inception.jpg".to_string(),
            },
            genre: "Action, Adventure, Sci-Fi".to_string(),
            plot: "A thief who steals corporate secrets".to_string(),
            runtime: "148 min".to_string(),
            rating: "8.8".to_string(),
        }
    }

    #[test]
    fn test_display_poster_substitutes_sentinel() {
        let summary = MovieSummary {
            id: "tt0000001".to_string(),
            title: "Lost Reel".to_string(),
            year: "1920".to_string(),
            poster: NO_POSTER.to_string(),
        };
        assert_eq!(summary.display_poster(), PLACEHOLDER_POSTER);
    }

    #[test]
    fn test_display_poster_keeps_real_url() {
        let detail = inception();
        assert_eq!(
            detail.summary.display_poster(),
            "https://img.example/inception.jpg"
        );
    }

    #[test]
    fn test_liked_movie_genres_trimmed() {
        let liked = LikedMovie {
            genre: " Action ,, Drama,".to_string(),
            ..LikedMovie::from(inception())
        };
        let genres: Vec<&str> = liked.genres().collect();
        assert_eq!(genres, vec!["Action", "Drama"]);
    }

    #[test]
    fn test_liked_movie_uses_omdb_field_names() {
        let liked = LikedMovie::from(inception());
        let json = serde_json::to_value(&liked).unwrap();
        assert_eq!(json["imdbID"], "tt1375666");
        assert_eq!(json["Title"], "Inception");
        assert_eq!(json["imdbRating"], "8.8");
    }

    #[test]
    fn test_liked_movie_tolerates_missing_optional_fields() {
        // Shape written by the browser widget: no Runtime or imdbRating
        let json = r#"{
            "imdbID": "tt0816692",
            "Title": "Interstellar",
            "Year": "2014",
            "Poster": "N/A",
            "Genre": "Adventure, Drama, Sci-Fi",
            "Plot": "A team of explorers travel through a wormhole"
        }"#;
        let liked: LikedMovie = serde_json::from_str(json).unwrap();
        assert_eq!(liked.id, "tt0816692");
        assert_eq!(liked.runtime, "");
        assert_eq!(liked.rating, "");
    }

    #[test]
    fn test_detail_serializes_flat() {
        let json = serde_json::to_value(inception()).unwrap();
        assert_eq!(json["id"], "tt1375666");
        assert_eq!(json["genre"], "Action, Adventure, Sci-Fi");
        assert!(json.get("summary").is_none());
    }
}

mod movie;
mod omdb;

pub use movie::{LikedMovie, MovieDetail, MovieSummary, NO_POSTER, PLACEHOLDER_POSTER};
pub use omdb::{OmdbDetail, OmdbEnvelope, OmdbSearchItem, OmdbSearchResponse};

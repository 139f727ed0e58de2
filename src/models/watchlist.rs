use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Movie;

// ============================================================================
// Request forms
// ============================================================================

/// Form accepted by `POST /watchlist`
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct WatchlistForm {
    #[schema(example = "Maratona Marvel")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "Uma lista de filmes da Marvel")]
    pub description: String,
}

/// Form accepted by `PUT /watchlist`
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct WatchlistUpdateForm {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Form accepted by `POST /watchlist/movie`
///
/// `watchlist_ids` may repeat to add the movie to several lists at once.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AddMovieForm {
    #[serde(default, alias = "watchlist_ids[]")]
    pub watchlist_ids: Vec<i64>,
    #[schema(example = "tt0848228")]
    pub imdb_id: String,
}

// ============================================================================
// Responses
// ============================================================================

/// A watchlist with every movie resolved through the metadata provider
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct WatchlistDetails {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[schema(value_type = Vec<Object>)]
    pub movies: Vec<Movie>,
}

/// Cheap view of a watchlist: stored ids only, no metadata lookups
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct WatchlistSummary {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub movies_count: usize,
    pub movies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct WatchlistList {
    pub watchlists: Vec<WatchlistSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct WatchlistRef {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// The watchlists a given movie belongs to
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MovieWatchlists {
    pub imdb_id: String,
    pub watchlists: Vec<WatchlistRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DeleteConfirmation {
    pub message: String,
    pub id: i64,
}

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

use chrono::{DateTime, Utc};
use serde::Serialize;

pub mod movie;
pub mod watchlist;

pub use movie::{Movie, MoviePreview, MovieSearchQuery, SearchResponse};
pub use watchlist::{
    AddMovieForm, DeleteConfirmation, MessageResponse, MovieWatchlists, WatchlistDetails,
    WatchlistForm, WatchlistList, WatchlistRef, WatchlistSummary, WatchlistUpdateForm,
};

// ============================================================================
// Persisted rows
// ============================================================================

/// A named, user-curated list of movies
///
/// Only the relationship to external movie ids is stored locally; descriptive
/// movie data always comes from the metadata provider.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Watchlist {
    pub id: i64,
    /// Unique across all watchlists
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Link between a watchlist and an external (IMDb) movie id
///
/// The pair `(imdb_id, watchlist_id)` is unique, and rows are removed with
/// their owning watchlist.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct AddedMovie {
    pub id: i64,
    pub imdb_id: String,
    pub created_at: DateTime<Utc>,
    pub watchlist_id: i64,
}

/// Movie metadata provider abstraction
///
/// The service never stores descriptive movie data; every title, poster and
/// rating shown to a client is fetched through one of these providers. They
/// are built once at startup and shared through `AppState`.
use serde_json::Value;

use crate::{
    error::AppResult,
    models::{Movie, MovieSearchQuery, SearchResponse},
};

pub mod omdb;
pub mod top100;

pub use omdb::OmdbProvider;
pub use top100::Top100Client;

/// Trait for movie database providers
///
/// A lookup that the remote database answers with "not found" is still a
/// successful call: the returned record carries `Response: "False"`. Errors
/// are reserved for transport and protocol failures.
#[async_trait::async_trait]
pub trait MovieProvider: Send + Sync {
    /// Search for movies by title
    async fn search_movies(&self, query: &MovieSearchQuery) -> AppResult<SearchResponse>;

    /// Fetch the full record of one movie by IMDb id
    async fn fetch_movie(&self, imdb_id: &str) -> AppResult<Movie>;
}

/// Trait for the source of the fixed "top 100" list
#[async_trait::async_trait]
pub trait TopMoviesProvider: Send + Sync {
    async fn top_movies(&self) -> AppResult<Vec<Value>>;
}

use std::collections::HashMap;

use crate::{
    error::AppResult,
    models::{
        AddedMovie, MovieWatchlists, Watchlist, WatchlistDetails, WatchlistList, WatchlistRef,
        WatchlistSummary,
    },
    services::providers::MovieProvider,
};

/// Builds the detailed view of a watchlist
///
/// Each stored IMDb id is resolved through the provider, one request per
/// movie, in the order the movies were added. Nothing is cached: rendering
/// the same watchlist twice fetches every movie twice.
pub async fn render_watchlist(
    provider: &dyn MovieProvider,
    watchlist: &Watchlist,
    movies: &[AddedMovie],
) -> AppResult<WatchlistDetails> {
    let mut resolved = Vec::with_capacity(movies.len());

    for added in movies {
        let movie = provider.fetch_movie(&added.imdb_id).await?;
        if !movie.is_found() {
            tracing::warn!(
                watchlist_id = watchlist.id,
                imdb_id = %added.imdb_id,
                "Stored movie id is unknown to the metadata provider"
            );
        }
        resolved.push(movie);
    }

    Ok(WatchlistDetails {
        id: watchlist.id,
        name: watchlist.name.clone(),
        description: watchlist.description.clone(),
        movies: resolved,
    })
}

/// Builds the summary view of several watchlists from stored rows only
///
/// `movies` may hold links of other watchlists too; each summary only counts
/// its own.
pub fn render_watchlists(watchlists: &[Watchlist], movies: &[AddedMovie]) -> WatchlistList {
    let mut ids_by_watchlist: HashMap<i64, Vec<String>> = HashMap::new();
    for movie in movies {
        ids_by_watchlist
            .entry(movie.watchlist_id)
            .or_default()
            .push(movie.imdb_id.clone());
    }

    let watchlists = watchlists
        .iter()
        .map(|watchlist| {
            let movies = ids_by_watchlist.remove(&watchlist.id).unwrap_or_default();
            WatchlistSummary {
                id: watchlist.id,
                name: watchlist.name.clone(),
                description: watchlist.description.clone(),
                movies_count: movies.len(),
                movies,
            }
        })
        .collect();

    WatchlistList { watchlists }
}

/// Pairs a movie id with the watchlists that contain it
pub fn render_movie_watchlists(imdb_id: &str, watchlists: &[Watchlist]) -> MovieWatchlists {
    MovieWatchlists {
        imdb_id: imdb_id.to_string(),
        watchlists: watchlists.iter().map(WatchlistRef::from).collect(),
    }
}

impl From<&Watchlist> for WatchlistRef {
    fn from(watchlist: &Watchlist) -> Self {
        Self {
            id: watchlist.id,
            name: watchlist.name.clone(),
            description: watchlist.description.clone(),
        }
    }
}

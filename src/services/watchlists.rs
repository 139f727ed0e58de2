use sqlx::SqlitePool;

use crate::{
    db::watchlists as store,
    error::{AppError, AppResult},
    messages,
    models::{
        AddMovieForm, DeleteConfirmation, MovieWatchlists, WatchlistDetails, WatchlistForm,
        WatchlistList, WatchlistUpdateForm,
    },
    services::{
        providers::MovieProvider,
        render::{render_movie_watchlists, render_watchlist, render_watchlists},
    },
};

const MAX_NAME_LEN: usize = 140;
const MAX_DESCRIPTION_LEN: usize = 2000;
const MAX_IMDB_ID_LEN: usize = 12;

fn validate_watchlist_fields(name: &str, description: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Watchlist name cannot be empty".to_string(),
        ));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(AppError::InvalidInput(format!(
            "Watchlist name cannot exceed {} characters",
            MAX_NAME_LEN
        )));
    }
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(AppError::InvalidInput(format!(
            "Watchlist description cannot exceed {} characters",
            MAX_DESCRIPTION_LEN
        )));
    }
    Ok(())
}

fn validate_imdb_id(imdb_id: &str) -> AppResult<()> {
    if imdb_id.trim().is_empty() || imdb_id.chars().count() > MAX_IMDB_ID_LEN {
        return Err(AppError::InvalidInput(format!(
            "Invalid IMDb id: '{}'",
            imdb_id
        )));
    }
    Ok(())
}

fn watchlist_not_found() -> AppError {
    AppError::NotFound(messages::WATCHLIST_NOT_FOUND.to_string())
}

/// Creates a watchlist and returns its (empty) detailed view
pub async fn create(
    pool: &SqlitePool,
    provider: &dyn MovieProvider,
    form: WatchlistForm,
) -> AppResult<WatchlistDetails> {
    validate_watchlist_fields(&form.name, &form.description)?;

    tracing::info!(name = %form.name, "Adding watchlist");

    let watchlist = store::insert_watchlist(pool, &form.name, &form.description, None)
        .await
        .map_err(|e| AppError::from_write(e, messages::DUPLICATE_WATCHLIST))?;

    tracing::info!(watchlist_id = watchlist.id, "Watchlist added");

    render_watchlist(provider, &watchlist, &[]).await
}

/// Summaries of every watchlist, without metadata lookups
pub async fn list(pool: &SqlitePool) -> AppResult<WatchlistList> {
    let watchlists = store::list_watchlists(pool).await?;
    let movies = store::list_all_movies(pool).await?;

    tracing::info!(count = watchlists.len(), "Watchlists listed");

    Ok(render_watchlists(&watchlists, &movies))
}

/// One watchlist with its movies resolved
pub async fn details(
    pool: &SqlitePool,
    provider: &dyn MovieProvider,
    id: i64,
) -> AppResult<WatchlistDetails> {
    let Some(watchlist) = store::find_watchlist(pool, id).await? else {
        tracing::warn!(watchlist_id = id, "Watchlist not found");
        return Err(watchlist_not_found());
    };

    let movies = store::list_movies(pool, id).await?;
    render_watchlist(provider, &watchlist, &movies).await
}

/// Renames/redescribes an existing watchlist
pub async fn update(
    pool: &SqlitePool,
    provider: &dyn MovieProvider,
    form: WatchlistUpdateForm,
) -> AppResult<WatchlistDetails> {
    validate_watchlist_fields(&form.name, &form.description)?;

    tracing::debug!(watchlist_id = form.id, "Editing watchlist");

    let updated = store::update_watchlist(pool, form.id, &form.name, &form.description)
        .await
        .map_err(|e| AppError::from_write(e, messages::DUPLICATE_WATCHLIST))?;

    let Some(watchlist) = updated else {
        tracing::warn!(watchlist_id = form.id, "Watchlist not found");
        return Err(watchlist_not_found());
    };

    let movies = store::list_movies(pool, watchlist.id).await?;
    render_watchlist(provider, &watchlist, &movies).await
}

/// Deletes a watchlist together with all of its movie links
pub async fn delete(pool: &SqlitePool, id: i64) -> AppResult<DeleteConfirmation> {
    let deleted = store::delete_watchlist(pool, id)
        .await
        .map_err(|e| AppError::from_write(e, messages::SAVE_FAILED))?;

    if !deleted {
        tracing::warn!(watchlist_id = id, "Watchlist not found");
        return Err(watchlist_not_found());
    }

    tracing::debug!(watchlist_id = id, "Watchlist deleted");

    Ok(DeleteConfirmation {
        message: messages::WATCHLIST_REMOVED.to_string(),
        id,
    })
}

/// Adds a movie to every listed watchlist that exists
///
/// Watchlists already containing the movie are skipped. Ids that match no
/// watchlist are ignored unless none match, which is a not-found.
pub async fn add_movie(pool: &SqlitePool, form: AddMovieForm) -> AppResult<WatchlistList> {
    validate_imdb_id(&form.imdb_id)?;

    let watchlists = store::find_watchlists_by_ids(pool, &form.watchlist_ids).await?;
    if watchlists.is_empty() {
        tracing::warn!(watchlist_ids = ?form.watchlist_ids, "No watchlist found for ids");
        return Err(watchlist_not_found());
    }

    tracing::info!(
        imdb_id = %form.imdb_id,
        watchlists = watchlists.len(),
        "Adding movie to watchlists"
    );

    for watchlist in &watchlists {
        let added = store::insert_movie_if_absent(pool, watchlist.id, &form.imdb_id)
            .await
            .map_err(|e| AppError::from_write(e, messages::DUPLICATE_MOVIE))?;

        if !added {
            tracing::warn!(
                watchlist_id = watchlist.id,
                imdb_id = %form.imdb_id,
                "Movie already in watchlist, skipped"
            );
        }
    }

    let ids: Vec<i64> = watchlists.iter().map(|w| w.id).collect();
    let movies = store::list_movies_for(pool, &ids).await?;

    Ok(render_watchlists(&watchlists, &movies))
}

/// Watchlists containing a movie; an empty list when there are none
pub async fn movie_watchlists(pool: &SqlitePool, imdb_id: &str) -> AppResult<MovieWatchlists> {
    let watchlists = store::find_watchlists_with_movie(pool, imdb_id).await?;

    tracing::debug!(
        imdb_id = %imdb_id,
        watchlists = watchlists.len(),
        "Watchlists containing movie collected"
    );

    Ok(render_movie_watchlists(imdb_id, &watchlists))
}

/// Removes one movie from one watchlist and returns what remains
pub async fn remove_movie(
    pool: &SqlitePool,
    provider: &dyn MovieProvider,
    watchlist_id: i64,
    imdb_id: &str,
) -> AppResult<WatchlistDetails> {
    let Some(watchlist) = store::find_watchlist(pool, watchlist_id).await? else {
        tracing::warn!(watchlist_id, "Watchlist not found");
        return Err(watchlist_not_found());
    };

    let removed = store::delete_movie(pool, watchlist_id, imdb_id)
        .await
        .map_err(|e| AppError::from_write(e, messages::SAVE_FAILED))?;

    if !removed {
        tracing::warn!(watchlist_id, imdb_id = %imdb_id, "Movie not in watchlist");
        return Err(AppError::NotFound(
            messages::MOVIE_NOT_IN_WATCHLIST.to_string(),
        ));
    }

    tracing::info!(watchlist_id, imdb_id = %imdb_id, "Movie removed from watchlist");

    let movies = store::list_movies(pool, watchlist_id).await?;
    render_watchlist(provider, &watchlist, &movies).await
}

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use axum_extra::extract::Form;
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{
        AddMovieForm, DeleteConfirmation, MessageResponse, MovieWatchlists, WatchlistDetails,
        WatchlistForm, WatchlistList, WatchlistUpdateForm,
    },
    routes::AppState,
    services::watchlists,
};

/// Handler for creating a watchlist
#[utoipa::path(
    post,
    path = "/watchlist",
    tag = "Watchlist",
    request_body(content = WatchlistForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Watchlist created", body = WatchlistDetails),
        (status = 409, description = "Name already taken", body = MessageResponse),
        (status = 400, description = "Could not save", body = MessageResponse),
    )
)]
pub async fn create_watchlist(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Form(form): Form<WatchlistForm>,
) -> AppResult<Json<WatchlistDetails>> {
    tracing::info!(request_id = %request_id, name = %form.name, "Processing watchlist creation");

    let details =
        watchlists::create(&state.db_pool, state.movie_provider.as_ref(), form).await?;
    Ok(Json(details))
}

/// Handler for listing every watchlist
#[utoipa::path(
    get,
    path = "/watchlist",
    tag = "Watchlist",
    responses((status = 200, description = "All watchlists", body = WatchlistList))
)]
pub async fn list_watchlists(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<WatchlistList>> {
    let list = watchlists::list(&state.db_pool).await?;
    Ok(Json(list))
}

/// Handler for one watchlist with its movies resolved
#[utoipa::path(
    get,
    path = "/watchlist/{id}",
    tag = "Watchlist",
    params(("id" = i64, Path, description = "Watchlist id")),
    responses(
        (status = 200, description = "Watchlist with movie details", body = WatchlistDetails),
        (status = 404, description = "Unknown watchlist", body = MessageResponse),
    )
)]
pub async fn get_watchlist(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<i64>,
) -> AppResult<Json<WatchlistDetails>> {
    tracing::debug!(request_id = %request_id, watchlist_id = id, "Fetching watchlist");

    let details =
        watchlists::details(&state.db_pool, state.movie_provider.as_ref(), id).await?;
    Ok(Json(details))
}

/// Handler for editing a watchlist
#[utoipa::path(
    put,
    path = "/watchlist",
    tag = "Watchlist",
    request_body(content = WatchlistUpdateForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Watchlist updated", body = WatchlistDetails),
        (status = 404, description = "Unknown watchlist", body = MessageResponse),
        (status = 409, description = "Name already taken", body = MessageResponse),
        (status = 400, description = "Could not save", body = MessageResponse),
    )
)]
pub async fn update_watchlist(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Form(form): Form<WatchlistUpdateForm>,
) -> AppResult<Json<WatchlistDetails>> {
    tracing::info!(request_id = %request_id, watchlist_id = form.id, "Processing watchlist update");

    let details =
        watchlists::update(&state.db_pool, state.movie_provider.as_ref(), form).await?;
    Ok(Json(details))
}

/// Handler for deleting a watchlist and its movie links
#[utoipa::path(
    delete,
    path = "/watchlist/{id}",
    tag = "Watchlist",
    params(("id" = i64, Path, description = "Watchlist id")),
    responses(
        (status = 200, description = "Watchlist removed", body = DeleteConfirmation),
        (status = 404, description = "Unknown watchlist", body = MessageResponse),
    )
)]
pub async fn delete_watchlist(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<i64>,
) -> AppResult<Json<DeleteConfirmation>> {
    tracing::info!(request_id = %request_id, watchlist_id = id, "Processing watchlist removal");

    let confirmation = watchlists::delete(&state.db_pool, id).await?;
    Ok(Json(confirmation))
}

/// Handler for adding a movie to one or more watchlists
#[utoipa::path(
    post,
    path = "/watchlist/movie",
    tag = "Watchlist",
    request_body(content = AddMovieForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Addressed watchlists after the addition", body = WatchlistList),
        (status = 404, description = "None of the watchlists exist", body = MessageResponse),
        (status = 409, description = "Movie already in a watchlist", body = MessageResponse),
    )
)]
pub async fn add_movie(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Form(form): Form<AddMovieForm>,
) -> AppResult<Json<WatchlistList>> {
    tracing::info!(
        request_id = %request_id,
        imdb_id = %form.imdb_id,
        watchlist_count = form.watchlist_ids.len(),
        "Processing movie addition"
    );

    let list = watchlists::add_movie(&state.db_pool, form).await?;
    Ok(Json(list))
}

/// Handler for the watchlists containing a movie
#[utoipa::path(
    get,
    path = "/watchlist/movie/{imdb_id}",
    tag = "Watchlist",
    params(("imdb_id" = String, Path, description = "IMDb id, e.g. tt0848228")),
    responses((status = 200, description = "Watchlists containing the movie, possibly none", body = MovieWatchlists))
)]
pub async fn get_movie_watchlists(
    State(state): State<Arc<AppState>>,
    Path(imdb_id): Path<String>,
) -> AppResult<Json<MovieWatchlists>> {
    let rendered = watchlists::movie_watchlists(&state.db_pool, &imdb_id).await?;
    Ok(Json(rendered))
}

/// Handler for removing a movie from a watchlist
#[utoipa::path(
    delete,
    path = "/watchlist/{id}/movie/{imdb_id}",
    tag = "Watchlist",
    params(
        ("id" = i64, Path, description = "Watchlist id"),
        ("imdb_id" = String, Path, description = "IMDb id"),
    ),
    responses(
        (status = 200, description = "Remaining movies of the watchlist", body = WatchlistDetails),
        (status = 404, description = "Unknown watchlist or movie not in it", body = MessageResponse),
    )
)]
pub async fn remove_movie(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Path((id, imdb_id)): Path<(i64, String)>,
) -> AppResult<Json<WatchlistDetails>> {
    tracing::info!(
        request_id = %request_id,
        watchlist_id = id,
        imdb_id = %imdb_id,
        "Processing movie removal"
    );

    let details = watchlists::remove_movie(
        &state.db_pool,
        state.movie_provider.as_ref(),
        id,
        &imdb_id,
    )
    .await?;
    Ok(Json(details))
}

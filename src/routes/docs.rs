use axum::Json;
use utoipa::OpenApi;

use crate::models::{
    AddMovieForm, DeleteConfirmation, MessageResponse, MoviePreview, MovieWatchlists,
    SearchResponse, WatchlistDetails, WatchlistForm, WatchlistList, WatchlistRef,
    WatchlistSummary, WatchlistUpdateForm,
};

/// OpenAPI documentation for the watchlist API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "My Movies API",
        version = "1.0.0",
        description = "Watchlists of movies backed by OMDb",
    ),
    paths(
        super::movies::search,
        super::movies::get_movie,
        super::movies::top100,
        super::watchlists::create_watchlist,
        super::watchlists::list_watchlists,
        super::watchlists::get_watchlist,
        super::watchlists::update_watchlist,
        super::watchlists::delete_watchlist,
        super::watchlists::add_movie,
        super::watchlists::get_movie_watchlists,
        super::watchlists::remove_movie,
    ),
    components(schemas(
        AddMovieForm,
        DeleteConfirmation,
        MessageResponse,
        MoviePreview,
        MovieWatchlists,
        SearchResponse,
        WatchlistDetails,
        WatchlistForm,
        WatchlistList,
        WatchlistRef,
        WatchlistSummary,
        WatchlistUpdateForm,
    )),
    tags(
        (name = "Movie", description = "Movie search against OMDb"),
        (name = "Watchlist", description = "Create, edit, view and remove watchlists"),
    )
)]
pub struct ApiDoc;

/// Serves the OpenAPI document
pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

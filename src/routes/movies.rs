use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{Movie, MovieSearchQuery, SearchResponse},
    routes::AppState,
};

/// Handler for movie search
///
/// The provider's body is returned as-is; only the status code reflects the
/// `Response` flag.
#[utoipa::path(
    get,
    path = "/movies",
    tag = "Movie",
    params(MovieSearchQuery),
    responses(
        (status = 200, description = "Matching movies", body = SearchResponse),
        (status = 404, description = "No movie matched", body = SearchResponse),
    )
)]
pub async fn search(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<MovieSearchQuery>,
) -> AppResult<(StatusCode, Json<SearchResponse>)> {
    tracing::info!(request_id = %request_id, query = %query.s, "Searching movies");

    let response = state.movie_provider.search_movies(&query).await?;

    if !response.is_found() {
        tracing::warn!(request_id = %request_id, query = %query.s, "Movie not found");
        return Ok((StatusCode::NOT_FOUND, Json(response)));
    }

    Ok((StatusCode::OK, Json(response)))
}

/// Handler for a single movie lookup
#[utoipa::path(
    get,
    path = "/movies/{imdb_id}",
    tag = "Movie",
    params(("imdb_id" = String, Path, description = "IMDb id, e.g. tt0848228")),
    responses(
        (status = 200, description = "Full movie record"),
        (status = 404, description = "Unknown IMDb id"),
    )
)]
pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Path(imdb_id): Path<String>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    tracing::info!(request_id = %request_id, imdb_id = %imdb_id, "Fetching movie");

    let movie = state.movie_provider.fetch_movie(&imdb_id).await?;

    if !movie.is_found() {
        tracing::warn!(request_id = %request_id, imdb_id = %imdb_id, "Movie not found");
        return Ok((StatusCode::NOT_FOUND, Json(movie)));
    }

    Ok((StatusCode::OK, Json(movie)))
}

/// Handler for the top 100 list
#[utoipa::path(
    get,
    path = "/top100",
    tag = "Movie",
    responses((status = 200, description = "Most popular titles, possibly empty"))
)]
pub async fn top100(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
) -> AppResult<Json<Vec<Value>>> {
    let movies = state.top_movies.top_movies().await?;

    tracing::info!(request_id = %request_id, results = movies.len(), "Top 100 served");

    Ok(Json(movies))
}

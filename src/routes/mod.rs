use axum::{
    http::StatusCode,
    middleware,
    response::Redirect,
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
    services::providers::{MovieProvider, TopMoviesProvider},
};

pub mod docs;
pub mod movies;
pub mod watchlists;

/// Shared application state
///
/// Providers are constructed once at startup and injected here; handlers
/// never reach for global clients.
pub struct AppState {
    pub db_pool: SqlitePool,
    pub movie_provider: Arc<dyn MovieProvider>,
    pub top_movies: Arc<dyn TopMoviesProvider>,
}

impl AppState {
    pub fn new(
        db_pool: SqlitePool,
        movie_provider: Arc<dyn MovieProvider>,
        top_movies: Arc<dyn TopMoviesProvider>,
    ) -> Arc<Self> {
        Arc::new(Self {
            db_pool,
            movie_provider,
            top_movies,
        })
    }
}

/// Creates the application router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
        .route("/openapi", get(docs::openapi))
        .merge(api_routes())
        .with_state(state)
        // Outermost first: the trace span reads the id set by the layer above it
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Movies
        .route("/movies", get(movies::search))
        .route("/movies/:imdb_id", get(movies::get_movie))
        .route("/top100", get(movies::top100))
        // Watchlists
        .route(
            "/watchlist",
            get(watchlists::list_watchlists)
                .post(watchlists::create_watchlist)
                .put(watchlists::update_watchlist),
        )
        .route(
            "/watchlist/:id",
            get(watchlists::get_watchlist).delete(watchlists::delete_watchlist),
        )
        .route("/watchlist/movie", post(watchlists::add_movie))
        .route(
            "/watchlist/movie/:imdb_id",
            get(watchlists::get_movie_watchlists),
        )
        .route(
            "/watchlist/:id/movie/:imdb_id",
            delete(watchlists::remove_movie),
        )
}

/// Sends visitors of the root to the API documentation
async fn home() -> Redirect {
    Redirect::to("/openapi")
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

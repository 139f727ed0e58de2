use std::{sync::Arc, time::Duration};

use watchlist_api::{
    config::Config,
    db,
    logging::init_tracing,
    routes::{create_router, AppState},
    services::providers::{OmdbProvider, Top100Client},
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // The subscriber may not be installed yet if config failed to load
        eprintln!("server failed: {err:?}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(&config.log_level);

    let db_pool = db::create_pool(&config.database_url).await?;
    db::run_migrations(&db_pool).await?;
    tracing::info!(database_url = %config.database_url, "Database ready");

    let timeout = Duration::from_secs(config.http_timeout_secs);
    let movie_provider = OmdbProvider::new(
        config.api_key.clone(),
        config.omdb_api_url.clone(),
        timeout,
    )?;
    let top_movies = Top100Client::new(config.top100_api_url.clone(), timeout)?;
    tracing::info!(top100_api_url = %config.top100_api_url, "Metadata clients configured");

    let state = AppState::new(db_pool, Arc::new(movie_provider), Arc::new(top_movies));
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server running on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

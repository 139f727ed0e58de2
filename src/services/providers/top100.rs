/// Client for the sibling "top 100" scraper service
///
/// The scraper's base URL is resolved once from configuration; when the API
/// runs in a container it is pointed at the gateway address explicitly.
use crate::{
    error::{AppError, AppResult},
    services::providers::TopMoviesProvider,
};
use reqwest::Client as HttpClient;
use serde_json::Value;
use std::time::Duration;

#[derive(Clone)]
pub struct Top100Client {
    http_client: HttpClient,
    api_url: String,
}

impl Top100Client {
    pub fn new(api_url: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_url,
        })
    }

    fn movies_url(&self) -> String {
        format!("{}/movies", self.api_url.trim_end_matches('/'))
    }
}

/// Anything other than a JSON array counts as an empty list
fn into_movie_list(body: Value) -> Vec<Value> {
    match body {
        Value::Array(movies) => movies,
        _ => Vec::new(),
    }
}

#[async_trait::async_trait]
impl TopMoviesProvider for Top100Client {
    async fn top_movies(&self) -> AppResult<Vec<Value>> {
        let response = self
            .http_client
            .get(self.movies_url())
            .send()
            .await
            .map_err(|e| AppError::HttpClient(e.without_url()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Top 100 service returned status {}: {}",
                status, body
            )));
        }

        let body: Value = response.json().await.map_err(|e| {
            AppError::ExternalApi(format!("Failed to parse top 100 response: {}", e.without_url()))
        })?;
        let movies = into_movie_list(body);

        tracing::info!(results = movies.len(), "Top 100 list fetched");

        Ok(movies)
    }
}

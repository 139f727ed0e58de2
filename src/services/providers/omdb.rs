/// OMDb API provider
///
/// Both operations hit the same endpoint and differ only in their query:
/// `s=` (plus filters) for search, `i=` for a single record. The API key is
/// appended to every request, so request URLs are never surfaced in errors.
use crate::{
    error::{AppError, AppResult},
    models::{Movie, MovieSearchQuery, SearchResponse},
    services::providers::MovieProvider,
};
use reqwest::Client as HttpClient;
use std::time::Duration;

#[derive(Clone)]
pub struct OmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl OmdbProvider {
    pub fn new(api_key: String, api_url: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url,
        })
    }

    /// Query pairs for a search, credential last
    fn search_params(&self, query: &MovieSearchQuery) -> Vec<(&'static str, String)> {
        let mut params = query.to_params();
        params.push(("apikey", self.api_key.clone()));
        params
    }

    fn lookup_params(&self, imdb_id: &str) -> Vec<(&'static str, String)> {
        vec![
            ("apikey", self.api_key.clone()),
            ("i", imdb_id.to_string()),
        ]
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        params: &[(&'static str, String)],
    ) -> AppResult<T> {
        let response = self
            .http_client
            .get(&self.api_url)
            .query(params)
            .send()
            .await
            .map_err(|e| AppError::HttpClient(e.without_url()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "OMDb API returned status {}: {}",
                status, body
            )));
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| AppError::HttpClient(e.without_url()))?;
        serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                response = %response_text,
                "Failed to deserialize OMDb response"
            );
            AppError::ExternalApi(format!("Failed to parse OMDb response: {}", e))
        })
    }
}

#[async_trait::async_trait]
impl MovieProvider for OmdbProvider {
    async fn search_movies(&self, query: &MovieSearchQuery) -> AppResult<SearchResponse> {
        let response: SearchResponse = self.get(&self.search_params(query)).await?;

        tracing::info!(
            query = %query.s,
            results = response.search.len(),
            found = response.is_found(),
            provider = "omdb",
            "Movie search completed"
        );

        Ok(response)
    }

    async fn fetch_movie(&self, imdb_id: &str) -> AppResult<Movie> {
        let movie: Movie = self.get(&self.lookup_params(imdb_id)).await?;

        tracing::debug!(
            imdb_id = %imdb_id,
            found = movie.is_found(),
            provider = "omdb",
            "Movie fetched"
        );

        Ok(movie)
    }
}

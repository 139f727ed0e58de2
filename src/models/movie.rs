use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::{IntoParams, ToSchema};

/// Value of the `Response` flag when OMDb found something
pub const RESPONSE_TRUE: &str = "True";

// ============================================================================
// OMDb API Types
// ============================================================================

/// Full movie record returned by `GET /?i={imdb_id}`
///
/// Only the fields the service reads are typed; everything else OMDb sends
/// (ratings, plot, cast...) is kept in `extra` so the record can be passed
/// through to clients unmodified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "Title", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "Year", default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(rename = "imdbID", default, skip_serializing_if = "Option::is_none")]
    pub imdb_id: Option<String>,
    #[serde(rename = "Poster", default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(rename = "Response", default)]
    pub response: String,
    #[serde(rename = "Error", default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Movie {
    /// Whether OMDb resolved the requested id
    pub fn is_found(&self) -> bool {
        self.response == RESPONSE_TRUE
    }
}

/// Short record used in search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MoviePreview {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Type", default)]
    pub movie_type: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
}

/// Paged search response from `GET /?s={query}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    #[serde(rename = "Search", default, skip_serializing_if = "Vec::is_empty")]
    pub search: Vec<MoviePreview>,
    #[serde(rename = "totalResults", default, skip_serializing_if = "Option::is_none")]
    pub total_results: Option<String>,
    #[serde(rename = "Response", default)]
    pub response: String,
    #[serde(rename = "Error", default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchResponse {
    pub fn is_found(&self) -> bool {
        self.response == RESPONSE_TRUE
    }
}

/// Query string accepted by `GET /movies`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MovieSearchQuery {
    /// Title to search for
    pub s: String,
    /// Result type: movie, series or episode
    pub tipo: Option<String>,
    /// Release year
    pub y: Option<String>,
    /// Page number (1-100)
    pub page: Option<String>,
    /// JSONP callback name
    pub callback: Option<String>,
}

impl MovieSearchQuery {
    /// Query parameters in OMDb's vocabulary, credential not included
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("s", self.s.clone())];

        let optional = [
            ("type", &self.tipo),
            ("y", &self.y),
            ("page", &self.page),
            ("callback", &self.callback),
        ];
        for (key, value) in optional {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                params.push((key, value.to_string()));
            }
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_deserialization_keeps_unknown_fields() {
        let json = r#"{
            "Title": "The Avengers",
            "Year": "2012",
            "Rated": "PG-13",
            "imdbID": "tt0848228",
            "Ratings": [{"Source": "Internet Movie Database", "Value": "8.0/10"}],
            "Response": "True"
        }"#;

        let movie: Movie = serde_json::from_str(json).unwrap();
        assert!(movie.is_found());
        assert_eq!(movie.title.as_deref(), Some("The Avengers"));
        assert_eq!(movie.imdb_id.as_deref(), Some("tt0848228"));
        assert_eq!(movie.extra["Rated"], "PG-13");

        let back = serde_json::to_value(&movie).unwrap();
        assert_eq!(back["Ratings"][0]["Value"], "8.0/10");
        assert_eq!(back["Response"], "True");
    }

    #[test]
    fn test_movie_not_found() {
        let json = r#"{"Response":"False","Error":"Incorrect IMDb ID."}"#;

        let movie: Movie = serde_json::from_str(json).unwrap();
        assert!(!movie.is_found());
        assert_eq!(movie.error.as_deref(), Some("Incorrect IMDb ID."));

        // Not-found bodies go back to the client as they came
        let back = serde_json::to_value(&movie).unwrap();
        assert_eq!(back, serde_json::json!({"Response":"False","Error":"Incorrect IMDb ID."}));
    }

    #[test]
    fn test_search_response_deserialization() {
        let json = r#"{
            "Search": [
                {"Title": "The Avengers", "Year": "2012", "imdbID": "tt0848228", "Type": "movie", "Poster": "N/A"}
            ],
            "totalResults": "1",
            "Response": "True"
        }"#;

        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert!(response.is_found());
        assert_eq!(response.search.len(), 1);
        assert_eq!(response.search[0].movie_type, "movie");
        assert_eq!(response.total_results.as_deref(), Some("1"));
    }

    #[test]
    fn test_search_query_maps_tipo_to_type() {
        let query = MovieSearchQuery {
            s: "Avengers".to_string(),
            tipo: Some("movie".to_string()),
            y: Some("2012".to_string()),
            page: None,
            callback: Some(String::new()),
        };

        assert_eq!(
            query.to_params(),
            vec![
                ("s", "Avengers".to_string()),
                ("type", "movie".to_string()),
                ("y", "2012".to_string()),
            ]
        );
    }
}

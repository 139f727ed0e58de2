use std::{sync::Arc, time::Duration};

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

use watchlist_api::{
    db,
    error::AppError,
    messages,
    models::MovieSearchQuery,
    routes::{create_router, AppState},
    services::providers::{MovieProvider, OmdbProvider, Top100Client, TopMoviesProvider},
};

const API_KEY: &str = "test_key";

fn omdb(server: &MockServer, timeout: Duration) -> OmdbProvider {
    OmdbProvider::new(API_KEY.to_string(), server.uri(), timeout).unwrap()
}

fn top100(server: &MockServer) -> Top100Client {
    Top100Client::new(server.uri(), Duration::from_secs(5)).unwrap()
}

async fn create_test_server(omdb_server: &MockServer, top_server: &MockServer) -> TestServer {
    create_test_server_with_timeout(omdb_server, top_server, Duration::from_secs(5)).await
}

async fn create_test_server_with_timeout(
    omdb_server: &MockServer,
    top_server: &MockServer,
    timeout: Duration,
) -> TestServer {
    let pool = db::memory_pool().await.unwrap();
    let state = AppState::new(
        pool,
        Arc::new(omdb(omdb_server, timeout)),
        Arc::new(top100(top_server)),
    );
    TestServer::new(create_router(state)).unwrap()
}

fn search(s: &str) -> MovieSearchQuery {
    MovieSearchQuery {
        s: s.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_search_sends_api_key_and_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("s", "Avengers"))
        .and(query_param("type", "movie"))
        .and(query_param("apikey", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Search": [{
                "Title": "The Avengers",
                "Year": "2012",
                "imdbID": "tt0848228",
                "Type": "movie",
                "Poster": "N/A"
            }],
            "totalResults": "1",
            "Response": "True"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let query = MovieSearchQuery {
        tipo: Some("movie".to_string()),
        ..search("Avengers")
    };
    let response = omdb(&server, Duration::from_secs(5))
        .search_movies(&query)
        .await
        .unwrap();

    assert!(response.is_found());
    assert_eq!(response.search[0].imdb_id, "tt0848228");
}

#[tokio::test]
async fn test_lookup_sends_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("i", "tt0848228"))
        .and(query_param("apikey", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Title": "The Avengers",
            "imdbID": "tt0848228",
            "Rated": "PG-13",
            "Response": "True"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let movie = omdb(&server, Duration::from_secs(5))
        .fetch_movie("tt0848228")
        .await
        .unwrap();

    assert!(movie.is_found());
    assert_eq!(movie.extra["Rated"], "PG-13");
}

#[tokio::test]
async fn test_blank_search_is_forwarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("s", ""))
        .and(query_param("apikey", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Response": "False",
            "Error": "Incorrect IMDb ID."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = omdb(&server, Duration::from_secs(5))
        .search_movies(&search(""))
        .await
        .unwrap();

    assert!(!response.is_found());
    assert_eq!(response.error.as_deref(), Some("Incorrect IMDb ID."));
}

#[tokio::test]
async fn test_non_success_status_is_external_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let result = omdb(&server, Duration::from_secs(5))
        .fetch_movie("tt0848228")
        .await;

    match result {
        Err(AppError::ExternalApi(msg)) => assert!(msg.contains("503")),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_top100_non_array_body_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Null))
        .expect(1)
        .mount(&server)
        .await;

    let movies = top100(&server).top_movies().await.unwrap();
    assert!(movies.is_empty());
}

#[tokio::test]
async fn test_top100_returns_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "title": "The Shawshank Redemption", "rank": 1 },
            { "title": "The Godfather", "rank": 2 }
        ])))
        .mount(&server)
        .await;

    let movies = top100(&server).top_movies().await.unwrap();
    assert_eq!(movies.len(), 2);
    assert_eq!(movies[1]["title"], "The Godfather");
}

#[tokio::test]
async fn test_route_passes_not_found_body_through() {
    let omdb_server = MockServer::start().await;
    let top_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("i", "tt9999999"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Response": "False",
            "Error": "Incorrect IMDb ID."
        })))
        .mount(&omdb_server)
        .await;
    let server = create_test_server(&omdb_server, &top_server).await;

    let response = server.get("/movies/tt9999999").await;
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "Response": "False", "Error": "Incorrect IMDb ID." }));
}

#[tokio::test]
async fn test_route_maps_provider_failure_to_bad_gateway() {
    let omdb_server = MockServer::start().await;
    let top_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&omdb_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/movies"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&top_server)
        .await;
    let server = create_test_server(&omdb_server, &top_server).await;

    let response = server.get("/movies").add_query_param("s", "Avengers").await;
    response.assert_status(StatusCode::BAD_GATEWAY);

    let response = server.get("/top100").await;
    response.assert_status(StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_transport_failure_does_not_expose_api_key() {
    let omdb_server = MockServer::start().await;
    let top_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "Response": "True" }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&omdb_server)
        .await;
    let server =
        create_test_server_with_timeout(&omdb_server, &top_server, Duration::from_millis(100))
            .await;

    let response = server.get("/movies").add_query_param("s", "Avengers").await;
    response.assert_status(StatusCode::BAD_GATEWAY);

    let body = response.text();
    assert!(!body.contains(API_KEY));
    assert!(!body.contains("apikey"));
    response.assert_json(&json!({ "message": messages::EXTERNAL_SERVICE_FAILED }));
}

#[tokio::test]
async fn test_transport_error_carries_no_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let result = omdb(&server, Duration::from_millis(100))
        .search_movies(&search("Avengers"))
        .await;

    match result {
        Err(err @ AppError::HttpClient(_)) => assert!(!err.to_string().contains(API_KEY)),
        other => panic!("unexpected result: {other:?}"),
    }
}

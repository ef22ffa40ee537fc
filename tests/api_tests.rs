use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use reqwest::Url;
use serde_json::{json, Value};

use marquee_api::{
    app::Controller,
    db::{KeyValueStore, MemoryStore},
    error::{AppError, AppResult},
    models::{MovieDetail, MovieSummary},
    routes::{create_router, AppState},
    services::{gateway::MovieGateway, likes::LikeStore},
};

const LIKES_KEY: &str = "likedMovies";

/// In-process gateway serving a fixed catalog
#[derive(Default)]
struct StubGateway {
    details: HashMap<String, MovieDetail>,
    searches: HashMap<String, Vec<String>>,
    search_calls: AtomicUsize,
}

impl StubGateway {
    fn with_movie(mut self, id: &str, title: &str, genre: &str) -> Self {
        self.details.insert(
            id.to_string(),
            MovieDetail {
                summary: MovieSummary {
                    id: id.to_string(),
                    title: title.to_string(),
                    year: "2010".to_string(),
                    poster: "N/A".to_string(),
                },
                genre: genre.to_string(),
                plot: format!("Plot of {}", title),
                runtime: "120 min".to_string(),
                rating: "7.5".to_string(),
            },
        );
        self
    }

    fn with_search(mut self, query: &str, ids: &[&str]) -> Self {
        self.searches.insert(
            query.to_string(),
            ids.iter().map(|id| id.to_string()).collect(),
        );
        self
    }
}

#[async_trait::async_trait]
impl MovieGateway for StubGateway {
    async fn search(&self, query: &str) -> AppResult<Vec<MovieSummary>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .searches
            .get(query)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.details.get(id))
                    .map(|d| d.summary.clone())
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn detail(&self, id: &str) -> AppResult<MovieDetail> {
        self.details
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Movie {}", id)))
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

fn catalog() -> StubGateway {
    StubGateway::default()
        .with_movie("tt0095016", "Die Hard", "Action, Thriller")
        .with_movie("tt0172495", "Gladiator", "Action, Adventure, Drama")
        .with_movie("tt0133093", "The Matrix", "Action, Sci-Fi")
        .with_movie("tt0848228", "The Avengers", "Action, Sci-Fi")
        .with_search("action", &["tt0095016", "tt0133093", "tt0848228"])
        .with_search("Avengers", &["tt0848228"])
}

async fn create_test_server_with(
    gateway: Arc<StubGateway>,
    store: Arc<MemoryStore>,
) -> TestServer {
    let likes = LikeStore::load(store, LIKES_KEY).await.unwrap();
    let controller = Controller::new(
        gateway,
        likes,
        Url::parse("https://www.youtube.com/results").unwrap(),
        "Avengers".to_string(),
    );
    let app = create_router(Arc::new(AppState::new(controller)));
    TestServer::new(app).unwrap()
}

async fn create_test_server() -> TestServer {
    create_test_server_with(Arc::new(catalog()), Arc::new(MemoryStore::new())).await
}

async fn toggle(server: &TestServer, id: &str) -> Value {
    let response = server
        .post("/api/v1/likes/toggle")
        .json(&json!({ "id": id }))
        .await;
    response.assert_status_ok();
    response.json()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server().await;
    let response = server.get("/health").await;
    response.assert_status_ok();
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_search_returns_movies() {
    let server = create_test_server().await;

    let response = server
        .get("/api/v1/movies/search")
        .add_query_param("q", "Avengers")
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["kind"], "search");
    assert_eq!(body["data"]["movies"][0]["id"], "tt0848228");
    assert_eq!(body["data"]["applied"], true);
}

#[tokio::test]
async fn test_blank_search_is_bad_request() {
    let server = create_test_server().await;
    let response = server
        .get("/api/v1/movies/search")
        .add_query_param("q", "   ")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_movie_is_not_found() {
    let server = create_test_server().await;
    let response = server.get("/api/v1/movies/tt0000000").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_detail_includes_trailer_url() {
    let server = create_test_server().await;
    let response = server.get("/api/v1/movies/tt0133093").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["data"]["movie"]["genre"], "Action, Sci-Fi");
    assert_eq!(
        body["data"]["trailer_url"],
        "https://www.youtube.com/results?search_query=The+Matrix+trailer"
    );
}

#[tokio::test]
async fn test_recommendations_need_likes_without_search() {
    let gateway = Arc::new(catalog());
    let server = create_test_server_with(gateway.clone(), Arc::new(MemoryStore::new())).await;

    let response = server.get("/api/v1/recommendations").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["data"]["recommendations"]["status"], "need_likes");
    assert_eq!(gateway.search_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_like_flow_recommends_by_primary_genre() {
    let server = create_test_server().await;

    toggle(&server, "tt0095016").await;
    let body = toggle(&server, "tt0172495").await;

    assert_eq!(body["kind"], "likes_changed");
    assert_eq!(body["data"]["toggled"], "added");
    assert_eq!(body["data"]["likes"].as_array().unwrap().len(), 2);

    let recommendations = &body["data"]["recommendations"];
    assert_eq!(recommendations["status"], "movies");
    assert_eq!(recommendations["keyword"], "action");
    let ids: Vec<&str> = recommendations["movies"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_str().unwrap())
        .collect();
    // Die Hard is liked and filtered out
    assert_eq!(ids, vec!["tt0133093", "tt0848228"]);
}

#[tokio::test]
async fn test_all_recommendations_liked_is_nothing_new() {
    let server = create_test_server().await;

    for id in ["tt0095016", "tt0133093", "tt0848228"] {
        toggle(&server, id).await;
    }

    let response = server.get("/api/v1/recommendations").await;
    let body: Value = response.json();
    assert_eq!(body["data"]["recommendations"]["status"], "nothing_new");
    assert_eq!(
        body["data"]["message"],
        "No new recommendations, try liking other genres."
    );
}

#[tokio::test]
async fn test_double_toggle_and_status() {
    let server = create_test_server().await;

    toggle(&server, "tt0133093").await;
    let status: Value = server.get("/api/v1/likes/tt0133093").await.json();
    assert_eq!(status["liked"], true);

    let body = toggle(&server, "tt0133093").await;
    assert_eq!(body["data"]["toggled"], "removed");

    let likes: Vec<Value> = server.get("/api/v1/likes").await.json();
    assert!(likes.is_empty());
}

#[tokio::test]
async fn test_toggle_unknown_movie_uses_fallback() {
    let server = create_test_server().await;

    let response = server
        .post("/api/v1/likes/toggle")
        .json(&json!({
            "id": "tt9999999",
            "fallback": {"id": "tt9999999", "title": "Obscure Short", "year": "1999", "poster": "N/A"}
        }))
        .await;
    response.assert_status_ok();

    let likes: Vec<Value> = server.get("/api/v1/likes").await.json();
    assert_eq!(likes.len(), 1);
    assert_eq!(likes[0]["Title"], "Obscure Short");
}

#[tokio::test]
async fn test_likes_persist_across_restart() {
    let store = Arc::new(MemoryStore::new());

    let server = create_test_server_with(Arc::new(catalog()), store.clone()).await;
    toggle(&server, "tt0172495").await;
    toggle(&server, "tt0095016").await;
    let before: Vec<Value> = server.get("/api/v1/likes").await.json();

    let stored = store.get(LIKES_KEY).await.unwrap().unwrap();
    assert!(stored.contains("\"imdbID\":\"tt0172495\""));

    let restarted = create_test_server_with(Arc::new(catalog()), store).await;
    let after: Vec<Value> = restarted.get("/api/v1/likes").await.json();
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_clear_likes() {
    let server = create_test_server().await;
    toggle(&server, "tt0095016").await;

    let response = server.delete("/api/v1/likes").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["recommendations"]["status"], "need_likes");

    let likes: Vec<Value> = server.get("/api/v1/likes").await.json();
    assert!(likes.is_empty());
}

#[tokio::test]
async fn test_featured_prefers_latest_like() {
    let server = create_test_server().await;
    toggle(&server, "tt0095016").await;
    toggle(&server, "tt0133093").await;

    let response = server.get("/api/v1/featured").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["featured"]["kind"], "movie");
    assert_eq!(body["data"]["featured"]["movie"]["id"], "tt0133093");

    let view: Value = server.get("/api/v1/view").await.json();
    assert_eq!(view["featured_liked"], true);
}

#[tokio::test]
async fn test_featured_placeholder_when_nothing_found() {
    // No likes and no default keyword matches the catalog
    let server = create_test_server().await;

    let body: Value = server.get("/api/v1/featured").await.json();
    assert_eq!(body["data"]["featured"]["kind"], "placeholder");
    assert_eq!(body["data"]["featured"]["title"], "Featured");
}

#[tokio::test]
async fn test_view_tracks_search_and_detail() {
    let server = create_test_server().await;

    server
        .get("/api/v1/movies/search")
        .add_query_param("q", "action")
        .await
        .assert_status_ok();
    server.get("/api/v1/movies/tt0848228").await.assert_status_ok();
    toggle(&server, "tt0133093").await;

    let view: Value = server.get("/api/v1/view").await.json();
    assert_eq!(view["search"]["query"], "action");
    assert_eq!(view["search"]["movies"][1]["liked"], true);
    assert_eq!(view["search"]["movies"][1]["poster_url"], "https://via.placeholder.com/300x450?text=No+Image");
    assert_eq!(view["detail"]["id"], "tt0848228");

    server.delete("/api/v1/view/detail").await.assert_status_ok();
    let view: Value = server.get("/api/v1/view").await.json();
    assert!(view["detail"].is_null());
}

#[tokio::test]
async fn test_view_endpoints_echo_request_id() {
    let server = create_test_server().await;
    let id: &'static str = "0b6f3c2e-1d4a-4f5b-8e7c-9a0d1e2f3a4b";

    let response = server
        .get("/api/v1/view")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static(id),
        )
        .await;
    response.assert_status_ok();
    assert_eq!(response.header("x-request-id"), id);

    let response = server.get("/api/v1/featured").await;
    response.assert_status_ok();
    assert!(response.headers().contains_key("x-request-id"));

    server.delete("/api/v1/view/detail").await.assert_status_ok();
}

#[tokio::test]
async fn test_trailer_redirects() {
    let server = create_test_server().await;

    let response = server
        .get("/api/v1/trailer")
        .add_query_param("title", "Coco")
        .await;
    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.header("location"),
        "https://www.youtube.com/results?search_query=Coco+trailer"
    );
}

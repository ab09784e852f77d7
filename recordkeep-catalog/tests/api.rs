//! Book API tests against the seeded in-memory catalog

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use recordkeep_catalog::models::{BookListResponse, BookResponse};
use recordkeep_catalog::{bootstrap, build_router, init};
use recordkeep_core::AppConfig;

async fn app() -> Router {
    let state = init(AppConfig::in_memory()).await.unwrap();
    build_router(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

async fn json_body<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn fetch_list(app: &Router, query: &str) -> BookListResponse {
    let response = send(app, "GET", &format!("/api/books{}", query), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    json_body(response).await
}

fn ids(list: &BookListResponse) -> Vec<i64> {
    list.books.iter().map(|b| b.id).collect()
}

#[tokio::test]
async fn default_listing_is_first_five_by_id() {
    let app = app().await;
    let list = fetch_list(&app, "").await;

    assert!(list.success);
    assert_eq!(list.page, 1);
    assert_eq!(list.per_page, 5);
    assert_eq!(list.total, 5);
    assert_eq!(list.pages, 1);
    assert_eq!(ids(&list), vec![1, 2, 3, 4, 5]);
    assert_eq!(
        list.books[0],
        BookResponse {
            id: 1,
            title: "Python Crash Course".into(),
            author: "Eric Matthes".into(),
            year: Some(2019),
        }
    );
}

#[tokio::test]
async fn response_has_exact_shape() {
    let app = app().await;
    let response = send(&app, "GET", "/api/books?per_page=1", None).await;
    let value: Value = json_body(response).await;

    assert_eq!(
        value,
        json!({
            "success": true,
            "page": 1,
            "per_page": 1,
            "total": 5,
            "pages": 5,
            "books": [{"id": 1, "title": "Python Crash Course", "author": "Eric Matthes", "year": 2019}]
        })
    );
}

#[tokio::test]
async fn title_desc_is_non_increasing() {
    let app = app().await;
    let list = fetch_list(&app, "?sort=title&order=desc").await;

    assert_eq!(list.books.len(), 5);
    for pair in list.books.windows(2) {
        assert!(pair[0].title >= pair[1].title, "{:?}", pair);
    }
    assert_eq!(list.books[0].title, "Python Crash Course");
}

#[tokio::test]
async fn year_asc_is_non_decreasing() {
    let app = app().await;
    let list = fetch_list(&app, "?sort=year").await;
    let years: Vec<_> = list.books.iter().map(|b| b.year.unwrap()).collect();
    assert_eq!(years, vec![1994, 2008, 2018, 2019, 2020]);
}

#[tokio::test]
async fn invalid_sort_falls_back_to_id() {
    let app = app().await;
    let list = fetch_list(&app, "?sort=created_at;DROP%20TABLE%20books&order=desc").await;
    assert_eq!(ids(&list), vec![5, 4, 3, 2, 1]);

    let list = fetch_list(&app, "?sort=nonsense").await;
    assert_eq!(ids(&list), vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn non_desc_order_is_ascending() {
    let app = app().await;
    let list = fetch_list(&app, "?sort=author&order=DESC").await;
    let authors: Vec<_> = list.books.iter().map(|b| b.author.as_str()).collect();
    let mut sorted = authors.clone();
    sorted.sort();
    assert_eq!(authors, sorted);
}

#[tokio::test]
async fn out_of_range_page_is_empty_but_counts() {
    let app = app().await;
    let list = fetch_list(&app, "?page=999").await;

    assert!(list.books.is_empty());
    assert_eq!(list.page, 999);
    assert_eq!(list.total, 5);
    assert_eq!(list.pages, 1);
}

#[tokio::test]
async fn pages_split_the_table() {
    let app = app().await;
    let list = fetch_list(&app, "?page=3&per_page=2").await;
    assert_eq!(list.pages, 3);
    assert_eq!(ids(&list), vec![5]);

    let list = fetch_list(&app, "?page=abc&per_page=zero").await;
    assert_eq!(list.page, 1);
    assert_eq!(list.per_page, 5);
}

#[tokio::test]
async fn created_book_is_listed_with_same_fields() {
    let app = app().await;
    let response = send(
        &app,
        "POST",
        "/api/books",
        Some(json!({"title": "Programming Rust", "author": "Jim Blandy", "year": 2021})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Value = json_body(response).await;
    assert_eq!(created["id"], 6);
    assert!(created["created_at"].is_string());

    let list = fetch_list(&app, "?page=2").await;
    assert_eq!(list.total, 6);
    assert_eq!(
        list.books,
        vec![BookResponse {
            id: 6,
            title: "Programming Rust".into(),
            author: "Jim Blandy".into(),
            year: Some(2021),
        }]
    );
}

#[tokio::test]
async fn year_is_optional() {
    let app = app().await;
    let response = send(
        &app,
        "POST",
        "/api/books",
        Some(json!({"title": "Zine", "author": "Anon"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let fetched: Value = json_body(send(&app, "GET", "/api/books/6", None).await).await;
    assert_eq!(fetched["year"], Value::Null);
}

#[tokio::test]
async fn blank_title_is_rejected() {
    let app = app().await;
    let response = send(
        &app,
        "POST",
        "/api/books",
        Some(json!({"title": " ", "author": "Anon"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response).await;
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn bad_id_uses_error_envelope() {
    let app = app().await;
    for method in ["GET", "DELETE"] {
        let response = send(&app, method, "/api/books/abc", None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", method);
        let body: Value = json_body(response).await;
        assert_eq!(body["error"], "validation_error");
    }
}

#[tokio::test]
async fn mistyped_json_field_uses_error_envelope() {
    let app = app().await;
    let response = send(
        &app,
        "POST",
        "/api/books",
        Some(json!({"title": "Dune", "author": "Frank Herbert", "year": "2019"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response).await;
    assert_eq!(body["error"], "validation_error");
    assert!(body["message"].as_str().unwrap().starts_with("malformed request"));

    assert_eq!(fetch_list(&app, "").await.total, 5);
}

#[tokio::test]
async fn delete_twice_reports_not_found() {
    let app = app().await;
    assert_eq!(
        send(&app, "DELETE", "/api/books/3", None).await.status(),
        StatusCode::NO_CONTENT
    );
    assert_eq!(
        send(&app, "DELETE", "/api/books/3", None).await.status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        send(&app, "GET", "/api/books/3", None).await.status(),
        StatusCode::NOT_FOUND
    );

    let list = fetch_list(&app, "").await;
    assert_eq!(list.total, 4);
    assert_eq!(ids(&list), vec![1, 2, 4, 5]);
}

#[tokio::test]
async fn seed_runs_once_across_restarts() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        database_url: format!("sqlite://{}", dir.path().join("catalog.db").display()),
        ..AppConfig::in_memory()
    };

    let first = init(config.clone()).await.unwrap();
    first.pool().close().await;

    let second = init(config).await.unwrap();
    assert_eq!(bootstrap::run(second.pool()).await.unwrap(), 0);

    let list = fetch_list(&build_router(second), "").await;
    assert_eq!(list.total, 5);
}

#[tokio::test]
async fn home_page_renders() {
    let app = app().await;
    let response = send(&app, "GET", "/", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("<h1>Book catalog</h1>"));
    assert!(html.contains("/api/books"));
}

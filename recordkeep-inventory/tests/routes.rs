//! Router tests against an in-memory inventory

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use tower::ServiceExt;

use recordkeep_core::AppConfig;
use recordkeep_inventory::{bootstrap, build_router, init};

async fn app() -> Router {
    build_router(init(AppConfig::in_memory()).await.unwrap())
}

async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_form(app: &Router, uri: &str, form: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_owned()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn index_lists_seed_products_and_storage() {
    let app = app().await;
    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("<td>Laptop</td><td>999.99</td><td>10</td><td>High-performance laptop</td>"));
    assert!(html.contains("<td>Mouse</td><td>29.99</td><td>50</td>"));
    assert!(html.contains("<td>Keyboard</td><td>79.99</td><td>30</td>"));
    assert!(html.contains("Database: SQLite"));
    assert!(html.contains("<code>sqlite::memory:</code>"));
    assert!(html.contains(" ms</p>"));
}

#[tokio::test]
async fn added_product_appears_in_listing() {
    let app = app().await;
    let response = post_form(
        &app,
        "/add",
        "name=Webcam&price=49.5&stock=7&description=1080p+camera",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response.headers()[header::LOCATION].to_str().unwrap().to_owned();
    assert_eq!(location, "/?flash=Product%20added%20successfully%21&level=success");

    let html = body_text(get(&app, &location).await).await;
    assert!(html.contains("Product added successfully!"));
    assert!(html.contains("<td>Webcam</td><td>49.50</td><td>7</td><td>1080p camera</td>"));
}

#[tokio::test]
async fn stock_defaults_to_zero() {
    let app = app().await;
    let response = post_form(&app, "/add", "name=Hub&price=15&stock=").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let html = body_text(get(&app, "/").await).await;
    assert!(html.contains("<td>Hub</td><td>15.00</td><td>0</td><td></td>"));
}

#[tokio::test]
async fn bad_price_is_rejected() {
    let app = app().await;
    for form in ["name=X", "name=X&price=abc", "name=X&price=-5", "price=5"] {
        let response = post_form(&app, "/add", form).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", form);
    }

    let html = body_text(get(&app, "/").await).await;
    assert_eq!(html.matches("<tr><td>").count(), 3);
}

#[tokio::test]
async fn delete_twice_reports_not_found() {
    let app = app().await;
    let first = get(&app, "/delete/2").await;
    assert_eq!(first.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        first.headers()[header::LOCATION],
        "/?flash=Product%20deleted%21&level=danger"
    );

    let html = body_text(get(&app, "/").await).await;
    assert!(!html.contains("Mouse"));

    assert_eq!(get(&app, "/delete/2").await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_delete_id_is_400() {
    let app = app().await;
    let response = get(&app, "/delete/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("\"error\":\"validation_error\""));
}

#[tokio::test]
async fn add_form_renders() {
    let app = app().await;
    let html = body_text(get(&app, "/add").await).await;
    assert!(html.contains("name=\"price\""));
    assert!(html.contains("action=\"/add\""));
}

#[tokio::test]
async fn seed_runs_once_across_restarts() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        database_url: format!("sqlite://{}", dir.path().join("inventory.db").display()),
        ..AppConfig::in_memory()
    };

    let first = init(config.clone()).await.unwrap();
    first.pool().close().await;

    let second = init(config).await.unwrap();
    assert_eq!(bootstrap::run(second.pool()).await.unwrap(), 0);

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
        .fetch_one(second.pool())
        .await
        .unwrap();
    assert_eq!(count, 3);
}

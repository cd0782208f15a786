use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use linklet_gateway::app::App;
use linklet_gateway::state::AppState;
use linklet_service::{LinkService, RandomGenerator};
use linklet_storage::InMemoryLinkStore;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn test_state() -> AppState {
    let service = LinkService::new(InMemoryLinkStore::new(), RandomGenerator::new());
    AppState::new(Arc::new(service))
}

fn test_router() -> Router {
    App::router(test_state())
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn shorten(router: &Router, url: &str) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri("/shorten")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "url": url }).to_string()))
        .unwrap();
    router.clone().oneshot(request).await.unwrap()
}

async fn get(router: &Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    router.clone().oneshot(request).await.unwrap()
}

async fn delete(router: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    router.clone().oneshot(request).await.unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let response = get(&test_router(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn shorten_returns_created_link() {
    let response = shorten(&test_router(), "https://example.com/page").await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["url"], "https://example.com/page");

    let code = body["shortCode"].as_str().unwrap();
    assert_eq!(code.len(), 7);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[tokio::test]
async fn shorten_rejects_malformed_url() {
    let response = shorten(&test_router(), "not-a-url").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("invalid url"));
}

#[tokio::test]
async fn shorten_rejects_disallowed_scheme() {
    let response = shorten(&test_router(), "ftp://example.com/file").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn redirect_targets_the_original_url() {
    let router = test_router();

    let created = body_json(shorten(&router, "https://example.com/page").await).await;
    let code = created["shortCode"].as_str().unwrap();

    let response = get(&router, &format!("/{code}")).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "https://example.com/page"
    );
}

#[tokio::test]
async fn redirect_unknown_code_is_not_found() {
    let response = get(&test_router(), "/zzzzzzz").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn redirect_malformed_code_is_not_found() {
    let response = get(&test_router(), "/not!a!code").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn stats_track_accesses() {
    let router = test_router();

    let created = body_json(shorten(&router, "https://example.com/page").await).await;
    let code = created["shortCode"].as_str().unwrap();

    // Fresh link: zero clicks, never accessed.
    let response = get(&router, &format!("/{code}/stats")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["url"], "https://example.com/page");
    assert_eq!(body["shortCode"], *code);
    assert_eq!(body["clicks"], 0);
    assert!(body["createdAt"].is_string());
    assert!(body["lastAccessed"].is_null());

    // One redirect later the counter and access stamp move.
    get(&router, &format!("/{code}")).await;

    let body = body_json(get(&router, &format!("/{code}/stats")).await).await;
    assert_eq!(body["clicks"], 1);
    assert!(body["lastAccessed"].is_string());
}

#[tokio::test]
async fn stats_unknown_code_is_not_found() {
    let response = get(&test_router(), "/zzzzzzz/stats").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_removes_the_link() {
    let router = test_router();

    let created = body_json(shorten(&router, "https://example.com/page").await).await;
    let code = created["shortCode"].as_str().unwrap();

    let response = delete(&router, &format!("/{code}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Second delete reports non-existence, and the code is gone from
    // every read path.
    assert_eq!(
        delete(&router, &format!("/{code}")).await.status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        get(&router, &format!("/{code}")).await.status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        get(&router, &format!("/{code}/stats")).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn delete_unknown_code_is_not_found() {
    let response = delete(&test_router(), "/zzzzzzz").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn preflight_admits_browser_clients() {
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/shorten")
        .header(header::ORIGIN, "https://app.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let response = test_router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
    let methods = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(methods.contains("POST"));
    assert!(methods.contains("DELETE"));
}

#[tokio::test]
async fn cross_origin_responses_carry_cors_headers() {
    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "https://app.example")
        .body(Body::empty())
        .unwrap();
    let response = test_router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn server_drains_and_stops_on_shutdown() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    let server = tokio::spawn(App::serve(listener, test_state(), async {
        shutdown_rx.await.ok();
    }));

    shutdown_tx.send(()).unwrap();

    let result = tokio::time::timeout(std::time::Duration::from_secs(5), server)
        .await
        .expect("server did not stop after shutdown signal")
        .unwrap();
    assert!(result.is_ok());
}

#[tokio::test]
async fn deleted_code_redirect_shows_no_stale_record() {
    let router = test_router();

    let created = body_json(shorten(&router, "https://example.com/page").await).await;
    let code = created["shortCode"].as_str().unwrap();
    get(&router, &format!("/{code}")).await;

    delete(&router, &format!("/{code}")).await;

    let response = get(&router, &format!("/{code}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().get(header::LOCATION).is_none());
}

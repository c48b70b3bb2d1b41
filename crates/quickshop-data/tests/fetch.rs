//! Fetch tests against an in-process HTTP server and temporary files.

use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::get;
use axum::Router;
use quickshop_data::{FetchClient, FetchError, Resource};
use std::net::SocketAddr;
use std::time::Duration;

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn test_app() -> Router {
    Router::new()
        .route("/products.json", get(|| async { r#"[{"id":"1"}]"# }))
        .route(
            "/broken.json",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route(
            "/accept",
            get(|headers: HeaderMap| async move {
                let accept = headers
                    .get(header::ACCEPT)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("")
                    .to_string();
                format!("{:?}", accept)
            }),
        )
        .route(
            "/slow.json",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "[]"
            }),
        )
}

#[tokio::test]
async fn test_load_remote_success() {
    let addr = serve(test_app()).await;
    let client = FetchClient::new().unwrap();
    let resource = Resource::parse(&format!("http://{}/products.json", addr)).unwrap();

    let response = client.load(&resource).await.unwrap();
    assert!(response.is_success());

    let body: Vec<serde_json::Value> = response.json().unwrap();
    assert_eq!(body.len(), 1);
}

#[tokio::test]
async fn test_load_remote_server_error() {
    let addr = serve(test_app()).await;
    let client = FetchClient::new().unwrap();
    let resource = Resource::parse(&format!("http://{}/broken.json", addr)).unwrap();

    let response = client.load(&resource).await.unwrap();
    assert_eq!(response.status, 500);

    let err = response.error_for_status().unwrap_err();
    assert_eq!(err.to_string(), "HTTP 500 Internal Server Error");
}

#[tokio::test]
async fn test_load_remote_asks_for_json() {
    let addr = serve(test_app()).await;
    let client = FetchClient::new().unwrap();
    let resource = Resource::parse(&format!("http://{}/accept", addr)).unwrap();

    let accept: String = client.load(&resource).await.unwrap().json().unwrap();
    assert_eq!(accept, "application/json");
}

#[tokio::test]
async fn test_load_remote_timeout() {
    let addr = serve(test_app()).await;
    let client = FetchClient::builder()
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();
    let resource = Resource::parse(&format!("http://{}/slow.json", addr)).unwrap();

    let err = client.load(&resource).await.unwrap_err();
    assert!(matches!(err, FetchError::Timeout));
}

#[tokio::test]
async fn test_load_remote_connection_refused() {
    // Bind and immediately drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = FetchClient::new().unwrap();
    let resource = Resource::parse(&format!("http://{}/products.json", addr)).unwrap();

    let err = client.load(&resource).await.unwrap_err();
    assert!(matches!(err, FetchError::RequestError(_)));
}

#[tokio::test]
async fn test_load_local_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("products.json");
    std::fs::write(&path, "[]").unwrap();

    let client = FetchClient::new().unwrap();
    let response = client.load(&Resource::Local(path)).await.unwrap();
    assert!(response.is_success());
    assert_eq!(response.body, b"[]");
}

#[tokio::test]
async fn test_load_missing_local_file() {
    let dir = tempfile::tempdir().unwrap();
    let resource = Resource::parse("missing.json")
        .unwrap()
        .resolve_against(dir.path());

    let client = FetchClient::new().unwrap();
    let err = client.load(&resource).await.unwrap_err();
    assert!(matches!(err, FetchError::Io { .. }));
}

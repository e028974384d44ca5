//! HTTP client tests against a throwaway axum server on a random port.

use std::net::SocketAddr;
use std::time::Duration;

use axum::{http::StatusCode, routing::get, Router};

use super::SAMPLE_BODY;
use crate::cli::api::{spending_endpoint, Client, SpendingSource};
use crate::errors::FetchError;

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api")
}

fn client(base: &str) -> Client {
    Client::new(base, Duration::from_secs(5)).unwrap()
}

#[test]
fn test_spending_endpoint_joins_base_url() {
    assert_eq!(
        spending_endpoint("http://localhost:5000/api"),
        "http://localhost:5000/api/visualization/spending"
    );
    assert_eq!(
        spending_endpoint("http://localhost:5000/api/"),
        "http://localhost:5000/api/visualization/spending"
    );
}

#[tokio::test]
async fn test_fetch_success() {
    let app = Router::new().route(
        "/api/visualization/spending",
        get(|| async { ([("content-type", "application/json")], SAMPLE_BODY) }),
    );
    let base = serve(app).await;

    let snap = client(&base).fetch().await.unwrap();
    assert_eq!(snap.spending_over_time.len(), 3);
    assert_eq!(snap.monthly_trend.len(), 2);
    assert_eq!(snap.category_distribution.len(), 3);
}

#[tokio::test]
async fn test_fetch_non_ok_status() {
    let app = Router::new().route(
        "/api/visualization/spending",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base = serve(app).await;

    let err = client(&base).fetch_spending().await.unwrap_err();
    assert!(matches!(err, FetchError::Status(s) if s.as_u16() == 500));
    assert_eq!(err.to_string(), "Failed to fetch data");
}

#[tokio::test]
async fn test_fetch_unknown_route_is_status_error() {
    let base = serve(Router::new()).await;
    let err = client(&base).fetch_spending().await.unwrap_err();
    assert!(matches!(err, FetchError::Status(s) if s.as_u16() == 404));
}

#[tokio::test]
async fn test_fetch_null_body_is_no_data() {
    let app = Router::new().route("/api/visualization/spending", get(|| async { "null" }));
    let base = serve(app).await;

    let err = client(&base).fetch_spending().await.unwrap_err();
    assert!(matches!(err, FetchError::NoData));
}

#[tokio::test]
async fn test_fetch_transport_error() {
    // bind then drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{addr}/api")).fetch_spending().await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
    assert!(err.to_string().starts_with("Failed to fetch data"));
}

#[tokio::test]
async fn test_fetch_times_out() {
    let app = Router::new().route(
        "/api/visualization/spending",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            SAMPLE_BODY
        }),
    );
    let base = serve(app).await;

    let slow = Client::new(&base, Duration::from_millis(100)).unwrap();
    let err = slow.fetch_spending().await.unwrap_err();
    match err {
        FetchError::Transport(e) => assert!(e.is_timeout()),
        other => panic!("expected timeout, got {other:?}"),
    }
}

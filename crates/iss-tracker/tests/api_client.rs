//! Integration tests for `IssClient` against a local stub API server.

use axum::http::{header, StatusCode};
use axum::{routing::get, Router};
use iss_tracker::{ApiError, IssClient, Position, PositionSource};
use std::time::Duration;
use tokio::time::timeout;

const OK_BODY: &str = concat!(
    r#"{"message": "success", "timestamp": 1700000000,"#,
    r#" "iss_position": {"latitude": "51.5000", "longitude": "-0.1000"}}"#
);

const MALFORMED_BODY: &str = r#"{"message": "success", "timestamp": 1700000000}"#;

/// Bind a stub open-notify server on an ephemeral port, return its base URL.
async fn spawn_stub() -> String {
    let app = Router::new()
        .route(
            "/iss-now.json",
            get(|| async {
                (
                    [(header::CONTENT_TYPE, "application/json")],
                    OK_BODY,
                )
            }),
        )
        .route(
            "/broken.json",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        )
        .route(
            "/malformed.json",
            get(|| async {
                (
                    [(header::CONTENT_TYPE, "application/json")],
                    MALFORMED_BODY,
                )
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn fetch_well_formed_response() {
    let base = spawn_stub().await;
    let client = IssClient::new(format!("{}/iss-now.json", base)).unwrap();

    let position = timeout(Duration::from_secs(5), client.fetch_position())
        .await
        .expect("fetch timed out")
        .expect("fetch failed");

    assert_eq!(position, Position::new(51.5, -0.1));
}

#[tokio::test]
async fn fetch_http_500_is_api_error() {
    let base = spawn_stub().await;
    let client = IssClient::new(format!("{}/broken.json", base)).unwrap();

    let err = timeout(Duration::from_secs(5), client.fetch_position())
        .await
        .expect("fetch timed out")
        .expect_err("expected failure");

    match err {
        ApiError::Api { status } => assert_eq!(status, 500),
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn fetch_malformed_json_is_decode_error() {
    let base = spawn_stub().await;
    let client = IssClient::new(format!("{}/malformed.json", base)).unwrap();

    let err = timeout(Duration::from_secs(5), client.fetch_position())
        .await
        .expect("fetch timed out")
        .expect_err("expected failure");

    match err {
        // The serde message must survive into the collapsed error so the
        // dashboard can say which field was malformed.
        ApiError::Decode(msg) => {
            assert!(msg.contains("missing field"), "got: {}", msg);
            assert!(msg.contains("iss_position"), "got: {}", msg);
        }
        other => panic!("expected Decode error, got {:?}", other),
    }
}

#[tokio::test]
async fn fetch_connection_refused_is_http_error() {
    // Bind and immediately drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = IssClient::new(format!("http://{}/iss-now.json", addr)).unwrap();

    let err = timeout(Duration::from_secs(5), client.fetch_position())
        .await
        .expect("fetch timed out")
        .expect_err("expected failure");

    assert!(matches!(err, ApiError::Http(_)), "got {:?}", err);
}

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use notify_server::startup::build_router;
use tower::util::ServiceExt;

/// The route returns the literal JSON body on every call.
#[tokio::test]
async fn notification_route_returns_the_literal_body() {
    let app = build_router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/notification")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(
        &bytes[..],
        br#"{"message":"Hello from the backend! This is your notification."}"#
    );
}

#[tokio::test]
async fn unknown_routes_return_404() {
    let app = build_router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/missing")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn request_id_is_echoed_on_the_response() {
    let app = build_router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "test-request-id")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("test-request-id")
    );
}

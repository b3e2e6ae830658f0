use axum::{
    body::Body,
    http::{Request, StatusCode},
    Extension,
};
use hr_dashboard_backend::middleware::request_id::{request_id, RequestId};
use tower::ServiceExt;
use uuid::Uuid;

fn echo_app() -> axum::Router {
    axum::Router::new()
        .route(
            "/test",
            axum::routing::get(|Extension(id): Extension<RequestId>| async move { id.0 }),
        )
        .layer(axum::middleware::from_fn(request_id))
}

#[tokio::test]
async fn generates_request_id_when_missing() {
    let response = echo_app()
        .oneshot(Request::builder().uri("/test").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let id = response
        .headers()
        .get("x-request-id")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(Uuid::parse_str(&id).is_ok());

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(body, id.as_bytes());
}

#[tokio::test]
async fn keeps_client_request_id() {
    let response = echo_app()
        .oneshot(
            Request::builder()
                .uri("/test")
                .header("x-request-id", "client-req-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers().get("x-request-id").unwrap(), "client-req-123");
}

#[tokio::test]
async fn falls_back_to_correlation_id() {
    let response = echo_app()
        .oneshot(
            Request::builder()
                .uri("/test")
                .header("x-correlation-id", "corr-req-456")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers().get("x-request-id").unwrap(), "corr-req-456");
}

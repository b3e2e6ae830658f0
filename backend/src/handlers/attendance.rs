use axum::{
    body::Bytes,
    extract::{Path, RawQuery, State},
    http::Method,
    response::Response,
    Extension,
};

use crate::{error::ProxyError, middleware::RequestId, state::AppState};

use super::proxy::{ProxyCall, ATTENDANCE_SERVICE};

pub async fn list_attendance(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    RawQuery(query): RawQuery,
) -> Result<Response, ProxyError> {
    ProxyCall {
        method: Method::GET,
        segments: &["attendance"],
        query: query.as_deref(),
        body: None,
        service: ATTENDANCE_SERVICE,
    }
    .send(&state, &request_id)
    .await
}

pub async fn create_attendance(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    body: Bytes,
) -> Result<Response, ProxyError> {
    ProxyCall {
        method: Method::POST,
        segments: &["attendance"],
        query: None,
        body: Some(&body),
        service: ATTENDANCE_SERVICE,
    }
    .send(&state, &request_id)
    .await
}

pub async fn update_attendance(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Response, ProxyError> {
    ProxyCall {
        method: Method::PUT,
        segments: &["attendance", id.as_str()],
        query: None,
        body: Some(&body),
        service: ATTENDANCE_SERVICE,
    }
    .send(&state, &request_id)
    .await
}

use axum::{
    body::Bytes,
    extract::{Path, RawQuery, State},
    http::Method,
    response::Response,
    Extension,
};

use crate::{error::ProxyError, middleware::RequestId, state::AppState};

use super::proxy::{ProxyCall, EMPLOYEE_SERVICE};

pub async fn list_employees(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    RawQuery(query): RawQuery,
) -> Result<Response, ProxyError> {
    ProxyCall {
        method: Method::GET,
        segments: &["employees"],
        query: query.as_deref(),
        body: None,
        service: EMPLOYEE_SERVICE,
    }
    .send(&state, &request_id)
    .await
}

pub async fn create_employee(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    body: Bytes,
) -> Result<Response, ProxyError> {
    ProxyCall {
        method: Method::POST,
        segments: &["employees"],
        query: None,
        body: Some(&body),
        service: EMPLOYEE_SERVICE,
    }
    .send(&state, &request_id)
    .await
}

pub async fn update_employee(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Response, ProxyError> {
    ProxyCall {
        method: Method::PUT,
        segments: &["employees", id.as_str()],
        query: None,
        body: Some(&body),
        service: EMPLOYEE_SERVICE,
    }
    .send(&state, &request_id)
    .await
}

pub async fn delete_employee(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<String>,
) -> Result<Response, ProxyError> {
    ProxyCall {
        method: Method::DELETE,
        segments: &["employees", id.as_str()],
        query: None,
        body: None,
        service: EMPLOYEE_SERVICE,
    }
    .send(&state, &request_id)
    .await
}

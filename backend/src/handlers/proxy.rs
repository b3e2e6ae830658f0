use axum::{
    body::Bytes,
    http::{header, Method},
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::{
    error::ProxyError,
    middleware::RequestId,
    state::AppState,
    upstream::{UpstreamRequest, UpstreamResponse},
};

pub(crate) const EMPLOYEE_SERVICE: &str = "employee";
pub(crate) const ATTENDANCE_SERVICE: &str = "attendance";

/// A write or read waiting to be forwarded. Validation happens in
/// [`ProxyCall::send`] in the order the HR API contract expects:
/// configuration first, then the JSON body, then the network.
pub(crate) struct ProxyCall<'a> {
    pub method: Method,
    pub segments: &'a [&'a str],
    pub query: Option<&'a str>,
    pub body: Option<&'a Bytes>,
    pub service: &'static str,
}

impl ProxyCall<'_> {
    pub async fn send(self, state: &AppState, request_id: &RequestId) -> Result<Response, ProxyError> {
        if !state.upstream.is_configured() {
            return Err(ProxyError::NotConfigured);
        }

        let body = self.body.map(parse_json_body).transpose()?;

        let upstream = state
            .upstream
            .forward(UpstreamRequest {
                method: self.method,
                segments: self.segments,
                query: self.query,
                body,
                request_id: Some(request_id.0.as_str()),
                service: self.service,
            })
            .await?;

        Ok(pass_through(upstream))
    }
}

pub(crate) fn parse_json_body(body: &Bytes) -> Result<Value, ProxyError> {
    serde_json::from_slice(body).map_err(|_| ProxyError::InvalidJson)
}

pub(crate) fn pass_through(upstream: UpstreamResponse) -> Response {
    (
        upstream.status,
        [(header::CONTENT_TYPE, upstream.content_type)],
        upstream.body,
    )
        .into_response()
}

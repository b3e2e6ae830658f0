use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Body shape shared with the HR API so the frontend can read proxy and
/// upstream errors the same way.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("API base URL is not configured.")]
    NotConfigured,
    #[error("Invalid JSON body.")]
    InvalidJson,
    #[error("Unable to reach {service} service.")]
    Unreachable {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::NotConfigured | ProxyError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ProxyError::InvalidJson => StatusCode::BAD_REQUEST,
            ProxyError::Unreachable { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ProxyError::NotConfigured => {
                tracing::error!("Rejecting proxied call: API_BASE is not configured")
            }
            ProxyError::Unreachable { service, source } => {
                tracing::error!(service, error = %source, "Upstream HR API unreachable")
            }
            ProxyError::Internal(err) => tracing::error!("Internal server error: {:?}", err),
            ProxyError::InvalidJson => {}
        }

        let body = Json(ErrorResponse {
            detail: self.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn response_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json")
    }

    #[tokio::test]
    async fn proxy_error_maps_status_and_detail() {
        let response = ProxyError::NotConfigured.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = response_json(response).await;
        assert_eq!(json["detail"], "API base URL is not configured.");

        let response = ProxyError::InvalidJson.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = response_json(response).await;
        assert_eq!(json["detail"], "Invalid JSON body.");
    }

    #[tokio::test]
    async fn internal_error_hides_cause() {
        let response = ProxyError::Internal(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = response_json(response).await;
        assert_eq!(json["detail"], "Internal server error");
    }
}

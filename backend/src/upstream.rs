use axum::{
    body::Bytes,
    http::{header, HeaderValue, Method, StatusCode},
};
use reqwest::Client;
use serde_json::Value;
use std::time::{Duration, Instant};
use url::Url;

use crate::error::ProxyError;

const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Everything about an upstream reply that is handed back to the browser.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub content_type: HeaderValue,
    pub body: Bytes,
}

/// A single proxied call: target resource plus optional query and JSON body.
#[derive(Debug, Clone)]
pub struct UpstreamRequest<'a> {
    pub method: Method,
    pub segments: &'a [&'a str],
    pub query: Option<&'a str>,
    pub body: Option<Value>,
    pub request_id: Option<&'a str>,
    pub service: &'static str,
}

#[derive(Clone)]
pub struct UpstreamClient {
    client: Client,
    base: Option<Url>,
}

impl UpstreamClient {
    pub fn new(base: Option<Url>, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent("hr-dashboard-backend/1.0")
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to initialize HTTP client: {}", e))?;
        Ok(Self { client, base })
    }

    pub fn is_configured(&self) -> bool {
        self.base.is_some()
    }

    pub fn resource_url(&self, segments: &[&str], query: Option<&str>) -> Result<Url, ProxyError> {
        let mut url = self.base.clone().ok_or(ProxyError::NotConfigured)?;
        url.path_segments_mut()
            .map_err(|_| ProxyError::Internal(anyhow::anyhow!("API base URL cannot be a base")))?
            .pop_if_empty()
            .extend(segments);
        url.set_query(query.filter(|q| !q.is_empty()));
        Ok(url)
    }

    pub async fn forward(&self, request: UpstreamRequest<'_>) -> Result<UpstreamResponse, ProxyError> {
        let url = self.resource_url(request.segments, request.query)?;
        let started_at = Instant::now();

        tracing::debug!(method = %request.method, url = %url, "-> upstream");

        let mut builder = self
            .client
            .request(request.method.clone(), url.clone())
            .header(header::CACHE_CONTROL, "no-store");
        if let Some(id) = request.request_id {
            builder = builder.header("x-request-id", id);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let service = request.service;
        let unreachable = |source: reqwest::Error| ProxyError::Unreachable { service, source };
        let response = builder.send().await.map_err(unreachable)?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .cloned()
            .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_CONTENT_TYPE));
        let body = response.bytes().await.map_err(unreachable)?;

        tracing::debug!(
            method = %request.method,
            url = %url,
            status = status.as_u16(),
            latency_ms = started_at.elapsed().as_millis() as u64,
            "<- upstream"
        );

        Ok(UpstreamResponse {
            status,
            content_type,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> UpstreamClient {
        UpstreamClient::new(Some(Url::parse(base).unwrap()), Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn resource_url_appends_segments_to_base_path() {
        let url = client("http://hr.local/api/v1/")
            .resource_url(&["attendance", "a-1"], None)
            .unwrap();
        assert_eq!(url.as_str(), "http://hr.local/api/v1/attendance/a-1");
    }

    #[test]
    fn resource_url_encodes_ids_and_keeps_query() {
        let url = client("http://hr.local")
            .resource_url(&["employees", "a b/c"], Some("status=present"))
            .unwrap();
        assert_eq!(url.path(), "/employees/a%20b%2Fc");
        assert_eq!(url.query(), Some("status=present"));
    }

    #[test]
    fn resource_url_requires_configuration() {
        let client = UpstreamClient::new(None, Duration::from_secs(1)).unwrap();
        assert!(!client.is_configured());
        assert!(matches!(
            client.resource_url(&["employees"], None),
            Err(ProxyError::NotConfigured)
        ));
    }
}

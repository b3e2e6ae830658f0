use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{header, Client, Method, Request};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{api::types::*, config::ClientConfig};

#[cfg(test)]
use std::{cell::RefCell, sync::Arc};

const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Status and body of a finished call; headers are not needed by callers.
struct RawResponse {
    status: u16,
    body: Vec<u8>,
}

impl RawResponse {
    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn json_or_null(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or(Value::Null)
    }
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn read_url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base_url, path)
    }

    fn write_url(&self, path: &str) -> String {
        format!("{}{}", self.config.proxy_base_url, path)
    }

    async fn send(&self, request: Request) -> Result<RawResponse, ApiError> {
        let method = request.method().clone();
        let url = request.url().to_string();
        let started_at = chrono::Utc::now();
        log::debug!("[HR API] -> {} {}", method, url);

        let result = self.dispatch(request).await;
        let elapsed_ms = (chrono::Utc::now() - started_at).num_milliseconds();
        match &result {
            Ok(response) if response.is_success() => {
                log::debug!("[HR API] <- {} {} ({}ms)", response.status, url, elapsed_ms)
            }
            Ok(response) => log::error!("[HR API] !! {} {} ({}ms)", response.status, url, elapsed_ms),
            Err(err) => log::error!("[HR API] xx {} ({}ms) {}", url, elapsed_ms, err),
        }
        result
    }

    async fn dispatch(&self, request: Request) -> Result<RawResponse, ApiError> {
        #[cfg(test)]
        {
            if let Some(responder) = find_mock(request.url().as_str()) {
                let mock = responder.respond(&request)?;
                return Ok(RawResponse {
                    status: mock.status,
                    body: mock
                        .body
                        .map(|body| body.to_string().into_bytes())
                        .unwrap_or_default(),
                });
            }
        }

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to read response: {}", e)))?;
        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }

    fn build(
        &self,
        method: Method,
        url: &str,
        body: Option<&impl Serialize>,
    ) -> Result<Request, ApiError> {
        let mut builder = self
            .client
            .request(method, url)
            .header(header::CACHE_CONTROL, "no-store")
            .header(header::ACCEPT, "application/json");
        if let Some(body) = body {
            builder = builder.json(body);
        }
        builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Invalid request: {}", e)))
    }

    async fn read<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.build(Method::GET, &self.read_url(path), None::<&()>)?;
        let response = self.send(request).await?;
        if !response.is_success() {
            return Err(ApiError::http_status(path, response.status));
        }
        serde_json::from_slice(&response.body)
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    }

    async fn write<B: Serialize, T: DeserializeOwned + Default>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let request = self.build(method, &self.write_url(path), body)?;
        let response = self.send(request).await?;
        let payload = response.json_or_null();
        if !response.is_success() {
            return Err(ApiError::from_body(&payload, fallback));
        }
        // Writes may answer with an empty or partial body.
        Ok(serde_json::from_value(payload).unwrap_or_default())
    }

    pub async fn get_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.read("/employees").await
    }

    pub async fn get_attendance(&self, filter: &AttendanceFilter) -> Result<Vec<Attendance>, ApiError> {
        let pairs = filter.query_pairs();
        let path = if pairs.is_empty() {
            "/attendance".to_string()
        } else {
            let query = pairs
                .iter()
                .map(|(key, value)| format!("{}={}", key, encode(value)))
                .collect::<Vec<_>>()
                .join("&");
            format!("/attendance?{}", query)
        };
        self.read(&path).await
    }

    pub async fn create_employee(&self, payload: &EmployeePayload) -> Result<EmployeeEcho, ApiError> {
        self.write(Method::POST, "/employees", Some(payload), "Failed to add employee.")
            .await
    }

    pub async fn update_employee(
        &self,
        id: &str,
        payload: &EmployeePayload,
    ) -> Result<EmployeeEcho, ApiError> {
        let path = format!("/employees/{}", encode(id));
        self.write(Method::PUT, &path, Some(payload), "Failed to update employee.")
            .await
    }

    pub async fn delete_employee(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/employees/{}", encode(id));
        self.write::<(), Value>(Method::DELETE, &path, None, "Failed to delete employee.")
            .await
            .map(|_| ())
    }

    pub async fn create_attendance(&self, payload: &AttendanceCreate) -> Result<AttendanceEcho, ApiError> {
        self.write(Method::POST, "/attendance", Some(payload), "Failed to update attendance.")
            .await
    }

    pub async fn update_attendance(
        &self,
        id: &str,
        payload: &AttendanceUpdate,
    ) -> Result<AttendanceEcho, ApiError> {
        let path = format!("/attendance/{}", encode(id));
        self.write(Method::PUT, &path, Some(payload), "Failed to update attendance.")
            .await
    }
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

#[cfg(test)]
#[derive(Clone, Debug)]
pub struct MockResponse {
    pub status: u16,
    pub body: Option<Value>,
}

#[cfg(test)]
impl MockResponse {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: Some(body),
        }
    }

    pub fn empty(status: u16) -> Self {
        Self { status, body: None }
    }
}

#[cfg(test)]
pub trait TestResponder {
    fn respond(&self, request: &Request) -> Result<MockResponse, ApiError>;
}

#[cfg(test)]
thread_local! {
    static MOCKS: RefCell<Vec<(String, Arc<dyn TestResponder>)>> = RefCell::new(Vec::new());
}

/// Routes every request whose URL starts with `prefix` to `responder`.
#[cfg(test)]
pub fn register_mock(prefix: String, responder: Arc<dyn TestResponder>) {
    MOCKS.with(|mocks| {
        let mut mocks = mocks.borrow_mut();
        mocks.retain(|(existing, _)| existing != &prefix);
        mocks.push((prefix, responder));
    });
}

#[cfg(test)]
fn find_mock(url: &str) -> Option<Arc<dyn TestResponder>> {
    MOCKS.with(|mocks| {
        mocks
            .borrow()
            .iter()
            .rev()
            .find(|(prefix, _)| url.starts_with(prefix.as_str()))
            .map(|(_, responder)| responder.clone())
    })
}

#![allow(dead_code)]
use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, Method, Request, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use hr_dashboard_backend::{build_router, config::Config, state::AppState};
use serde_json::{json, Value};
use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};
use tower::ServiceExt;
use url::Url;

/// One call received by the fake HR API.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub body: String,
    pub content_type: Option<String>,
    pub request_id: Option<String>,
}

#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<RecordedCall>>>);

impl CallLog {
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.0.lock().expect("lock call log").clone()
    }

    fn push(&self, call: RecordedCall) {
        self.0.lock().expect("lock call log").push(call);
    }
}

pub struct FakeUpstream {
    pub base: Url,
    pub log: CallLog,
}

/// Starts an in-process stand-in for the HR API on an ephemeral port.
pub async fn spawn_fake_upstream() -> FakeUpstream {
    let log = CallLog::default();
    let log_for_handler = log.clone();
    let router = Router::new().fallback(move |method: Method, uri: Uri, headers: HeaderMap, body: Bytes| {
        let log = log_for_handler.clone();
        async move { respond(log, method, uri, headers, body) }
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake upstream");
    let addr = listener.local_addr().expect("fake upstream addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve fake upstream");
    });

    FakeUpstream {
        base: Url::parse(&format!("http://{}", addr)).expect("fake upstream url"),
        log,
    }
}

fn respond(log: CallLog, method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string())
    };
    log.push(RecordedCall {
        method: method.clone(),
        path: uri.path().to_string(),
        query: uri.query().map(|q| q.to_string()),
        body: String::from_utf8_lossy(&body).to_string(),
        content_type: header("content-type"),
        request_id: header("x-request-id"),
    });

    let parsed: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let segments: Vec<&str> = uri.path().trim_matches('/').split('/').collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", ["employees"]) => Json(json!([employee_json("e-1", "Ann Lee")])).into_response(),
        ("POST", ["employees"]) => {
            let mut created = parsed;
            created["id"] = json!("e-new");
            created["created_at"] = json!("2024-05-01T09:00:00Z");
            (StatusCode::CREATED, Json(created)).into_response()
        }
        ("PUT", ["employees", _id]) if parsed["full_name"] == "" => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "detail": [{ "msg": "full_name must not be empty" }] })),
        )
            .into_response(),
        ("PUT", ["employees", id]) => {
            let mut updated = parsed;
            updated["id"] = json!(id);
            Json(updated).into_response()
        }
        ("DELETE", ["employees", _id]) => StatusCode::NO_CONTENT.into_response(),
        ("GET", ["attendance"]) => Json(json!([])).into_response(),
        ("POST", ["attendance"]) => {
            let mut created = parsed;
            created["id"] = json!("att-new");
            created["created_at"] = json!("2024-05-01T09:00:00Z");
            (StatusCode::CREATED, Json(created)).into_response()
        }
        ("PUT", ["attendance", "missing"]) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "detail": "Attendance record not found" })),
        )
            .into_response(),
        ("PUT", ["attendance", id]) => Json(json!({
            "id": id,
            "employee_id": "e-1",
            "attendance_date": "2024-05-01",
            "status": parsed["status"],
            "created_at": "2024-05-01T09:00:00Z"
        }))
        .into_response(),
        _ => (
            StatusCode::IM_A_TEAPOT,
            [("content-type", "text/plain")],
            "unexpected call",
        )
            .into_response(),
    }
}

pub fn employee_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "employee_id": "EMP-001",
        "full_name": name,
        "email": "ann@example.com",
        "department": "Engineering",
        "created_at": "2024-04-01T08:00:00Z"
    })
}

pub fn app_with_base(base: Option<Url>) -> Router {
    build_router(AppState::new(Config::with_api_base(base)).expect("build app state"))
}

/// A base address nothing listens on, for transport failures.
pub async fn unreachable_base() -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe");
    let addr: SocketAddr = listener.local_addr().expect("probe addr");
    drop(listener);
    Url::parse(&format!("http://{}", addr)).expect("unreachable url")
}

pub fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request")
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("build request")
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Bytes) {
    let response = app.oneshot(request).await.expect("router response");
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    (status, headers, body)
}

pub fn body_json(bytes: &Bytes) -> Value {
    serde_json::from_slice(bytes).expect("json body")
}

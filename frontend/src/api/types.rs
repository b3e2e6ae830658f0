use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    /// Human readable code shown in tables; uniqueness is not enforced here.
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<String>,
    /// Older records carry the type under this key instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employ_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Employee {
    pub fn employment_kind(&self) -> Option<&str> {
        self.employment_type
            .as_deref()
            .or(self.employ_type.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePayload {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

impl From<&Employee> for EmployeePayload {
    fn from(employee: &Employee) -> Self {
        Self {
            employee_id: employee.employee_id.clone(),
            full_name: employee.full_name.clone(),
            email: employee.email.clone(),
            department: employee.department.clone(),
        }
    }
}

/// Whatever subset of an employee the backend echoes back after a write.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeEcho {
    pub id: Option<String>,
    pub employee_id: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    #[serde(alias = "active")]
    Present,
    #[serde(alias = "leave")]
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendance {
    pub id: String,
    pub employee_id: String,
    pub attendance_date: String,
    pub status: AttendanceStatus,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceCreate {
    pub employee_id: String,
    pub attendance_date: String,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceUpdate {
    pub status: AttendanceStatus,
}

/// Partial attendance record as returned by a create/update call.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttendanceEcho {
    pub id: Option<String>,
    pub employee_id: Option<String>,
    pub attendance_date: Option<String>,
    pub status: Option<AttendanceStatus>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceFilter {
    pub employee_id: Option<String>,
    pub attendance_date: Option<String>,
    pub status: Option<AttendanceStatus>,
}

impl AttendanceFilter {
    /// Query pairs for the non-empty fields, in a stable order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(id) = self.employee_id.as_deref().filter(|v| !v.trim().is_empty()) {
            pairs.push(("employee_id", id.to_string()));
        }
        if let Some(date) = self
            .attendance_date
            .as_deref()
            .filter(|v| !v.trim().is_empty())
        {
            pairs.push(("attendance_date", date.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn http_status(path: &str, status: u16) -> Self {
        Self {
            error: format!("Request to {} failed with status {}", path, status),
            code: "HTTP_STATUS".to_string(),
            details: Some(serde_json::json!({ "path": path, "status": status })),
        }
    }

    /// Builds an error from a backend body of the form
    /// `{ "detail": string | [string | { "msg": string }] }`.
    pub fn from_body(body: &Value, fallback: &str) -> Self {
        Self {
            error: normalize_api_error(body, fallback),
            code: "API_ERROR".to_string(),
            details: body.get("detail").cloned(),
        }
    }
}

pub fn normalize_api_error(body: &Value, fallback: &str) -> String {
    match body.get("detail") {
        Some(Value::String(detail)) => detail.clone(),
        Some(Value::Array(items)) => {
            let joined = items
                .iter()
                .filter_map(|item| match item {
                    Value::String(text) => Some(text.as_str()),
                    Value::Object(map) => map.get("msg").and_then(Value::as_str),
                    _ => None,
                })
                .filter(|text| !text.is_empty())
                .collect::<Vec<_>>()
                .join(", ");
            if joined.is_empty() {
                fallback.to_string()
            } else {
                joined
            }
        }
        _ => fallback.to_string(),
    }
}

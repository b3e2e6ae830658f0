use crate::api::{ApiClient, ApiError, Attendance, AttendanceEcho, AttendanceFilter, Employee};
use crate::state::directory::AttendanceMutation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collections {
    pub employees: Vec<Employee>,
    pub attendance: Vec<Attendance>,
}

/// Fetches both collections concurrently; either failure fails the load.
pub async fn fetch_collections(api: &ApiClient) -> Result<Collections, ApiError> {
    let filter = AttendanceFilter::default();
    let (employees, attendance) =
        futures::try_join!(api.get_employees(), api.get_attendance(&filter))?;
    Ok(Collections {
        employees,
        attendance,
    })
}

pub async fn submit_attendance(
    api: &ApiClient,
    mutation: &AttendanceMutation,
) -> Result<AttendanceEcho, ApiError> {
    match mutation {
        AttendanceMutation::Create(payload) => api.create_attendance(payload).await,
        AttendanceMutation::Update { id, payload } => api.update_attendance(id, payload).await,
    }
}

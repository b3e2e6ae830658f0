use crate::api::{ApiClient, ApiError, Employee, EmployeeEcho, EmployeePayload};

pub async fn fetch_employees(api: &ApiClient) -> Result<Vec<Employee>, ApiError> {
    api.get_employees().await
}

pub async fn save_employee(
    api: &ApiClient,
    id: &str,
    payload: &EmployeePayload,
) -> Result<EmployeeEcho, ApiError> {
    api.update_employee(id, payload).await
}

pub async fn add_employee(api: &ApiClient, payload: &EmployeePayload) -> Result<EmployeeEcho, ApiError> {
    api.create_employee(payload).await
}

pub async fn remove_employee(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete_employee(id).await
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{Attendance, AttendanceStatus, Employee};

    pub fn employee(id: &str, name: &str, department: &str) -> Employee {
        Employee {
            id: id.into(),
            employee_id: format!("EMP-{}", id),
            full_name: name.into(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            department: department.into(),
            created_at: "2024-04-01T09:00:00Z".into(),
            employment_type: None,
            employ_type: None,
            role: None,
            phone: None,
        }
    }

    pub fn attendance(id: &str, employee_id: &str, date: &str, status: AttendanceStatus) -> Attendance {
        Attendance {
            id: id.into(),
            employee_id: employee_id.into(),
            attendance_date: date.into(),
            status,
            created_at: format!("{}T08:00:00Z", date),
        }
    }
}

use std::collections::HashSet;

use crate::api::{ApiError, Employee, EmployeeEcho, EmployeePayload};
use crate::state::feedback::Feedback;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill employee ID, name, email, and department.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeField {
    EmployeeId,
    FullName,
    Email,
    Department,
}

impl EmployeeField {
    pub const ALL: [EmployeeField; 4] = [
        EmployeeField::EmployeeId,
        EmployeeField::FullName,
        EmployeeField::Email,
        EmployeeField::Department,
    ];

    pub fn placeholder(&self) -> &'static str {
        match self {
            EmployeeField::EmployeeId => "Employee ID",
            EmployeeField::FullName => "Full name",
            EmployeeField::Email => "Email",
            EmployeeField::Department => "Department",
        }
    }

    pub fn read<'a>(&self, payload: &'a EmployeePayload) -> &'a str {
        match self {
            EmployeeField::EmployeeId => &payload.employee_id,
            EmployeeField::FullName => &payload.full_name,
            EmployeeField::Email => &payload.email,
            EmployeeField::Department => &payload.department,
        }
    }

    pub fn write(&self, payload: &mut EmployeePayload, value: String) {
        match self {
            EmployeeField::EmployeeId => payload.employee_id = value,
            EmployeeField::FullName => payload.full_name = value,
            EmployeeField::Email => payload.email = value,
            EmployeeField::Department => payload.department = value,
        }
    }
}

/// Client-side copy of the employee list with edit, create and delete state.
#[derive(Debug, Clone, Default)]
pub struct RosterState {
    pub rows: Vec<Employee>,
    pub query: String,
    pub viewing_id: Option<String>,
    pub editing_id: Option<String>,
    pub form: Option<EmployeePayload>,
    pub show_create_form: bool,
    pub create_form: EmployeePayload,
    pub creating: bool,
    pub feedback: Option<Feedback>,
    saving: HashSet<String>,
    deleting: HashSet<String>,
}

impl RosterState {
    pub fn new(rows: Vec<Employee>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    /// Swaps in a freshly fetched list, closing panels whose row disappeared.
    pub fn replace_rows(&mut self, rows: Vec<Employee>) {
        self.rows = rows;
        let present = |id: &Option<String>| {
            id.as_deref()
                .is_some_and(|id| self.rows.iter().any(|employee| employee.id == id))
        };
        let keep_view = present(&self.viewing_id);
        let keep_edit = present(&self.editing_id);
        if !keep_view {
            self.viewing_id = None;
        }
        if !keep_edit {
            self.editing_id = None;
            self.form = None;
        }
    }

    pub fn filtered_rows(&self) -> Vec<Employee> {
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return self.rows.clone();
        }
        self.rows
            .iter()
            .filter(|employee| searchable_fields(employee).any(|field| field.to_lowercase().contains(&needle)))
            .cloned()
            .collect()
    }

    pub fn count_label(&self) -> String {
        let total = self.rows.len();
        let suffix = if total == 1 { "" } else { "s" };
        if self.query.trim().is_empty() {
            format!("{} employee{}", total, suffix)
        } else {
            format!("{} of {} employee{}", self.filtered_rows().len(), total, suffix)
        }
    }

    pub fn is_saving(&self, id: &str) -> bool {
        self.saving.contains(id)
    }

    pub fn is_deleting(&self, id: &str) -> bool {
        self.deleting.contains(id)
    }

    pub fn toggle_view(&mut self, id: &str) {
        if self.viewing_id.as_deref() == Some(id) {
            self.viewing_id = None;
        } else {
            self.viewing_id = Some(id.to_string());
        }
    }

    pub fn start_edit(&mut self, id: &str) {
        if let Some(employee) = self.rows.iter().find(|employee| employee.id == id) {
            self.form = Some(EmployeePayload::from(employee));
            self.editing_id = Some(id.to_string());
            self.feedback = None;
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
        self.form = None;
        self.feedback = None;
    }

    pub fn set_form_field(&mut self, field: EmployeeField, value: String) {
        if let Some(form) = self.form.as_mut() {
            field.write(form, value);
        }
    }

    /// Payload to PUT for the row being edited, if any.
    pub fn begin_save(&mut self, id: &str) -> Option<EmployeePayload> {
        if self.editing_id.as_deref() != Some(id) {
            return None;
        }
        let form = self.form.clone()?;
        self.saving.insert(id.to_string());
        self.feedback = None;
        Some(form)
    }

    pub fn complete_save(
        &mut self,
        id: &str,
        sent: &EmployeePayload,
        result: Result<EmployeeEcho, ApiError>,
    ) {
        self.saving.remove(id);
        match result {
            Ok(echo) => {
                if let Some(employee) = self.rows.iter_mut().find(|employee| employee.id == id) {
                    employee.employee_id = echo.employee_id.unwrap_or_else(|| sent.employee_id.clone());
                    employee.full_name = echo.full_name.unwrap_or_else(|| sent.full_name.clone());
                    employee.email = echo.email.unwrap_or_else(|| sent.email.clone());
                    employee.department = echo.department.unwrap_or_else(|| sent.department.clone());
                }
                if self.editing_id.as_deref() == Some(id) {
                    self.editing_id = None;
                    self.form = None;
                }
                self.feedback = Some(Feedback::success("Employee updated successfully."));
            }
            Err(err) => self.feedback = Some(Feedback::error(err.error)),
        }
    }

    pub fn toggle_create_form(&mut self) {
        self.show_create_form = !self.show_create_form;
        self.feedback = None;
    }

    pub fn cancel_create(&mut self) {
        self.show_create_form = false;
        self.create_form = EmployeePayload::default();
        self.feedback = None;
    }

    pub fn set_create_field(&mut self, field: EmployeeField, value: String) {
        field.write(&mut self.create_form, value);
    }

    /// Validates the create form; on success the roster is marked as creating.
    pub fn begin_create(&mut self) -> Option<EmployeePayload> {
        let missing = EmployeeField::ALL
            .iter()
            .any(|field| field.read(&self.create_form).trim().is_empty());
        if missing {
            self.feedback = Some(Feedback::error(REQUIRED_FIELDS_MESSAGE));
            return None;
        }
        self.creating = true;
        self.feedback = None;
        Some(self.create_form.clone())
    }

    pub fn complete_create(&mut self, sent: &EmployeePayload, result: Result<EmployeeEcho, ApiError>) {
        self.creating = false;
        match result {
            Ok(echo) => {
                let created = Employee {
                    id: echo.id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
                    employee_id: echo.employee_id.unwrap_or_else(|| sent.employee_id.clone()),
                    full_name: echo.full_name.unwrap_or_else(|| sent.full_name.clone()),
                    email: echo.email.unwrap_or_else(|| sent.email.clone()),
                    department: echo.department.unwrap_or_else(|| sent.department.clone()),
                    created_at: echo
                        .created_at
                        .unwrap_or_else(|| chrono::Utc::now().to_rfc3339()),
                    employment_type: None,
                    employ_type: None,
                    role: None,
                    phone: None,
                };
                self.rows.insert(0, created);
                self.create_form = EmployeePayload::default();
                self.show_create_form = false;
                self.feedback = Some(Feedback::success("Employee added successfully."));
            }
            Err(err) => self.feedback = Some(Feedback::error(err.error)),
        }
    }

    pub fn begin_delete(&mut self, id: &str) {
        self.deleting.insert(id.to_string());
        self.feedback = None;
    }

    pub fn complete_delete(&mut self, id: &str, result: Result<(), ApiError>) {
        self.deleting.remove(id);
        match result {
            Ok(()) => {
                self.rows.retain(|employee| employee.id != id);
                if self.viewing_id.as_deref() == Some(id) {
                    self.viewing_id = None;
                }
                if self.editing_id.as_deref() == Some(id) {
                    self.editing_id = None;
                    self.form = None;
                }
                self.feedback = Some(Feedback::success("Employee deleted successfully."));
            }
            Err(err) => self.feedback = Some(Feedback::error(err.error)),
        }
    }

    pub fn dismiss_feedback(&mut self) {
        self.feedback = None;
    }
}

fn searchable_fields(employee: &Employee) -> impl Iterator<Item = &str> {
    [
        Some(employee.employee_id.as_str()),
        Some(employee.full_name.as_str()),
        Some(employee.email.as_str()),
        Some(employee.department.as_str()),
        employee.employment_kind(),
        employee.role.as_deref(),
        employee.phone.as_deref(),
    ]
    .into_iter()
    .flatten()
}

use std::collections::HashMap;

use crate::api::{
    ApiError, Attendance, AttendanceCreate, AttendanceEcho, AttendanceStatus, AttendanceUpdate,
    Employee,
};
use crate::utils::hr::{
    availability_of, build_status_map, count_availability, records_for_date, today_iso_date,
    Availability, AvailabilityCounts, StatusMap,
};

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DirectoryTab {
    #[default]
    All,
    Present,
    Absent,
}

impl DirectoryTab {
    pub const ALL: [DirectoryTab; 3] = [DirectoryTab::All, DirectoryTab::Present, DirectoryTab::Absent];

    pub fn label(&self) -> &'static str {
        match self {
            DirectoryTab::All => "All",
            DirectoryTab::Present => "Present",
            DirectoryTab::Absent => "Absent",
        }
    }

    fn availability(&self) -> Option<Availability> {
        match self {
            DirectoryTab::All => None,
            DirectoryTab::Present => Some(Availability::Present),
            DirectoryTab::Absent => Some(Availability::Absent),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryRow {
    pub employee: Employee,
    pub availability: Availability,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttendanceMutation {
    Create(AttendanceCreate),
    Update { id: String, payload: AttendanceUpdate },
}

/// Handed out when a row starts a status change; only the newest ticket of a
/// row may write its result back.
#[derive(Debug, Clone)]
pub struct AttendanceTicket {
    pub employee_id: String,
    pub date: String,
    pub status: AttendanceStatus,
    pub token: u64,
    pub mutation: AttendanceMutation,
    existing: Option<Attendance>,
}

#[derive(Debug, Clone)]
pub struct DirectoryState {
    pub employees: Vec<Employee>,
    pub attendance: Vec<Attendance>,
    pub query: String,
    pub date: String,
    pub tab: DirectoryTab,
    pub page: usize,
    pub page_size: usize,
    pub show_filters: bool,
    pub mutation_error: Option<String>,
    in_flight: HashMap<String, u64>,
    next_token: u64,
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new(), today_iso_date())
    }
}

impl DirectoryState {
    pub fn new(employees: Vec<Employee>, attendance: Vec<Attendance>, date: String) -> Self {
        Self {
            employees,
            attendance,
            query: String::new(),
            date,
            tab: DirectoryTab::All,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            show_filters: true,
            mutation_error: None,
            in_flight: HashMap::new(),
            next_token: 0,
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    pub fn set_date(&mut self, date: impl Into<String>) {
        self.date = date.into();
        self.page = 1;
    }

    pub fn set_tab(&mut self, tab: DirectoryTab) {
        self.tab = tab;
        self.page = 1;
    }

    pub fn status_map(&self) -> StatusMap {
        build_status_map(&self.attendance, &self.date)
    }

    pub fn counts(&self) -> AvailabilityCounts {
        count_availability(&self.employees, &self.status_map())
    }

    pub fn searched_rows(&self) -> Vec<DirectoryRow> {
        let map = self.status_map();
        let needle = self.query.trim().to_lowercase();
        self.employees
            .iter()
            .filter(|employee| needle.is_empty() || matches_query(employee, &needle))
            .map(|employee| DirectoryRow {
                employee: employee.clone(),
                availability: availability_of(&map, &employee.id),
            })
            .collect()
    }

    pub fn filtered_rows(&self) -> Vec<DirectoryRow> {
        let rows = self.searched_rows();
        match self.tab.availability() {
            Some(wanted) if self.show_filters => rows
                .into_iter()
                .filter(|row| row.availability == wanted)
                .collect(),
            _ => rows,
        }
    }

    pub fn page_count(&self) -> usize {
        page_count(self.filtered_rows().len(), self.page_size)
    }

    pub fn current_page(&self) -> usize {
        self.page.clamp(1, self.page_count())
    }

    pub fn paged_rows(&self) -> Vec<DirectoryRow> {
        let size = self.page_size.max(1);
        let start = (self.current_page() - 1) * size;
        self.filtered_rows().into_iter().skip(start).take(size).collect()
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.page_count());
    }

    /// All counts the searched rows; the status tabs count every employee.
    pub fn tab_badge(&self, tab: DirectoryTab) -> usize {
        match tab.availability() {
            None => self.searched_rows().len(),
            Some(availability) => self.counts().get(availability),
        }
    }

    pub fn is_busy(&self, employee_id: &str) -> bool {
        self.in_flight.contains_key(employee_id)
    }

    pub fn dismiss_error(&mut self) {
        self.mutation_error = None;
    }

    /// Plans a create or an update for the selected date and marks the row busy.
    pub fn begin_attendance_update(
        &mut self,
        employee_id: &str,
        status: AttendanceStatus,
    ) -> AttendanceTicket {
        let existing = records_for_date(&self.attendance, &self.date)
            .get(employee_id)
            .map(|record| (*record).clone());
        let mutation = match &existing {
            Some(record) => AttendanceMutation::Update {
                id: record.id.clone(),
                payload: AttendanceUpdate { status },
            },
            None => AttendanceMutation::Create(AttendanceCreate {
                employee_id: employee_id.to_string(),
                attendance_date: self.date.clone(),
                status,
            }),
        };

        self.next_token += 1;
        self.in_flight.insert(employee_id.to_string(), self.next_token);
        self.mutation_error = None;

        AttendanceTicket {
            employee_id: employee_id.to_string(),
            date: self.date.clone(),
            status,
            token: self.next_token,
            mutation,
            existing,
        }
    }

    /// Returns `false` when the ticket was superseded and the result dropped.
    pub fn complete_attendance_update(
        &mut self,
        ticket: &AttendanceTicket,
        result: Result<AttendanceEcho, ApiError>,
    ) -> bool {
        if self.in_flight.get(&ticket.employee_id) != Some(&ticket.token) {
            log::debug!(
                "Dropping stale attendance response for {} (token {})",
                ticket.employee_id,
                ticket.token
            );
            return false;
        }
        self.in_flight.remove(&ticket.employee_id);

        match result {
            Ok(echo) => {
                let saved = saved_record(ticket, echo);
                let target = ticket
                    .existing
                    .as_ref()
                    .map(|record| record.id.clone())
                    .unwrap_or_else(|| saved.id.clone());
                match self.attendance.iter_mut().find(|record| record.id == target) {
                    Some(slot) => *slot = saved,
                    None => self.attendance.push(saved),
                }
            }
            Err(err) => self.mutation_error = Some(err.error),
        }
        true
    }

    /// Swaps in freshly fetched collections; responses to earlier tickets are ignored.
    pub fn replace_collections(&mut self, employees: Vec<Employee>, attendance: Vec<Attendance>) {
        self.employees = employees;
        self.attendance = attendance;
        self.in_flight.clear();
        self.mutation_error = None;
    }
}

/// Matches against name, email, code and department joined by spaces, so a
/// query may run across adjacent fields.
fn matches_query(employee: &Employee, needle: &str) -> bool {
    [
        employee.full_name.as_str(),
        employee.email.as_str(),
        employee.employee_id.as_str(),
        employee.department.as_str(),
    ]
    .join(" ")
    .to_lowercase()
    .contains(needle)
}

pub fn page_count(rows: usize, page_size: usize) -> usize {
    rows.div_ceil(page_size.max(1)).max(1)
}

fn saved_record(ticket: &AttendanceTicket, echo: AttendanceEcho) -> Attendance {
    let existing = ticket.existing.as_ref();
    Attendance {
        id: echo
            .id
            .or_else(|| existing.map(|record| record.id.clone()))
            .unwrap_or_else(|| format!("{}-{}", ticket.employee_id, ticket.date)),
        employee_id: echo.employee_id.unwrap_or_else(|| ticket.employee_id.clone()),
        attendance_date: echo.attendance_date.unwrap_or_else(|| ticket.date.clone()),
        status: echo.status.unwrap_or(ticket.status),
        created_at: echo
            .created_at
            .or_else(|| existing.map(|record| record.created_at.clone()))
            .unwrap_or_else(|| chrono::Utc::now().to_rfc3339()),
    }
}

use std::collections::HashMap;

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime};

use crate::api::{Attendance, AttendanceStatus, Employee};

/// Shown wherever a date cannot be parsed.
pub const UNKNOWN_DATE: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Availability {
    Present,
    Absent,
    Unknown,
}

impl Availability {
    pub fn label(&self) -> &'static str {
        match self {
            Availability::Present => "Present",
            Availability::Absent => "Absent",
            Availability::Unknown => "No info",
        }
    }
}

impl From<AttendanceStatus> for Availability {
    fn from(status: AttendanceStatus) -> Self {
        match status {
            AttendanceStatus::Present => Availability::Present,
            AttendanceStatus::Absent => Availability::Absent,
        }
    }
}

pub type StatusMap = HashMap<String, Availability>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AvailabilityCounts {
    pub present: usize,
    pub absent: usize,
    pub no_info: usize,
}

impl AvailabilityCounts {
    pub fn get(&self, availability: Availability) -> usize {
        match availability {
            Availability::Present => self.present,
            Availability::Absent => self.absent,
            Availability::Unknown => self.no_info,
        }
    }

    pub fn total(&self) -> usize {
        self.present + self.absent + self.no_info
    }
}

pub fn today_iso_date() -> String {
    to_iso_date(Local::now().date_naive())
}

pub fn to_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn last_n_dates(n: i64) -> Vec<String> {
    last_n_dates_from(Local::now().date_naive(), n)
}

/// `n` consecutive ISO dates, oldest first, ending at `today`.
pub fn last_n_dates_from(today: NaiveDate, n: i64) -> Vec<String> {
    if n <= 0 {
        return Vec::new();
    }
    (0..n)
        .rev()
        .filter_map(|offset| today.checked_sub_signed(Duration::days(offset)))
        .map(to_iso_date)
        .collect()
}

pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.naive_utc());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Whether `candidate`, seen after `current`, should replace it.
fn supersedes(candidate: &Attendance, current: &Attendance) -> bool {
    match (
        parse_timestamp(&candidate.created_at),
        parse_timestamp(&current.created_at),
    ) {
        (Some(new), Some(old)) => new >= old,
        _ => true,
    }
}

/// The effective record per employee on `date`.
pub fn records_for_date<'a>(records: &'a [Attendance], date: &str) -> HashMap<&'a str, &'a Attendance> {
    let mut winners: HashMap<&'a str, &'a Attendance> = HashMap::new();
    for record in records.iter().filter(|r| r.attendance_date == date) {
        let replace = winners
            .get(record.employee_id.as_str())
            .map_or(true, |current| supersedes(record, current));
        if replace {
            winners.insert(record.employee_id.as_str(), record);
        }
    }
    winners
}

pub fn build_status_map(records: &[Attendance], date: &str) -> StatusMap {
    records_for_date(records, date)
        .into_iter()
        .map(|(employee_id, record)| (employee_id.to_string(), record.status.into()))
        .collect()
}

pub fn availability_of(map: &StatusMap, employee_id: &str) -> Availability {
    map.get(employee_id).copied().unwrap_or(Availability::Unknown)
}

pub fn count_availability(employees: &[Employee], map: &StatusMap) -> AvailabilityCounts {
    employees
        .iter()
        .fold(AvailabilityCounts::default(), |mut counts, employee| {
            match availability_of(map, &employee.id) {
                Availability::Present => counts.present += 1,
                Availability::Absent => counts.absent += 1,
                Availability::Unknown => counts.no_info += 1,
            }
            counts
        })
}

pub fn parse_display_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
        .or_else(|| parse_timestamp(value).map(|dt| dt.date()))
}

pub fn format_display_date(value: &str) -> String {
    parse_display_date(value)
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| UNKNOWN_DATE.to_string())
}

pub fn short_date_label(value: &str) -> String {
    parse_display_date(value)
        .map(|date| date.format("%b %-d").to_string())
        .unwrap_or_else(|| UNKNOWN_DATE.to_string())
}

pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

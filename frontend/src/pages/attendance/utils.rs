use crate::api::AttendanceRecord;
use crate::utils::time::worked_duration;
use chrono::{Datelike, NaiveDate};

pub const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// Month and year the history table is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryPeriod {
    pub month: u32,
    pub year: i32,
}

impl HistoryPeriod {
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            year: date.year(),
        }
    }
}

/// The current year and the two before it, newest first.
pub fn year_options(current: i32) -> Vec<i32> {
    (0..3).map(|back| current - back).collect()
}

pub fn hours_worked(record: &AttendanceRecord) -> String {
    match (&record.punch_in, &record.punch_out) {
        (Some(_), None) => "In progress".to_string(),
        (punch_in, punch_out) => worked_duration(punch_in.as_deref(), punch_out.as_deref())
            .unwrap_or_else(|| "-".to_string()),
    }
}

use chrono::NaiveDate;

use crate::domain::ha::{AvailabilityReport, DataGuardStatus};

/// Length of the availability reporting window ending today.
pub const REPORT_WINDOW_DAYS: u64 = 30;

#[derive(Debug)]
pub struct HaPageData {
    pub status: Option<DataGuardStatus>,
    pub report: Option<AvailabilityReport>,
    pub report_start: NaiveDate,
    pub report_end: NaiveDate,
    /// Sections that failed to load.
    pub errors: Vec<String>,
}

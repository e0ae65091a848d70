//! Calendar override models.
//!
//! Calendar overrides are the holidays and leave days supplied by the external
//! calendar service for a requested date range.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The kind of exception a calendar override declares for a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideKind {
    /// An organization-wide holiday.
    Holiday,
    /// A full day of approved leave.
    Leave,
    /// Half a day of approved leave; the other half is worked.
    HalfLeave,
}

impl std::fmt::Display for OverrideKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverrideKind::Holiday => write!(f, "Holiday"),
            OverrideKind::Leave => write!(f, "Leave"),
            OverrideKind::HalfLeave => write!(f, "Half Leave"),
        }
    }
}

/// A holiday or leave exception for a single calendar day.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::{CalendarOverride, OverrideKind};
/// use chrono::NaiveDate;
///
/// let holiday = CalendarOverride {
///     date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     kind: OverrideKind::Holiday,
/// };
/// assert_eq!(holiday.kind.to_string(), "Holiday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarOverride {
    /// The day the override applies to.
    pub date: NaiveDate,
    /// The kind of override.
    pub kind: OverrideKind,
}

impl CalendarOverride {
    /// Creates a new calendar override.
    pub fn new(date: NaiveDate, kind: OverrideKind) -> Self {
        Self { date, kind }
    }
}

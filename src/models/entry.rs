//! Timesheet entry, per-project timesheet and grid models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Activity, EntryStatus, Project};

/// A single fillable line of a timesheet.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::{Activity, EntryStatus, TimesheetEntry};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let entry = TimesheetEntry::new(
///     NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(),
///     "General",
///     Activity::Present,
///     Decimal::new(8, 0),
/// );
/// assert_eq!(entry.status, EntryStatus::Pending);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetEntry {
    /// The day this entry logs.
    pub date: NaiveDate,
    /// The shift label worked on this day.
    pub shift: String,
    /// The classification of this line.
    pub activity: Activity,
    /// Hours logged against this line.
    pub hours: Decimal,
    /// Approval status.
    pub status: EntryStatus,
}

impl TimesheetEntry {
    /// Creates a new pending entry.
    pub fn new(
        date: NaiveDate,
        shift: impl Into<String>,
        activity: Activity,
        hours: Decimal,
    ) -> Self {
        Self {
            date,
            shift: shift.into(),
            activity,
            hours,
            status: EntryStatus::Pending,
        }
    }
}

/// The entries of one project for the loaded date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectTimesheet {
    /// The project these entries are logged against.
    pub project_id: u64,
    /// Display name of the project.
    pub project_name: String,
    /// Entries in date order; a half-leave day contributes two consecutive entries.
    pub entries: Vec<TimesheetEntry>,
}

impl ProjectTimesheet {
    /// Creates a timesheet for a project from its seeded entries.
    pub fn new(project: &Project, entries: Vec<TimesheetEntry>) -> Self {
        Self {
            project_id: project.id,
            project_name: project.name.clone(),
            entries,
        }
    }

    /// Returns the entries logged on the given date, in grid order.
    pub fn entries_on(&self, date: NaiveDate) -> impl Iterator<Item = &TimesheetEntry> {
        self.entries.iter().filter(move |e| e.date == date)
    }

    /// Returns the `index`-th entry on `date`, if any.
    pub fn entry(&self, date: NaiveDate, index: usize) -> Option<&TimesheetEntry> {
        self.entries_on(date).nth(index)
    }

    /// Returns a mutable reference to the `index`-th entry on `date`, if any.
    pub fn entry_mut(&mut self, date: NaiveDate, index: usize) -> Option<&mut TimesheetEntry> {
        self.entries
            .iter_mut()
            .filter(|e| e.date == date)
            .nth(index)
    }

    /// Sums the hours of every entry.
    pub fn total_hours(&self) -> Decimal {
        self.entries.iter().map(|e| e.hours).sum()
    }
}

/// The full set of per-project timesheets for a loaded date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetGrid {
    /// First day of the loaded range (inclusive).
    pub from: NaiveDate,
    /// Last day of the loaded range (inclusive).
    pub to: NaiveDate,
    /// One timesheet per project, in the order the projects were supplied.
    pub projects: Vec<ProjectTimesheet>,
}

impl TimesheetGrid {
    /// Returns the timesheet of the given project.
    pub fn project(&self, project_id: u64) -> Option<&ProjectTimesheet> {
        self.projects.iter().find(|p| p.project_id == project_id)
    }

    /// Returns the timesheet of the given project for editing.
    pub fn project_mut(&mut self, project_id: u64) -> Option<&mut ProjectTimesheet> {
        self.projects.iter_mut().find(|p| p.project_id == project_id)
    }
}

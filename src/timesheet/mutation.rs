//! Entry editing.
//!
//! Edits are explicit operations rather than "set field by name": changing an
//! entry's activity always re-derives its hours, while changing its shift or
//! its hours touches only that field.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Activity, ProjectTimesheet, TimesheetEntry};

use super::DayHours;

/// A single-field edit to one timesheet entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryEdit {
    /// Replace the shift label. Hours are unchanged.
    SetShift(String),
    /// Replace the activity. Hours are reset to the activity's default.
    SetActivity(Activity),
    /// Replace the hours. Nothing else changes.
    SetHours(Decimal),
}

/// The shift labels an entry may carry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftRules {
    known: Vec<String>,
}

impl ShiftRules {
    /// Restricts shifts to the given labels. An empty list accepts any non-empty label.
    pub fn new(known: Vec<String>) -> Self {
        Self { known }
    }

    /// Checks a shift label against the rules.
    pub fn validate(&self, shift: &str) -> EngineResult<()> {
        let unknown = shift.trim().is_empty()
            || (!self.known.is_empty() && !self.known.iter().any(|s| s == shift));
        if unknown {
            return Err(EngineError::UnknownShift {
                shift: shift.to_string(),
            });
        }
        Ok(())
    }
}

/// Applies an edit to the `index`-th entry on `date` of a project's timesheet.
///
/// The edit is validated before anything is changed; on error the timesheet
/// is left as it was.
///
/// # Errors
///
/// - [`EngineError::EntryNotFound`] if there is no such entry
/// - [`EngineError::UnknownShift`] for a shift the rules do not accept
/// - [`EngineError::InvalidHours`] for negative hours
///
/// # Example
///
/// ```
/// use timesheet_engine::models::{Activity, Project, ProjectTimesheet, TimesheetEntry};
/// use timesheet_engine::timesheet::{apply_edit, DayHours, EntryEdit, ShiftRules};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
/// let mut timesheet = ProjectTimesheet::new(
///     &Project::new(1, "Alpha"),
///     vec![TimesheetEntry::new(day, "General", Activity::Present, Decimal::new(8, 0))],
/// );
///
/// let entry = apply_edit(
///     &mut timesheet,
///     day,
///     0,
///     EntryEdit::SetActivity(Activity::Leave),
///     DayHours::default(),
///     &ShiftRules::default(),
/// )
/// .unwrap();
/// assert_eq!(entry.hours, Decimal::ZERO);
/// ```
pub fn apply_edit<'a>(
    timesheet: &'a mut ProjectTimesheet,
    date: NaiveDate,
    index: usize,
    edit: EntryEdit,
    hours: DayHours,
    shifts: &ShiftRules,
) -> EngineResult<&'a TimesheetEntry> {
    match &edit {
        EntryEdit::SetShift(shift) => shifts.validate(shift)?,
        EntryEdit::SetHours(value) if *value < Decimal::ZERO => {
            return Err(EngineError::InvalidHours { hours: *value });
        }
        _ => {}
    }

    let project_id = timesheet.project_id;
    let entry = timesheet
        .entry_mut(date, index)
        .ok_or(EngineError::EntryNotFound {
            project_id,
            date,
            index,
        })?;

    match edit {
        EntryEdit::SetShift(shift) => entry.shift = shift,
        EntryEdit::SetActivity(activity) => {
            entry.activity = activity;
            entry.hours = hours.default_for(activity);
        }
        EntryEdit::SetHours(value) => entry.hours = value,
    }

    Ok(entry)
}

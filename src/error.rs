//! Error types for the timesheet engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading, editing and
//! saving timesheets.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the timesheet engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use timesheet_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/timesheet.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/timesheet.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or failed validation.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The `to` bound of a date range precedes the `from` bound.
    #[error("Invalid date range: {to} is before {from}")]
    RangeReversed {
        /// The start of the requested range.
        from: NaiveDate,
        /// The end of the requested range.
        to: NaiveDate,
    },

    /// The date range spans more than one calendar month.
    #[error("Date range {from} to {to} exceeds one month (last allowed date is {limit})")]
    RangeExceedsOneMonth {
        /// The start of the requested range.
        from: NaiveDate,
        /// The end of the requested range.
        to: NaiveDate,
        /// The last permissible `to` date for this `from`.
        limit: NaiveDate,
    },

    /// The external calendar lookup failed.
    #[error("Calendar lookup failed: {message}")]
    CalendarLookupFailed {
        /// A description of the failure.
        message: String,
    },

    /// The same project identifier was supplied more than once.
    #[error("Duplicate project identifier: {project_id}")]
    DuplicateProject {
        /// The repeated project identifier.
        project_id: u64,
    },

    /// No project with the given identifier is part of the loaded grid.
    #[error("Project not found in timesheet: {project_id}")]
    ProjectNotFound {
        /// The project identifier that was not found.
        project_id: u64,
    },

    /// No entry exists at the given date and index.
    #[error("No entry #{index} on {date} for project {project_id}")]
    EntryNotFound {
        /// The project whose grid was searched.
        project_id: u64,
        /// The date of the entry.
        date: NaiveDate,
        /// The index among the entries on that date.
        index: usize,
    },

    /// An hours value was negative.
    #[error("Invalid hours value {hours}: hours must not be negative")]
    InvalidHours {
        /// The rejected value.
        hours: Decimal,
    },

    /// A shift label is not one of the configured shifts.
    #[error("Unknown shift: {shift}")]
    UnknownShift {
        /// The rejected shift label.
        shift: String,
    },

    /// An operation needed a grid but none has been loaded.
    #[error("No timesheet grid has been loaded")]
    NoGridLoaded,

    /// A save for this project is already in flight.
    #[error("A save is already in progress for project {project_id}")]
    SaveInProgress {
        /// The project being saved.
        project_id: u64,
    },

    /// The submission boundary failed to accept the payload.
    #[error("Failed to save timesheet for project {project_id}: {message}")]
    SubmissionFailed {
        /// The project being saved.
        project_id: u64,
        /// A description of the failure.
        message: String,
    },

    /// The submission boundary responded, but reported an unsuccessful result.
    #[error("Timesheet for project {project_id} was rejected: {message}")]
    SubmissionRejected {
        /// The project being saved.
        project_id: u64,
        /// The message returned by the boundary.
        message: String,
    },
}

impl EngineError {
    /// Returns true for errors caused by caller input rather than an external failure.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EngineError::RangeReversed { .. }
                | EngineError::RangeExceedsOneMonth { .. }
                | EngineError::DuplicateProject { .. }
                | EngineError::InvalidHours { .. }
                | EngineError::UnknownShift { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/timesheet.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/timesheet.yaml"
        );
    }

    #[test]
    fn test_range_exceeds_one_month_displays_limit() {
        let error = EngineError::RangeExceedsOneMonth {
            from: date(2026, 1, 1),
            to: date(2026, 3, 1),
            limit: date(2026, 2, 1),
        };
        assert_eq!(
            error.to_string(),
            "Date range 2026-01-01 to 2026-03-01 exceeds one month (last allowed date is 2026-02-01)"
        );
    }

    #[test]
    fn test_range_reversed_displays_bounds() {
        let error = EngineError::RangeReversed {
            from: date(2026, 1, 10),
            to: date(2026, 1, 5),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date range: 2026-01-05 is before 2026-01-10"
        );
    }

    #[test]
    fn test_entry_not_found_displays_location() {
        let error = EngineError::EntryNotFound {
            project_id: 7,
            date: date(2026, 1, 4),
            index: 1,
        };
        assert_eq!(error.to_string(), "No entry #1 on 2026-01-04 for project 7");
    }

    #[test]
    fn test_invalid_hours_displays_value() {
        let error = EngineError::InvalidHours {
            hours: Decimal::new(-15, 1),
        };
        assert_eq!(
            error.to_string(),
            "Invalid hours value -1.5: hours must not be negative"
        );
    }

    #[test]
    fn test_submission_rejected_displays_message() {
        let error = EngineError::SubmissionRejected {
            project_id: 3,
            message: "Timesheet is locked".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Timesheet for project 3 was rejected: Timesheet is locked"
        );
    }

    #[test]
    fn test_is_validation() {
        assert!(
            EngineError::RangeReversed {
                from: date(2026, 1, 2),
                to: date(2026, 1, 1),
            }
            .is_validation()
        );
        assert!(
            EngineError::UnknownShift {
                shift: "Graveyard".to_string()
            }
            .is_validation()
        );
        assert!(EngineError::DuplicateProject { project_id: 1 }.is_validation());
        assert!(
            !EngineError::CalendarLookupFailed {
                message: "timeout".to_string()
            }
            .is_validation()
        );
        assert!(!EngineError::NoGridLoaded.is_validation());
    }

    #[test]
    fn test_error_is_debug() {
        let error = EngineError::NoGridLoaded;
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("NoGridLoaded"));
    }
}

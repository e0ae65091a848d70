//! Submission payload models.
//!
//! These types mirror the wire shape expected by the external
//! "persist timesheet entries" service.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Activity;

/// Identifying metadata supplied by the caller when saving a project's timesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionContext {
    /// The timesheet record the entries belong to.
    pub timesheet_id: u64,
    /// The employee the entries are logged for.
    pub employee_id: u64,
    /// The actor performing the save.
    pub created_by: String,
}

/// One entry in a submission payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionEntry {
    /// The timesheet record the entry belongs to.
    #[serde(rename = "timesheetID")]
    pub timesheet_id: u64,
    /// The employee the entry is logged for.
    #[serde(rename = "employeeID")]
    pub employee_id: u64,
    /// The project the entry is logged against.
    #[serde(rename = "projectID")]
    pub project_id: u64,
    /// The day of the entry.
    #[serde(rename = "entryDate")]
    pub entry_date: NaiveDate,
    /// The shift label.
    pub shift: String,
    /// The classification of the entry.
    pub activity: Activity,
    /// Hours logged.
    pub hours: Decimal,
}

/// The payload handed to the submission boundary for one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetSubmission {
    /// The actor performing the save.
    pub created_by: String,
    /// Entries in grid order.
    pub entries: Vec<SubmissionEntry>,
}

/// The result reported by the submission boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    /// Whether the boundary accepted the payload.
    pub success: bool,
    /// Human-readable result message.
    pub message: String,
}

impl SubmissionReceipt {
    /// Creates a successful receipt.
    pub fn accepted(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Creates an unsuccessful receipt.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

//! Request types for the timesheet API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Project, SubmissionContext};
use crate::timesheet::EntryEdit;

/// Request body for `POST /timesheet/load`.
///
/// Either bound may be omitted while the user is still picking dates; the
/// load is then idle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadRequest {
    /// First day of the range (inclusive).
    #[serde(default)]
    pub from: Option<NaiveDate>,
    /// Last day of the range (inclusive).
    #[serde(default)]
    pub to: Option<NaiveDate>,
    /// Projects to build timesheets for.
    pub projects: Vec<ProjectRequest>,
}

/// Project reference in a load request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRequest {
    /// Unique identifier for the project.
    pub id: u64,
    /// Display name of the project.
    pub name: String,
}

/// Request body for `POST /timesheet/entries`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditRequest {
    /// The project whose timesheet is edited.
    pub project_id: u64,
    /// The day of the entry.
    pub date: NaiveDate,
    /// Which entry on that day; only half-leave days have more than one.
    #[serde(default)]
    pub index: usize,
    /// The edit to apply.
    pub edit: EntryEdit,
}

/// Request body for `POST /timesheet/projects/{id}/save`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveRequest {
    /// The timesheet record the entries belong to.
    pub timesheet_id: u64,
    /// The employee the entries are logged for.
    pub employee_id: u64,
    /// The actor performing the save.
    pub created_by: String,
}

impl From<ProjectRequest> for Project {
    fn from(req: ProjectRequest) -> Self {
        Project {
            id: req.id,
            name: req.name,
        }
    }
}

impl From<SaveRequest> for SubmissionContext {
    fn from(req: SaveRequest) -> Self {
        SubmissionContext {
            timesheet_id: req.timesheet_id,
            employee_id: req.employee_id,
            created_by: req.created_by,
        }
    }
}

//! Persistence adapter.
//!
//! Turns one project's timesheet into the submission payload and hands it to
//! the external submission service. Nothing here mutates the grid.

use tracing::{info, warn};

use crate::boundary::TimesheetSubmitter;
use crate::error::{EngineError, EngineResult};
use crate::models::{ProjectTimesheet, SubmissionContext, SubmissionEntry, TimesheetSubmission};

/// Builds the submission payload for a project's timesheet.
///
/// Entries keep their grid order; identifying metadata comes from the caller.
pub fn build_submission(
    timesheet: &ProjectTimesheet,
    context: &SubmissionContext,
) -> TimesheetSubmission {
    TimesheetSubmission {
        created_by: context.created_by.clone(),
        entries: timesheet
            .entries
            .iter()
            .map(|entry| SubmissionEntry {
                timesheet_id: context.timesheet_id,
                employee_id: context.employee_id,
                project_id: timesheet.project_id,
                entry_date: entry.date,
                shift: entry.shift.clone(),
                activity: entry.activity,
                hours: entry.hours,
            })
            .collect(),
    }
}

/// Submits a payload once and reports the boundary's message.
///
/// There is no retry. A transport failure becomes
/// [`EngineError::SubmissionFailed`] and an unsuccessful receipt becomes
/// [`EngineError::SubmissionRejected`].
pub async fn submit_timesheet(
    project_id: u64,
    submission: &TimesheetSubmission,
    submitter: &dyn TimesheetSubmitter,
) -> EngineResult<String> {
    let receipt = submitter.submit(submission).await.map_err(|err| {
        warn!(project_id, error = %err, "Timesheet submission failed");
        EngineError::SubmissionFailed {
            project_id,
            message: err.to_string(),
        }
    })?;

    if !receipt.success {
        warn!(project_id, message = %receipt.message, "Timesheet submission rejected");
        return Err(EngineError::SubmissionRejected {
            project_id,
            message: receipt.message,
        });
    }

    info!(
        project_id,
        entries = submission.entries.len(),
        "Timesheet submitted"
    );
    Ok(receipt.message)
}

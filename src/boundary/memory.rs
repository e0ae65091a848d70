//! In-memory collaborators used by the development server and tests.

use std::sync::Mutex;

use async_trait::async_trait;
use tracing::info;

use crate::models::{CalendarOverride, SubmissionReceipt, TimesheetSubmission};

use super::{BoundaryError, CalendarLookup, CalendarQuery, TimesheetSubmitter};

/// A calendar backed by a fixed list of overrides.
///
/// Overrides are returned in the order they were supplied, filtered to the
/// queried range.
#[derive(Debug, Clone, Default)]
pub struct StaticCalendar {
    overrides: Vec<CalendarOverride>,
}

impl StaticCalendar {
    /// Creates a calendar from a list of overrides.
    pub fn new(overrides: Vec<CalendarOverride>) -> Self {
        Self { overrides }
    }
}

#[async_trait]
impl CalendarLookup for StaticCalendar {
    async fn overrides(
        &self,
        query: CalendarQuery,
    ) -> Result<Vec<CalendarOverride>, BoundaryError> {
        Ok(self
            .overrides
            .iter()
            .filter(|o| query.contains(o.date))
            .copied()
            .collect())
    }
}

/// A submitter that keeps every accepted payload in memory.
#[derive(Debug, Default)]
pub struct RecordingSubmitter {
    submissions: Mutex<Vec<TimesheetSubmission>>,
}

impl RecordingSubmitter {
    /// Creates an empty submitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every payload received so far.
    pub fn submissions(&self) -> Vec<TimesheetSubmission> {
        self.submissions
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TimesheetSubmitter for RecordingSubmitter {
    async fn submit(
        &self,
        submission: &TimesheetSubmission,
    ) -> Result<SubmissionReceipt, BoundaryError> {
        let mut submissions = self
            .submissions
            .lock()
            .map_err(|_| BoundaryError::Unavailable("submission store poisoned".to_string()))?;
        submissions.push(submission.clone());

        info!(
            created_by = %submission.created_by,
            entries = submission.entries.len(),
            "Recorded timesheet submission"
        );
        Ok(SubmissionReceipt::accepted("Timesheet saved successfully"))
    }
}

//! I/O collaborators of the timesheet engine.
//!
//! The engine depends on exactly two external calls: a calendar lookup that
//! supplies holiday and leave overrides for a date range, and a submission
//! service that persists one project's entries. Both are expressed as traits
//! so the engine can be driven by real REST clients or by the in-memory
//! implementations in this module.

mod memory;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{CalendarOverride, SubmissionReceipt, TimesheetSubmission};

pub use memory::{RecordingSubmitter, StaticCalendar};

/// Failure reported by an external collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoundaryError {
    /// The collaborator could not be reached or did not answer.
    #[error("service unavailable: {0}")]
    Unavailable(String),
}

/// The date range a calendar lookup is asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarQuery {
    /// First day of the range (inclusive).
    pub from: NaiveDate,
    /// Last day of the range (inclusive).
    pub to: NaiveDate,
}

impl CalendarQuery {
    /// Returns true if the date falls within the queried range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }
}

/// Source of holiday and leave overrides.
#[async_trait]
pub trait CalendarLookup: Send + Sync {
    /// Returns the overrides intersecting the queried range, in lookup order.
    async fn overrides(&self, query: CalendarQuery)
    -> Result<Vec<CalendarOverride>, BoundaryError>;
}

/// Destination for saved timesheet entries.
#[async_trait]
pub trait TimesheetSubmitter: Send + Sync {
    /// Persists the payload as one atomic call.
    async fn submit(
        &self,
        submission: &TimesheetSubmission,
    ) -> Result<SubmissionReceipt, BoundaryError>;
}

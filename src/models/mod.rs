//! Core data models for the timesheet engine.
//!
//! This module contains all the domain models used throughout the engine.

mod activity;
mod calendar;
mod entry;
mod project;
mod submission;

pub use activity::{Activity, EntryStatus};
pub use calendar::{CalendarOverride, OverrideKind};
pub use entry::{ProjectTimesheet, TimesheetEntry, TimesheetGrid};
pub use project::Project;
pub use submission::{SubmissionContext, SubmissionEntry, SubmissionReceipt, TimesheetSubmission};

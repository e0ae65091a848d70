//! Timesheet generation, classification and editing.
//!
//! This module contains the date range generator, the week-off policy, the
//! calendar overlay index, day classification, per-project grid building,
//! entry editing with derived hours, submission payload building, and the
//! session that owns the loaded grid.

mod classifier;
mod date_range;
mod grid;
mod hours;
mod mutation;
mod overlay;
mod session;
mod submission;
mod week_off;

pub use classifier::DayClassifier;
pub use date_range::{generate_date_range, last_allowed_date};
pub use grid::{build_grid, ensure_unique_projects};
pub use hours::DayHours;
pub use mutation::{EntryEdit, ShiftRules, apply_edit};
pub use overlay::CalendarOverlay;
pub use session::{LoadOutcome, PreparedLoad, SaveStatus, SaveTicket, TimesheetSession};
pub use submission::{build_submission, submit_timesheet};
pub use week_off::WeekOffPolicy;

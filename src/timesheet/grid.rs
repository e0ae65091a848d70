//! Per-project grid building.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::{Project, ProjectTimesheet, TimesheetEntry, TimesheetGrid};

/// Checks that every project identifier appears only once.
///
/// # Errors
///
/// Returns [`EngineError::DuplicateProject`] naming the first repeated id.
pub fn ensure_unique_projects(projects: &[Project]) -> EngineResult<()> {
    let mut seen = HashSet::with_capacity(projects.len());
    match projects.iter().find(|project| !seen.insert(project.id)) {
        Some(duplicate) => Err(EngineError::DuplicateProject {
            project_id: duplicate.id,
        }),
        None => Ok(()),
    }
}

/// Replicates the classified entries once per project.
///
/// Every project gets its own copy of the entries, so editing one project's
/// timesheet never affects another's.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::{Activity, Project, TimesheetEntry};
/// use timesheet_engine::timesheet::build_grid;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
/// let entries = vec![TimesheetEntry::new(day, "General", Activity::Present, Decimal::new(8, 0))];
/// let projects = vec![Project::new(1, "Alpha"), Project::new(2, "Beta")];
///
/// let grid = build_grid(day, day, &entries, &projects);
/// assert_eq!(grid.projects.len(), 2);
/// assert_eq!(grid.projects[1].entries, entries);
/// ```
pub fn build_grid(
    from: NaiveDate,
    to: NaiveDate,
    entries: &[TimesheetEntry],
    projects: &[Project],
) -> TimesheetGrid {
    TimesheetGrid {
        from,
        to,
        projects: projects
            .iter()
            .map(|project| ProjectTimesheet::new(project, entries.to_vec()))
            .collect(),
    }
}

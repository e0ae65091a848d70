//! Project reference data.

use serde::{Deserialize, Serialize};

/// A project that time can be logged against.
///
/// Projects are reference data supplied by the caller; the engine never
/// creates or deletes them.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::Project;
///
/// let project = Project::new(42, "Payroll Migration");
/// assert_eq!(project.id, 42);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier for the project.
    pub id: u64,
    /// Display name of the project.
    pub name: String,
}

impl Project {
    /// Creates a new project reference.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

//! Activity classification and entry status.

use serde::{Deserialize, Serialize};

use super::OverrideKind;

/// The classification of a single timesheet line.
///
/// `HalfLeave` marks the leave half of a split day; the worked half of that
/// day is a separate `Present` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activity {
    /// A normal working day.
    Present,
    /// An organization holiday.
    Holiday,
    /// A full day of leave.
    Leave,
    /// The leave half of a half-day leave.
    HalfLeave,
    /// A structurally recurring non-working weekday.
    WeekOff,
}

impl Activity {
    /// Returns true if this activity counts as worked time.
    pub fn is_present(self) -> bool {
        matches!(self, Activity::Present)
    }
}

impl From<OverrideKind> for Activity {
    fn from(kind: OverrideKind) -> Self {
        match kind {
            OverrideKind::Holiday => Activity::Holiday,
            OverrideKind::Leave => Activity::Leave,
            OverrideKind::HalfLeave => Activity::HalfLeave,
        }
    }
}

impl std::fmt::Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Activity::Present => write!(f, "Present"),
            Activity::Holiday => write!(f, "Holiday"),
            Activity::Leave => write!(f, "Leave"),
            Activity::HalfLeave => write!(f, "Half Leave"),
            Activity::WeekOff => write!(f, "Week Off"),
        }
    }
}

/// Approval status of a timesheet entry.
///
/// Entries are always created `Pending`; approval happens outside this engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    /// Awaiting approval.
    #[default]
    Pending,
    /// Approved by a reviewer.
    Approved,
}

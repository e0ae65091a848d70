//! Calendar overlay index.
//!
//! Indexes the overrides returned by the calendar lookup by date so that
//! classification can look each day up in constant time.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use chrono::NaiveDate;
use tracing::warn;

use crate::models::{CalendarOverride, OverrideKind};

/// Date-indexed calendar overrides.
///
/// When the calendar returns more than one override for the same date, the
/// first one in lookup order wins and the rest are ignored.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::{CalendarOverride, OverrideKind};
/// use timesheet_engine::timesheet::CalendarOverlay;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// let overlay = CalendarOverlay::from_overrides(vec![
///     CalendarOverride::new(day, OverrideKind::Holiday),
///     CalendarOverride::new(day, OverrideKind::Leave),
/// ]);
/// assert_eq!(overlay.get(day), Some(OverrideKind::Holiday));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarOverlay {
    by_date: HashMap<NaiveDate, OverrideKind>,
}

impl CalendarOverlay {
    /// Builds the index from overrides in lookup order.
    pub fn from_overrides<I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = CalendarOverride>,
    {
        let mut by_date = HashMap::new();
        for record in overrides {
            match by_date.entry(record.date) {
                Entry::Vacant(slot) => {
                    slot.insert(record.kind);
                }
                Entry::Occupied(existing) => {
                    if *existing.get() != record.kind {
                        warn!(
                            date = %record.date,
                            kept = %existing.get(),
                            ignored = %record.kind,
                            "Conflicting calendar overrides, keeping the first"
                        );
                    }
                }
            }
        }
        Self { by_date }
    }

    /// Returns the override for a date, if any.
    pub fn get(&self, date: NaiveDate) -> Option<OverrideKind> {
        self.by_date.get(&date).copied()
    }

    /// Returns the number of distinct overridden dates.
    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    /// Returns true if no date is overridden.
    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}

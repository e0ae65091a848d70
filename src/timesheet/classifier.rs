//! Day classification.
//!
//! Assigns every date an [`Activity`] from the calendar overlay and the
//! week-off policy, and seeds the timesheet entries for it.

use chrono::NaiveDate;

use crate::config::TimesheetConfig;
use crate::error::EngineResult;
use crate::models::{Activity, OverrideKind, TimesheetEntry};

use super::{CalendarOverlay, DayHours, WeekOffPolicy};

/// Classifies dates and seeds their timesheet entries.
///
/// Precedence, highest first: half leave, holiday, leave, week-off, present.
/// Calendar overrides always beat the week-off rule.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::Activity;
/// use timesheet_engine::timesheet::{CalendarOverlay, DayClassifier, DayHours, WeekOffPolicy};
/// use chrono::NaiveDate;
///
/// let classifier = DayClassifier::new(
///     WeekOffPolicy::new(&[0, 6]).unwrap(),
///     DayHours::default(),
///     "General",
/// );
/// let overlay = CalendarOverlay::default();
///
/// // 2026-01-03 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2026, 1, 3).unwrap();
/// assert_eq!(classifier.classify(saturday, &overlay), Activity::WeekOff);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayClassifier {
    week_off: WeekOffPolicy,
    hours: DayHours,
    default_shift: String,
}

impl DayClassifier {
    /// Creates a classifier from its policies.
    pub fn new(week_off: WeekOffPolicy, hours: DayHours, default_shift: impl Into<String>) -> Self {
        Self {
            week_off,
            hours,
            default_shift: default_shift.into(),
        }
    }

    /// Builds a classifier from loaded configuration.
    pub fn from_config(config: &TimesheetConfig) -> EngineResult<Self> {
        Ok(Self::new(
            WeekOffPolicy::new(&config.week_off_days)?,
            DayHours::new(config.full_day_hours),
            config.default_shift.clone(),
        ))
    }

    /// Returns the hours policy.
    pub fn hours(&self) -> DayHours {
        self.hours
    }

    /// Returns the shift label given to seeded entries.
    pub fn default_shift(&self) -> &str {
        &self.default_shift
    }

    /// Determines the classification of a single date.
    pub fn classify(&self, date: NaiveDate, overlay: &CalendarOverlay) -> Activity {
        match overlay.get(date) {
            Some(OverrideKind::HalfLeave) => Activity::HalfLeave,
            Some(OverrideKind::Holiday) => Activity::Holiday,
            Some(OverrideKind::Leave) => Activity::Leave,
            None if self.week_off.is_week_off(date) => Activity::WeekOff,
            None => Activity::Present,
        }
    }

    /// Seeds the entries for a single date.
    ///
    /// Half-leave days produce two entries, the leave half followed by the
    /// worked half, each carrying half a day. Every other day produces one.
    pub fn entries_for(&self, date: NaiveDate, overlay: &CalendarOverlay) -> Vec<TimesheetEntry> {
        match self.classify(date, overlay) {
            Activity::HalfLeave => {
                let half = self.hours.half_day();
                vec![
                    TimesheetEntry::new(date, self.default_shift.as_str(), Activity::HalfLeave, half),
                    TimesheetEntry::new(date, self.default_shift.as_str(), Activity::Present, half),
                ]
            }
            activity => vec![TimesheetEntry::new(
                date,
                self.default_shift.as_str(),
                activity,
                self.hours.default_for(activity),
            )],
        }
    }

    /// Seeds the entries for every date, in order.
    pub fn classify_range(
        &self,
        dates: &[NaiveDate],
        overlay: &CalendarOverlay,
    ) -> Vec<TimesheetEntry> {
        dates
            .iter()
            .flat_map(|date| self.entries_for(*date, overlay))
            .collect()
    }
}

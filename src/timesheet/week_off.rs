//! Week-off policy.

use chrono::{Datelike, NaiveDate};

use crate::error::{EngineError, EngineResult};

/// The set of weekdays that are always week-off.
///
/// Weekdays are numbered 0 = Sunday through 6 = Saturday. The policy is built
/// once from configuration and never changes afterwards.
///
/// # Example
///
/// ```
/// use timesheet_engine::timesheet::WeekOffPolicy;
/// use chrono::NaiveDate;
///
/// let policy = WeekOffPolicy::new(&[0, 6]).unwrap();
/// assert!(policy.is_week_off(NaiveDate::from_ymd_opt(2026, 1, 3).unwrap())); // Saturday
/// assert!(!policy.is_week_off(NaiveDate::from_ymd_opt(2026, 1, 2).unwrap())); // Friday
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WeekOffPolicy {
    days: [bool; 7],
}

impl WeekOffPolicy {
    /// Builds a policy from weekday numbers.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigParseError`] if a number is outside `0..=6`.
    pub fn new(week_off_days: &[u32]) -> EngineResult<Self> {
        let mut days = [false; 7];
        for &day in week_off_days {
            let slot = days
                .get_mut(day as usize)
                .ok_or_else(|| EngineError::ConfigParseError {
                    path: "week_off_days".to_string(),
                    message: format!("{} is not a weekday number between 0 and 6", day),
                })?;
            *slot = true;
        }
        Ok(Self { days })
    }

    /// Returns true if the date's weekday is a configured week-off day.
    pub fn is_week_off(&self, date: NaiveDate) -> bool {
        self.days[date.weekday().num_days_from_sunday() as usize]
    }
}

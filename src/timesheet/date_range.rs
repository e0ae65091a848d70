//! Date range generation.
//!
//! A timesheet covers an inclusive range of calendar days that may span at most
//! one calendar month.

use chrono::{Months, NaiveDate};

use crate::error::{EngineError, EngineResult};

/// Returns the last `to` date permitted for a range starting at `from`.
///
/// The limit is `from` plus one calendar month using calendar arithmetic, so
/// Jan 15 allows up to Feb 15 and Jan 31 allows up to Feb 28 (or 29).
///
/// # Example
///
/// ```
/// use timesheet_engine::timesheet::last_allowed_date;
/// use chrono::NaiveDate;
///
/// let from = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// assert_eq!(last_allowed_date(from), NaiveDate::from_ymd_opt(2026, 2, 15).unwrap());
/// ```
pub fn last_allowed_date(from: NaiveDate) -> NaiveDate {
    from.checked_add_months(Months::new(1))
        .unwrap_or(NaiveDate::MAX)
}

/// Enumerates every calendar day in `[from, to]`.
///
/// If either bound is absent the range is idle and an empty sequence is
/// returned without error.
///
/// # Errors
///
/// - [`EngineError::RangeReversed`] if `to` precedes `from`
/// - [`EngineError::RangeExceedsOneMonth`] if `to` is later than one month after `from`
///
/// # Example
///
/// ```
/// use timesheet_engine::timesheet::generate_date_range;
/// use chrono::NaiveDate;
///
/// let from = NaiveDate::from_ymd_opt(2026, 1, 1);
/// let to = NaiveDate::from_ymd_opt(2026, 1, 4);
/// assert_eq!(generate_date_range(from, to).unwrap().len(), 4);
/// assert!(generate_date_range(from, None).unwrap().is_empty());
/// ```
pub fn generate_date_range(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> EngineResult<Vec<NaiveDate>> {
    let (Some(from), Some(to)) = (from, to) else {
        return Ok(Vec::new());
    };

    validate_range(from, to)?;

    Ok(from.iter_days().take_while(|d| *d <= to).collect())
}

/// Checks that `[from, to]` is ordered and spans at most one calendar month.
pub(crate) fn validate_range(from: NaiveDate, to: NaiveDate) -> EngineResult<()> {
    if to < from {
        return Err(EngineError::RangeReversed { from, to });
    }

    let limit = last_allowed_date(from);
    if to > limit {
        return Err(EngineError::RangeExceedsOneMonth { from, to, limit });
    }

    Ok(())
}

//! Default hours per activity.

use rust_decimal::Decimal;

use crate::models::Activity;

/// Nominal day length used to derive hours from an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayHours {
    full_day: Decimal,
}

impl DayHours {
    /// Creates a policy for the given full-day length.
    pub fn new(full_day: Decimal) -> Self {
        Self { full_day }
    }

    /// Hours of a full working day.
    pub fn full_day(&self) -> Decimal {
        self.full_day
    }

    /// Hours of each half of a half-leave day.
    pub fn half_day(&self) -> Decimal {
        (self.full_day / Decimal::TWO).normalize()
    }

    /// Hours implied by an activity: a full day when present, otherwise zero.
    pub fn default_for(&self, activity: Activity) -> Decimal {
        if activity.is_present() {
            self.full_day
        } else {
            Decimal::ZERO
        }
    }
}

impl Default for DayHours {
    fn default() -> Self {
        Self::new(Decimal::new(8, 0))
    }
}

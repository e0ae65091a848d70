//! Configuration types for timesheet generation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::CalendarOverride;

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address the API listens on.
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

/// Timesheet configuration from `timesheet.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct TimesheetConfig {
    /// Weekday numbers (0 = Sunday .. 6 = Saturday) that are always week-off.
    pub week_off_days: Vec<u32>,
    /// Shift label given to every generated entry.
    pub default_shift: String,
    /// Known shift labels. Empty means shift labels are free-form.
    #[serde(default)]
    pub shifts: Vec<String>,
    /// Nominal hours of a full working day.
    pub full_day_hours: Decimal,
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

impl TimesheetConfig {
    /// Checks the invariants serde cannot express.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if let Some(day) = self.week_off_days.iter().find(|d| **d > 6) {
            return Err(format!(
                "week_off_days contains {}, expected a weekday number between 0 and 6",
                day
            ));
        }
        if self.full_day_hours <= Decimal::ZERO {
            return Err("full_day_hours must be greater than zero".to_string());
        }
        if self.default_shift.trim().is_empty() {
            return Err("default_shift must not be empty".to_string());
        }
        if !self.shifts.is_empty() && !self.shifts.contains(&self.default_shift) {
            return Err(format!(
                "default_shift '{}' is not listed in shifts",
                self.default_shift
            ));
        }
        Ok(())
    }
}

/// Calendar file structure (`calendar.yaml`), used as a development calendar source.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarFile {
    /// Holiday and leave overrides in lookup order.
    #[serde(default)]
    pub overrides: Vec<CalendarOverride>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> TimesheetConfig {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = parse(
            "week_off_days: [0, 6]\ndefault_shift: General\nfull_day_hours: 8\n",
        );
        assert!(config.shifts.is_empty());
        assert_eq!(config.server.bind, "127.0.0.1:3000");
        assert_eq!(config.full_day_hours, Decimal::new(8, 0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_weekday_out_of_range() {
        let config = parse("week_off_days: [0, 7]\ndefault_shift: General\nfull_day_hours: 8\n");
        let message = config.validate().unwrap_err();
        assert!(message.contains("7"));
    }

    #[test]
    fn test_validate_rejects_zero_day_length() {
        let config = parse("week_off_days: []\ndefault_shift: General\nfull_day_hours: 0\n");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unlisted_default_shift() {
        let config = parse(
            "week_off_days: []\ndefault_shift: General\nshifts: [Morning, Night]\nfull_day_hours: 8\n",
        );
        let message = config.validate().unwrap_err();
        assert!(message.contains("General"));
    }

    #[test]
    fn test_calendar_file_parses_overrides() {
        let file: CalendarFile = serde_yaml::from_str(
            "overrides:\n  - date: 2026-01-01\n    kind: holiday\n  - date: 2026-01-04\n    kind: half_leave\n",
        )
        .unwrap();
        assert_eq!(file.overrides.len(), 2);
    }
}

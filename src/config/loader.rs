//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading timesheet
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::CalendarOverride;

use super::types::{CalendarFile, TimesheetConfig};

/// Loads and provides access to timesheet configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── timesheet.yaml   # Week-off days, shifts, day length, server
/// └── calendar.yaml    # Optional development calendar
/// ```
///
/// # Example
///
/// ```no_run
/// use timesheet_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Week-off days: {:?}", loader.config().week_off_days);
/// # Ok::<(), timesheet_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: TimesheetConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `timesheet.yaml` is missing
    /// - The file contains invalid YAML
    /// - The configuration fails validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let config_path = path.as_ref().join("timesheet.yaml");
        let config = Self::load_yaml::<TimesheetConfig>(&config_path)?;

        config
            .validate()
            .map_err(|message| EngineError::ConfigParseError {
                path: config_path.display().to_string(),
                message,
            })?;

        Ok(Self { config })
    }

    /// Loads the calendar overrides listed in a `calendar.yaml` file.
    pub fn load_calendar<P: AsRef<Path>>(path: P) -> EngineResult<Vec<CalendarOverride>> {
        let file = Self::load_yaml::<CalendarFile>(path.as_ref())?;
        Ok(file.overrides)
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying timesheet configuration.
    pub fn config(&self) -> &TimesheetConfig {
        &self.config
    }
}

//! Configuration loading and management for the timesheet engine.
//!
//! This module loads the week-off policy, shift labels, day length and server
//! settings from YAML files. Configuration is read once at startup and is
//! immutable afterwards.
//!
//! # Example
//!
//! ```no_run
//! use timesheet_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Default shift: {}", config.config().default_shift);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalendarFile, ServerConfig, TimesheetConfig};

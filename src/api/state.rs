//! Application state for the timesheet API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::boundary::{CalendarLookup, TimesheetSubmitter};
use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::timesheet::TimesheetSession;

/// Shared application state.
///
/// Holds the editing session and the two external collaborators. The session
/// sits behind an async mutex; handlers release it while waiting on the
/// submission service so saves of different projects can overlap.
#[derive(Clone)]
pub struct AppState {
    session: Arc<Mutex<TimesheetSession>>,
    calendar: Arc<dyn CalendarLookup>,
    submitter: Arc<dyn TimesheetSubmitter>,
}

impl AppState {
    /// Creates a new application state from loaded configuration and collaborators.
    pub fn new(
        config: &ConfigLoader,
        calendar: Arc<dyn CalendarLookup>,
        submitter: Arc<dyn TimesheetSubmitter>,
    ) -> EngineResult<Self> {
        Ok(Self {
            session: Arc::new(Mutex::new(TimesheetSession::new(config.config())?)),
            calendar,
            submitter,
        })
    }

    /// Returns the editing session.
    pub fn session(&self) -> &Mutex<TimesheetSession> {
        &self.session
    }

    /// Returns the calendar lookup.
    pub fn calendar(&self) -> &dyn CalendarLookup {
        self.calendar.as_ref()
    }

    /// Returns the submission service.
    pub fn submitter(&self) -> &dyn TimesheetSubmitter {
        self.submitter.as_ref()
    }
}

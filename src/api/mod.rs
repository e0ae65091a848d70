//! HTTP API module for the timesheet engine.
//!
//! This module provides the REST endpoints for loading a timesheet grid,
//! editing entries and saving a project's timesheet.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EditRequest, LoadRequest, ProjectRequest, SaveRequest};
pub use response::{ApiError, ApiErrorResponse, LoadResponse, SaveResponse};
pub use state::AppState;

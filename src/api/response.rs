//! Response types for the timesheet API.
//!
//! This module defines the success bodies, the error response structure and
//! the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::TimesheetGrid;
use crate::timesheet::LoadOutcome;

/// Response body for `POST /timesheet/load`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadResponse {
    /// What the load did.
    pub outcome: LoadOutcome,
    /// The freshly loaded grid; absent when the load was idle.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub grid: Option<TimesheetGrid>,
}

/// Response body for a save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveResponse {
    /// Whether the save succeeded.
    pub success: bool,
    /// Human-readable result message.
    pub message: String,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                )
            }
            EngineError::RangeReversed { .. } | EngineError::RangeExceedsOneMonth { .. } => {
                ApiErrorResponse::new(
                    StatusCode::BAD_REQUEST,
                    ApiError::with_details(
                        "INVALID_DATE_RANGE",
                        message,
                        "The range must run forwards and span at most one calendar month",
                    ),
                )
            }
            EngineError::CalendarLookupFailed { .. } => ApiErrorResponse::new(
                StatusCode::BAD_GATEWAY,
                ApiError::with_details(
                    "CALENDAR_UNAVAILABLE",
                    message,
                    "No grid was loaded; the previous grid is unchanged",
                ),
            ),
            EngineError::DuplicateProject { .. } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "DUPLICATE_PROJECT",
                    message,
                    "Each project may appear only once in a load request",
                ),
            ),
            EngineError::ProjectNotFound { .. } => ApiErrorResponse::new(
                StatusCode::NOT_FOUND,
                ApiError::new("PROJECT_NOT_FOUND", message),
            ),
            EngineError::EntryNotFound { .. } => ApiErrorResponse::new(
                StatusCode::NOT_FOUND,
                ApiError::new("ENTRY_NOT_FOUND", message),
            ),
            EngineError::NoGridLoaded => ApiErrorResponse::new(
                StatusCode::NOT_FOUND,
                ApiError::with_details("NO_GRID", message, "Load a date range first"),
            ),
            EngineError::InvalidHours { .. } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_HOURS", message),
            ),
            EngineError::UnknownShift { .. } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::new("UNKNOWN_SHIFT", message),
            ),
            EngineError::SaveInProgress { .. } => ApiErrorResponse::new(
                StatusCode::CONFLICT,
                ApiError::new("SAVE_IN_PROGRESS", message),
            ),
            EngineError::SubmissionFailed { .. } => ApiErrorResponse::new(
                StatusCode::BAD_GATEWAY,
                ApiError::with_details(
                    "SUBMISSION_FAILED",
                    message,
                    "The timesheet was not saved; edits are kept and the save can be retried",
                ),
            ),
            EngineError::SubmissionRejected { .. } => ApiErrorResponse::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::with_details(
                    "SUBMISSION_REJECTED",
                    message,
                    "The timesheet was not saved; edits are kept and the save can be retried",
                ),
            ),
        }
    }
}

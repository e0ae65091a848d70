//! HTTP request handlers for the timesheet API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{Project, SubmissionContext};
use crate::timesheet::{LoadOutcome, TimesheetSession, submit_timesheet};

use super::request::{EditRequest, LoadRequest, SaveRequest};
use super::response::{ApiError, ApiErrorResponse, LoadResponse, SaveResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/timesheet", get(grid_handler))
        .route("/timesheet/load", post(load_handler))
        .route("/timesheet/entries", post(edit_handler))
        .route(
            "/timesheet/projects/:project_id/save",
            post(save_handler).get(save_status_handler),
        )
        .with_state(state)
}

/// Handler for POST /timesheet/load.
///
/// Builds a fresh grid for the requested range, replacing any loaded grid.
/// The calendar is consulted before the session lock is taken, so edits and
/// save completions are not held up by a slow lookup.
async fn load_handler(
    State(state): State<AppState>,
    payload: Result<Json<LoadRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing timesheet load request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    let projects: Vec<Project> = request.projects.into_iter().map(Into::into).collect();

    let prepared = match TimesheetSession::prepare_load(
        request.from,
        request.to,
        &projects,
        state.calendar(),
    )
    .await
    {
        Ok(Some(prepared)) => prepared,
        Ok(None) => {
            info!(correlation_id = %correlation_id, "Timesheet load idle");
            return json_response(
                StatusCode::OK,
                &LoadResponse {
                    outcome: LoadOutcome::Idle,
                    grid: None,
                },
            );
        }
        Err(err) => return engine_error_response(correlation_id, err),
    };

    let mut session = state.session().lock().await;
    let outcome = session.install(prepared);
    info!(correlation_id = %correlation_id, ?outcome, "Timesheet load completed");
    json_response(
        StatusCode::OK,
        &LoadResponse {
            outcome,
            grid: session.grid().cloned(),
        },
    )
}

/// Handler for GET /timesheet.
async fn grid_handler(State(state): State<AppState>) -> Response {
    let session = state.session().lock().await;
    match session.grid() {
        Some(grid) => json_response(StatusCode::OK, grid),
        None => ApiErrorResponse::from(EngineError::NoGridLoaded).into_response(),
    }
}

/// Handler for POST /timesheet/entries.
///
/// Applies one edit and returns the updated project timesheet.
async fn edit_handler(
    State(state): State<AppState>,
    payload: Result<Json<EditRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let mut session = state.session().lock().await;
    match session.edit(request.project_id, request.date, request.index, request.edit) {
        Ok(timesheet) => json_response(StatusCode::OK, timesheet),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /timesheet/projects/{project_id}/save.
///
/// The session lock is released while the submission service is called, so
/// saves of different projects do not wait on each other.
async fn save_handler(
    State(state): State<AppState>,
    Path(project_id): Path<u64>,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, project_id, "Processing timesheet save request");

    let context: SubmissionContext = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let pending = state.session().lock().await.begin_save(project_id, &context);
    let (ticket, submission) = match pending {
        Ok(pending) => pending,
        Err(err) => return engine_error_response(correlation_id, err),
    };

    let result = submit_timesheet(project_id, &submission, state.submitter()).await;
    state.session().lock().await.finish_save(ticket, &result);

    match result {
        Ok(message) => {
            info!(
                correlation_id = %correlation_id,
                project_id,
                entries = submission.entries.len(),
                "Timesheet saved"
            );
            json_response(
                StatusCode::OK,
                &SaveResponse {
                    success: true,
                    message,
                },
            )
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for GET /timesheet/projects/{project_id}/save.
async fn save_status_handler(
    State(state): State<AppState>,
    Path(project_id): Path<u64>,
) -> Response {
    let status = state.session().lock().await.save_status(project_id);
    json_response(StatusCode::OK, &status)
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        validation = err.is_validation(),
        "Timesheet request failed"
    );
    ApiErrorResponse::from(err).into_response()
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, &error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    use crate::boundary::{RecordingSubmitter, StaticCalendar};
    use crate::config::ConfigLoader;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/default").expect("Failed to load config");
        AppState::new(
            &config,
            Arc::new(StaticCalendar::default()),
            Arc::new(RecordingSubmitter::new()),
        )
        .expect("Failed to build state")
    }

    #[tokio::test]
    async fn test_grid_before_load_returns_404() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(Request::builder().uri("/timesheet").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/timesheet/load")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{invalid json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_content_type_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/timesheet/load")
                    .body(Body::from(r#"{"projects": []}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MISSING_CONTENT_TYPE");
    }

    #[tokio::test]
    async fn test_save_status_defaults_to_idle() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/timesheet/projects/1/save")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["state"], "idle");
    }
}

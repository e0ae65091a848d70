//! The editing session that owns the loaded grid.
//!
//! A session holds at most one grid. Loading a range always builds a fresh
//! grid and drops the previous one, unsaved edits included. Saves are tracked
//! per project so different projects can be submitted independently.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::boundary::{CalendarLookup, CalendarQuery, TimesheetSubmitter};
use crate::config::TimesheetConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{Project, ProjectTimesheet, SubmissionContext, TimesheetGrid, TimesheetSubmission};

use super::{
    CalendarOverlay, DayClassifier, EntryEdit, ShiftRules, apply_edit, build_grid,
    build_submission, ensure_unique_projects, generate_date_range, submit_timesheet,
};

/// Result of a load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoadOutcome {
    /// A bound was missing; nothing was loaded and the current grid is untouched.
    Idle,
    /// A fresh grid replaced the previous one.
    Loaded {
        /// Number of project timesheets in the grid.
        projects: usize,
        /// Number of entries seeded into each project timesheet.
        entries_per_project: usize,
    },
}

/// Save state of one project's timesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SaveStatus {
    /// No save has been attempted since the grid was loaded.
    #[default]
    Idle,
    /// A submission is in flight.
    Submitting,
    /// The last submission succeeded.
    Saved {
        /// Message returned by the submission service.
        message: String,
    },
    /// The last submission failed.
    Failed {
        /// Description of the failure.
        message: String,
    },
}

/// Identifies one in-flight save.
///
/// Issued by [`TimesheetSession::begin_save`] and redeemed by
/// [`TimesheetSession::finish_save`]. A ticket is bound to the grid that was
/// loaded when it was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveTicket {
    project_id: u64,
    generation: u64,
}

impl SaveTicket {
    /// Returns the project being saved.
    pub fn project_id(&self) -> u64 {
        self.project_id
    }
}

/// A validated range and its calendar overlay, ready to become a grid.
///
/// Produced by [`TimesheetSession::prepare_load`] without touching any
/// session, then installed with [`TimesheetSession::install`].
#[derive(Debug, Clone)]
pub struct PreparedLoad {
    from: NaiveDate,
    to: NaiveDate,
    dates: Vec<NaiveDate>,
    overlay: CalendarOverlay,
    projects: Vec<Project>,
}

/// Owns the grid for one editing session.
///
/// # Example
///
/// ```
/// use timesheet_engine::boundary::StaticCalendar;
/// use timesheet_engine::config::ConfigLoader;
/// use timesheet_engine::models::Project;
/// use timesheet_engine::timesheet::{LoadOutcome, TimesheetSession};
/// use chrono::NaiveDate;
///
/// # tokio_test_block(async {
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let mut session = TimesheetSession::new(loader.config()).unwrap();
///
/// let outcome = session
///     .load(
///         NaiveDate::from_ymd_opt(2026, 1, 5),
///         NaiveDate::from_ymd_opt(2026, 1, 9),
///         &[Project::new(1, "Alpha")],
///         &StaticCalendar::default(),
///     )
///     .await
///     .unwrap();
/// assert_eq!(outcome, LoadOutcome::Loaded { projects: 1, entries_per_project: 5 });
/// # });
/// # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Runtime::new().unwrap().block_on(f)
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TimesheetSession {
    classifier: DayClassifier,
    shifts: ShiftRules,
    grid: Option<TimesheetGrid>,
    // Bumped on every grid replacement; save tickets from older grids are void.
    generation: u64,
    saves: HashMap<u64, SaveStatus>,
}

impl TimesheetSession {
    /// Creates an empty session from loaded configuration.
    pub fn new(config: &TimesheetConfig) -> EngineResult<Self> {
        Ok(Self::with_classifier(
            DayClassifier::from_config(config)?,
            ShiftRules::new(config.shifts.clone()),
        ))
    }

    /// Creates an empty session from prepared policies.
    pub fn with_classifier(classifier: DayClassifier, shifts: ShiftRules) -> Self {
        Self {
            classifier,
            shifts,
            grid: None,
            generation: 0,
            saves: HashMap::new(),
        }
    }

    /// Returns the loaded grid, if any.
    pub fn grid(&self) -> Option<&TimesheetGrid> {
        self.grid.as_ref()
    }

    /// Returns the loaded timesheet of a project.
    pub fn project(&self, project_id: u64) -> EngineResult<&ProjectTimesheet> {
        self.grid
            .as_ref()
            .ok_or(EngineError::NoGridLoaded)?
            .project(project_id)
            .ok_or(EngineError::ProjectNotFound { project_id })
    }

    /// Loads a fresh grid for `[from, to]`.
    ///
    /// Equivalent to [`prepare_load`](Self::prepare_load) followed by
    /// [`install`](Self::install). Any failure leaves the current grid as it
    /// was; success replaces it entirely.
    pub async fn load(
        &mut self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        projects: &[Project],
        calendar: &dyn CalendarLookup,
    ) -> EngineResult<LoadOutcome> {
        match Self::prepare_load(from, to, projects, calendar).await? {
            Some(prepared) => Ok(self.install(prepared)),
            None => Ok(LoadOutcome::Idle),
        }
    }

    /// Validates a load request and fetches its calendar overlay.
    ///
    /// Returns `None` when a bound is missing, in which case the calendar is
    /// not consulted. The range and the project list are validated before the
    /// lookup.
    ///
    /// # Errors
    ///
    /// - [`EngineError::RangeReversed`] / [`EngineError::RangeExceedsOneMonth`]
    /// - [`EngineError::DuplicateProject`] if a project id repeats
    /// - [`EngineError::CalendarLookupFailed`] if the lookup fails
    pub async fn prepare_load(
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        projects: &[Project],
        calendar: &dyn CalendarLookup,
    ) -> EngineResult<Option<PreparedLoad>> {
        let (Some(from), Some(to)) = (from, to) else {
            debug!(?from, ?to, "Date range incomplete, nothing to load");
            return Ok(None);
        };

        let dates = generate_date_range(Some(from), Some(to)).inspect_err(|err| {
            warn!(%from, %to, error = %err, "Rejected timesheet date range");
        })?;
        ensure_unique_projects(projects).inspect_err(|err| {
            warn!(error = %err, "Rejected timesheet project list");
        })?;

        let query = CalendarQuery { from, to };
        let overrides = calendar.overrides(query).await.map_err(|err| {
            warn!(%from, %to, error = %err, "Calendar lookup failed");
            EngineError::CalendarLookupFailed {
                message: err.to_string(),
            }
        })?;
        let overlay = CalendarOverlay::from_overrides(
            overrides.into_iter().filter(|o| query.contains(o.date)),
        );

        Ok(Some(PreparedLoad {
            from,
            to,
            dates,
            overlay,
            projects: projects.to_vec(),
        }))
    }

    /// Classifies a prepared load and installs the resulting grid.
    pub fn install(&mut self, prepared: PreparedLoad) -> LoadOutcome {
        let PreparedLoad {
            from,
            to,
            dates,
            overlay,
            projects,
        } = prepared;

        let entries = self.classifier.classify_range(&dates, &overlay);
        let outcome = LoadOutcome::Loaded {
            projects: projects.len(),
            entries_per_project: entries.len(),
        };
        self.replace_grid(build_grid(from, to, &entries, &projects));

        info!(
            %from,
            %to,
            projects = projects.len(),
            overrides = overlay.len(),
            entries_per_project = entries.len(),
            "Timesheet grid loaded"
        );
        outcome
    }

    /// Installs a freshly built grid, dropping the previous one and every save state.
    ///
    /// Save tickets issued for the previous grid are invalidated. Returns the
    /// grid that was replaced.
    pub fn replace_grid(&mut self, grid: TimesheetGrid) -> Option<TimesheetGrid> {
        self.generation = self.generation.wrapping_add(1);
        self.saves.clear();
        self.grid.replace(grid)
    }

    /// Applies an edit to one entry of a project's timesheet.
    pub fn edit(
        &mut self,
        project_id: u64,
        date: NaiveDate,
        index: usize,
        edit: EntryEdit,
    ) -> EngineResult<&ProjectTimesheet> {
        let hours = self.classifier.hours();
        let timesheet = self
            .grid
            .as_mut()
            .ok_or(EngineError::NoGridLoaded)?
            .project_mut(project_id)
            .ok_or(EngineError::ProjectNotFound { project_id })?;

        let entry = apply_edit(timesheet, date, index, edit, hours, &self.shifts)?;
        debug!(
            project_id,
            %date,
            index,
            activity = %entry.activity,
            hours = %entry.hours,
            shift = %entry.shift,
            "Timesheet entry updated"
        );
        Ok(timesheet)
    }

    /// Returns the save state of a project.
    pub fn save_status(&self, project_id: u64) -> SaveStatus {
        self.saves.get(&project_id).cloned().unwrap_or_default()
    }

    /// Snapshots a project's timesheet into a payload and marks it as submitting.
    ///
    /// The returned ticket must be handed back to
    /// [`finish_save`](Self::finish_save) with the submission outcome.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NoGridLoaded`] / [`EngineError::ProjectNotFound`]
    /// - [`EngineError::SaveInProgress`] if this project is already submitting
    pub fn begin_save(
        &mut self,
        project_id: u64,
        context: &SubmissionContext,
    ) -> EngineResult<(SaveTicket, TimesheetSubmission)> {
        if self.save_status(project_id) == SaveStatus::Submitting {
            return Err(EngineError::SaveInProgress { project_id });
        }

        let timesheet = self.project(project_id)?;
        let submission = build_submission(timesheet, context);
        info!(
            project_id,
            entries = submission.entries.len(),
            total_hours = %timesheet.total_hours(),
            "Timesheet save started"
        );

        self.saves.insert(project_id, SaveStatus::Submitting);
        let ticket = SaveTicket {
            project_id,
            generation: self.generation,
        };
        Ok((ticket, submission))
    }

    /// Records the outcome of a submission started with [`begin_save`](Self::begin_save).
    ///
    /// An outcome whose ticket predates the current grid is not recorded; the
    /// project's current status is returned unchanged.
    pub fn finish_save(&mut self, ticket: SaveTicket, result: &EngineResult<String>) -> SaveStatus {
        let project_id = ticket.project_id;
        if ticket.generation != self.generation {
            debug!(project_id, "Save finished after reload, outcome not recorded");
            return self.save_status(project_id);
        }

        let status = match result {
            Ok(message) => SaveStatus::Saved {
                message: message.clone(),
            },
            Err(err) => SaveStatus::Failed {
                message: err.to_string(),
            },
        };
        self.saves.insert(project_id, status.clone());
        status
    }

    /// Submits a project's timesheet and records the outcome.
    ///
    /// The grid is never modified, so a failed save can be retried as is.
    pub async fn save(
        &mut self,
        project_id: u64,
        context: &SubmissionContext,
        submitter: &dyn TimesheetSubmitter,
    ) -> EngineResult<String> {
        let (ticket, submission) = self.begin_save(project_id, context)?;
        let result = submit_timesheet(project_id, &submission, submitter).await;
        self.finish_save(ticket, &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::{BoundaryError, RecordingSubmitter, StaticCalendar};
    use crate::models::{Activity, CalendarOverride, OverrideKind, SubmissionReceipt};
    use crate::timesheet::{DayHours, WeekOffPolicy};
    use async_trait::async_trait;
    use rust_decimal::Decimal;

    struct FailingCalendar;

    #[async_trait]
    impl CalendarLookup for FailingCalendar {
        async fn overrides(
            &self,
            _query: CalendarQuery,
        ) -> Result<Vec<CalendarOverride>, BoundaryError> {
            Err(BoundaryError::Unavailable("calendar service down".to_string()))
        }
    }

    struct RejectingSubmitter;

    #[async_trait]
    impl TimesheetSubmitter for RejectingSubmitter {
        async fn submit(
            &self,
            _submission: &TimesheetSubmission,
        ) -> Result<SubmissionReceipt, BoundaryError> {
            Ok(SubmissionReceipt::rejected("Period is closed"))
        }
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn session() -> TimesheetSession {
        TimesheetSession::with_classifier(
            DayClassifier::new(
                WeekOffPolicy::new(&[0, 6]).unwrap(),
                DayHours::default(),
                "General",
            ),
            ShiftRules::new(vec!["General".to_string(), "Night".to_string()]),
        )
    }

    fn calendar() -> StaticCalendar {
        StaticCalendar::new(vec![
            CalendarOverride::new(make_date("2026-01-01"), OverrideKind::Holiday),
            CalendarOverride::new(make_date("2026-01-03"), OverrideKind::Leave),
            CalendarOverride::new(make_date("2026-01-04"), OverrideKind::HalfLeave),
        ])
    }

    fn projects() -> Vec<Project> {
        vec![Project::new(1, "Alpha"), Project::new(2, "Beta")]
    }

    fn context() -> SubmissionContext {
        SubmissionContext {
            timesheet_id: 1,
            employee_id: 42,
            created_by: "hr.admin".to_string(),
        }
    }

    async fn loaded_session() -> TimesheetSession {
        let mut session = session();
        session
            .load(
                Some(make_date("2026-01-01")),
                Some(make_date("2026-01-04")),
                &projects(),
                &calendar(),
            )
            .await
            .unwrap();
        session
    }

    #[tokio::test]
    async fn test_load_builds_grid_per_project() {
        let mut session = session();
        let outcome = session
            .load(
                Some(make_date("2026-01-01")),
                Some(make_date("2026-01-04")),
                &projects(),
                &calendar(),
            )
            .await
            .unwrap();

        assert_eq!(
            outcome,
            LoadOutcome::Loaded {
                projects: 2,
                entries_per_project: 5
            }
        );
        let grid = session.grid().unwrap();
        assert_eq!(grid.projects[0].entries, grid.projects[1].entries);
        let activities: Vec<Activity> =
            grid.projects[0].entries.iter().map(|e| e.activity).collect();
        assert_eq!(
            activities,
            vec![
                Activity::Holiday,
                Activity::Present,
                Activity::Leave,
                Activity::HalfLeave,
                Activity::Present,
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_bound_is_idle_and_keeps_grid() {
        let mut session = loaded_session().await;
        let before = session.grid().cloned();

        let outcome = session
            .load(None, Some(make_date("2026-01-10")), &projects(), &FailingCalendar)
            .await
            .unwrap();

        assert_eq!(outcome, LoadOutcome::Idle);
        assert_eq!(session.grid().cloned(), before);
    }

    #[tokio::test]
    async fn test_invalid_range_keeps_grid() {
        let mut session = loaded_session().await;
        let before = session.grid().cloned();

        let result = session
            .load(
                Some(make_date("2026-01-01")),
                Some(make_date("2026-03-01")),
                &projects(),
                &calendar(),
            )
            .await;

        assert!(matches!(result, Err(EngineError::RangeExceedsOneMonth { .. })));
        assert_eq!(session.grid().cloned(), before);
    }

    #[tokio::test]
    async fn test_calendar_failure_aborts_load() {
        let mut session = loaded_session().await;
        let before = session.grid().cloned();

        let result = session
            .load(
                Some(make_date("2026-02-01")),
                Some(make_date("2026-02-05")),
                &projects(),
                &FailingCalendar,
            )
            .await;

        match result {
            Err(EngineError::CalendarLookupFailed { message }) => {
                assert!(message.contains("calendar service down"));
            }
            other => panic!("Expected CalendarLookupFailed, got {:?}", other),
        }
        assert_eq!(session.grid().cloned(), before);
    }

    #[tokio::test]
    async fn test_reload_discards_edits() {
        let mut session = loaded_session().await;
        session
            .edit(1, make_date("2026-01-02"), 0, EntryEdit::SetHours(Decimal::new(3, 0)))
            .unwrap();

        session
            .load(
                Some(make_date("2026-01-01")),
                Some(make_date("2026-01-04")),
                &projects(),
                &calendar(),
            )
            .await
            .unwrap();

        let entry = session
            .project(1)
            .unwrap()
            .entry(make_date("2026-01-02"), 0)
            .unwrap()
            .clone();
        assert_eq!(entry.hours, Decimal::new(8, 0));
    }

    #[tokio::test]
    async fn test_edit_is_isolated_per_project() {
        let mut session = loaded_session().await;
        let day = make_date("2026-01-02");

        let updated = session
            .edit(1, day, 0, EntryEdit::SetActivity(Activity::Leave))
            .unwrap();
        assert_eq!(updated.entry(day, 0).unwrap().hours, Decimal::ZERO);

        let other = session.project(2).unwrap().entry(day, 0).unwrap();
        assert_eq!(other.activity, Activity::Present);
        assert_eq!(other.hours, Decimal::new(8, 0));
    }

    #[tokio::test]
    async fn test_edit_errors() {
        let mut session = session();
        assert!(matches!(
            session.edit(1, make_date("2026-01-02"), 0, EntryEdit::SetHours(Decimal::ONE)),
            Err(EngineError::NoGridLoaded)
        ));

        let mut session = loaded_session().await;
        assert!(matches!(
            session.edit(9, make_date("2026-01-02"), 0, EntryEdit::SetHours(Decimal::ONE)),
            Err(EngineError::ProjectNotFound { project_id: 9 })
        ));
    }

    #[tokio::test]
    async fn test_save_success_records_status() {
        let mut session = loaded_session().await;
        let submitter = RecordingSubmitter::new();

        let message = session.save(2, &context(), &submitter).await.unwrap();

        assert_eq!(message, "Timesheet saved successfully");
        assert_eq!(
            session.save_status(2),
            SaveStatus::Saved {
                message: "Timesheet saved successfully".to_string()
            }
        );
        assert_eq!(session.save_status(1), SaveStatus::Idle);
        let submissions = submitter.submissions();
        assert_eq!(submissions.len(), 1);
        assert!(submissions[0].entries.iter().all(|e| e.project_id == 2));
        assert_eq!(submissions[0].entries.len(), 5);
    }

    #[tokio::test]
    async fn test_failed_save_leaves_grid_untouched() {
        let mut session = loaded_session().await;
        session
            .edit(1, make_date("2026-01-02"), 0, EntryEdit::SetShift("Night".to_string()))
            .unwrap();
        let before = session.grid().cloned();

        let result = session.save(1, &context(), &RejectingSubmitter).await;

        assert!(matches!(result, Err(EngineError::SubmissionRejected { .. })));
        assert_eq!(session.grid().cloned(), before);
        assert!(matches!(session.save_status(1), SaveStatus::Failed { .. }));
    }

    #[tokio::test]
    async fn test_begin_save_twice_is_rejected() {
        let mut session = loaded_session().await;
        session.begin_save(1, &context()).unwrap();

        assert!(matches!(
            session.begin_save(1, &context()),
            Err(EngineError::SaveInProgress { project_id: 1 })
        ));
        // Another project can still be saved
        assert!(session.begin_save(2, &context()).is_ok());
    }

    #[tokio::test]
    async fn test_reload_resets_save_state() {
        let mut session = loaded_session().await;
        let (ticket, _) = session.begin_save(1, &context()).unwrap();

        session
            .load(
                Some(make_date("2026-01-05")),
                Some(make_date("2026-01-06")),
                &projects(),
                &calendar(),
            )
            .await
            .unwrap();

        assert_eq!(session.save_status(1), SaveStatus::Idle);
        let status = session.finish_save(ticket, &Ok("late".to_string()));
        assert_eq!(status, SaveStatus::Idle);
        assert_eq!(session.save_status(1), SaveStatus::Idle);
    }

    #[tokio::test]
    async fn test_outcome_from_before_reload_does_not_touch_newer_save() {
        let mut session = loaded_session().await;
        let (before_reload, _) = session.begin_save(1, &context()).unwrap();

        session
            .load(
                Some(make_date("2026-01-05")),
                Some(make_date("2026-01-06")),
                &projects(),
                &calendar(),
            )
            .await
            .unwrap();
        let (after_reload, _) = session.begin_save(1, &context()).unwrap();

        let status = session.finish_save(before_reload, &Ok("from the old grid".to_string()));
        assert_eq!(status, SaveStatus::Submitting);
        assert_eq!(session.save_status(1), SaveStatus::Submitting);
        assert!(matches!(
            session.begin_save(1, &context()),
            Err(EngineError::SaveInProgress { project_id: 1 })
        ));

        let status = session.finish_save(after_reload, &Ok("saved".to_string()));
        assert_eq!(
            status,
            SaveStatus::Saved {
                message: "saved".to_string()
            }
        );
        assert_eq!(after_reload.project_id(), 1);
    }

    #[tokio::test]
    async fn test_load_rejects_duplicate_project_ids_before_lookup() {
        let mut session = loaded_session().await;
        let before = session.grid().cloned();

        let result = session
            .load(
                Some(make_date("2026-01-01")),
                Some(make_date("2026-01-04")),
                &[Project::new(1, "Alpha"), Project::new(1, "Beta")],
                &FailingCalendar,
            )
            .await;

        assert!(matches!(
            result,
            Err(EngineError::DuplicateProject { project_id: 1 })
        ));
        assert_eq!(session.grid().cloned(), before);
    }

    #[tokio::test]
    async fn test_prepare_then_install_matches_load() {
        let loaded = loaded_session().await;
        let mut installed = session();

        let prepared = TimesheetSession::prepare_load(
            Some(make_date("2026-01-01")),
            Some(make_date("2026-01-04")),
            &projects(),
            &calendar(),
        )
        .await
        .unwrap()
        .unwrap();
        let outcome = installed.install(prepared);

        assert_eq!(
            outcome,
            LoadOutcome::Loaded {
                projects: 2,
                entries_per_project: 5
            }
        );
        assert_eq!(installed.grid(), loaded.grid());

        let idle = TimesheetSession::prepare_load(
            Some(make_date("2026-01-01")),
            None,
            &projects(),
            &FailingCalendar,
        )
        .await
        .unwrap();
        assert!(idle.is_none());
    }

    #[test]
    fn test_replace_grid_returns_previous() {
        let mut session = session();
        let grid = build_grid(make_date("2026-01-01"), make_date("2026-01-01"), &[], &projects());

        assert!(session.replace_grid(grid.clone()).is_none());
        assert_eq!(session.replace_grid(grid.clone()), Some(grid));
    }

    #[test]
    fn test_save_status_serialization() {
        let json = serde_json::to_value(SaveStatus::Saved {
            message: "ok".to_string(),
        })
        .unwrap();
        assert_eq!(json["state"], "saved");
        assert_eq!(json["message"], "ok");
    }
}

//! The view-state store: the single authoritative copy of everything the UI
//! renders.
//!
//! Every mutation goes through a named operation on [`Store`]. Operations
//! either succeed atomically or reject their input and leave state untouched;
//! they never partially apply. The playback driver and the frame loop are the
//! only writers, and both run on the one event-loop thread, so each call is
//! atomic with respect to rendering.

use rand::{Rng, RngExt};
use thiserror::Error;
use tracing::{debug, error};

use meridian_fixtures::{audit_trail, initial_metrics, workflow};
use meridian_types::{
    Agent, AuditEntry, DashboardMetrics, DuplicateCompletionError, Playback, PlaybackPhase,
    Section, StepId, ViewMode, Workflow, WorkflowId,
};

/// A mutator received a value outside its domain, or the driver broke its
/// own scheduling discipline. These never originate from untrusted input;
/// callers log them as programming errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("step index {index} out of range for {workflow} ({steps} steps)")]
    StepOutOfRange {
        workflow: WorkflowId,
        index: usize,
        steps: usize,
    },
    #[error(transparent)]
    DuplicateCompletion(#[from] DuplicateCompletionError),
}

/// Session-scoped mutable view state. One instance per process, created at
/// startup, discarded on exit; nothing survives a restart.
#[derive(Debug)]
pub struct Store {
    active_section: Section,
    selected_workflow: WorkflowId,
    playback: Playback,
    selected_agent: Option<&'static str>,
    view_mode: ViewMode,
    policy_number: &'static str,
    audit_filter: String,
    metrics: DashboardMetrics,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            active_section: Section::default(),
            selected_workflow: WorkflowId::default(),
            playback: Playback::default(),
            selected_agent: None,
            view_mode: ViewMode::default(),
            policy_number: "HO-2026-001847",
            audit_filter: String::new(),
            metrics: initial_metrics(),
        }
    }
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    #[must_use]
    pub fn active_section(&self) -> Section {
        self.active_section
    }

    pub fn set_active_section(&mut self, section: Section) {
        self.active_section = section;
    }

    // ------------------------------------------------------------------
    // Workflow selection & playback
    // ------------------------------------------------------------------

    #[must_use]
    pub fn selected_workflow(&self) -> WorkflowId {
        self.selected_workflow
    }

    /// The definition of the currently selected workflow.
    #[must_use]
    pub fn workflow(&self) -> &'static Workflow {
        workflow(self.selected_workflow)
    }

    #[must_use]
    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    #[must_use]
    pub fn phase(&self) -> PlaybackPhase {
        self.playback.phase(self.workflow().steps.len())
    }

    /// Switch workflows. The id change and the playback reset happen in the
    /// same mutation, so no observer can see progress from the previous
    /// workflow against the new one.
    pub fn select_workflow(&mut self, id: WorkflowId) {
        if id != self.selected_workflow {
            debug!(workflow = %id, "workflow selected");
        }
        self.selected_workflow = id;
        self.playback.reset();
    }

    pub fn set_running(&mut self, running: bool) {
        self.playback.set_running(running);
    }

    /// Point playback at a step. Out-of-range indices are rejected with
    /// state unchanged.
    pub fn set_current_step(&mut self, index: usize) -> Result<(), StateError> {
        let steps = self.workflow().steps.len();
        if index >= steps {
            let err = StateError::StepOutOfRange {
                workflow: self.selected_workflow,
                index,
                steps,
            };
            error!(%err, "rejected step index");
            return Err(err);
        }
        self.playback.set_current_step(index);
        Ok(())
    }

    /// Record a step as completed. A duplicate means a stale timer fired
    /// after a restart; it is rejected and logged, never silently absorbed.
    pub fn add_completed_step(&mut self, id: StepId) -> Result<(), StateError> {
        self.playback.push_completed(id).map_err(|err| {
            error!(%err, "duplicate step completion");
            StateError::from(err)
        })
    }

    /// Playback back to its initial value; workflow selection untouched.
    pub fn reset_playback(&mut self) {
        self.playback.reset();
    }

    // ------------------------------------------------------------------
    // Agent view
    // ------------------------------------------------------------------

    #[must_use]
    pub fn selected_agent(&self) -> Option<&'static str> {
        self.selected_agent
    }

    pub fn set_selected_agent(&mut self, id: Option<&'static str>) {
        self.selected_agent = id;
    }

    /// The roster entry for the selected agent, if any.
    #[must_use]
    pub fn selected_agent_record(&self) -> Option<&'static Agent> {
        let id = self.selected_agent?;
        meridian_fixtures::agents().iter().find(|a| a.id == id)
    }

    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    // ------------------------------------------------------------------
    // Audit trail
    // ------------------------------------------------------------------

    #[must_use]
    pub fn policy_number(&self) -> &'static str {
        self.policy_number
    }

    pub fn set_policy_number(&mut self, policy_number: &'static str) {
        self.policy_number = policy_number;
    }

    #[must_use]
    pub fn audit_filter(&self) -> &str {
        &self.audit_filter
    }

    pub fn set_audit_filter(&mut self, filter: impl Into<String>) {
        self.audit_filter = filter.into();
    }

    /// Audit entries passing the current free-form filter, newest first.
    #[must_use]
    pub fn filtered_audit_trail(&self) -> Vec<&'static AuditEntry> {
        audit_trail()
            .iter()
            .filter(|e| e.matches(&self.audit_filter))
            .collect()
    }

    // ------------------------------------------------------------------
    // Metrics
    // ------------------------------------------------------------------

    #[must_use]
    pub fn metrics(&self) -> &DashboardMetrics {
        &self.metrics
    }

    /// One simulated-activity update: bounded random bumps to the activity
    /// counters, bounded random drain of the backlog, floored at zero.
    pub fn tick_metrics<R: Rng>(&mut self, rng: &mut R) {
        let m = &mut self.metrics;
        m.submissions_processing += rng.random_range(0..3);
        m.quotes_generated += rng.random_range(0..2);
        m.policies_bound += rng.random_range(0..2);
        m.endorsement_backlog = m.endorsement_backlog.saturating_sub(rng.random_range(0..2));
    }
}

//! Playback progress for the workflow simulator.
//!
//! The store owns exactly one [`Playback`] value; the playback driver never
//! keeps its own copy of progress. Fields are private so every mutation goes
//! through a method that can hold the invariants:
//!
//! - `completed` is an in-order, duplicate-free prefix of the selected
//!   workflow's step ids (the prefix/ordering part is enforced by the driver,
//!   which is the only writer; duplicates are rejected here).
//! - `running` implies a current step is set.

use thiserror::Error;

use crate::workflow::StepId;

/// Attempted to mark a step completed twice.
///
/// This only happens when a stale timer from a previous run fires after a
/// restart, i.e. a driver bug. It is surfaced rather than swallowed because
/// silent duplication would corrupt the completed-prefix invariant.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("step {0} already completed")]
pub struct DuplicateCompletionError(pub StepId);

/// Progress of the current workflow run.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct Playback {
    running: bool,
    current_step: Option<usize>,
    completed: Vec<StepId>,
}

impl Playback {
    #[must_use]
    pub fn running(&self) -> bool {
        self.running
    }

    /// Index of the step currently in flight; `None` before the first start.
    #[must_use]
    pub fn current_step(&self) -> Option<usize> {
        self.current_step
    }

    #[must_use]
    pub fn completed(&self) -> &[StepId] {
        &self.completed
    }

    #[must_use]
    pub fn is_completed(&self, id: StepId) -> bool {
        self.completed.contains(&id)
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    pub fn set_current_step(&mut self, index: usize) {
        self.current_step = Some(index);
    }

    /// Append a step to the completed sequence.
    pub fn push_completed(&mut self, id: StepId) -> Result<(), DuplicateCompletionError> {
        if self.completed.contains(&id) {
            return Err(DuplicateCompletionError(id));
        }
        self.completed.push(id);
        Ok(())
    }

    /// Back to the initial value: not running, no current step, nothing done.
    pub fn reset(&mut self) {
        *self = Playback::default();
    }

    /// Classify progress against the selected workflow's step count.
    #[must_use]
    pub fn phase(&self, step_count: usize) -> PlaybackPhase {
        if step_count > 0 && self.completed.len() == step_count {
            PlaybackPhase::Completed
        } else if self.current_step.is_none() {
            PlaybackPhase::Idle
        } else if self.running {
            PlaybackPhase::Running
        } else {
            PlaybackPhase::Paused
        }
    }
}

/// The four externally observable playback states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackPhase {
    /// No run started since the last reset.
    Idle,
    /// A step timer is armed.
    Running,
    /// Mid-sequence, timer cancelled; the in-flight step is neither
    /// completed nor rolled back.
    Paused,
    /// Every step completed. Only reset or a workflow change leaves this.
    Completed,
}

impl PlaybackPhase {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            PlaybackPhase::Idle => "Idle",
            PlaybackPhase::Running => "Running",
            PlaybackPhase::Paused => "Paused",
            PlaybackPhase::Completed => "Completed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: StepId = StepId::new("a");
    const B: StepId = StepId::new("b");

    #[test]
    fn default_is_idle() {
        let pb = Playback::default();
        assert!(!pb.running());
        assert_eq!(pb.current_step(), None);
        assert!(pb.completed().is_empty());
        assert_eq!(pb.phase(2), PlaybackPhase::Idle);
    }

    #[test]
    fn duplicate_completion_is_rejected_without_corruption() {
        let mut pb = Playback::default();
        pb.push_completed(A).unwrap();
        let err = pb.push_completed(A).unwrap_err();
        assert_eq!(err, DuplicateCompletionError(A));
        assert_eq!(pb.completed(), &[A]);
    }

    #[test]
    fn phase_transitions_follow_progress() {
        let mut pb = Playback::default();
        pb.set_current_step(0);
        pb.set_running(true);
        assert_eq!(pb.phase(2), PlaybackPhase::Running);

        pb.set_running(false);
        assert_eq!(pb.phase(2), PlaybackPhase::Paused);

        pb.set_running(true);
        pb.push_completed(A).unwrap();
        pb.set_current_step(1);
        pb.push_completed(B).unwrap();
        pb.set_running(false);
        assert_eq!(pb.phase(2), PlaybackPhase::Completed);

        pb.reset();
        assert_eq!(pb.phase(2), PlaybackPhase::Idle);
    }

    #[test]
    fn empty_workflow_never_reads_as_completed() {
        let pb = Playback::default();
        assert_eq!(pb.phase(0), PlaybackPhase::Idle);
    }
}

//! The step-playback driver: turns a static step list into a time-phased
//! animation of the store's playback state.
//!
//! The driver owns no progress of its own, only the pending step timer. The
//! timer lives in a single `Option` slot, so arming a new delay structurally
//! replaces (cancels) any previous one: there can never be two pending
//! continuations, no matter how fast start/reset/select are mashed.
//!
//! Timers advance on frame deltas rather than wall-clock callbacks (the same
//! pattern as the UI's animation effects), which keeps the state machine
//! synchronous and fully deterministic under test.

use std::time::Duration;

use tracing::{debug, trace};

use meridian_types::{PlaybackPhase, WorkflowId};

use crate::store::{StateError, Store};

/// Demo pacing: milliseconds of real time per nominal duration unit.
pub const DEFAULT_SCALE_MS: u64 = 50;

/// Countdown for the step currently in flight.
#[derive(Debug, Clone, Copy)]
struct StepTimer {
    elapsed: Duration,
    duration: Duration,
}

impl StepTimer {
    fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    fn is_finished(self) -> bool {
        self.elapsed >= self.duration
    }

    fn progress(self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// Drives the store's playback forward one step at a time.
#[derive(Debug)]
pub struct PlaybackDriver {
    timer: Option<StepTimer>,
    scale_ms: u64,
}

impl Default for PlaybackDriver {
    fn default() -> Self {
        Self::new(DEFAULT_SCALE_MS)
    }
}

impl PlaybackDriver {
    #[must_use]
    pub fn new(scale_ms: u64) -> Self {
        Self {
            timer: None,
            scale_ms,
        }
    }

    /// Start from idle, or resume from pause.
    ///
    /// Resuming re-arms a full fresh delay for the in-flight step; elapsed
    /// wait time from before the pause is intentionally forgotten. Ignored
    /// while running or completed, so a double start cannot arm a second
    /// timer or accelerate completion.
    pub fn start(&mut self, store: &mut Store) -> Result<(), StateError> {
        let steps = &store.workflow().steps;
        match store.phase() {
            PlaybackPhase::Idle => {
                let Some(first) = steps.first() else {
                    return Ok(());
                };
                let duration = first.duration;
                store.set_current_step(0)?;
                store.set_running(true);
                self.arm(duration);
                debug!(workflow = %store.selected_workflow(), "playback started");
            }
            PlaybackPhase::Paused => {
                let Some(index) = store.playback().current_step() else {
                    return Ok(());
                };
                let Some(step) = store.workflow().step(index) else {
                    return Ok(());
                };
                let duration = step.duration;
                store.set_running(true);
                self.arm(duration);
                debug!(step = %step.id, "playback resumed");
            }
            PlaybackPhase::Running | PlaybackPhase::Completed => {
                trace!(phase = store.phase().label(), "start ignored");
            }
        }
        Ok(())
    }

    /// Cancel the pending advance without touching progress. The in-flight
    /// step is neither completed nor rolled back.
    pub fn pause(&mut self, store: &mut Store) {
        if store.phase() != PlaybackPhase::Running {
            return;
        }
        self.timer = None;
        store.set_running(false);
        debug!("playback paused");
    }

    /// Cancel any pending advance and return playback to idle.
    pub fn reset(&mut self, store: &mut Store) {
        self.timer = None;
        store.reset_playback();
    }

    /// Switch workflows. Forces a reset first so a timer armed for the old
    /// workflow can never fire into the new one.
    pub fn select_workflow(&mut self, store: &mut Store, id: WorkflowId) {
        self.timer = None;
        store.select_workflow(id);
    }

    /// Advance the pending timer by one frame's elapsed time. At most one
    /// step completes per call.
    pub fn tick(&mut self, store: &mut Store, delta: Duration) -> Result<(), StateError> {
        let Some(timer) = self.timer.as_mut() else {
            return Ok(());
        };
        timer.advance(delta);
        if !timer.is_finished() {
            return Ok(());
        }
        self.timer = None;

        let Some(index) = store.playback().current_step() else {
            return Ok(());
        };
        let Some(step) = store.workflow().step(index) else {
            return Ok(());
        };
        store.add_completed_step(step.id)?;
        debug!(step = %step.id, "step completed");

        // Only arm the next delay once the current step is recorded; steps
        // complete strictly in array order.
        match store.workflow().step(index + 1) {
            Some(next) => {
                let duration = next.duration;
                store.set_current_step(index + 1)?;
                self.arm(duration);
            }
            None => {
                store.set_running(false);
                debug!(workflow = %store.selected_workflow(), "playback completed");
            }
        }
        Ok(())
    }

    /// Fraction of the in-flight step's wait that has elapsed.
    #[must_use]
    pub fn step_progress(&self) -> Option<f32> {
        self.timer.map(StepTimer::progress)
    }

    fn arm(&mut self, nominal_duration: u64) {
        // Assignment replaces any pending timer: cancel-before-schedule.
        self.timer = Some(StepTimer::new(Duration::from_millis(
            self.scale_ms.saturating_mul(nominal_duration),
        )));
    }

    #[cfg(test)]
    pub(crate) fn has_pending_timer(&self) -> bool {
        self.timer.is_some()
    }
}

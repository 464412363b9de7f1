//! Application state and orchestration for Meridian.
//!
//! This crate contains the view-state store and the timer-driven demo
//! machinery without any TUI dependency. The binary's frame loop calls
//! [`App::tick`] with elapsed frame time; input handling calls the command
//! methods; the TUI reads state through [`App::store`] and the progress
//! accessors. All of it runs on one thread, so every mutation is atomic with
//! respect to rendering.

use std::time::Duration;

use rand::rngs::ThreadRng;
use tracing::warn;

mod config;
mod extraction;
mod metrics;
mod playback;
mod store;

#[cfg(test)]
mod tests;

pub use config::{AppConfig, ConfigError, DemoConfig, MeridianConfig};
pub use extraction::{DEFAULT_EXTRACTION_RATE, ExtractionDemo};
pub use metrics::{DEFAULT_METRICS_PERIOD, MetricsTicker};
pub use playback::{DEFAULT_SCALE_MS, PlaybackDriver};
pub use store::{StateError, Store};

// Re-export the domain types the TUI needs so it can depend on one crate.
pub use meridian_types::{
    Agent, AuditEntry, DashboardMetrics, ExtractedField, Playback, PlaybackPhase, Section,
    StepId, UiOptions, ViewMode, Workflow, WorkflowId,
};

/// The whole application: store, drivers, and session flags.
#[derive(Debug)]
pub struct App {
    store: Store,
    driver: PlaybackDriver,
    metrics_ticker: MetricsTicker,
    extraction: ExtractionDemo,
    ui_options: UiOptions,
    rng: ThreadRng,
    should_quit: bool,
    editing_filter: bool,
    tick: u64,
}

impl App {
    #[must_use]
    pub fn new(config: &MeridianConfig) -> Self {
        Self {
            store: Store::new(),
            driver: PlaybackDriver::new(config.playback_scale_ms()),
            metrics_ticker: MetricsTicker::new(Duration::from_secs(config.metrics_tick_secs())),
            extraction: ExtractionDemo::new(config.extraction_rate()),
            ui_options: config.ui_options(),
            rng: rand::rng(),
            should_quit: false,
            editing_filter: false,
            tick: 0,
        }
    }

    /// Advance all timer-driven state by one frame's elapsed time.
    pub fn tick(&mut self, delta: Duration) {
        self.tick = self.tick.wrapping_add(1);
        if let Err(err) = self.driver.tick(&mut self.store, delta) {
            // Already logged at error level by the store; keep the demo
            // rendering rather than tearing the session down.
            warn!(%err, "playback driver tick failed");
        }
        self.metrics_ticker
            .tick(&mut self.store, delta, &mut self.rng);
        self.extraction.tick(delta);
    }

    // ------------------------------------------------------------------
    // Read access for rendering
    // ------------------------------------------------------------------

    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    /// Animation frame counter for spinners.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Elapsed fraction of the in-flight step's wait, when running.
    #[must_use]
    pub fn step_progress(&self) -> Option<f32> {
        self.driver.step_progress()
    }

    #[must_use]
    pub fn extraction(&self) -> &ExtractionDemo {
        &self.extraction
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[must_use]
    pub fn is_editing_filter(&self) -> bool {
        self.editing_filter
    }

    // ------------------------------------------------------------------
    // Commands (input handlers call these)
    // ------------------------------------------------------------------

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn goto_section(&mut self, section: Section) {
        self.store.set_active_section(section);
    }

    pub fn next_section(&mut self) {
        self.store
            .set_active_section(self.store.active_section().next());
    }

    pub fn prev_section(&mut self) {
        self.store
            .set_active_section(self.store.active_section().prev());
    }

    /// Start, resume, or pause depending on the current phase.
    pub fn toggle_playback(&mut self) {
        match self.store.phase() {
            PlaybackPhase::Running => self.driver.pause(&mut self.store),
            PlaybackPhase::Idle | PlaybackPhase::Paused => {
                if let Err(err) = self.driver.start(&mut self.store) {
                    warn!(%err, "playback start failed");
                }
            }
            PlaybackPhase::Completed => {}
        }
    }

    pub fn reset_playback(&mut self) {
        self.driver.reset(&mut self.store);
    }

    /// Cycle to the next canned workflow, implicitly resetting playback.
    pub fn cycle_workflow(&mut self) {
        let next = self.store.selected_workflow().next();
        self.driver.select_workflow(&mut self.store, next);
    }

    pub fn select_workflow(&mut self, id: WorkflowId) {
        self.driver.select_workflow(&mut self.store, id);
    }

    pub fn select_next_agent(&mut self) {
        self.move_agent_selection(1);
    }

    pub fn select_prev_agent(&mut self) {
        self.move_agent_selection(-1);
    }

    fn move_agent_selection(&mut self, step: isize) {
        let roster = meridian_fixtures::agents();
        if roster.is_empty() {
            return;
        }
        let len = roster.len() as isize;
        let current = self
            .store
            .selected_agent()
            .and_then(|id| roster.iter().position(|a| a.id == id));
        let next = match current {
            Some(i) => (i as isize + step).rem_euclid(len) as usize,
            None => {
                if step >= 0 {
                    0
                } else {
                    roster.len() - 1
                }
            }
        };
        self.store.set_selected_agent(Some(roster[next].id));
    }

    pub fn clear_agent_selection(&mut self) {
        self.store.set_selected_agent(None);
    }

    pub fn toggle_view_mode(&mut self) {
        self.store.set_view_mode(self.store.view_mode().toggle());
    }

    pub fn start_extraction(&mut self) {
        self.extraction.start();
    }

    pub fn reset_extraction(&mut self) {
        self.extraction.reset();
    }

    // ------------------------------------------------------------------
    // Audit filter editing
    // ------------------------------------------------------------------

    pub fn begin_filter_edit(&mut self) {
        self.editing_filter = true;
    }

    pub fn end_filter_edit(&mut self) {
        self.editing_filter = false;
    }

    /// Append to the live filter; the list narrows on every keystroke.
    pub fn push_filter_char(&mut self, c: char) {
        let mut filter = self.store.audit_filter().to_owned();
        filter.push(c);
        self.store.set_audit_filter(filter);
    }

    pub fn pop_filter_char(&mut self) {
        let mut filter = self.store.audit_filter().to_owned();
        filter.pop();
        self.store.set_audit_filter(filter);
    }

    pub fn clear_filter(&mut self) {
        self.store.set_audit_filter(String::new());
        self.editing_filter = false;
    }
}

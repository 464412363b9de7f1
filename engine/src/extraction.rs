//! The document-extraction demo: a fake progress sweep for the documents tab.
//!
//! Same delta-driven timer idiom as playback, but linear: progress fills at a
//! fixed rate, clamps at 100, and flips itself off when full.

use std::time::Duration;

/// Default fill rate in percent per second.
pub const DEFAULT_EXTRACTION_RATE: f64 = 28.0;

#[derive(Debug)]
pub struct ExtractionDemo {
    running: bool,
    progress: f64,
    rate: f64,
}

impl Default for ExtractionDemo {
    fn default() -> Self {
        Self::new(DEFAULT_EXTRACTION_RATE)
    }
}

impl ExtractionDemo {
    #[must_use]
    pub fn new(rate: f64) -> Self {
        Self {
            running: false,
            progress: 0.0,
            rate: rate.max(0.0),
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current progress, `0.0..=100.0`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.progress >= 100.0
    }

    /// How many of `total` fields the sweep has revealed so far. Fields
    /// appear one by one as progress advances; all of them once done.
    #[must_use]
    pub fn revealed_count(&self, total: usize) -> usize {
        if self.is_done() {
            return total;
        }
        ((self.progress / 100.0) * total as f64) as usize
    }

    /// Restart the sweep from zero.
    pub fn start(&mut self) {
        self.progress = 0.0;
        self.running = true;
    }

    pub fn reset(&mut self) {
        self.progress = 0.0;
        self.running = false;
    }

    pub fn tick(&mut self, delta: Duration) {
        if !self.running {
            return;
        }
        self.progress = (self.progress + self.rate * delta.as_secs_f64()).min(100.0);
        if self.is_done() {
            self.running = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_clamps_and_stops() {
        let mut demo = ExtractionDemo::new(50.0);
        demo.start();
        demo.tick(Duration::from_secs(1));
        assert!((demo.progress() - 50.0).abs() < 1e-9);
        assert!(demo.is_running());

        demo.tick(Duration::from_secs(5));
        assert!((demo.progress() - 100.0).abs() < f64::EPSILON);
        assert!(demo.is_done());
        assert!(!demo.is_running());
    }

    #[test]
    fn restart_clears_progress() {
        let mut demo = ExtractionDemo::new(50.0);
        demo.start();
        demo.tick(Duration::from_secs(3));
        demo.start();
        assert!((demo.progress()).abs() < f64::EPSILON);
        assert!(demo.is_running());
    }

    #[test]
    fn fields_reveal_in_step_with_progress() {
        let mut demo = ExtractionDemo::new(50.0);
        assert_eq!(demo.revealed_count(23), 0);

        demo.start();
        demo.tick(Duration::from_secs(1));
        // Half the sweep shows the first half of the fields, never more.
        assert_eq!(demo.revealed_count(23), 11);

        demo.tick(Duration::from_secs(1));
        assert!(demo.is_done());
        assert_eq!(demo.revealed_count(23), 23);
    }

    #[test]
    fn reset_hides_revealed_fields() {
        let mut demo = ExtractionDemo::new(50.0);
        demo.start();
        demo.tick(Duration::from_secs(1));
        demo.reset();
        assert_eq!(demo.revealed_count(23), 0);
    }

    #[test]
    fn idle_demo_ignores_ticks() {
        let mut demo = ExtractionDemo::default();
        demo.tick(Duration::from_secs(10));
        assert!(demo.progress().abs() < f64::EPSILON);
    }
}

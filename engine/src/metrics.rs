//! Periodic metrics ticker.
//!
//! Runs on its own accumulator with no ordering relationship to playback:
//! it may fire mid-run and neither blocks nor is blocked by the step timers.

use std::time::Duration;

use rand::Rng;

use crate::store::Store;

/// Default period between simulated metric updates.
pub const DEFAULT_METRICS_PERIOD: Duration = Duration::from_secs(5);

#[derive(Debug)]
pub struct MetricsTicker {
    elapsed: Duration,
    period: Duration,
}

impl Default for MetricsTicker {
    fn default() -> Self {
        Self::new(DEFAULT_METRICS_PERIOD)
    }
}

impl MetricsTicker {
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            period,
        }
    }

    /// Accumulate frame time and apply one metrics update per elapsed period.
    pub fn tick<R: Rng>(&mut self, store: &mut Store, delta: Duration, rng: &mut R) {
        if self.period.is_zero() {
            return;
        }
        self.elapsed = self.elapsed.saturating_add(delta);
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            store.tick_metrics(rng);
        }
    }
}

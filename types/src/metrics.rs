//! Dashboard metrics snapshot.

/// The "live" operations numbers shown on the dashboard.
///
/// The first three activity counters only ever go up; `endorsement_backlog`
/// only ever goes down (floored at zero). The remaining fields are static
/// display values. All mutation happens through the engine's metrics ticker.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct DashboardMetrics {
    pub submissions_processing: u64,
    pub quotes_generated: u64,
    pub policies_bound: u64,
    pub endorsement_backlog: u64,
    pub compliance_score: f64,
    pub avg_quote_time: f64,
    pub straight_through_rate: f64,
    pub human_touch_time: f64,
    pub agent_accuracy: f64,
}

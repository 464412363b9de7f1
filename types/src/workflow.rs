//! Workflow definitions and the identifiers that reference them.
//!
//! Workflow data is hand-authored fixture content, so all strings are
//! `&'static str` and definitions are immutable for the process lifetime.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Identifier for one of the demo's canned workflows.
///
/// A closed enum rather than a free string: selecting a workflow that has no
/// definition would leave playback pointing at nothing, so the type makes
/// that impossible. The string form (used in logs and fixtures) round-trips
/// through [`WorkflowId::as_str`] / [`FromStr`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkflowId {
    #[default]
    HomeownersNewBusiness,
    AutoEndorsement,
    UmbrellaRenewal,
}

#[derive(Debug, Error)]
#[error("unknown workflow id: {0}")]
pub struct UnknownWorkflowError(pub String);

impl WorkflowId {
    pub const ALL: [WorkflowId; 3] = [
        WorkflowId::HomeownersNewBusiness,
        WorkflowId::AutoEndorsement,
        WorkflowId::UmbrellaRenewal,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            WorkflowId::HomeownersNewBusiness => "homeowners-nb",
            WorkflowId::AutoEndorsement => "auto-endorsement",
            WorkflowId::UmbrellaRenewal => "umbrella-renewal",
        }
    }

    /// Cycle to the next workflow in fixture order.
    #[must_use]
    pub fn next(self) -> Self {
        let i = WorkflowId::ALL
            .iter()
            .position(|w| *w == self)
            .unwrap_or(0);
        WorkflowId::ALL[(i + 1) % WorkflowId::ALL.len()]
    }
}

impl FromStr for WorkflowId {
    type Err = UnknownWorkflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkflowId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownWorkflowError(s.to_owned()))
    }
}

impl fmt::Display for WorkflowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of a step, unique within its workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct StepId(&'static str);

impl StepId {
    #[must_use]
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineOfBusiness {
    Homeowners,
    Auto,
    Umbrella,
}

impl LineOfBusiness {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            LineOfBusiness::Homeowners => "Homeowners",
            LineOfBusiness::Auto => "Auto",
            LineOfBusiness::Umbrella => "Umbrella",
        }
    }
}

/// One step of a canned workflow.
///
/// `duration` is in nominal seconds of "real" processing time; playback
/// scales it down for demo pacing.
#[derive(Debug, Clone, serde::Serialize)]
pub struct WorkflowStep {
    pub id: StepId,
    pub name: &'static str,
    /// Display name of the actor that owns this step.
    pub agent: &'static str,
    pub duration: u64,
    /// Step requires a human in the loop.
    pub is_human: bool,
    pub actions: Vec<&'static str>,
    pub output: &'static str,
}

/// An immutable, ordered workflow definition.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Workflow {
    pub id: WorkflowId,
    pub name: &'static str,
    pub description: &'static str,
    pub line_of_business: LineOfBusiness,
    pub steps: Vec<WorkflowStep>,
}

impl Workflow {
    /// Sum of all nominal step durations.
    #[must_use]
    pub fn total_time(&self) -> u64 {
        self.steps.iter().map(|s| s.duration).sum()
    }

    /// Sum of durations for steps with a human in the loop.
    #[must_use]
    pub fn human_time(&self) -> u64 {
        self.steps
            .iter()
            .filter(|s| s.is_human)
            .map(|s| s.duration)
            .sum()
    }

    /// Total minus human-touch time. Always `total_time - human_time`.
    #[must_use]
    pub fn automation_time(&self) -> u64 {
        self.total_time() - self.human_time()
    }

    #[must_use]
    pub fn step(&self, index: usize) -> Option<&WorkflowStep> {
        self.steps.get(index)
    }
}

/// One field pulled out of a document during the extraction demo, with the
/// model's confidence in the value.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ExtractedField {
    pub field: &'static str,
    pub value: &'static str,
    pub confidence: f64,
}

/// Document-extraction stats shown on the documents tab.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DocumentType {
    pub id: &'static str,
    pub name: &'static str,
    pub extraction_accuracy: f64,
    pub avg_processing_time: f64,
    pub fields_extracted: u32,
}

/// Executive Q&A card shown on the overview tab.
#[derive(Debug, Clone, serde::Serialize)]
pub struct TalkingPoint {
    pub id: &'static str,
    pub title: &'static str,
    pub question: &'static str,
    pub content: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(id: &'static str, duration: u64, is_human: bool) -> WorkflowStep {
        WorkflowStep {
            id: StepId::new(id),
            name: "step",
            agent: "Agent",
            duration,
            is_human,
            actions: vec![],
            output: "done",
        }
    }

    #[test]
    fn workflow_id_round_trips_through_str() {
        for id in WorkflowId::ALL {
            assert_eq!(id.as_str().parse::<WorkflowId>().unwrap(), id);
        }
    }

    #[test]
    fn unknown_workflow_id_is_rejected() {
        let err = "commercial-flood".parse::<WorkflowId>().unwrap_err();
        assert!(err.to_string().contains("commercial-flood"));
    }

    #[test]
    fn workflow_id_cycle_visits_all() {
        let mut id = WorkflowId::HomeownersNewBusiness;
        let mut seen = vec![id];
        for _ in 1..WorkflowId::ALL.len() {
            id = id.next();
            seen.push(id);
        }
        assert_eq!(seen, WorkflowId::ALL.to_vec());
        assert_eq!(id.next(), WorkflowId::HomeownersNewBusiness);
    }

    #[test]
    fn timing_split_adds_up() {
        let wf = Workflow {
            id: WorkflowId::AutoEndorsement,
            name: "Auto Add Driver",
            description: "",
            line_of_business: LineOfBusiness::Auto,
            steps: vec![
                step("intake", 12, false),
                step("rating", 18, false),
                step("review", 12, true),
                step("issue", 8, false),
            ],
        };
        assert_eq!(wf.total_time(), 50);
        assert_eq!(wf.human_time(), 12);
        assert_eq!(wf.automation_time(), 38);
        assert_eq!(wf.automation_time() + wf.human_time(), wf.total_time());
    }
}

//! Core domain types for Meridian.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

mod agent;
mod audit;
mod metrics;
mod playback;
mod section;
mod ui;
mod workflow;

pub use agent::{
    AccessMode, Agent, AgentMetrics, AgentRole, AgentStatus, ConnectionKind, ConnectionStatus,
    HumanCheckpoint, McpConnection, Skill,
};
pub use audit::AuditEntry;
pub use metrics::DashboardMetrics;
pub use playback::{DuplicateCompletionError, Playback, PlaybackPhase};
pub use section::Section;
pub use ui::{UiOptions, ViewMode};
pub use workflow::{
    DocumentType, ExtractedField, LineOfBusiness, StepId, TalkingPoint, UnknownWorkflowError,
    Workflow, WorkflowId, WorkflowStep,
};

//! Agent roster and MCP-connection fixture types.
//!
//! Display-only data: the engine never mutates these records.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentRole {
    Orchestrator,
    Intake,
    Rating,
    Issuance,
    Audit,
}

impl AgentRole {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            AgentRole::Orchestrator => "Orchestrator",
            AgentRole::Intake => "Intake",
            AgentRole::Rating => "Rating",
            AgentRole::Issuance => "Issuance",
            AgentRole::Audit => "Audit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Idle,
    Active,
    Processing,
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AgentStatus::Idle => "idle",
            AgentStatus::Active => "active",
            AgentStatus::Processing => "processing",
        };
        f.write_str(s)
    }
}

/// A discrete capability an agent advertises, with optional worked example.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Skill {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub example_input: Option<&'static str>,
    pub example_output: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConnectionKind {
    PolicyAdmin,
    RatingEngine,
    DocumentStore,
    ThirdParty,
    Compliance,
    Crm,
}

impl ConnectionKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ConnectionKind::PolicyAdmin => "policy-admin",
            ConnectionKind::RatingEngine => "rating-engine",
            ConnectionKind::DocumentStore => "document-store",
            ConnectionKind::ThirdParty => "third-party",
            ConnectionKind::Compliance => "compliance",
            ConnectionKind::Crm => "crm",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessMode {
    Read,
    Write,
    ReadWrite,
}

impl AccessMode {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            AccessMode::Read => "read",
            AccessMode::Write => "write",
            AccessMode::ReadWrite => "read-write",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Connected,
    Disconnected,
}

/// An MCP connector to an external carrier system.
#[derive(Debug, Clone, serde::Serialize)]
pub struct McpConnection {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: ConnectionKind,
    pub operations: AccessMode,
    pub latency_ms: u32,
    pub status: ConnectionStatus,
}

/// A condition under which an agent hands off to a human.
#[derive(Debug, Clone, serde::Serialize)]
pub struct HumanCheckpoint {
    pub condition: &'static str,
    pub description: &'static str,
    pub escalation_path: &'static str,
}

#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct AgentMetrics {
    pub tasks_completed: u64,
    pub avg_processing_time: f64,
    pub accuracy_rate: f64,
}

/// One agent in the roster.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Agent {
    pub id: &'static str,
    pub name: &'static str,
    pub model: &'static str,
    pub role: AgentRole,
    pub description: &'static str,
    pub skills: Vec<Skill>,
    pub mcp_connections: Vec<McpConnection>,
    pub human_checkpoints: Vec<HumanCheckpoint>,
    pub status: AgentStatus,
    pub metrics: AgentMetrics,
}

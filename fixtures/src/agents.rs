//! Agent roster and MCP connection fixtures.

use std::sync::LazyLock;

use meridian_types::{
    AccessMode, Agent, AgentMetrics, AgentRole, AgentStatus, ConnectionKind, ConnectionStatus,
    HumanCheckpoint, McpConnection, Skill,
};

static MCP_CONNECTIONS: LazyLock<Vec<McpConnection>> = LazyLock::new(|| {
    let conn = |id, name, kind, operations, latency_ms| McpConnection {
        id,
        name,
        kind,
        operations,
        latency_ms,
        status: ConnectionStatus::Connected,
    };
    vec![
        conn(
            "guidewire",
            "Policy Admin (Guidewire)",
            ConnectionKind::PolicyAdmin,
            AccessMode::ReadWrite,
            120,
        ),
        conn(
            "duck-creek",
            "Policy Admin (Duck Creek)",
            ConnectionKind::PolicyAdmin,
            AccessMode::ReadWrite,
            95,
        ),
        conn(
            "iso-rating",
            "Rating Engine (ISO/AAIS)",
            ConnectionKind::RatingEngine,
            AccessMode::Read,
            45,
        ),
        conn(
            "sharepoint",
            "Document Store (SharePoint)",
            ConnectionKind::DocumentStore,
            AccessMode::ReadWrite,
            180,
        ),
        conn(
            "s3",
            "Document Store (S3)",
            ConnectionKind::DocumentStore,
            AccessMode::ReadWrite,
            35,
        ),
        conn(
            "salesforce",
            "CRM (Salesforce)",
            ConnectionKind::Crm,
            AccessMode::ReadWrite,
            150,
        ),
        conn(
            "lexisnexis",
            "LexisNexis (MVR, CLUE)",
            ConnectionKind::ThirdParty,
            AccessMode::Read,
            800,
        ),
        conn(
            "verisk",
            "Verisk (Fire Class, ISO)",
            ConnectionKind::ThirdParty,
            AccessMode::Read,
            650,
        ),
        conn(
            "corelogic",
            "CoreLogic (Property Data)",
            ConnectionKind::ThirdParty,
            AccessMode::Read,
            720,
        ),
        conn(
            "serff",
            "State Filing (SERFF)",
            ConnectionKind::Compliance,
            AccessMode::Read,
            250,
        ),
        conn(
            "audit-log",
            "Audit Log System",
            ConnectionKind::Compliance,
            AccessMode::Write,
            15,
        ),
    ]
});

fn connections_for(ids: &[&str]) -> Vec<McpConnection> {
    MCP_CONNECTIONS
        .iter()
        .filter(|c| ids.contains(&c.id))
        .cloned()
        .collect()
}

static AGENTS: LazyLock<Vec<Agent>> = LazyLock::new(|| {
    let skill = |id, name, description| Skill {
        id,
        name,
        description,
        example_input: None,
        example_output: None,
    };
    vec![
        Agent {
            id: "orchestrator",
            name: "Orchestrator Agent",
            model: "claude-3-5-sonnet",
            role: AgentRole::Orchestrator,
            description: "Coordinates workflow execution, routes submissions, manages state, \
                          and handles exceptions across all agent operations.",
            skills: vec![
                Skill {
                    id: "route-submission",
                    name: "Route Submission",
                    description: "Analyzes incoming submissions and routes to appropriate \
                                  processing path",
                    example_input: Some("ACORD 80 application with 23 data fields"),
                    example_output: Some("Route to Standard Rating (Risk Score: 72/100)"),
                },
                skill(
                    "manage-workflow",
                    "Manage Workflow State",
                    "Tracks workflow progress and coordinates handoffs between agents",
                ),
                skill(
                    "handle-exceptions",
                    "Handle Exceptions",
                    "Identifies and routes exceptions to appropriate human reviewers",
                ),
                skill(
                    "aggregate-results",
                    "Aggregate Results",
                    "Combines outputs from multiple agents into unified response",
                ),
            ],
            mcp_connections: connections_for(&["guidewire", "salesforce", "audit-log"]),
            human_checkpoints: vec![
                HumanCheckpoint {
                    condition: "Risk score below 50",
                    description: "Flag for senior underwriter review",
                    escalation_path: "Senior UW Queue",
                },
                HumanCheckpoint {
                    condition: "Policy premium exceeds $50,000",
                    description: "Require management approval",
                    escalation_path: "Management Review",
                },
            ],
            status: AgentStatus::Active,
            metrics: AgentMetrics {
                tasks_completed: 1247,
                avg_processing_time: 2.3,
                accuracy_rate: 99.8,
            },
        },
        Agent {
            id: "intake",
            name: "Intake Agent",
            model: "claude-3-5-haiku",
            role: AgentRole::Intake,
            description: "Processes incoming documents, extracts structured data, validates \
                          information, and performs initial risk triage.",
            skills: vec![
                Skill {
                    id: "doc-extraction",
                    name: "Document Extraction",
                    description: "Extracts structured data from ACORD forms, dec pages, and \
                                  other insurance documents",
                    example_input: Some("ACORD 80 PDF with handwritten annotations"),
                    example_output: Some("JSON with 23 extracted fields, 98.7% confidence"),
                },
                skill(
                    "data-validation",
                    "Data Validation",
                    "Validates extracted data against business rules and external sources",
                ),
                skill(
                    "risk-triage",
                    "Risk Triage",
                    "Performs initial risk assessment to determine processing path",
                ),
                Skill {
                    id: "photo-analysis",
                    name: "Property Photo Analysis",
                    description: "Analyzes property photos to identify risks (roof condition, \
                                  pool, etc.)",
                    example_input: Some("4 property photos"),
                    example_output: Some(
                        "Identified: composition roof (good), no pool, detached garage",
                    ),
                },
            ],
            mcp_connections: connections_for(&[
                "sharepoint",
                "s3",
                "lexisnexis",
                "corelogic",
                "verisk",
                "audit-log",
            ]),
            human_checkpoints: vec![
                HumanCheckpoint {
                    condition: "Extraction confidence below 85%",
                    description: "Manual verification required",
                    escalation_path: "Data Entry Queue",
                },
                HumanCheckpoint {
                    condition: "Document quality issues",
                    description: "Request clearer documentation",
                    escalation_path: "Agent Outreach",
                },
            ],
            status: AgentStatus::Active,
            metrics: AgentMetrics {
                tasks_completed: 847,
                avg_processing_time: 47.0,
                accuracy_rate: 98.7,
            },
        },
        Agent {
            id: "rating",
            name: "Rating Agent",
            model: "claude-3-5-sonnet",
            role: AgentRole::Rating,
            description: "Calculates premiums, applies rate factors, selects forms, and \
                          ensures compliance with state filings.",
            skills: vec![
                Skill {
                    id: "premium-calc",
                    name: "Premium Calculation",
                    description: "Applies base rates, modifiers, and discounts to calculate \
                                  final premium",
                    example_input: Some(
                        "Risk data with territory, protection class, coverage limits",
                    ),
                    example_output: Some("Base: $1,247 -> Modified: $1,184 (5 factors applied)"),
                },
                skill(
                    "form-selection",
                    "Form Selection",
                    "Selects appropriate policy forms based on coverage needs and state \
                     requirements",
                ),
                skill(
                    "territory-mod",
                    "Territory Modification",
                    "Applies geographic rating factors based on location",
                ),
                skill(
                    "loss-history",
                    "Loss History Analysis",
                    "Analyzes claims history to determine surcharges or credits",
                ),
                skill(
                    "filing-compliance",
                    "Filing Compliance",
                    "Validates rates against approved state filings",
                ),
            ],
            mcp_connections: connections_for(&["iso-rating", "serff", "guidewire", "audit-log"]),
            human_checkpoints: vec![
                HumanCheckpoint {
                    condition: "Rate deviation exceeds 15%",
                    description: "Underwriter review required",
                    escalation_path: "UW Review Queue",
                },
                HumanCheckpoint {
                    condition: "New territory code",
                    description: "Verify filing approval",
                    escalation_path: "Compliance Review",
                },
            ],
            status: AgentStatus::Active,
            metrics: AgentMetrics {
                tasks_completed: 623,
                avg_processing_time: 31.0,
                accuracy_rate: 99.94,
            },
        },
        Agent {
            id: "issuance",
            name: "Issuance Agent",
            model: "claude-3-5-haiku",
            role: AgentRole::Issuance,
            description: "Generates policy documents, handles eDelivery, performs final \
                          compliance checks, and manages policy binding.",
            skills: vec![
                Skill {
                    id: "doc-generation",
                    name: "Document Generation",
                    description: "Generates quote packages, policy documents, and endorsements",
                    example_input: Some("Rated policy data with forms list"),
                    example_output: Some(
                        "Quote package PDF with 12 pages, all disclosures attached",
                    ),
                },
                skill(
                    "edelivery",
                    "eDelivery Management",
                    "Handles electronic delivery of documents to agents and insureds",
                ),
                skill(
                    "compliance-check",
                    "Compliance Check",
                    "Performs final compliance verification before issuance",
                ),
                skill(
                    "binding",
                    "Policy Binding",
                    "Executes policy binding and updates policy admin system",
                ),
            ],
            mcp_connections: connections_for(&[
                "guidewire",
                "duck-creek",
                "s3",
                "salesforce",
                "audit-log",
            ]),
            human_checkpoints: vec![HumanCheckpoint {
                condition: "Premium exceeds authority",
                description: "Management approval for binding",
                escalation_path: "Management Queue",
            }],
            status: AgentStatus::Active,
            metrics: AgentMetrics {
                tasks_completed: 412,
                avg_processing_time: 5.0,
                accuracy_rate: 100.0,
            },
        },
        Agent {
            id: "audit",
            name: "Audit Agent",
            model: "claude-3-5-haiku",
            role: AgentRole::Audit,
            description: "Maintains comprehensive audit trails, generates compliance reports, \
                          and monitors for regulatory adherence.",
            skills: vec![
                Skill {
                    id: "trace-logging",
                    name: "Trace Logging",
                    description: "Records all agent actions with full context for audit trails",
                    example_input: Some("Agent action with timestamp and data accessed"),
                    example_output: Some("Immutable log entry with decision rationale"),
                },
                skill(
                    "report-generation",
                    "Report Generation",
                    "Generates examiner-ready compliance reports",
                ),
                skill(
                    "monitoring",
                    "Compliance Monitoring",
                    "Real-time monitoring for compliance violations",
                ),
            ],
            mcp_connections: connections_for(&["audit-log", "serff"]),
            human_checkpoints: vec![HumanCheckpoint {
                condition: "Compliance violation detected",
                description: "Immediate escalation to compliance officer",
                escalation_path: "Compliance Officer",
            }],
            status: AgentStatus::Active,
            metrics: AgentMetrics {
                tasks_completed: 8470,
                avg_processing_time: 0.5,
                accuracy_rate: 100.0,
            },
        },
    ]
});

/// The full agent roster, in display order.
#[must_use]
pub fn agents() -> &'static [Agent] {
    &AGENTS
}

/// All MCP connections across the platform.
#[must_use]
pub fn mcp_connections() -> &'static [McpConnection] {
    &MCP_CONNECTIONS
}

//! Canned audit trail for the compliance tab.
//!
//! Entries follow one homeowners submission end to end, newest first.

use std::sync::LazyLock;

use meridian_types::AuditEntry;

const POLICY: &str = "HO-2026-001847";

static AUDIT_TRAIL: LazyLock<Vec<AuditEntry>> = LazyLock::new(|| {
    vec![
        AuditEntry {
            minutes_ago: 2,
            agent_id: "audit",
            agent_name: "Audit Agent",
            action: "Compliance verification complete",
            details: "All CA DOI filing requirements satisfied; quote cleared for delivery",
            data_accessed: vec!["SERFF filing SERFF-CA-2025-0412", "Quote package"],
            decision_rationale: None,
            policy_number: Some(POLICY),
        },
        AuditEntry {
            minutes_ago: 3,
            agent_id: "issuance",
            agent_name: "Issuance Agent",
            action: "Quote package generated",
            details: "12-page quote PDF with state-mandated disclosures, queued for eDelivery",
            data_accessed: vec!["Rated policy data", "CA disclosure forms"],
            decision_rationale: None,
            policy_number: Some(POLICY),
        },
        AuditEntry {
            minutes_ago: 7,
            agent_id: "rating",
            agent_name: "Rating Agent",
            action: "Premium calculated",
            details: "Base $1,247 with 5 factors applied; final premium $1,184/year",
            data_accessed: vec![
                "ISO rating tables (territory 023)",
                "Approved CA rate filing",
                "Claims history",
            ],
            decision_rationale: Some(
                "New home credit, multi-policy discount, and protective devices credit \
                 outweigh the 2019 water claim surcharge",
            ),
            policy_number: Some(POLICY),
        },
        AuditEntry {
            minutes_ago: 11,
            agent_id: "orchestrator",
            agent_name: "Orchestrator Agent",
            action: "Routed to standard rating",
            details: "Risk score 72/100 clears the standard-path threshold",
            data_accessed: vec!["Risk triage output"],
            decision_rationale: Some("Score above 50; no senior underwriter review needed"),
            policy_number: Some(POLICY),
        },
        AuditEntry {
            minutes_ago: 14,
            agent_id: "intake",
            agent_name: "Intake Agent",
            action: "Third-party data pulled",
            details: "CoreLogic replacement cost $485,000; LexisNexis CLUE: 1 claim (2019)",
            data_accessed: vec![
                "CoreLogic property record",
                "LexisNexis CLUE report",
                "Verisk fire protection class",
            ],
            decision_rationale: None,
            policy_number: Some(POLICY),
        },
        AuditEntry {
            minutes_ago: 16,
            agent_id: "intake",
            agent_name: "Intake Agent",
            action: "ACORD 80 extracted",
            details: "23 fields extracted at 98.7% confidence; no manual verification needed",
            data_accessed: vec!["ACORD 80 submission PDF", "Prior carrier dec page"],
            decision_rationale: Some("Confidence above the 85% escalation threshold"),
            policy_number: Some(POLICY),
        },
        AuditEntry {
            minutes_ago: 24,
            agent_id: "audit",
            agent_name: "Audit Agent",
            action: "Daily filing sweep",
            details: "Verified 412 bound policies against approved state filings; 0 deviations",
            data_accessed: vec!["SERFF filings", "Bound policy register"],
            decision_rationale: None,
            policy_number: None,
        },
    ]
});

/// Audit entries, newest first.
#[must_use]
pub fn audit_trail() -> &'static [AuditEntry] {
    &AUDIT_TRAIL
}

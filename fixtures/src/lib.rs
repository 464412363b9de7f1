//! Hand-authored fixture data for the Meridian demo.
//!
//! Everything here is immutable for the process lifetime. The engine reads
//! these records and never writes them back; the only mutable state in the
//! application lives in `meridian-engine`.

mod agents;
mod audit;
mod documents;
mod workflows;

pub use agents::{agents, mcp_connections};
pub use audit::audit_trail;
pub use documents::{acord_fields, document_types, talking_points};
pub use workflows::{workflow, workflows};

use meridian_types::DashboardMetrics;

/// Dashboard numbers at application start.
#[must_use]
pub fn initial_metrics() -> DashboardMetrics {
    DashboardMetrics {
        submissions_processing: 847,
        quotes_generated: 623,
        policies_bound: 412,
        endorsement_backlog: 156,
        compliance_score: 99.7,
        avg_quote_time: 4.2,
        straight_through_rate: 73.0,
        human_touch_time: 2.1,
        agent_accuracy: 99.2,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use meridian_types::WorkflowId;

    use super::*;

    #[test]
    fn every_workflow_id_has_a_definition() {
        for id in WorkflowId::ALL {
            assert_eq!(workflow(id).id, id);
        }
    }

    #[test]
    fn step_ids_are_unique_within_each_workflow() {
        for wf in workflows() {
            let ids: HashSet<_> = wf.steps.iter().map(|s| s.id).collect();
            assert_eq!(ids.len(), wf.steps.len(), "{}", wf.id);
        }
    }

    #[test]
    fn homeowners_timing_matches_fixture() {
        let wf = workflow(WorkflowId::HomeownersNewBusiness);
        assert_eq!(wf.total_time(), 83);
        assert_eq!(wf.human_time(), 0);
        assert_eq!(wf.automation_time(), 83);
    }

    #[test]
    fn auto_endorsement_has_one_human_step() {
        let wf = workflow(WorkflowId::AutoEndorsement);
        assert_eq!(wf.total_time(), 50);
        assert_eq!(wf.human_time(), 12);
        assert_eq!(wf.automation_time(), 38);
        assert_eq!(wf.steps.iter().filter(|s| s.is_human).count(), 1);
    }

    #[test]
    fn agent_roster_is_non_empty_and_distinct() {
        let roster = agents();
        assert!(!roster.is_empty());
        let ids: HashSet<_> = roster.iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), roster.len());
    }

    #[test]
    fn connection_table_ids_are_distinct() {
        let table = mcp_connections();
        let ids: HashSet<_> = table.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), table.len());
    }

    #[test]
    fn agents_only_use_connections_from_the_table() {
        let known: HashSet<_> = mcp_connections().iter().map(|c| c.id).collect();
        for agent in agents() {
            for conn in &agent.mcp_connections {
                assert!(known.contains(conn.id), "{}", conn.id);
            }
        }
    }

    #[test]
    fn acord_field_count_matches_document_stats() {
        let acord = document_types()
            .iter()
            .find(|d| d.id == "acord-80")
            .expect("acord-80 stats present");
        assert_eq!(acord_fields().len(), acord.fields_extracted as usize);
    }

    #[test]
    fn audit_entries_reference_known_agents() {
        let known: HashSet<_> = agents().iter().map(|a| a.id).collect();
        for entry in audit_trail() {
            assert!(known.contains(entry.agent_id), "{}", entry.agent_id);
        }
    }
}

//! Audit-trail fixture records for the compliance tab.

/// One logged agent decision.
///
/// Timestamps are relative (`minutes_ago`) so the fixture data reads as
/// "recent activity" no matter when the demo is launched; the view resolves
/// them against the wall clock at render time.
#[derive(Debug, Clone, serde::Serialize)]
pub struct AuditEntry {
    pub minutes_ago: u64,
    pub agent_id: &'static str,
    pub agent_name: &'static str,
    pub action: &'static str,
    pub details: &'static str,
    pub data_accessed: Vec<&'static str>,
    pub decision_rationale: Option<&'static str>,
    pub policy_number: Option<&'static str>,
}

impl AuditEntry {
    /// Case-insensitive match against the free-form audit filter.
    #[must_use]
    pub fn matches(&self, filter: &str) -> bool {
        if filter.is_empty() {
            return true;
        }
        let needle = filter.to_lowercase();
        let hit = |s: &str| s.to_lowercase().contains(&needle);
        hit(self.agent_name)
            || hit(self.action)
            || hit(self.details)
            || self.policy_number.is_some_and(hit)
            || self.data_accessed.iter().any(|d| hit(d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> AuditEntry {
        AuditEntry {
            minutes_ago: 4,
            agent_id: "rating",
            agent_name: "Rating Agent",
            action: "Premium calculated",
            details: "Applied territory 023 base rate",
            data_accessed: vec!["ISO rating tables"],
            decision_rationale: Some("All credits verified"),
            policy_number: Some("HO-2026-001847"),
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(entry().matches(""));
    }

    #[test]
    fn filter_is_case_insensitive() {
        assert!(entry().matches("PREMIUM"));
        assert!(entry().matches("rating agent"));
        assert!(entry().matches("ho-2026"));
    }

    #[test]
    fn filter_checks_data_accessed() {
        assert!(entry().matches("iso rating"));
        assert!(!entry().matches("lexisnexis"));
    }
}

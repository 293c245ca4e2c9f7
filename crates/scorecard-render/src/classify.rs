//! Audit classification: manual, grouped, or ungrouped.

use scorecard_model::AuditRef;

/// Where an audit reference belongs in the rendered category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification<'a> {
    /// Requires human verification; rendered in the manual clump.
    Manual,
    /// Automatically scored, assigned to the named group.
    Grouped(&'a str),
    /// Automatically scored, no group; left to the enclosing layer.
    Ungrouped,
}

/// Classify one audit reference.
///
/// Manual status wins over a declared group. An empty group string
/// counts as absent, and every non-manual display mode is treated
/// uniformly as non-manual.
pub fn classify(audit_ref: &AuditRef) -> Classification<'_> {
    if audit_ref.is_manual() {
        return Classification::Manual;
    }
    match audit_ref.group_id() {
        Some(group) => Classification::Grouped(group),
        None => Classification::Ungrouped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorecard_model::{AuditResult, ScoreDisplayMode};

    fn audit(mode: ScoreDisplayMode, group: Option<&str>) -> AuditRef {
        let audit_ref = AuditRef::new("a", 1.0, AuditResult::new("a", "A", mode));
        match group {
            Some(g) => audit_ref.with_group(g),
            None => audit_ref,
        }
    }

    #[test]
    fn manual_wins_over_declared_group() {
        let audit_ref = audit(ScoreDisplayMode::Manual, Some("perf"));
        assert_eq!(classify(&audit_ref), Classification::Manual);
    }

    #[test]
    fn grouped_when_non_manual_with_group() {
        let audit_ref = audit(ScoreDisplayMode::Binary, Some("perf"));
        assert_eq!(classify(&audit_ref), Classification::Grouped("perf"));
    }

    #[test]
    fn ungrouped_when_group_absent_or_empty() {
        assert_eq!(
            classify(&audit(ScoreDisplayMode::Numeric, None)),
            Classification::Ungrouped
        );
        assert_eq!(
            classify(&audit(ScoreDisplayMode::Numeric, Some(""))),
            Classification::Ungrouped
        );
    }

    #[test]
    fn every_non_manual_mode_is_non_manual() {
        for mode in [
            ScoreDisplayMode::Binary,
            ScoreDisplayMode::Numeric,
            ScoreDisplayMode::Informative,
            ScoreDisplayMode::NotApplicable,
            ScoreDisplayMode::Error,
        ] {
            assert_ne!(classify(&audit(mode, None)), Classification::Manual);
        }
    }
}

//! Manual clump construction.

use scorecard_model::AuditRef;

use crate::classify::{classify, Classification};
use crate::section::ManualClumpSection;

/// Collect every manual audit into the single manual clump.
///
/// Returns `None` when the category has no manual audits; otherwise the
/// clump holds the manual references in original category order. This
/// is the only clump kind the core produces.
pub fn build_manual_clump(audit_refs: &[AuditRef]) -> Option<ManualClumpSection> {
    let manual: Vec<AuditRef> = audit_refs
        .iter()
        .filter(|r| classify(r) == Classification::Manual)
        .cloned()
        .collect();

    if manual.is_empty() {
        None
    } else {
        Some(ManualClumpSection::new(manual))
    }
}

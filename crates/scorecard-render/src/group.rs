//! Group assembly: one section per distinct group identifier.

use scorecard_model::{AuditRef, GroupDefinitions};

use crate::classify::{classify, Classification};
use crate::error::{RenderError, RenderResult};
use crate::section::GroupSection;

/// Partition grouped, non-manual audits into one section per distinct
/// group identifier, in first-occurrence order within `audit_refs`.
/// Members keep their original relative order.
///
/// Fails with [`RenderError::MissingGroupDefinition`] when an audit
/// names a group absent from `group_defs`; an unlabeled section is
/// never emitted in its place.
pub fn assemble_groups(
    audit_refs: &[AuditRef],
    group_defs: &GroupDefinitions,
) -> RenderResult<Vec<GroupSection>> {
    // Linear scan per ref; categories carry a handful of groups.
    let mut sections: Vec<GroupSection> = Vec::new();

    for audit_ref in audit_refs {
        let Classification::Grouped(group_id) = classify(audit_ref) else {
            continue;
        };

        if let Some(section) = sections.iter_mut().find(|s| s.id == group_id) {
            section.audit_refs.push(audit_ref.clone());
            continue;
        }

        let def = group_defs.get(group_id).ok_or_else(|| {
            tracing::warn!(group_id, audit = %audit_ref.id, "audit names a group with no definition");
            RenderError::MissingGroupDefinition {
                group_id: group_id.to_string(),
            }
        })?;

        sections.push(GroupSection {
            id: group_id.to_string(),
            title: def.title.clone(),
            description: def.description.clone(),
            audit_refs: vec![audit_ref.clone()],
        });
    }

    Ok(sections)
}

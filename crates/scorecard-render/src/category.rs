//! Category rendering: orchestrates classification, grouping and
//! clumping into the final sectioned structure.

use scorecard_model::{Category, GroupDefinitions};

use crate::clump::build_manual_clump;
use crate::error::RenderResult;
use crate::group::assemble_groups;
use crate::section::{RenderedCategory, Section};

/// Render one category against the supplied group definitions.
///
/// Group sections come first, in first-occurrence order, followed by
/// the manual clump when the category has manual audits. Groups render
/// before the clump so actionable scored content precedes the ask for
/// manual verification. Ungrouped automatic audits render in no
/// section; placing them is the enclosing layer's call.
///
/// Inputs are never mutated; the output owns its data outright.
/// A [`crate::RenderError::MissingGroupDefinition`] from group assembly
/// propagates unchanged.
pub fn render(
    category: &Category,
    group_defs: &GroupDefinitions,
) -> RenderResult<RenderedCategory> {
    let groups = assemble_groups(&category.audit_refs, group_defs)?;
    let manual = build_manual_clump(&category.audit_refs);

    let mut sections: Vec<Section> = groups.into_iter().map(Section::Group).collect();
    if let Some(clump) = manual {
        sections.push(Section::ManualClump(clump));
    }

    let rendered = RenderedCategory {
        category_id: category.id.clone(),
        sections,
    };
    tracing::debug!(
        category = %category.id,
        sections = rendered.sections.len(),
        audits = rendered.audit_count(),
        "rendered category"
    );
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorecard_model::{AuditRef, AuditResult, GroupDefinition, ScoreDisplayMode};

    #[test]
    fn groups_render_before_the_manual_clump() {
        let refs = vec![
            AuditRef::new("a", 1.0, AuditResult::new("a", "A", ScoreDisplayMode::Manual)),
            AuditRef::new("b", 1.0, AuditResult::new("b", "B", ScoreDisplayMode::Binary))
                .with_group("perf"),
        ];
        let category = Category::new("cat", "Category", refs);
        let mut group_defs = GroupDefinitions::new();
        group_defs.insert("perf".into(), GroupDefinition::new("Performance"));

        let rendered = render(&category, &group_defs).unwrap();
        assert_eq!(rendered.sections.len(), 2);
        assert!(matches!(rendered.sections[0], Section::Group(_)));
        assert!(matches!(rendered.sections[1], Section::ManualClump(_)));
    }
}

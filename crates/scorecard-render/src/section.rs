//! Rendered output structure: owned sections, no borrows into inputs.

use serde::{Deserialize, Serialize};

use scorecard_model::AuditRef;

/// Fixed identifier of the manual clump section.
pub const MANUAL_CLUMP_ID: &str = "manual";

/// One titled subdivision of automatically scored audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSection {
    /// Group identifier as declared on the member audit references.
    pub id: String,
    /// Resolved from the group definition.
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Members in original category order.
    pub audit_refs: Vec<AuditRef>,
}

/// The collapsible cluster of audits requiring manual verification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualClumpSection {
    /// Always [`MANUAL_CLUMP_ID`].
    pub id: String,
    /// Members in original category order.
    pub audit_refs: Vec<AuditRef>,
}

impl ManualClumpSection {
    pub(crate) fn new(audit_refs: Vec<AuditRef>) -> Self {
        Self {
            id: MANUAL_CLUMP_ID.to_string(),
            audit_refs,
        }
    }
}

/// One rendered section of a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "sectionType", rename_all = "camelCase")]
pub enum Section {
    Group(GroupSection),
    ManualClump(ManualClumpSection),
}

impl Section {
    /// Audit references rendered in this section, original order.
    pub fn audit_refs(&self) -> &[AuditRef] {
        match self {
            Section::Group(group) => &group.audit_refs,
            Section::ManualClump(clump) => &clump.audit_refs,
        }
    }
}

/// A fully rendered category: group sections first, manual clump last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedCategory {
    pub category_id: String,
    pub sections: Vec<Section>,
}

impl RenderedCategory {
    /// Total number of audits rendered across all sections.
    pub fn audit_count(&self) -> usize {
        self.sections.iter().map(|s| s.audit_refs().len()).sum()
    }

    /// All rendered audit references, section by section.
    pub fn audit_refs(&self) -> impl Iterator<Item = &AuditRef> {
        self.sections.iter().flat_map(|s| s.audit_refs().iter())
    }

    /// Group sections in render order.
    pub fn group_sections(&self) -> impl Iterator<Item = &GroupSection> {
        self.sections.iter().filter_map(|s| match s {
            Section::Group(group) => Some(group),
            Section::ManualClump(_) => None,
        })
    }

    /// The manual clump, when the category has manual audits.
    pub fn manual_clump(&self) -> Option<&ManualClumpSection> {
        self.sections.iter().find_map(|s| match s {
            Section::ManualClump(clump) => Some(clump),
            Section::Group(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorecard_model::{AuditResult, ScoreDisplayMode};

    #[test]
    fn sections_serialize_with_a_type_tag() {
        let result = AuditResult::new("a", "A", ScoreDisplayMode::Manual);
        let clump = ManualClumpSection::new(vec![AuditRef::new("a", 0.0, result)]);
        let section = Section::ManualClump(clump);

        let v = serde_json::to_value(&section).unwrap();
        assert_eq!(v["sectionType"], "manualClump");
        assert_eq!(v["id"], "manual");
        assert_eq!(v["auditRefs"][0]["id"], "a");
    }
}

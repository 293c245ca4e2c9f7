//! Categories: named, ordered collections of audit references.

use serde::{Deserialize, Serialize};

use crate::audit::AuditRef;

/// A named grouping of audits representing one scored dimension of the
/// report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub title: String,
    /// Order is significant and preserved by rendering.
    pub audit_refs: Vec<AuditRef>,
}

impl Category {
    pub fn new(id: impl Into<String>, title: impl Into<String>, audit_refs: Vec<AuditRef>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            audit_refs,
        }
    }
}

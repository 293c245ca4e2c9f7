//! Group metadata supplied alongside a report's categories.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Display metadata for one audit group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDefinition {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl GroupDefinition {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Group definitions keyed by group identifier. BTreeMap keeps
/// serialization deterministic.
pub type GroupDefinitions = BTreeMap<String, GroupDefinition>;

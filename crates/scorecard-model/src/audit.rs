//! Audit outcomes and the references that tie them into a category.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// How an audit's result should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreDisplayMode {
    /// Pass/fail.
    Binary,
    /// Scored on a 0..1 scale.
    Numeric,
    /// Requires human verification; never scored automatically.
    Manual,
    /// Surfaced for information only, does not affect the score.
    Informative,
    /// Not applicable to the audited subject.
    NotApplicable,
    /// The audit itself failed to run.
    Error,
}

/// Outcome of a single audit, embedded in each category reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// 0..1; None for manual, informative and errored outcomes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    pub score_display_mode: ScoreDisplayMode,
    /// Fields preserved but never interpreted here (details, warnings, ...).
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl AuditResult {
    pub fn new(id: impl Into<String>, title: impl Into<String>, mode: ScoreDisplayMode) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            score: None,
            score_display_mode: mode,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// One audit's membership in a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRef {
    /// Audit identifier, unique within the category.
    pub id: String,
    /// Contribution to the category score. Preserved, unused by rendering.
    pub weight: f64,
    /// Group identifier; absent means ungrouped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    pub result: AuditResult,
}

impl AuditRef {
    pub fn new(id: impl Into<String>, weight: f64, result: AuditResult) -> Self {
        Self {
            id: id.into(),
            weight,
            group: None,
            result,
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Declared group identifier, treating an empty string as absent.
    pub fn group_id(&self) -> Option<&str> {
        self.group.as_deref().filter(|g| !g.is_empty())
    }

    /// True when the audit requires human verification.
    pub fn is_manual(&self) -> bool {
        self.result.score_display_mode == ScoreDisplayMode::Manual
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_display_mode_uses_camel_case_on_the_wire() {
        let json = serde_json::to_string(&ScoreDisplayMode::NotApplicable).unwrap();
        assert_eq!(json, "\"notApplicable\"");

        let mode: ScoreDisplayMode = serde_json::from_str("\"binary\"").unwrap();
        assert_eq!(mode, ScoreDisplayMode::Binary);
    }

    #[test]
    fn audit_ref_deserializes_from_report_json() {
        let audit_ref: AuditRef = serde_json::from_str(
            r#"{
                "id": "service-worker",
                "weight": 1,
                "group": "pwa-optimized",
                "result": {
                    "id": "service-worker",
                    "title": "Registers a service worker",
                    "score": 1,
                    "scoreDisplayMode": "binary",
                    "displayValue": "1 worker"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(audit_ref.group_id(), Some("pwa-optimized"));
        assert!(!audit_ref.is_manual());
        assert_eq!(audit_ref.result.score, Some(1.0));
        // Unknown result fields survive in the flattened bag.
        assert_eq!(
            audit_ref.result.extra.get("displayValue"),
            Some(&serde_json::json!("1 worker"))
        );
    }

    #[test]
    fn empty_group_string_counts_as_ungrouped() {
        let result = AuditResult::new("a", "A", ScoreDisplayMode::Numeric);
        let audit_ref = AuditRef::new("a", 1.0, result).with_group("");
        assert_eq!(audit_ref.group_id(), None);
    }
}

//! Error types for the rendering core.

/// Rendering errors.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// An audit reference names a group with no definition entry.
    /// Raised instead of rendering an unlabeled section; callers decide
    /// whether to abort or re-render with patched definitions.
    #[error("missing group definition: {group_id}")]
    MissingGroupDefinition { group_id: String },
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

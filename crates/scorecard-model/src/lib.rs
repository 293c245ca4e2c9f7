//! Report data model shared by scorecard loaders and renderers.
//!
//! Wire format is camelCase JSON, matching what report loaders emit.
//! Types here are plain owned data: deserialize once upstream, pass by
//! reference into the rendering core. Fields this crate does not
//! interpret (audit details, warnings, runtime metadata) are preserved
//! verbatim in a flattened bag so a round-trip through the model is
//! lossless.

pub mod audit;
pub mod category;
pub mod group;

pub use audit::{AuditRef, AuditResult, ScoreDisplayMode};
pub use category::Category;
pub use group::{GroupDefinition, GroupDefinitions};

//! Category rendering core for scorecard reports.
//!
//! Turns a category (an ordered set of audit references) plus group
//! metadata into an ordered sequence of rendered sections:
//!
//! - audits requiring manual verification land in exactly one
//!   collapsible "manual" clump,
//! - automatically scored audits land in one section per declared
//!   group identifier, in first-occurrence order,
//! - group sections render before the manual clump, and no audit
//!   renders in more than one place.
//!
//! The core is pure: no I/O, no shared state, inputs are read-only and
//! outputs are freshly owned. Missing group metadata is a loud error,
//! never a silently unlabeled section.
//!
//! # Quick Start
//!
//! ```
//! use scorecard_model::{AuditRef, AuditResult, Category, GroupDefinition, ScoreDisplayMode};
//! use scorecard_render::render;
//!
//! # fn example() -> scorecard_render::RenderResult<()> {
//! let refs = vec![AuditRef::new(
//!     "uses-http2",
//!     1.0,
//!     AuditResult::new("uses-http2", "Uses HTTP/2", ScoreDisplayMode::Binary).with_score(1.0),
//! )
//! .with_group("protocol")];
//! let category = Category::new("perf", "Performance", refs);
//!
//! let mut groups = scorecard_model::GroupDefinitions::new();
//! groups.insert("protocol".into(), GroupDefinition::new("Protocol"));
//!
//! let rendered = render(&category, &groups)?;
//! assert_eq!(rendered.sections.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod category;
pub mod classify;
pub mod clump;
pub mod error;
pub mod group;
pub mod section;

pub use category::render;
pub use classify::{classify, Classification};
pub use clump::build_manual_clump;
pub use error::{RenderError, RenderResult};
pub use group::assemble_groups;
pub use section::{GroupSection, ManualClumpSection, RenderedCategory, Section, MANUAL_CLUMP_ID};

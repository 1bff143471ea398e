//! Cascade construction and flattening.

pub mod builder;
pub mod flatten;
pub mod types;

pub use builder::CascadeBuilder;
pub use flatten::flatten_cascade;
pub use types::{AffectedComponent, CascadeNode, ErrorContext, ImpactAnalysis, TerminalReason};

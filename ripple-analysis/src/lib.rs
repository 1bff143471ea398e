//! Cross-component impact analysis for the Ripple engine.
//!
//! Given a dependency graph of components and a change or error in one of
//! them, computes which other components are affected, how severely, with
//! what confidence, and in what order they should be re-validated. A
//! separate entry point correlates similar error messages observed across
//! components into shared root-cause hypotheses.
//!
//! Entry point: [`analyzer::ImpactAnalyzer`].

pub mod analyzer;
pub mod cache;
pub mod cascade;
pub mod catalog;
pub mod correlation;
pub mod graph;
pub mod plan;
pub mod report;
pub mod scoring;

pub use analyzer::{CacheStats, ImpactAnalyzer};
pub use cascade::types::{AffectedComponent, CascadeNode, ErrorContext, ImpactAnalysis};
pub use correlation::types::{CorrelatedGroup, CorrelationOutcome, ErrorReport};
pub use graph::{Component, ComponentGraph, GraphBuilder};
pub use scoring::{RelationshipKind, Severity};

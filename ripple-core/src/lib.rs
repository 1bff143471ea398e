//! Core foundation for the Ripple impact analysis engine.
//!
//! Shared error enums, layered configuration, constants, collection
//! re-exports, and tracing setup. Analysis logic lives in `ripple-analysis`.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

//! Component graph: node metadata and the two-phase store.

pub mod store;
pub mod types;

pub use store::{ComponentGraph, GraphBuilder};
pub use types::Component;

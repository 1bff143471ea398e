//! Turning a cascade result into guidance.

pub mod recommendations;
pub mod test_plan;

pub use recommendations::build_recommendations;
pub use test_plan::build_validation_plan;

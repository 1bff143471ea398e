//! Cross-component error correlation.

pub mod correlator;
pub mod normalize;
pub mod types;

pub use correlator::correlate;
pub use normalize::normalize_message;
pub use types::{CorrelatedGroup, CorrelationOutcome, ErrorLocation, ErrorReport};

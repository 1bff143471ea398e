//! Configuration system for Ripple.
//! TOML-based, 3-layer resolution: env > project file > defaults.

pub mod cache_config;
pub mod cascade_config;
pub mod component_override;
pub mod ripple_config;

pub use cache_config::CacheConfig;
pub use cascade_config::CascadeConfig;
pub use component_override::ComponentOverride;
pub use ripple_config::RippleConfig;

//! Built-in catalogs used when no TOML override is configured

pub mod service_intervals;
pub mod tiers;

pub use service_intervals::default_interval_catalog;
pub use tiers::default_tier_catalog;

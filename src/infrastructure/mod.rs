//! Infrastructure layer: catalog loaders and fleet import

pub mod catalog_loader;
pub mod fleet_csv;
pub mod tier_loader;

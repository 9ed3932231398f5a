//! Domain model types

pub mod service_record;
pub mod service_type;
pub mod tier;
pub mod vehicle;

pub use service_record::ServiceRecord;
pub use service_type::{IntervalCatalog, IntervalSpec, ServiceType};
pub use tier::{Tier, TierCatalog};
pub use vehicle::{Vehicle, VehicleStatus};

use serde::{Deserialize, Serialize};

/// Immutable view of the usage ledger for one consistent computation pass
///
/// Due calculation and alert aggregation work over a snapshot so a single
/// query never observes a torn read across vehicles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// Fleet roster, sorted by asset number
    pub vehicles: Vec<Vehicle>,
    /// Last-service checkpoints, one per (vehicle, service type) pair
    pub records: Vec<ServiceRecord>,
}

//! Maintenance engine facade
//!
//! Owns the usage ledger behind a RwLock: concurrent writes serialize under
//! the write lock so no increment is lost to a read-modify-write race, and a
//! read query takes its snapshot under the read lock so one call observes one
//! consistent ledger view. All computation is in-memory; the only I/O is the
//! ledger's own persistence on write.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;

use crate::config::Config;
use crate::constants;
use crate::domain::model::{IntervalCatalog, TierCatalog, Vehicle};
use crate::domain::service::{alert_aggregator, AlertFilter};
use crate::error::{Error, Result};
use crate::infrastructure::{catalog_loader, tier_loader};
use crate::store::UsageLedger;
use crate::types::{DueRecord, DueSoonWindows};

/// The engine surface exposed to dashboards, exports and the CLI
pub struct MaintenanceService {
    ledger: RwLock<UsageLedger>,
    catalog: IntervalCatalog,
    tiers: TierCatalog,
    windows: DueSoonWindows,
}

impl MaintenanceService {
    /// Build a service over an already-opened ledger
    pub fn new(
        ledger: UsageLedger,
        catalog: IntervalCatalog,
        tiers: TierCatalog,
        windows: DueSoonWindows,
    ) -> Self {
        Self {
            ledger: RwLock::new(ledger),
            catalog,
            tiers,
            windows,
        }
    }

    /// Open the service from configuration: ledger from the store directory,
    /// catalogs from TOML overrides or the built-in defaults
    pub fn open(config: &Config) -> Result<Self> {
        let ledger = UsageLedger::open(config.store_dir()?)?;

        let catalog = match config.catalog_path {
            Some(ref path) => catalog_loader::load_from_file(path)?,
            None => constants::default_interval_catalog(),
        };
        let tiers = match config.tiers_path {
            Some(ref path) => tier_loader::load_from_file(path)?,
            None => constants::default_tier_catalog(),
        };

        Ok(Self::new(ledger, catalog, tiers, config.due_soon_windows))
    }

    pub fn catalog(&self) -> &IntervalCatalog {
        &self.catalog
    }

    pub fn tiers(&self) -> &TierCatalog {
        &self.tiers
    }

    fn read_ledger(&self) -> RwLockReadGuard<'_, UsageLedger> {
        self.ledger.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_ledger(&self) -> RwLockWriteGuard<'_, UsageLedger> {
        self.ledger.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Add or replace a roster entry
    pub fn add_vehicle(&self, vehicle: Vehicle) -> Result<String> {
        self.write_ledger().add_vehicle(vehicle)
    }

    /// All vehicles, sorted by asset number
    pub fn vehicles(&self) -> Vec<Vehicle> {
        self.read_ledger()
            .all_vehicles()
            .into_iter()
            .cloned()
            .collect()
    }

    /// Total vehicle count
    pub fn vehicle_count(&self) -> usize {
        self.read_ledger().count()
    }

    /// Apply usage deltas to a vehicle's counters
    pub fn record_usage(&self, vehicle_id: &str, delta_km: f64, delta_hours: f64) -> Result<()> {
        self.write_ledger().record_usage(vehicle_id, delta_km, delta_hours)
    }

    /// Log a completed service, superseding the pair's checkpoint
    ///
    /// The service type must exist in the catalog; unknown names are rejected
    /// before the ledger is touched.
    pub fn record_service(
        &self,
        vehicle_id: &str,
        service_type: &str,
        date: NaiveDate,
        km_at_service: Option<f64>,
        hmr_at_service: Option<f64>,
    ) -> Result<()> {
        self.catalog.lookup(service_type)?;
        self.write_ledger().record_service(
            vehicle_id,
            service_type,
            date,
            km_at_service,
            hmr_at_service,
        )
    }

    /// Due records for the whole fleet, or one vehicle
    ///
    /// Pure over the ledger state: re-querying without an intervening write
    /// returns identical results.
    pub fn due_records(&self, vehicle_id: Option<&str>, today: NaiveDate) -> Result<Vec<DueRecord>> {
        let filter = AlertFilter {
            vehicle_id: vehicle_id.map(String::from),
            ..Default::default()
        };
        self.alerts(&filter, today)
    }

    /// Ranked alert list over a consistent ledger snapshot
    pub fn alerts(&self, filter: &AlertFilter, today: NaiveDate) -> Result<Vec<DueRecord>> {
        if let Some(ref name) = filter.service_type {
            if name != crate::domain::service::due_calculator::REPLACEMENT_SERVICE_NAME {
                self.catalog.lookup(name)?;
            }
        }

        let snapshot = {
            let ledger = self.read_ledger();
            if let Some(ref id) = filter.vehicle_id {
                if ledger.get_vehicle(id).is_none() {
                    return Err(Error::VehicleNotFound(id.clone()));
                }
            }
            ledger.snapshot()
        };

        Ok(alert_aggregator::list_alerts(
            &snapshot,
            &self.catalog,
            &self.tiers,
            &self.windows,
            filter,
            today,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Urgency;
    use tempfile::tempdir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn open_service(dir: &tempfile::TempDir) -> MaintenanceService {
        let ledger = UsageLedger::open(dir.path().to_path_buf()).unwrap();
        MaintenanceService::new(
            ledger,
            constants::default_interval_catalog(),
            constants::default_tier_catalog(),
            DueSoonWindows::default(),
        )
    }

    #[test]
    fn test_unknown_service_type_rejected() {
        let dir = tempdir().unwrap();
        let service = open_service(&dir);
        service.add_vehicle(Vehicle::new("AL-1", "TIPPER - 1")).unwrap();

        let err = service
            .record_service("AL-1", "Windscreen Wash", date(2025, 4, 16), None, Some(10.0))
            .unwrap_err();
        assert!(matches!(err, Error::ServiceTypeNotFound(_)));
    }

    #[test]
    fn test_unknown_vehicle_in_query() {
        let dir = tempdir().unwrap();
        let service = open_service(&dir);

        let err = service.due_records(Some("AL-9"), date(2025, 4, 20)).unwrap_err();
        assert!(matches!(err, Error::VehicleNotFound(_)));
    }

    #[test]
    fn test_idempotent_requery() {
        let dir = tempdir().unwrap();
        let service = open_service(&dir);
        service
            .add_vehicle(Vehicle::new("AL-1", "TIPPER - 1").with_hmr(5105.3))
            .unwrap();
        service
            .record_service("AL-1", "Engine Oil Change", date(2025, 4, 16), None, Some(5105.3))
            .unwrap();

        let today = date(2025, 4, 20);
        let first = service.due_records(None, today).unwrap();
        let second = service.due_records(None, today).unwrap();

        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_write_changes_due_state() {
        let dir = tempdir().unwrap();
        let service = open_service(&dir);
        service
            .add_vehicle(Vehicle::new("AL-1", "TIPPER - 1").with_hmr(900.0))
            .unwrap();

        let today = date(2025, 4, 20);
        let filter = AlertFilter {
            service_type: Some("Engine Oil Change".to_string()),
            ..Default::default()
        };

        // Never serviced, interval 1000: 100 hours of headroom
        let before = service.alerts(&filter, today).unwrap();
        assert_eq!(before[0].urgency, Urgency::DueSoon);

        service.record_usage("AL-1", 0.0, 200.0).unwrap();
        let after = service.alerts(&filter, today).unwrap();
        assert_eq!(after[0].urgency, Urgency::Overdue);
        assert_eq!(after[0].remaining, Some(-100.0));
    }
}

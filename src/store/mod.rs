//! Usage ledger: fleet roster and last-service checkpoints
//!
//! JSON-file-backed store. Every mutation validates before touching state, so
//! a rejected update leaves both memory and disk unchanged, and every applied
//! mutation is visible to the next due query immediately.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::domain::model::{LedgerSnapshot, ServiceRecord, Vehicle, VehicleStatus};
use crate::error::{Error, LedgerError, Result};

/// Persistent usage ledger
pub struct UsageLedger {
    fleet_path: PathBuf,
    records_path: PathBuf,
    vehicles: HashMap<String, Vehicle>,
    /// Keyed "vehicle_id::service_type"; one logical checkpoint per pair
    records: HashMap<String, ServiceRecord>,
}

impl UsageLedger {
    /// Create or load a ledger in the given directory
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let fleet_path = store_dir.join("fleet.json");
        let records_path = store_dir.join("service_records.json");

        let vehicles = load_map(&fleet_path)?;
        let records = load_map(&records_path)?;

        Ok(Self {
            fleet_path,
            records_path,
            vehicles,
            records,
        })
    }

    fn record_key(vehicle_id: &str, service_type: &str) -> String {
        format!("{}::{}", vehicle_id, service_type)
    }

    /// Save ledger to disk
    fn save(&self) -> Result<()> {
        let file = File::create(&self.fleet_path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), &self.vehicles)?;

        let file = File::create(&self.records_path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), &self.records)?;
        Ok(())
    }

    /// Add or replace a roster entry
    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> Result<String> {
        let id = vehicle.id.clone();
        self.vehicles.insert(id.clone(), vehicle);
        self.save()?;
        Ok(id)
    }

    /// Get a vehicle by asset number
    pub fn get_vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.get(id)
    }

    /// All vehicles sorted by asset number
    pub fn all_vehicles(&self) -> Vec<&Vehicle> {
        let mut vehicles: Vec<_> = self.vehicles.values().collect();
        vehicles.sort_by(|a, b| a.id.cmp(&b.id));
        vehicles
    }

    /// Vehicles filtered by status
    pub fn vehicles_by_status(&self, status: VehicleStatus) -> Vec<&Vehicle> {
        self.all_vehicles()
            .into_iter()
            .filter(|v| v.status == status)
            .collect()
    }

    /// Total vehicle count
    pub fn count(&self) -> usize {
        self.vehicles.len()
    }

    /// Add usage deltas to a vehicle's cumulative counters
    ///
    /// Counters never decrease: negative deltas are rejected with no state
    /// change. A positive delta on a meter not yet fitted starts that counter
    /// at the delta value.
    pub fn record_usage(&mut self, vehicle_id: &str, delta_km: f64, delta_hours: f64) -> Result<()> {
        if delta_km < 0.0 || delta_hours < 0.0 {
            return Err(LedgerError::InvalidDelta {
                vehicle_id: vehicle_id.to_string(),
                delta_km,
                delta_hours,
            }
            .into());
        }

        let vehicle = self
            .vehicles
            .get_mut(vehicle_id)
            .ok_or_else(|| Error::VehicleNotFound(vehicle_id.to_string()))?;

        if delta_km > 0.0 {
            vehicle.kmr = Some(vehicle.kmr.unwrap_or(0.0) + delta_km);
        }
        if delta_hours > 0.0 {
            vehicle.hmr = Some(vehicle.hmr.unwrap_or(0.0) + delta_hours);
        }

        self.save()
    }

    /// Overwrite the last-service checkpoint for a (vehicle, service type) pair
    ///
    /// A checkpoint counter may sit below the vehicle's *current* counter
    /// (usage accrued since the service), but never below the previously
    /// stored checkpoint for the same pair.
    pub fn record_service(
        &mut self,
        vehicle_id: &str,
        service_type: &str,
        date: NaiveDate,
        km_at_service: Option<f64>,
        hmr_at_service: Option<f64>,
    ) -> Result<()> {
        if !self.vehicles.contains_key(vehicle_id) {
            return Err(Error::VehicleNotFound(vehicle_id.to_string()));
        }

        let key = Self::record_key(vehicle_id, service_type);

        if let Some(previous) = self.records.get(&key) {
            if let (Some(new), Some(old)) = (km_at_service, previous.km_at_service) {
                if new < old {
                    return Err(LedgerError::MonotonicityViolation {
                        vehicle_id: vehicle_id.to_string(),
                        service_type: service_type.to_string(),
                        counter: "km",
                        previous: old,
                        new,
                    }
                    .into());
                }
            }
            if let (Some(new), Some(old)) = (hmr_at_service, previous.hmr_at_service) {
                if new < old {
                    return Err(LedgerError::MonotonicityViolation {
                        vehicle_id: vehicle_id.to_string(),
                        service_type: service_type.to_string(),
                        counter: "hmr",
                        previous: old,
                        new,
                    }
                    .into());
                }
            }
        }

        let record = ServiceRecord {
            vehicle_id: vehicle_id.to_string(),
            service_type: service_type.to_string(),
            date,
            km_at_service,
            hmr_at_service,
        };
        self.records.insert(key, record);
        self.save()
    }

    /// The checkpoint for a (vehicle, service type) pair, if one exists
    pub fn service_record(&self, vehicle_id: &str, service_type: &str) -> Option<&ServiceRecord> {
        self.records.get(&Self::record_key(vehicle_id, service_type))
    }

    /// Consistent snapshot of roster and checkpoints
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            vehicles: self.all_vehicles().into_iter().cloned().collect(),
            records: self.records.values().cloned().collect(),
        }
    }
}

fn load_map<T: serde::de::DeserializeOwned>(path: &PathBuf) -> Result<HashMap<String, T>> {
    if path.exists() {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader).unwrap_or_default())
    } else {
        Ok(HashMap::new())
    }
}

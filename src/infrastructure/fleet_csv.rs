//! Fleet roster import from the maintenance spreadsheet CSV
//!
//! Accepts the column shape of the site fleet sheet. Absent values come
//! through as "-" or empty cells, both treated as missing.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::model::{Vehicle, VehicleStatus};
use crate::error::{Error, Result};

/// Row shape of the fleet sheet export
#[derive(Debug, Deserialize)]
struct FleetRow {
    asset_no: String,
    equipment: String,
    #[serde(default)]
    registration: Option<String>,
    #[serde(default)]
    commissioning_date: Option<String>,
    #[serde(default)]
    current_kmr: Option<f64>,
    #[serde(default)]
    current_hmr: Option<f64>,
    #[serde(default)]
    tier: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

/// Load vehicles from a fleet CSV file
pub fn load_fleet_from_file(path: &Path) -> Result<Vec<Vehicle>> {
    let reader = csv::Reader::from_path(path)?;
    collect_rows(reader)
}

/// Load vehicles from any CSV reader (used by tests and import pipelines)
pub fn load_fleet_from_reader<R: Read>(reader: R) -> Result<Vec<Vehicle>> {
    collect_rows(csv::Reader::from_reader(reader))
}

fn collect_rows<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<Vehicle>> {
    let mut vehicles = Vec::new();

    for (index, row) in reader.deserialize::<FleetRow>().enumerate() {
        let row = row?;
        let vehicle = row_to_vehicle(row)
            .map_err(|e| Error::FleetImport(format!("row {}: {}", index + 1, e)))?;
        vehicles.push(vehicle);
    }

    Ok(vehicles)
}

fn row_to_vehicle(row: FleetRow) -> std::result::Result<Vehicle, String> {
    let mut vehicle = Vehicle::new(row.asset_no, row.equipment);

    if let Some(registration) = non_blank(row.registration) {
        vehicle.registration = Some(registration);
    }
    if let Some(date) = non_blank(row.commissioning_date) {
        let parsed = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .map_err(|e| format!("bad commissioning date {:?}: {}", date, e))?;
        vehicle.commissioning_date = Some(parsed);
    }
    vehicle.kmr = row.current_kmr;
    vehicle.hmr = row.current_hmr;
    if let Some(tier) = non_blank(row.tier) {
        vehicle.tier = Some(tier);
    }
    if let Some(status) = non_blank(row.status) {
        vehicle.status = status.parse::<VehicleStatus>()?;
    }

    Ok(vehicle)
}

/// Normalize "-" and empty cells to None
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && s != "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_CSV: &str = "\
asset_no,equipment,registration,commissioning_date,current_kmr,current_hmr,tier,status
AL-1,TIPPER - 1,AP39UQ0095,-,,5105.3,,Operational
AL-5,TIPPER - 5,AP39UY4651,2024-08-30,,1540,tier-2,Operational
AL-7,TIPPER - 7,AP39WC0926,2025-02-14,,0,,New
";

    #[test]
    fn test_load_fleet() {
        let fleet = load_fleet_from_reader(TEST_CSV.as_bytes()).unwrap();
        assert_eq!(fleet.len(), 3);

        let al1 = &fleet[0];
        assert_eq!(al1.id, "AL-1");
        assert_eq!(al1.hmr, Some(5105.3));
        assert_eq!(al1.kmr, None);
        // "-" means not yet commissioned
        assert!(al1.commissioning_date.is_none());

        let al5 = &fleet[1];
        assert_eq!(
            al5.commissioning_date,
            NaiveDate::from_ymd_opt(2024, 8, 30)
        );
        assert_eq!(al5.tier.as_deref(), Some("tier-2"));

        let al7 = &fleet[2];
        assert_eq!(al7.status, VehicleStatus::New);
        assert_eq!(al7.hmr, Some(0.0));
    }

    #[test]
    fn test_bad_date_reports_row() {
        let csv = "\
asset_no,equipment,registration,commissioning_date,current_kmr,current_hmr,tier,status
AL-1,TIPPER - 1,,30-08-2024,,100,,
";
        let err = load_fleet_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::FleetImport(_)));
        assert!(err.to_string().contains("row 1"));
    }
}

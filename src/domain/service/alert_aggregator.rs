//! Fleet-wide alert aggregation
//!
//! Scans the cross-product of vehicles and applicable service types over a
//! ledger snapshot and produces a ranked alert list.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::NaiveDate;

use crate::domain::model::{IntervalCatalog, LedgerSnapshot, ServiceRecord, TierCatalog};
use crate::domain::service::{due_calculator, tier_resolver};
use crate::types::{DueRecord, DueSoonWindows, Urgency};

/// Filter applied when listing alerts
#[derive(Debug, Clone, Default)]
pub struct AlertFilter {
    /// Keep only Overdue records
    pub overdue_only: bool,
    /// Restrict to one vehicle
    pub vehicle_id: Option<String>,
    /// Restrict to one service type
    pub service_type: Option<String>,
}

impl AlertFilter {
    pub fn overdue_only() -> Self {
        Self {
            overdue_only: true,
            ..Default::default()
        }
    }
}

/// Compute and rank due records across the fleet
///
/// Yields at most one record per (vehicle, service type, dimension) triple; a
/// pair due on several dimensions produces one entry per dimension, never a
/// merged status. Ordering: Overdue first (most negative remaining first),
/// then DueSoon (soonest first), then OK, then Unknown; ties break by vehicle
/// id ascending.
pub fn list_alerts(
    snapshot: &LedgerSnapshot,
    catalog: &IntervalCatalog,
    tiers: &TierCatalog,
    windows: &DueSoonWindows,
    filter: &AlertFilter,
    today: NaiveDate,
) -> Vec<DueRecord> {
    let by_pair: HashMap<(&str, &str), &ServiceRecord> = snapshot
        .records
        .iter()
        .map(|r| ((r.vehicle_id.as_str(), r.service_type.as_str()), r))
        .collect();

    let mut out = Vec::new();

    for vehicle in &snapshot.vehicles {
        if let Some(ref want) = filter.vehicle_id {
            if want != &vehicle.id {
                continue;
            }
        }

        let tier = tier_resolver::resolve_tier(vehicle, tiers);

        for service_type in catalog.all() {
            if let Some(ref want) = filter.service_type {
                if want != &service_type.name {
                    continue;
                }
            }
            let record = by_pair
                .get(&(vehicle.id.as_str(), service_type.name.as_str()))
                .copied();
            out.extend(due_calculator::compute_due(
                vehicle,
                record,
                service_type,
                tier,
                windows,
                today,
            ));
        }

        if let Some(tier) = tier {
            let wants_replacement = match filter.service_type {
                None => true,
                Some(ref want) => want == due_calculator::REPLACEMENT_SERVICE_NAME,
            };
            if wants_replacement {
                out.extend(due_calculator::compute_replacement_due(
                    vehicle, tier, windows, today,
                ));
            }
        }
    }

    if filter.overdue_only {
        out.retain(|r| r.urgency == Urgency::Overdue);
    }

    sort_alerts(&mut out);
    out
}

/// Rank due records per the alert ordering policy
pub fn sort_alerts(records: &mut [DueRecord]) {
    records.sort_by(|a, b| {
        a.urgency
            .rank()
            .cmp(&b.urgency.rank())
            .then_with(|| {
                // Unknown records carry no margin; they already sort last by rank
                let ra = a.remaining.unwrap_or(f64::INFINITY);
                let rb = b.remaining.unwrap_or(f64::INFINITY);
                ra.partial_cmp(&rb).unwrap_or(Ordering::Equal)
            })
            .then_with(|| a.vehicle_id.cmp(&b.vehicle_id))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{IntervalSpec, ServiceType, Vehicle};
    use crate::types::Dimension;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn hmr_service(name: &str, interval: f64) -> ServiceType {
        ServiceType::new(
            name,
            IntervalSpec {
                hours: Some(interval),
                ..Default::default()
            },
        )
    }

    fn snapshot_of(vehicles: Vec<Vehicle>) -> LedgerSnapshot {
        LedgerSnapshot {
            vehicles,
            records: Vec::new(),
        }
    }

    #[test]
    fn test_ordering_overdue_duesoon_ok() {
        // Never serviced, interval 1000: remaining = 1000 - hmr
        let catalog = IntervalCatalog::from_types(vec![hmr_service("Engine Oil Change", 1000.0)]);
        let snapshot = snapshot_of(vec![
            Vehicle::new("AL-1", "TIPPER - 1").with_hmr(100.0), // remaining 900 -> OK
            Vehicle::new("AL-2", "TIPPER - 2").with_hmr(1500.0), // remaining -500 -> Overdue
            Vehicle::new("AL-3", "TIPPER - 3").with_hmr(950.0), // remaining 50 -> DueSoon
        ]);

        let alerts = list_alerts(
            &snapshot,
            &catalog,
            &TierCatalog::default(),
            &DueSoonWindows::default(),
            &AlertFilter::default(),
            date(2025, 4, 20),
        );

        let remaining: Vec<f64> = alerts.iter().filter_map(|r| r.remaining).collect();
        assert_eq!(remaining, vec![-500.0, 50.0, 900.0]);
        assert_eq!(alerts[0].urgency, Urgency::Overdue);
        assert_eq!(alerts[1].urgency, Urgency::DueSoon);
        assert_eq!(alerts[2].urgency, Urgency::Ok);
    }

    #[test]
    fn test_most_overdue_first_ties_by_vehicle() {
        let catalog = IntervalCatalog::from_types(vec![hmr_service("Engine Oil Change", 1000.0)]);
        let snapshot = snapshot_of(vec![
            Vehicle::new("AL-2", "TIPPER - 2").with_hmr(1200.0), // remaining -200
            Vehicle::new("AL-1", "TIPPER - 1").with_hmr(1800.0), // remaining -800
            Vehicle::new("AL-4", "TIPPER - 4").with_hmr(1200.0), // remaining -200
        ]);

        let alerts = list_alerts(
            &snapshot,
            &catalog,
            &TierCatalog::default(),
            &DueSoonWindows::default(),
            &AlertFilter::overdue_only(),
            date(2025, 4, 20),
        );

        let ids: Vec<&str> = alerts.iter().map(|r| r.vehicle_id.as_str()).collect();
        assert_eq!(ids, vec!["AL-1", "AL-2", "AL-4"]);
    }

    #[test]
    fn test_overdue_only_filter() {
        let catalog = IntervalCatalog::from_types(vec![hmr_service("Engine Oil Change", 1000.0)]);
        let snapshot = snapshot_of(vec![
            Vehicle::new("AL-1", "TIPPER - 1").with_hmr(100.0),
            Vehicle::new("AL-2", "TIPPER - 2").with_hmr(1500.0),
        ]);

        let alerts = list_alerts(
            &snapshot,
            &catalog,
            &TierCatalog::default(),
            &DueSoonWindows::default(),
            &AlertFilter::overdue_only(),
            date(2025, 4, 20),
        );

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].vehicle_id, "AL-2");
    }

    #[test]
    fn test_one_record_per_dimension() {
        // Multi-dimension service on a fully metered vehicle: one entry per
        // dimension, never merged
        let catalog = IntervalCatalog::from_types(vec![ServiceType::new(
            "Transmission Service",
            IntervalSpec {
                km: Some(20_000.0),
                hours: Some(2000.0),
                days: None,
            },
        )]);
        let snapshot = snapshot_of(vec![Vehicle::new("AL-1", "TIPPER - 1")
            .with_kmr(1000.0)
            .with_hmr(100.0)]);

        let alerts = list_alerts(
            &snapshot,
            &catalog,
            &TierCatalog::default(),
            &DueSoonWindows::default(),
            &AlertFilter::default(),
            date(2025, 4, 20),
        );

        assert_eq!(alerts.len(), 2);
        let mut dims: Vec<Dimension> = alerts.iter().map(|r| r.dimension).collect();
        dims.dedup();
        assert_eq!(dims.len(), 2);
    }

    #[test]
    fn test_vehicle_and_service_filters() {
        let catalog = IntervalCatalog::from_types(vec![
            hmr_service("Engine Oil Change", 1000.0),
            hmr_service("Air Filter Change", 2000.0),
        ]);
        let snapshot = snapshot_of(vec![
            Vehicle::new("AL-1", "TIPPER - 1").with_hmr(100.0),
            Vehicle::new("AL-2", "TIPPER - 2").with_hmr(200.0),
        ]);

        let filter = AlertFilter {
            vehicle_id: Some("AL-2".to_string()),
            service_type: Some("Air Filter Change".to_string()),
            ..Default::default()
        };
        let alerts = list_alerts(
            &snapshot,
            &catalog,
            &TierCatalog::default(),
            &DueSoonWindows::default(),
            &filter,
            date(2025, 4, 20),
        );

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].vehicle_id, "AL-2");
        assert_eq!(alerts[0].service_type, "Air Filter Change");
    }
}

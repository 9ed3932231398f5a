//! Due calculation for one (vehicle, service type) pair
//!
//! Pure functions over ledger data: no state is mutated, and re-running with
//! the same inputs yields the same records.

use chrono::{Duration, NaiveDate};

use crate::domain::model::{ServiceRecord, ServiceType, Tier, Vehicle};
use crate::domain::service::rate_predictor;
use crate::types::{Dimension, DueRecord, DueSoonWindows, ServiceKind, Urgency};

/// Service type name used for tier replacement-threshold records
pub const REPLACEMENT_SERVICE_NAME: &str = "Replacement";

/// Compute due records for one vehicle and one service type, one record per
/// applicable dimension.
///
/// Interval precedence: the tier's override wins for dimensions it defines,
/// otherwise the catalog interval applies. A vehicle never serviced for this
/// type is due from new (counter baseline zero); a calendar trigger with no
/// last-service date is Unknown, never silently Overdue or OK. Dimensions the
/// vehicle has no meter for are omitted rather than treated as zero-remaining.
pub fn compute_due(
    vehicle: &Vehicle,
    record: Option<&ServiceRecord>,
    service_type: &ServiceType,
    tier: Option<&Tier>,
    windows: &DueSoonWindows,
    today: NaiveDate,
) -> Vec<DueRecord> {
    let mut out = Vec::new();

    for dimension in service_type.intervals.dimensions() {
        let interval = tier
            .and_then(|t| t.interval_override(dimension))
            .or_else(|| service_type.intervals.magnitude(dimension));
        let Some(interval) = interval else {
            continue;
        };

        match dimension {
            Dimension::DistanceKm | Dimension::Hours => {
                let Some(current) = vehicle.counter(dimension) else {
                    continue;
                };
                let last = record
                    .and_then(|r| r.counter_at_service(dimension))
                    .unwrap_or(0.0);
                let next_due = last + interval;
                let remaining = next_due - current;
                let urgency = Urgency::from_remaining(remaining, windows.window_for(dimension));
                let predicted_date = record.and_then(|r| {
                    rate_predictor::predict_due_date(r, dimension, current, remaining, today)
                });

                out.push(DueRecord {
                    vehicle_id: vehicle.id.clone(),
                    service_type: service_type.name.clone(),
                    kind: ServiceKind::Recurring,
                    dimension,
                    next_due,
                    current: Some(current),
                    remaining: Some(remaining),
                    urgency,
                    predicted_date,
                });
            }
            Dimension::CalendarDays => match record {
                Some(r) => {
                    let elapsed = (today - r.date).num_days() as f64;
                    let remaining = interval - elapsed;
                    let urgency =
                        Urgency::from_remaining(remaining, windows.window_for(dimension));
                    let predicted_date = Some(r.date + Duration::days(interval as i64));

                    out.push(DueRecord {
                        vehicle_id: vehicle.id.clone(),
                        service_type: service_type.name.clone(),
                        kind: ServiceKind::Recurring,
                        dimension,
                        next_due: interval,
                        current: Some(elapsed),
                        remaining: Some(remaining),
                        urgency,
                        predicted_date,
                    });
                }
                None => {
                    // No baseline date: insufficient history for a calendar verdict
                    out.push(DueRecord {
                        vehicle_id: vehicle.id.clone(),
                        service_type: service_type.name.clone(),
                        kind: ServiceKind::Recurring,
                        dimension,
                        next_due: interval,
                        current: None,
                        remaining: None,
                        urgency: Urgency::Unknown,
                        predicted_date: None,
                    });
                }
            },
        }
    }

    out
}

/// Compute replacement-threshold records from a vehicle's tier
///
/// Lifetime thresholds measure from zero, not from a service checkpoint. The
/// predicted date, when a commissioning date exists, uses the whole-of-life
/// usage rate.
pub fn compute_replacement_due(
    vehicle: &Vehicle,
    tier: &Tier,
    windows: &DueSoonWindows,
    today: NaiveDate,
) -> Vec<DueRecord> {
    let mut out = Vec::new();

    for dimension in [Dimension::DistanceKm, Dimension::Hours] {
        let Some(threshold) = tier.replacement_threshold(dimension) else {
            continue;
        };
        let Some(current) = vehicle.counter(dimension) else {
            continue;
        };
        let remaining = threshold - current;
        let urgency = Urgency::from_remaining(remaining, windows.window_for(dimension));
        let predicted_date = vehicle.commissioning_date.and_then(|commissioned| {
            rate_predictor::linear_projection(commissioned, 0.0, current, remaining, today)
        });

        out.push(DueRecord {
            vehicle_id: vehicle.id.clone(),
            service_type: REPLACEMENT_SERVICE_NAME.to_string(),
            kind: ServiceKind::Replacement,
            dimension,
            next_due: threshold,
            current: Some(current),
            remaining: Some(remaining),
            urgency,
            predicted_date,
        });
    }

    out
}

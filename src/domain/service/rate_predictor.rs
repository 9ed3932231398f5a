//! Linear usage-rate projection of calendar due dates
//!
//! Assumes the observed usage rate holds into the future. This is a simple
//! linear extrapolation, not a time-series model; treat predicted dates as a
//! planning aid, not a commitment.

use chrono::{Duration, NaiveDate};

use crate::domain::model::ServiceRecord;
use crate::types::Dimension;

/// Project the date at which `remaining` usage will be consumed, given the
/// linear rate observed between a baseline checkpoint and today.
///
/// Fails closed to None when elapsed days or accrued usage is not positive.
/// The dashboards this engine replaces divided by elapsed days unguarded;
/// zero-day and zero-usage cases must stay explicit branches here.
pub fn linear_projection(
    baseline_date: NaiveDate,
    baseline_counter: f64,
    current_counter: f64,
    remaining: f64,
    today: NaiveDate,
) -> Option<NaiveDate> {
    let elapsed_days = (today - baseline_date).num_days();
    if elapsed_days <= 0 {
        return None;
    }

    let used = current_counter - baseline_counter;
    if used <= 0.0 {
        return None;
    }

    let rate = used / elapsed_days as f64;
    let days_to_threshold = (remaining / rate).floor() as i64;
    Some(today + Duration::days(days_to_threshold))
}

/// Predicted due date for a counter dimension from its last-service checkpoint
///
/// None when the record carries no counter for the dimension or the rate
/// cannot be established.
pub fn predict_due_date(
    record: &ServiceRecord,
    dimension: Dimension,
    current_counter: f64,
    remaining: f64,
    today: NaiveDate,
) -> Option<NaiveDate> {
    let baseline = record.counter_at_service(dimension)?;
    linear_projection(record.date, baseline, current_counter, remaining, today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_steady_rate_projection() {
        // 100 hours over 10 days = 10 h/day; 500 remaining = 50 days out
        let today = date(2025, 4, 26);
        let predicted = linear_projection(date(2025, 4, 16), 5000.0, 5100.0, 500.0, today);
        assert_eq!(predicted, Some(date(2025, 6, 15)));
    }

    #[test]
    fn test_zero_elapsed_days_is_unknown() {
        // Serviced today: no rate yet, never a division-by-zero fault
        let today = date(2025, 4, 16);
        let predicted = linear_projection(today, 5000.0, 5000.0, 1000.0, today);
        assert_eq!(predicted, None);
    }

    #[test]
    fn test_zero_usage_is_unknown() {
        // Parked since service: rate is zero, not an infinite horizon
        let today = date(2025, 5, 16);
        let predicted = linear_projection(date(2025, 4, 16), 5000.0, 5000.0, 1000.0, today);
        assert_eq!(predicted, None);
    }

    #[test]
    fn test_overdue_projects_into_the_past() {
        // Negative remaining: threshold already crossed, date lands before today
        let today = date(2025, 4, 26);
        let predicted =
            linear_projection(date(2025, 4, 16), 5000.0, 5100.0, -50.0, today).unwrap();
        assert!(predicted < today);
    }

    #[test]
    fn test_predict_from_record() {
        let record = ServiceRecord::new("AL-1", "Engine Oil Change", date(2025, 4, 16))
            .with_hmr(5105.3);
        let today = date(2025, 4, 26);

        let predicted =
            predict_due_date(&record, Dimension::Hours, 5205.3, 900.0, today);
        assert!(predicted.is_some());

        // Record has no km checkpoint: distance prediction stays unknown
        let none = predict_due_date(&record, Dimension::DistanceKm, 1000.0, 900.0, today);
        assert_eq!(none, None);
    }
}

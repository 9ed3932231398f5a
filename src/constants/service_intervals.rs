//! Built-in service interval catalog for tipper fleets
//!
//! Defaults consolidated from the site maintenance sheets; deployments
//! override them with a TOML catalog (see `infrastructure::catalog_loader`).

use std::sync::LazyLock;

use crate::domain::model::{IntervalCatalog, IntervalSpec, ServiceType};

/// Standard service intervals
pub static SERVICE_INTERVALS: LazyLock<IntervalCatalog> = LazyLock::new(|| {
    IntervalCatalog::from_types(vec![
        ServiceType::new(
            "Engine Oil Change",
            IntervalSpec {
                km: Some(5000.0),
                hours: Some(1000.0),
                days: None,
            },
        ),
        ServiceType::new(
            "Air Filter Change",
            IntervalSpec {
                km: None,
                hours: Some(2000.0),
                days: None,
            },
        ),
        ServiceType::new(
            "Transmission Service",
            IntervalSpec {
                km: Some(20_000.0),
                hours: Some(2000.0),
                days: None,
            },
        ),
        ServiceType::new(
            "Brake Inspection",
            IntervalSpec {
                km: None,
                hours: Some(500.0),
                days: Some(90.0),
            },
        ),
        ServiceType::new(
            "Coolant Change",
            IntervalSpec {
                km: None,
                hours: Some(4000.0),
                days: Some(365.0),
            },
        ),
    ])
});

/// Clone of the built-in catalog
pub fn default_interval_catalog() -> IntervalCatalog {
    SERVICE_INTERVALS.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Dimension;

    #[test]
    fn test_builtin_catalog() {
        assert_eq!(SERVICE_INTERVALS.count(), 5);

        let oil = SERVICE_INTERVALS.lookup("Engine Oil Change").unwrap();
        assert_eq!(oil.intervals.magnitude(Dimension::Hours), Some(1000.0));

        let air = SERVICE_INTERVALS.lookup("Air Filter Change").unwrap();
        assert_eq!(air.intervals.magnitude(Dimension::Hours), Some(2000.0));
        assert_eq!(air.intervals.magnitude(Dimension::DistanceKm), None);
    }
}

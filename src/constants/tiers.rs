//! Built-in condition tier catalog

use std::sync::LazyLock;

use crate::domain::model::{Tier, TierCatalog};

/// Standard condition tiers
pub static TIERS: LazyLock<TierCatalog> = LazyLock::new(|| {
    TierCatalog::from_tiers(vec![
        Tier {
            id: "tier-1".to_string(),
            description: "New or near-new unit, standard intervals".to_string(),
            service_interval_km: None,
            service_interval_hours: None,
            replacement_threshold_km: Some(200_000.0),
            replacement_threshold_hours: Some(20_000.0),
        },
        Tier {
            id: "tier-2".to_string(),
            description: "Mid-life unit, shortened oil interval".to_string(),
            service_interval_km: None,
            service_interval_hours: Some(800.0),
            replacement_threshold_km: Some(180_000.0),
            replacement_threshold_hours: Some(18_000.0),
        },
        Tier {
            id: "tier-3".to_string(),
            description: "High-wear unit under heavy duty cycle".to_string(),
            service_interval_km: Some(4000.0),
            service_interval_hours: Some(600.0),
            replacement_threshold_km: Some(150_000.0),
            replacement_threshold_hours: Some(15_000.0),
        },
    ])
});

/// Clone of the built-in tier catalog
pub fn default_tier_catalog() -> TierCatalog {
    TIERS.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Dimension;

    #[test]
    fn test_builtin_tiers() {
        assert_eq!(TIERS.count(), 3);

        let tier3 = TIERS.get("tier-3").unwrap();
        assert_eq!(tier3.interval_override(Dimension::DistanceKm), Some(4000.0));

        let tier1 = TIERS.get("tier-1").unwrap();
        assert_eq!(tier1.interval_override(Dimension::Hours), None);
        assert!(TIERS.get("tier-9").is_none());
    }
}

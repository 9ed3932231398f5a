//! Tier policy resolution

use crate::domain::model::{Tier, TierCatalog, Vehicle};

/// Resolve a vehicle's assigned tier against the tier catalog
///
/// Returns None when no tier is assigned or the assigned id is unknown; the
/// caller then uses catalog defaults.
pub fn resolve_tier<'a>(vehicle: &Vehicle, tiers: &'a TierCatalog) -> Option<&'a Tier> {
    vehicle.tier.as_deref().and_then(|id| tiers.get(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_tiers() -> TierCatalog {
        TierCatalog::from_tiers(vec![Tier {
            id: "tier-3".to_string(),
            description: "High wear".to_string(),
            service_interval_km: Some(4000.0),
            service_interval_hours: None,
            replacement_threshold_km: None,
            replacement_threshold_hours: None,
        }])
    }

    #[test]
    fn test_resolve_assigned_tier() {
        let vehicle = Vehicle::new("AL-1", "TIPPER - 1").with_tier("tier-3");
        let tiers = test_tiers();
        assert_eq!(resolve_tier(&vehicle, &tiers).map(|t| t.id.as_str()), Some("tier-3"));
    }

    #[test]
    fn test_no_tier_assigned() {
        let vehicle = Vehicle::new("AL-2", "TIPPER - 2");
        let tiers = test_tiers();
        assert!(resolve_tier(&vehicle, &tiers).is_none());
    }

    #[test]
    fn test_unknown_tier_id() {
        let vehicle = Vehicle::new("AL-3", "TIPPER - 3").with_tier("tier-9");
        let tiers = test_tiers();
        assert!(resolve_tier(&vehicle, &tiers).is_none());
    }
}

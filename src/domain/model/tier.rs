//! Condition tiers: interval overrides and replacement thresholds

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::Dimension;

/// A condition/age classification of a vehicle
///
/// Service-interval overrides take precedence over the catalog interval for
/// the dimensions they define. Replacement thresholds are vehicle-lifetime
/// values, a distinct concern from recurring intervals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tier {
    /// e.g. "tier-3"
    pub id: String,
    /// Human-readable condition description
    pub description: String,
    #[serde(default)]
    pub service_interval_km: Option<f64>,
    #[serde(default)]
    pub service_interval_hours: Option<f64>,
    #[serde(default)]
    pub replacement_threshold_km: Option<f64>,
    #[serde(default)]
    pub replacement_threshold_hours: Option<f64>,
}

impl Tier {
    /// Service-interval override for a dimension, if this tier defines one
    pub fn interval_override(&self, dimension: Dimension) -> Option<f64> {
        match dimension {
            Dimension::DistanceKm => self.service_interval_km,
            Dimension::Hours => self.service_interval_hours,
            Dimension::CalendarDays => None,
        }
    }

    /// Lifetime replacement threshold for a dimension
    pub fn replacement_threshold(&self, dimension: Dimension) -> Option<f64> {
        match dimension {
            Dimension::DistanceKm => self.replacement_threshold_km,
            Dimension::Hours => self.replacement_threshold_hours,
            Dimension::CalendarDays => None,
        }
    }
}

/// Static tier catalog, same lifecycle as the interval catalog
#[derive(Debug, Clone, Default)]
pub struct TierCatalog {
    tiers: HashMap<String, Tier>,
}

impl TierCatalog {
    pub fn from_tiers(tiers: Vec<Tier>) -> Self {
        let tiers = tiers.into_iter().map(|t| (t.id.clone(), t)).collect();
        Self { tiers }
    }

    /// Look up a tier by id
    pub fn get(&self, id: &str) -> Option<&Tier> {
        self.tiers.get(id)
    }

    /// All tiers, sorted by id
    pub fn all(&self) -> Vec<&Tier> {
        let mut tiers: Vec<_> = self.tiers.values().collect();
        tiers.sort_by(|a, b| a.id.cmp(&b.id));
        tiers
    }

    pub fn count(&self) -> usize {
        self.tiers.len()
    }
}

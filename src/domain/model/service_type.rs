//! Service type definitions and the interval catalog

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Dimension;

/// Interval magnitudes per trigger dimension
///
/// A service type defines at least one of these; dimensions it leaves unset do
/// not apply to it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct IntervalSpec {
    /// Distance interval in kilometres
    #[serde(default)]
    pub km: Option<f64>,
    /// Operating-hours interval (HMR)
    #[serde(default)]
    pub hours: Option<f64>,
    /// Calendar interval in days
    #[serde(default)]
    pub days: Option<f64>,
}

impl IntervalSpec {
    /// Interval magnitude for a dimension, if defined
    pub fn magnitude(&self, dimension: Dimension) -> Option<f64> {
        match dimension {
            Dimension::DistanceKm => self.km,
            Dimension::Hours => self.hours,
            Dimension::CalendarDays => self.days,
        }
    }

    /// Dimensions this spec defines, in stable display order
    pub fn dimensions(&self) -> Vec<Dimension> {
        let mut dims = Vec::new();
        if self.km.is_some() {
            dims.push(Dimension::DistanceKm);
        }
        if self.hours.is_some() {
            dims.push(Dimension::Hours);
        }
        if self.days.is_some() {
            dims.push(Dimension::CalendarDays);
        }
        dims
    }
}

/// A serviceable item definition, keyed by name
///
/// Flat and independent: no inheritance between service types. Immutable once
/// the catalog is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceType {
    /// e.g. "Engine Oil Change"
    pub name: String,
    #[serde(flatten)]
    pub intervals: IntervalSpec,
}

impl ServiceType {
    pub fn new(name: impl Into<String>, intervals: IntervalSpec) -> Self {
        Self {
            name: name.into(),
            intervals,
        }
    }
}

/// Read-only registry of service types
#[derive(Debug, Clone, Default)]
pub struct IntervalCatalog {
    types: HashMap<String, ServiceType>,
}

impl IntervalCatalog {
    /// Build a catalog from a list of service types
    pub fn from_types(types: Vec<ServiceType>) -> Self {
        let types = types.into_iter().map(|t| (t.name.clone(), t)).collect();
        Self { types }
    }

    /// Look up a service type by name
    pub fn lookup(&self, name: &str) -> Result<&ServiceType> {
        self.types
            .get(name)
            .ok_or_else(|| Error::ServiceTypeNotFound(name.to_string()))
    }

    /// Whether a service type is defined
    pub fn has(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// All service types, sorted by name
    pub fn all(&self) -> Vec<&ServiceType> {
        let mut types: Vec<_> = self.types.values().collect();
        types.sort_by(|a, b| a.name.cmp(&b.name));
        types
    }

    pub fn count(&self) -> usize {
        self.types.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_order() {
        let spec = IntervalSpec {
            km: Some(5000.0),
            hours: Some(1000.0),
            days: None,
        };
        assert_eq!(
            spec.dimensions(),
            vec![Dimension::DistanceKm, Dimension::Hours]
        );
        assert_eq!(spec.magnitude(Dimension::Hours), Some(1000.0));
        assert_eq!(spec.magnitude(Dimension::CalendarDays), None);
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = IntervalCatalog::from_types(vec![ServiceType::new(
            "Engine Oil Change",
            IntervalSpec {
                hours: Some(1000.0),
                ..Default::default()
            },
        )]);

        assert!(catalog.lookup("Engine Oil Change").is_ok());
        assert!(matches!(
            catalog.lookup("Windscreen Wash"),
            Err(Error::ServiceTypeNotFound(_))
        ));
    }
}

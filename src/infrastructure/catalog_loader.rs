//! Interval catalog loader from TOML configuration
//!
//! Replaces the per-screen interval tables the old dashboards hard-coded with
//! one configurable catalog file.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::model::{IntervalCatalog, ServiceType};
use crate::error::{ConfigError, Error, Result};

/// Container for parsing intervals.toml
#[derive(Debug, Deserialize)]
struct CatalogConfig {
    service_types: Vec<ServiceType>,
}

/// Load an interval catalog from a TOML file
pub fn load_from_file(path: &Path) -> Result<IntervalCatalog> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to read interval catalog file: {}",
            e
        )))
    })?;
    load_from_str(&content)
}

/// Load an interval catalog from a TOML string
pub fn load_from_str(toml_content: &str) -> Result<IntervalCatalog> {
    let config: CatalogConfig = toml::from_str(toml_content).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to parse interval catalog TOML: {}",
            e
        )))
    })?;
    Ok(IntervalCatalog::from_types(config.service_types))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Dimension;

    const TEST_TOML: &str = r#"
[[service_types]]
name = "Engine Oil Change"
hours = 1000.0
km = 5000.0

[[service_types]]
name = "Air Filter Change"
hours = 2000.0

[[service_types]]
name = "Coolant Change"
days = 365.0
"#;

    #[test]
    fn test_load_from_str() {
        let catalog = load_from_str(TEST_TOML).unwrap();
        assert_eq!(catalog.count(), 3);

        let oil = catalog.lookup("Engine Oil Change").unwrap();
        assert_eq!(oil.intervals.magnitude(Dimension::Hours), Some(1000.0));
        assert_eq!(oil.intervals.magnitude(Dimension::DistanceKm), Some(5000.0));

        let coolant = catalog.lookup("Coolant Change").unwrap();
        assert_eq!(
            coolant.intervals.dimensions(),
            vec![Dimension::CalendarDays]
        );
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            load_from_str("not valid toml ["),
            Err(Error::Config(ConfigError::ParseError(_)))
        ));
    }
}

//! Tier catalog loader from TOML configuration

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::model::{Tier, TierCatalog};
use crate::error::{ConfigError, Error, Result};

/// Container for parsing tiers.toml
#[derive(Debug, Deserialize)]
struct TiersConfig {
    tiers: Vec<Tier>,
}

/// Load a tier catalog from a TOML file
pub fn load_from_file(path: &Path) -> Result<TierCatalog> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to read tier catalog file: {}",
            e
        )))
    })?;
    load_from_str(&content)
}

/// Load a tier catalog from a TOML string
pub fn load_from_str(toml_content: &str) -> Result<TierCatalog> {
    let config: TiersConfig = toml::from_str(toml_content).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to parse tier catalog TOML: {}",
            e
        )))
    })?;
    Ok(TierCatalog::from_tiers(config.tiers))
}

//! Configuration management for tipper-maint
//!
//! Config stored at: ~/.config/tipper-maint/config.json

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;
use crate::error::{ConfigError, Result};
use crate::types::DueSoonWindows;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Ledger store directory override
    #[serde(default)]
    pub store_dir: Option<PathBuf>,

    /// Interval catalog TOML override (built-in catalog if unset)
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Tier catalog TOML override (built-in tiers if unset)
    #[serde(default)]
    pub tiers_path: Option<PathBuf>,

    /// Per-dimension due-soon windows
    #[serde(default)]
    pub due_soon_windows: DueSoonWindows,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_dir: None,
            catalog_path: None,
            tiers_path: None,
            due_soon_windows: DueSoonWindows::default(),
            output_format: default_output_format(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("tipper-maint");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Get the ledger store directory
    pub fn store_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.store_dir {
            return Ok(dir.clone());
        }

        let store_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join("tipper-maint");
        Ok(store_dir)
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Tipper Maint Configuration")?;
        writeln!(f, "==========================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Store dir:       {}",
            self.store_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        writeln!(
            f,
            "Interval catalog: {}",
            self.catalog_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        )?;
        writeln!(
            f,
            "Tier catalog:     {}",
            self.tiers_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        )?;
        writeln!(
            f,
            "Due-soon windows: {} km / {} h / {} days",
            self.due_soon_windows.km, self.due_soon_windows.hours, self.due_soon_windows.days
        )?;
        writeln!(f, "Output format:    {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:      {}", path.display())?;
        }

        Ok(())
    }
}

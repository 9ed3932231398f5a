//! Error types for tipper-maint

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Ledger update rejections
///
/// The ledger is left unchanged whenever one of these is returned.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("negative usage delta for {vehicle_id} (km {delta_km}, hmr {delta_hours})")]
    InvalidDelta {
        vehicle_id: String,
        delta_km: f64,
        delta_hours: f64,
    },

    #[error(
        "service checkpoint for {vehicle_id} / {service_type} would move {counter} backward \
         ({new:.1} < {previous:.1})"
    )]
    MonotonicityViolation {
        vehicle_id: String,
        service_type: String,
        counter: &'static str,
        previous: f64,
        new: f64,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Vehicle not found: {0}")]
    VehicleNotFound(String),

    #[error("Service type not found: {0}")]
    ServiceTypeNotFound(String),

    #[error("Tier not found: {0}")]
    TierNotFound(String),

    #[error("Fleet import error: {0}")]
    FleetImport(String),
}

pub type Result<T> = std::result::Result<T, Error>;

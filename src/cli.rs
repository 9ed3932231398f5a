//! CLI definition using clap

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Parser)]
#[command(name = "tipper-maint")]
#[command(version)]
#[command(about = "Periodic maintenance tracking for mine-site tipper fleets")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the fleet roster
    Fleet {
        /// Filter by status (operational, new, down)
        #[arg(long)]
        status: Option<String>,
    },

    /// Register a vehicle on the roster
    AddVehicle {
        /// Asset / door number (e.g. AL-1)
        id: String,

        /// Equipment name (e.g. "TIPPER - 1")
        equipment: String,

        /// Registration number
        #[arg(long)]
        registration: Option<String>,

        /// Commissioning date (YYYY-MM-DD)
        #[arg(long)]
        commissioned: Option<NaiveDate>,

        /// Initial kilometre reading
        #[arg(long)]
        kmr: Option<f64>,

        /// Initial hour-meter reading
        #[arg(long)]
        hmr: Option<f64>,

        /// Condition tier id (e.g. tier-3)
        #[arg(long)]
        tier: Option<String>,
    },

    /// Import the fleet roster from a CSV sheet
    ImportFleet {
        /// Path to fleet CSV file
        csv: PathBuf,
    },

    /// Record usage deltas for a vehicle
    Usage {
        /// Asset / door number
        vehicle: String,

        /// Distance run since the last update (km)
        #[arg(long, default_value_t = 0.0)]
        km: f64,

        /// Hours run since the last update (HMR)
        #[arg(long, default_value_t = 0.0)]
        hours: f64,
    },

    /// Log a completed service
    Service {
        /// Asset / door number
        vehicle: String,

        /// Service type name (must exist in the catalog)
        service_type: String,

        /// Completion date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// KMR at completion
        #[arg(long)]
        km: Option<f64>,

        /// HMR at completion
        #[arg(long)]
        hmr: Option<f64>,
    },

    /// Show due records for the fleet or one vehicle
    Due {
        /// Restrict to one vehicle
        #[arg(long)]
        vehicle: Option<String>,
    },

    /// Show the ranked alert list
    Alerts {
        /// Show only overdue items
        #[arg(long)]
        overdue_only: bool,

        /// Restrict to one vehicle
        #[arg(long)]
        vehicle: Option<String>,

        /// Restrict to one service type
        #[arg(long)]
        service: Option<String>,
    },

    /// Export due records to CSV
    Export {
        /// Output CSV file path
        output: PathBuf,

        /// Export only overdue items
        #[arg(long)]
        overdue_only: bool,
    },

    /// Show the service interval and tier catalogs
    Catalog,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set ledger store directory
        #[arg(long)]
        set_store_dir: Option<PathBuf>,

        /// Set interval catalog TOML path
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// Set tier catalog TOML path
        #[arg(long)]
        set_tiers: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

//! Vehicle (tipper) roster entry

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::Dimension;

/// Operational status of a tipper
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleStatus {
    #[default]
    Operational,
    /// Commissioned but not yet in regular service
    New,
    /// Out of service awaiting repair
    Down,
}

impl VehicleStatus {
    pub fn label(&self) -> &'static str {
        match self {
            VehicleStatus::Operational => "Operational",
            VehicleStatus::New => "New",
            VehicleStatus::Down => "Down",
        }
    }
}

impl std::str::FromStr for VehicleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "operational" => Ok(VehicleStatus::Operational),
            "new" => Ok(VehicleStatus::New),
            "down" => Ok(VehicleStatus::Down),
            other => Err(format!("unknown vehicle status: {}", other)),
        }
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Vehicle roster entry with cumulative usage counters
///
/// Counters only ever increase; updates go through the usage ledger, which
/// rejects anything that would move a counter backward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// Asset / door number (e.g. "AL-1")
    pub id: String,
    /// Equipment name (e.g. "TIPPER - 1")
    pub equipment: String,
    /// Registration number (e.g. "AP39UQ0095")
    #[serde(default)]
    pub registration: Option<String>,
    /// Commissioning date; absent for not-yet-commissioned units
    #[serde(default)]
    pub commissioning_date: Option<NaiveDate>,
    /// Cumulative kilometre reading; None when no odometer is fitted
    #[serde(default)]
    pub kmr: Option<f64>,
    /// Cumulative hour-meter reading; None when no hour meter is fitted
    #[serde(default)]
    pub hmr: Option<f64>,
    /// Assigned condition tier id (e.g. "tier-3")
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub status: VehicleStatus,
}

impl Vehicle {
    pub fn new(id: impl Into<String>, equipment: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            equipment: equipment.into(),
            registration: None,
            commissioning_date: None,
            kmr: None,
            hmr: None,
            tier: None,
            status: VehicleStatus::default(),
        }
    }

    pub fn with_registration(mut self, registration: impl Into<String>) -> Self {
        self.registration = Some(registration.into());
        self
    }

    pub fn with_commissioning_date(mut self, date: NaiveDate) -> Self {
        self.commissioning_date = Some(date);
        self
    }

    pub fn with_kmr(mut self, kmr: f64) -> Self {
        self.kmr = Some(kmr);
        self
    }

    pub fn with_hmr(mut self, hmr: f64) -> Self {
        self.hmr = Some(hmr);
        self
    }

    pub fn with_tier(mut self, tier: impl Into<String>) -> Self {
        self.tier = Some(tier.into());
        self
    }

    pub fn with_status(mut self, status: VehicleStatus) -> Self {
        self.status = status;
        self
    }

    /// Current counter for a dimension, if that meter is fitted
    ///
    /// Calendar time is not a vehicle counter; it is derived from service
    /// dates, so this returns None for it.
    pub fn counter(&self, dimension: Dimension) -> Option<f64> {
        match dimension {
            Dimension::DistanceKm => self.kmr,
            Dimension::Hours => self.hmr,
            Dimension::CalendarDays => None,
        }
    }
}

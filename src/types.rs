//! Core types for maintenance due tracking

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Measurement dimension a service trigger is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Cumulative distance (KMR, kilometres)
    DistanceKm,
    /// Cumulative operating hours (HMR)
    Hours,
    /// Calendar days since last service
    CalendarDays,
}

impl Dimension {
    /// Short display label
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::DistanceKm => "km",
            Dimension::Hours => "hmr",
            Dimension::CalendarDays => "days",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Urgency classification of a due record
///
/// `Unknown` is a valid result (insufficient history), not an error. It must
/// never be folded into a numeric margin by consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Overdue,
    DueSoon,
    Ok,
    Unknown,
}

impl Urgency {
    /// Classify a remaining margin against a due-soon window
    ///
    /// Zero remaining counts as DueSoon, not Overdue.
    pub fn from_remaining(remaining: f64, window: f64) -> Self {
        if remaining < 0.0 {
            Urgency::Overdue
        } else if remaining < window {
            Urgency::DueSoon
        } else {
            Urgency::Ok
        }
    }

    /// Sort rank: Overdue first, Unknown last
    pub fn rank(&self) -> u8 {
        match self {
            Urgency::Overdue => 0,
            Urgency::DueSoon => 1,
            Urgency::Ok => 2,
            Urgency::Unknown => 3,
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Overdue => "OVERDUE",
            Urgency::DueSoon => "DUE SOON",
            Urgency::Ok => "OK",
            Urgency::Unknown => "UNKNOWN",
        }
    }
}

/// What a due record means: a recurring service or a lifetime replacement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    /// Recurring interval service ("needs its next oil change")
    Recurring,
    /// Tier-based lifetime replacement threshold ("needs to be retired")
    Replacement,
}

impl ServiceKind {
    pub fn label(&self) -> &'static str {
        match self {
            ServiceKind::Recurring => "service",
            ServiceKind::Replacement => "replacement",
        }
    }
}

/// Per-dimension due-soon windows
///
/// The margin below which upcoming work is flagged for advance attention
/// rather than marked merely OK. Tunable per deployment via config.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DueSoonWindows {
    #[serde(default = "default_km_window")]
    pub km: f64,
    #[serde(default = "default_hours_window")]
    pub hours: f64,
    #[serde(default = "default_days_window")]
    pub days: f64,
}

fn default_km_window() -> f64 {
    1000.0
}

fn default_hours_window() -> f64 {
    200.0
}

fn default_days_window() -> f64 {
    30.0
}

impl Default for DueSoonWindows {
    fn default() -> Self {
        Self {
            km: default_km_window(),
            hours: default_hours_window(),
            days: default_days_window(),
        }
    }
}

impl DueSoonWindows {
    /// Window for a given dimension
    pub fn window_for(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::DistanceKm => self.km,
            Dimension::Hours => self.hours,
            Dimension::CalendarDays => self.days,
        }
    }
}

/// Derived next-due state for one (vehicle, service type, dimension)
///
/// Not persisted; recomputed from the ledger on every query. Serializes to a
/// flat row suitable for tables and CSV export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DueRecord {
    /// Asset / door number
    pub vehicle_id: String,
    /// Service type name, or "Replacement" for tier threshold records
    pub service_type: String,
    pub kind: ServiceKind,
    pub dimension: Dimension,
    /// Counter value (km/hmr) or interval length (days) at which work falls due
    pub next_due: f64,
    /// Current counter value or elapsed days; None when urgency is Unknown
    pub current: Option<f64>,
    /// `next_due - current`; negative means overdue. None when Unknown.
    pub remaining: Option<f64>,
    pub urgency: Urgency,
    /// Linear-rate projection of the calendar date the threshold is crossed
    pub predicted_date: Option<NaiveDate>,
}

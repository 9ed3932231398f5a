//! Last-service checkpoint per (vehicle, service type) pair

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::Dimension;

/// The most recent completion of one service type on one vehicle
///
/// One logical record per pair: a new completion supersedes the previous
/// checkpoint, it is not appended. Audit history is a separate concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub vehicle_id: String,
    pub service_type: String,
    /// Completion date
    pub date: NaiveDate,
    /// KMR at completion, if the vehicle has an odometer
    #[serde(default)]
    pub km_at_service: Option<f64>,
    /// HMR at completion, if the vehicle has an hour meter
    #[serde(default)]
    pub hmr_at_service: Option<f64>,
}

impl ServiceRecord {
    pub fn new(
        vehicle_id: impl Into<String>,
        service_type: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            vehicle_id: vehicle_id.into(),
            service_type: service_type.into(),
            date,
            km_at_service: None,
            hmr_at_service: None,
        }
    }

    pub fn with_km(mut self, km: f64) -> Self {
        self.km_at_service = Some(km);
        self
    }

    pub fn with_hmr(mut self, hmr: f64) -> Self {
        self.hmr_at_service = Some(hmr);
        self
    }

    /// Counter value recorded at completion for a dimension
    pub fn counter_at_service(&self, dimension: Dimension) -> Option<f64> {
        match dimension {
            Dimension::DistanceKm => self.km_at_service,
            Dimension::Hours => self.hmr_at_service,
            Dimension::CalendarDays => None,
        }
    }
}

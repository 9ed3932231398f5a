//! Domain services: due calculation, rate prediction, alert aggregation

pub mod alert_aggregator;
pub mod due_calculator;
pub mod rate_predictor;
pub mod tier_resolver;

pub use alert_aggregator::{list_alerts, AlertFilter};
pub use due_calculator::{compute_due, compute_replacement_due};
pub use rate_predictor::{linear_projection, predict_due_date};
pub use tier_resolver::resolve_tier;

//! Tipper Maint Library
//!
//! Maintenance scheduling and alerting engine for mine-site tipper fleets:
//! per-vehicle usage counters, service interval catalogs, due calculation
//! across distance/hours/calendar dimensions, rate-based due-date prediction
//! and ranked alerting.

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod export;
pub mod infrastructure;
pub mod output;
pub mod store;
pub mod types;
